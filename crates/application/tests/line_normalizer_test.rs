use pilist_application::services::{normalize, parse_list_line, ParsedEntry};
use pilist_domain::hostname::validate_host;
use pilist_domain::DomainKind;

fn domains(text: &str) -> Vec<(String, DomainKind)> {
    normalize(text, "test", None)
        .into_iter()
        .map(|r| (r.domain().to_string(), r.kind()))
        .collect()
}

#[test]
fn test_hosts_lines_yield_hostname_only() {
    for ip in ["0.0.0.0", "127.0.0.1", "192.168.1.10", "::", "::1", "fe80::1"] {
        let line = format!("{} tracker.example.net", ip);
        assert_eq!(
            domains(&line),
            vec![("tracker.example.net".to_string(), DomainKind::Exact)],
            "line: {}",
            line
        );
    }
}

#[test]
fn test_hosts_line_with_tabs_and_padding() {
    assert_eq!(
        domains("   0.0.0.0\t\tads.example.com   "),
        vec![("ads.example.com".to_string(), DomainKind::Exact)]
    );
}

#[test]
fn test_comment_and_blank_lines_yield_nothing() {
    let text = "# header\n\n   \n\t# indented comment\n#0.0.0.0 ads.example.com\n";
    assert!(normalize(text, "test", None).is_empty());
}

#[test]
fn test_inline_comment_is_stripped() {
    assert_eq!(
        domains("0.0.0.0 ads.example.com # tracking pixel"),
        vec![("ads.example.com".to_string(), DomainKind::Exact)]
    );
    assert_eq!(
        domains("safe.example.org\t# keep"),
        vec![("safe.example.org".to_string(), DomainKind::Exact)]
    );
}

#[test]
fn test_plain_domain_lines_are_exact() {
    assert_eq!(
        domains("s.youtube.com\nwww.msftncsi.com\n"),
        vec![
            ("s.youtube.com".to_string(), DomainKind::Exact),
            ("www.msftncsi.com".to_string(), DomainKind::Exact),
        ]
    );
}

#[test]
fn test_regex_marker_lines_are_regex() {
    let lines = [
        r"^ad[0-9]*\.example\.com$",
        r"(\.|^)doubleclick\.net$",
        r"example\..*",
        "tracker.*",
        "^telemetry",
        "metrics$",
    ];

    for line in lines {
        let records = normalize(line, "test", None);
        assert_eq!(records.len(), 1, "line: {}", line);
        assert_eq!(records[0].kind(), DomainKind::Regex, "line: {}", line);
        assert_eq!(records[0].domain(), line);
    }
}

#[test]
fn test_pattern_lines_are_kept_verbatim() {
    for line in ["*tracker*", "+ads.example.com", "*.ads.example.com", "(unclosed", "/^ads?\\./"] {
        assert_eq!(
            parse_list_line(line),
            Some(ParsedEntry::Regex(line.to_string())),
            "line: {}",
            line
        );
    }
}

#[test]
fn test_wildcard_and_plus_lines_yield_one_regex_record() {
    assert_eq!(
        domains("*tracker*\n+ads.example.com\n*.example.com"),
        vec![
            ("*tracker*".to_string(), DomainKind::Regex),
            ("+ads.example.com".to_string(), DomainKind::Regex),
            ("*.example.com".to_string(), DomainKind::Regex),
        ]
    );
}

#[test]
fn test_hosts_file_header_yields_nothing() {
    let text = "\
# Title: StevenBlack/hosts
127.0.0.1 localhost
127.0.0.1 localhost.localdomain
127.0.0.1 local
255.255.255.255 broadcasthost
::1 localhost
::1 ip6-localhost
::1 ip6-loopback
fe80::1%lo0 localhost
ff00::0 ip6-localnet
ff00::0 ip6-mcastprefix
ff02::1 ip6-allnodes
ff02::2 ip6-allrouters
ff02::3 ip6-allhosts
0.0.0.0 0.0.0.0
";
    assert!(normalize(text, "test", None).is_empty());
}

#[test]
fn test_ip_literals_are_never_domains() {
    assert!(normalize("10.0.0.1\n::1\n0.0.0.0 192.168.1.1", "test", None).is_empty());
    assert_eq!(
        domains("127.0.0.1 localhost\n0.0.0.0 0.0.0.0\n0.0.0.0 ads.example.com\n10.0.0.1"),
        vec![("ads.example.com".to_string(), DomainKind::Exact)]
    );
}

#[test]
fn test_garbage_is_dropped() {
    assert!(normalize("badline!!", "test", None).is_empty());
    assert!(normalize("not a hosts line", "test", None).is_empty());
    assert!(normalize("...", "test", None).is_empty());
}

#[test]
fn test_end_to_end_mixed_text() {
    let records = normalize(
        "0.0.0.0 ads.example.com\n# comment\n\nbadline!!\n",
        "File: hosts",
        None,
    );

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].domain(), "ads.example.com");
    assert_eq!(records[0].kind(), DomainKind::Exact);
    assert_eq!(records[0].comment(), "File: hosts");
}

#[test]
fn test_empty_text_yields_empty_batch() {
    assert!(normalize("", "test", None).is_empty());
}

#[test]
fn test_comment_applied_to_every_record() {
    let records = normalize("a.example\nb.example\n^c\\.", "AndeepND | Allowlist Only", None);
    assert_eq!(records.len(), 3);
    assert!(records
        .iter()
        .all(|r| r.comment() == "AndeepND | Allowlist Only"));
}

#[test]
fn test_order_follows_input() {
    let text = "z.example\n0.0.0.0 a.example\nm.example\n";
    let got: Vec<String> = domains(text).into_iter().map(|(d, _)| d).collect();
    assert_eq!(got, vec!["z.example", "a.example", "m.example"]);
}

#[test]
fn test_duplicates_are_kept() {
    let records = normalize("dup.example\n0.0.0.0 dup.example\n", "test", None);
    assert_eq!(records.len(), 2);
}

#[test]
fn test_windows_line_endings() {
    assert_eq!(
        domains("a.example\r\nb.example\r\n"),
        vec![
            ("a.example".to_string(), DomainKind::Exact),
            ("b.example".to_string(), DomainKind::Exact),
        ]
    );
}

#[test]
fn test_validator_filters_and_preserves_order() {
    let text = "good.example.com\nlocalhost\nsecond.example.org\n^regex$\nthird.example.net";
    let validator: &dyn Fn(&str) -> bool = &validate_host;

    let records = normalize(text, "Pasted content", Some(validator));
    let got: Vec<&str> = records.iter().map(|r| r.domain()).collect();

    assert_eq!(
        got,
        vec!["good.example.com", "second.example.org", "third.example.net"]
    );
}

#[test]
fn test_validator_receives_extracted_candidate() {
    let seen = std::cell::RefCell::new(Vec::new());
    let validator = |candidate: &str| {
        seen.borrow_mut().push(candidate.to_string());
        true
    };
    let validator: &dyn Fn(&str) -> bool = &validator;

    normalize("0.0.0.0 ads.example.com\n# skip\n", "test", Some(validator));

    assert_eq!(*seen.borrow(), vec!["ads.example.com".to_string()]);
}

#[test]
fn test_rejecting_validator_drops_everything() {
    let validator: &dyn Fn(&str) -> bool = &|_: &str| false;
    assert!(normalize("a.example\nb.example", "test", Some(validator)).is_empty());
}
