use pilist_domain::hostname::is_hostname_char;
use pilist_domain::{DomainKind, DomainRecord, ImportBatch};
use std::net::IpAddr;
use tracing::debug;

/// Characters that only make sense in a pattern, never in a bare hostname.
const REGEX_MARKERS: &[char] = &[
    '^', '$', '*', '+', '?', '(', ')', '[', ']', '{', '}', '|', '\\',
];

/// Loopback and multicast names found in the header of every hosts file.
const HOSTS_PLACEHOLDERS: &[&str] = &[
    "localhost",
    "localhost.localdomain",
    "local",
    "broadcasthost",
    "ip6-localhost",
    "ip6-loopback",
    "ip6-localnet",
    "ip6-mcastprefix",
    "ip6-allnodes",
    "ip6-allrouters",
    "ip6-allhosts",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedEntry {
    Exact(String),
    Regex(String),
}

impl ParsedEntry {
    pub fn as_str(&self) -> &str {
        match self {
            ParsedEntry::Exact(s) | ParsedEntry::Regex(s) => s,
        }
    }

    pub fn kind(&self) -> DomainKind {
        match self {
            ParsedEntry::Exact(_) => DomainKind::Exact,
            ParsedEntry::Regex(_) => DomainKind::Regex,
        }
    }
}

pub fn parse_list_line(line: &str) -> Option<ParsedEntry> {
    let line = line.trim();

    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let line = strip_inline_comment(line);
    let candidate = extract_candidate(line)?;
    classify(candidate)
}

/// Converts raw list text into records, one per surviving line, in input
/// order. Lines that are blank, comments, malformed, or rejected by
/// `validator` are dropped without error.
pub fn normalize(
    text: &str,
    comment: &str,
    validator: Option<&dyn Fn(&str) -> bool>,
) -> ImportBatch {
    let mut records = Vec::new();
    let mut dropped = 0usize;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some(entry) = parse_list_line(line) else {
            dropped += 1;
            continue;
        };

        if let Some(validate) = validator {
            if !validate(entry.as_str()) {
                dropped += 1;
                continue;
            }
        }

        match DomainRecord::new(entry.as_str(), entry.kind(), comment) {
            Some(record) => records.push(record),
            None => dropped += 1,
        }
    }

    debug!(
        source = comment,
        kept = records.len(),
        dropped,
        "Normalized list text"
    );

    records
}

fn strip_inline_comment(line: &str) -> &str {
    let mut prev_whitespace = false;
    for (idx, c) in line.char_indices() {
        if c == '#' && prev_whitespace {
            return line[..idx].trim_end();
        }
        prev_whitespace = c.is_whitespace();
    }
    line
}

// "0.0.0.0 ads.example.com" -> "ads.example.com"; single tokens pass through.
fn extract_candidate(line: &str) -> Option<&str> {
    let mut tokens = line.split_whitespace();
    let first = tokens.next()?;

    let candidate = match tokens.next() {
        None => first,
        Some(host) if is_ip(first) => {
            if HOSTS_PLACEHOLDERS.contains(&host) {
                return None;
            }
            host
        }
        Some(_) => return None,
    };

    if is_ip(candidate) {
        return None;
    }
    Some(candidate)
}

fn is_ip(token: &str) -> bool {
    token.parse::<IpAddr>().is_ok()
}

fn classify(candidate: &str) -> Option<ParsedEntry> {
    if candidate.contains(REGEX_MARKERS) {
        return Some(ParsedEntry::Regex(candidate.to_string()));
    }

    if is_bare_hostname(candidate) {
        return Some(ParsedEntry::Exact(candidate.to_string()));
    }

    None
}

fn is_bare_hostname(s: &str) -> bool {
    !s.is_empty()
        && s.chars().all(is_hostname_char)
        && s.chars().any(|c| c.is_ascii_alphanumeric())
}
