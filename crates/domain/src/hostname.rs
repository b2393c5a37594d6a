const MAX_HOSTNAME_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// Characters an exact list entry may contain. Underscore is tolerated
/// because blocklists routinely carry `_dmarc`-style service labels.
pub fn is_hostname_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_')
}

/// Strict RFC 1123 hostname check used for free-text (pasted) input.
pub fn validate_host(candidate: &str) -> bool {
    let host = candidate.strip_suffix('.').unwrap_or(candidate);

    if host.is_empty() || host.len() > MAX_HOSTNAME_LEN {
        return false;
    }

    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() < 2 {
        return false;
    }

    for label in &labels {
        if label.is_empty() || label.len() > MAX_LABEL_LEN {
            return false;
        }
        if label.starts_with('-') || label.ends_with('-') {
            return false;
        }
        if !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return false;
        }
    }

    // "10.0.0.1" is an address, not a host
    labels
        .last()
        .map(|tld| !tld.chars().all(|c| c.is_ascii_digit()))
        .unwrap_or(false)
}
