// SPDX-License-Identifier: MPL-2.0
//! Lightweight email address check for the contact form.
//!
//! This is deliberately not a full RFC 5322 parser: the form only needs to
//! catch obvious typos before the (simulated) submission, so the rules cover
//! the addr-spec shape people actually type. Quoted local parts and address
//! literals are rejected.

/// Maximum length of the local part per RFC 5321.
const MAX_LOCAL_LEN: usize = 64;

/// Returns true if `input` looks like a plausible `local@domain` address.
pub fn is_valid(input: &str) -> bool {
    let input = input.trim();
    let mut parts = input.splitn(2, '@');
    let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
        return false;
    };
    is_valid_local(local) && is_valid_domain(domain)
}

fn is_valid_local(local: &str) -> bool {
    if local.is_empty() || local.len() > MAX_LOCAL_LEN {
        return false;
    }
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return false;
    }
    local.chars().all(|c| {
        c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-' | '+' | '%')
    })
}

fn is_valid_domain(domain: &str) -> bool {
    // At least two dot-separated labels (no bare hostnames for a contact form).
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    labels.iter().all(|label| {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_addresses() {
        for addr in [
            "a@b.com",
            "hello@qrsme.com",
            "first.last@example.co.uk",
            "user+tag@sub.domain.org",
            "UPPER_case-1%x@host-name.io",
        ] {
            assert!(is_valid(addr), "expected valid: {addr}");
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for addr in [
            "",
            "plainaddress",
            "@no-local.com",
            "no-domain@",
            "two@@ats.com",
            "dot..dot@example.com",
            ".leading@example.com",
            "trailing.@example.com",
            "spaces in@example.com",
            "user@nodot",
            "user@.com",
            "user@domain.",
            "user@-bad.com",
            "user@bad-.com",
        ] {
            assert!(!is_valid(addr), "expected invalid: {addr}");
        }
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert!(is_valid("  hello@qrsme.com  "));
    }

    #[test]
    fn rejects_overlong_local_part() {
        let local = "a".repeat(MAX_LOCAL_LEN + 1);
        assert!(!is_valid(&format!("{local}@example.com")));
        let local = "a".repeat(MAX_LOCAL_LEN);
        assert!(is_valid(&format!("{local}@example.com")));
    }
}
