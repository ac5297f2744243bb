use crate::config::ContactConfig;

/// Percent-encode everything outside RFC 3986 `unreserved`
/// (`A-Z a-z 0-9 - . _ ~`), byte by byte over UTF-8.
pub fn percent_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 3);
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(b as char)
            }
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}

/// `mailto:` URI with encoded `subject` and `body` query parameters.
pub fn mailto_link(email: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{email}?subject={}&body={}",
        percent_encode(subject),
        percent_encode(body)
    )
}

/// Compose link for the configured contact block.
pub fn compose_link(cfg: &ContactConfig) -> String {
    mailto_link(&cfg.email, &cfg.subject, &cfg.body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newline_is_escaped() {
        let link = mailto_link("a@b.c", "Hi", "line one\nline two");
        assert_eq!(link, "mailto:a@b.c?subject=Hi&body=line%20one%0Aline%20two");
        assert!(!link.contains('\n'));
    }

    #[test]
    fn reserved_characters_are_escaped() {
        assert_eq!(percent_encode("a/b?c&d=e#f"), "a%2Fb%3Fc%26d%3De%23f");
        assert_eq!(percent_encode("Hello,"), "Hello%2C");
        assert_eq!(percent_encode("safe-._~"), "safe-._~");
        assert_eq!(percent_encode("°C"), "%C2%B0C");
    }

    #[test]
    fn default_contact_link() {
        let link = compose_link(&ContactConfig::default());
        assert_eq!(
            link,
            "mailto:cameron.green@riskscape.pro\
             ?subject=Inquiry%20about%20your%20professional%20services\
             &body=Hello%2C%0A%0AI%20would%20like%20to%20set%20up%20a%20meeting%20to%20discuss%20future%20projects"
        );
    }
}
