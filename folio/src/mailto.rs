//! `mailto:` URI parsing for the contact section.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ContentError, Result};

static ADDRESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)+$").unwrap()
});

const SCHEME: &str = "mailto:";

/// Parts of a `mailto:` link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailTo {
    /// Recipient address.
    pub address: String,
    /// Pre-filled subject, percent-decoded.
    pub subject: Option<String>,
    /// Pre-filled body, percent-decoded.
    pub body: Option<String>,
    /// Any other header fields (`cc`, `bcc`, ...), in link order.
    pub headers: Vec<(String, String)>,
}

impl MailTo {
    /// Parse a `mailto:` URI.
    ///
    /// The scheme is matched case-insensitively, so `Mailto:` is accepted.
    /// Only a single recipient is supported.
    pub fn parse(uri: &str) -> Result<Self> {
        let rest = match uri.get(..SCHEME.len()) {
            Some(scheme) if scheme.eq_ignore_ascii_case(SCHEME) => &uri[SCHEME.len()..],
            _ => return Err(ContentError::mailto(uri, "missing mailto: scheme")),
        };

        let (address, query) = match rest.split_once('?') {
            Some((address, query)) => (address, Some(query)),
            None => (rest, None),
        };

        let address = decode(uri, address)?;
        if !ADDRESS.is_match(&address) {
            return Err(ContentError::mailto(
                uri,
                format!("invalid address {address:?}"),
            ));
        }

        let mut mail = MailTo {
            address,
            subject: None,
            body: None,
            headers: Vec::new(),
        };

        for field in query.into_iter().flat_map(|q| q.split('&')) {
            if field.is_empty() {
                continue;
            }
            let Some((key, value)) = field.split_once('=') else {
                return Err(ContentError::mailto(
                    uri,
                    format!("header field {field:?} has no value"),
                ));
            };
            let value = decode(uri, value)?;
            if key.eq_ignore_ascii_case("subject") {
                mail.subject = Some(value);
            } else if key.eq_ignore_ascii_case("body") {
                mail.body = Some(value);
            } else {
                mail.headers.push((key.to_ascii_lowercase(), value));
            }
        }

        Ok(mail)
    }
}

fn decode(uri: &str, s: &str) -> Result<String> {
    urlencoding::decode(s)
        .map(|v| v.into_owned())
        .map_err(|e| ContentError::mailto(uri, format!("bad percent-encoding: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_subject_and_body() {
        let mail = MailTo::parse("Mailto:minjer@foxmail.com?Subject=邮箱标题&Body=邮箱内容！").unwrap();
        assert_eq!(mail.address, "minjer@foxmail.com");
        assert_eq!(mail.subject.as_deref(), Some("邮箱标题"));
        assert_eq!(mail.body.as_deref(), Some("邮箱内容！"));
        assert!(mail.headers.is_empty());
    }

    #[test]
    fn test_parse_percent_encoded() {
        let mail = MailTo::parse("mailto:a.b@example.org?subject=Hello%20there&cc=c@example.org")
            .unwrap();
        assert_eq!(mail.subject.as_deref(), Some("Hello there"));
        assert_eq!(mail.body, None);
        assert_eq!(
            mail.headers,
            vec![("cc".to_string(), "c@example.org".to_string())]
        );
    }

    #[test]
    fn test_plain_address() {
        let mail = MailTo::parse("MAILTO:someone@example.com").unwrap();
        assert_eq!(mail.address, "someone@example.com");
        assert_eq!(mail.subject, None);
    }

    #[test]
    fn test_rejects_malformed() {
        for uri in [
            "minjer@foxmail.com",
            "mailto:",
            "mailto:not-an-address",
            "mailto:a@b",
            "mailto:a@example.com?subject",
            "https://github.com/mj3622",
            "mail",
        ] {
            assert!(
                matches!(MailTo::parse(uri), Err(ContentError::MailTo { .. })),
                "{uri} should be rejected"
            );
        }
    }
}
