//! Membership refinements.
//!
//! Allow/deny filters on network addresses, email domains and URL parts are
//! compiled into a small predicate tree at generation time. The tree renders
//! to a Zod `.refine()` call and can also be evaluated directly with
//! [`Refinement::check`], which is how the generated semantics are tested.
//!
//! A refinement first parses the validated string into a [`Subject`]. When
//! that parse fails the refinement passes: the base validator (`.ip()`,
//! `.email()`, `.url()`, ...) already reports the malformed value.

pub mod ipv4;

use crate::emit::js_string;
use crate::model::FilterMode;

/// Part of the validated string a predicate looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    /// The string itself.
    Value,
    /// Dotted quad as an unsigned 32-bit number.
    Ipv4Number,
    /// Lower-cased IPv6 text.
    Ipv6,
    /// Upper-cased MAC with `:` separators.
    Mac,
    /// Lower-cased text after the last `@`.
    EmailDomain,
    /// URL scheme without the trailing `:`.
    UrlProtocol,
    UrlHostname,
    /// Explicit port, or the scheme default.
    UrlPort,
    UrlPath,
}

/// Operand of a comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Text(String),
    Number(u64),
}

impl Operand {
    fn to_js(&self) -> String {
        match self {
            Operand::Text(s) => js_string(s),
            Operand::Number(n) => n.to_string(),
        }
    }
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Operand::Text(value.to_string())
    }
}

impl From<String> for Operand {
    fn from(value: String) -> Self {
        Operand::Text(value)
    }
}

impl From<u64> for Operand {
    fn from(value: u64) -> Self {
        Operand::Number(value)
    }
}

/// Boolean test over a parsed subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    Equals(Operand),
    OneOf(Vec<Operand>),
    /// Inclusive numeric range.
    InRange { start: u64, end: u64 },
    /// The path itself or anything below it.
    PathPrefix(String),
    Any(Vec<Predicate>),
    All(Vec<Predicate>),
    Not(Box<Predicate>),
}

impl Predicate {
    /// Membership in a set of operands, collapsed to `Equals` for one member.
    pub fn member_of(mut operands: Vec<Operand>) -> Self {
        if operands.len() == 1 {
            if let Some(single) = operands.pop() {
                return Predicate::Equals(single);
            }
        }
        Predicate::OneOf(operands)
    }

    /// Apply a filter mode: whitelist keeps the predicate, blacklist negates it.
    ///
    /// Returns `None` for [`FilterMode::None`].
    pub fn for_mode(self, mode: FilterMode) -> Option<Self> {
        match mode {
            FilterMode::Whitelist => Some(self),
            FilterMode::Blacklist => Some(Predicate::Not(Box::new(self))),
            FilterMode::None => None,
        }
    }

    /// Render as a JavaScript expression over `subject`.
    pub fn to_js(&self) -> String {
        match self {
            Predicate::Equals(operand) => format!("subject === {}", operand.to_js()),
            Predicate::OneOf(operands) => {
                let items: Vec<String> = operands.iter().map(Operand::to_js).collect();
                format!("[{}].includes(subject)", items.join(", "))
            }
            Predicate::InRange { start, end } if start == end => format!("subject === {}", start),
            Predicate::InRange { start, end } => {
                format!("(subject >= {} && subject <= {})", start, end)
            }
            Predicate::PathPrefix(prefix) => {
                let base = prefix.trim_end_matches('/');
                format!(
                    "(subject === {} || subject.startsWith({}))",
                    js_string(base),
                    js_string(&format!("{}/", base))
                )
            }
            Predicate::Any(predicates) => join_js(predicates, " || ", "false"),
            Predicate::All(predicates) => join_js(predicates, " && ", "true"),
            Predicate::Not(inner) => format!("!({})", inner.to_js()),
        }
    }

    fn eval(&self, subject: &Operand) -> bool {
        match self {
            Predicate::Equals(operand) => subject == operand,
            Predicate::OneOf(operands) => operands.contains(subject),
            Predicate::InRange { start, end } => {
                matches!(subject, Operand::Number(n) if (*start..=*end).contains(n))
            }
            Predicate::PathPrefix(prefix) => {
                let base = prefix.trim_end_matches('/');
                match subject {
                    Operand::Text(path) => {
                        path == base
                            || path
                                .strip_prefix(base)
                                .is_some_and(|rest| rest.starts_with('/'))
                    }
                    Operand::Number(_) => false,
                }
            }
            Predicate::Any(predicates) => predicates.iter().any(|p| p.eval(subject)),
            Predicate::All(predicates) => predicates.iter().all(|p| p.eval(subject)),
            Predicate::Not(inner) => !inner.eval(subject),
        }
    }
}

fn join_js(predicates: &[Predicate], separator: &str, empty: &str) -> String {
    match predicates {
        [] => empty.to_string(),
        [single] => single.to_js(),
        many => {
            let parts: Vec<String> = many.iter().map(Predicate::to_js).collect();
            format!("({})", parts.join(separator))
        }
    }
}

/// A subject, the predicate it must satisfy, and the issue message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Refinement {
    pub subject: Subject,
    pub predicate: Predicate,
    pub message: String,
}

impl Refinement {
    pub fn new(subject: Subject, predicate: Predicate, message: impl Into<String>) -> Self {
        Self {
            subject,
            predicate,
            message: message.into(),
        }
    }

    /// Render as a chained `.refine(...)` call.
    pub fn to_js(&self) -> String {
        format!(
            ".refine((val) => {{ {} return {}; }}, {{ message: {} }})",
            subject_prelude(self.subject),
            self.predicate.to_js(),
            js_string(&self.message)
        )
    }

    /// Whether `value` passes this refinement.
    pub fn check(&self, value: &str) -> bool {
        match parse_subject(self.subject, value) {
            Some(subject) => self.predicate.eval(&subject),
            None => true,
        }
    }
}

/// JavaScript statements binding `subject`, or returning `true` early when
/// the value does not parse.
fn subject_prelude(subject: Subject) -> &'static str {
    match subject {
        Subject::Value => "const subject = val;",
        Subject::Ipv4Number => {
            "const octets = val.split(\".\"); if (octets.length !== 4) return true; \
             let subject = 0; for (const octet of octets) { \
             if (!/^\\d{1,3}$/.test(octet) || Number(octet) > 255) return true; \
             subject = subject * 256 + Number(octet); }"
        }
        Subject::Ipv6 => "const subject = val.toLowerCase();",
        Subject::Mac => "const subject = val.toUpperCase().replace(/-/g, \":\");",
        Subject::EmailDomain => {
            "const at = val.lastIndexOf(\"@\"); if (at < 0) return true; \
             const subject = val.slice(at + 1).toLowerCase();"
        }
        Subject::UrlProtocol => {
            "let url; try { url = new URL(val); } catch { return true; } \
             const subject = url.protocol.replace(/:$/, \"\");"
        }
        Subject::UrlHostname => {
            "let url; try { url = new URL(val); } catch { return true; } \
             const subject = url.hostname;"
        }
        Subject::UrlPort => {
            "let url; try { url = new URL(val); } catch { return true; } \
             const defaults = { \"http:\": 80, \"https:\": 443, \"ws:\": 80, \"wss:\": 443, \"ftp:\": 21 }; \
             const subject = url.port ? Number(url.port) : defaults[url.protocol]; \
             if (subject === undefined) return true;"
        }
        Subject::UrlPath => {
            "let url; try { url = new URL(val); } catch { return true; } \
             const subject = url.pathname;"
        }
    }
}

fn parse_subject(subject: Subject, value: &str) -> Option<Operand> {
    let parsed = match subject {
        Subject::Value => Operand::from(value),
        Subject::Ipv4Number => Operand::Number(u64::from(ipv4::parse_address(value)?)),
        Subject::Ipv6 => Operand::Text(value.to_lowercase()),
        Subject::Mac => Operand::Text(normalize_mac(value)),
        Subject::EmailDomain => {
            let (_, domain) = value.rsplit_once('@')?;
            Operand::Text(domain.to_lowercase())
        }
        Subject::UrlProtocol => Operand::from(url::Url::parse(value).ok()?.scheme()),
        Subject::UrlHostname => {
            let url = url::Url::parse(value).ok()?;
            Operand::from(url.host_str().unwrap_or_default())
        }
        Subject::UrlPort => {
            let port = url::Url::parse(value).ok()?.port_or_known_default()?;
            Operand::Number(u64::from(port))
        }
        Subject::UrlPath => Operand::from(url::Url::parse(value).ok()?.path()),
    };
    Some(parsed)
}

/// Upper-case a MAC address and use `:` as the separator.
pub fn normalize_mac(mac: &str) -> String {
    mac.to_uppercase().replace('-', ":")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allow_values(subject: Subject, values: &[&str]) -> Refinement {
        let operands = values.iter().map(|v| Operand::from(*v)).collect();
        Refinement::new(subject, Predicate::member_of(operands), "not allowed")
    }

    #[test]
    fn test_member_of_collapses_single() {
        assert_eq!(
            Predicate::member_of(vec!["a".into()]),
            Predicate::Equals("a".into())
        );
        assert_eq!(
            Predicate::member_of(vec!["a".into(), "b".into()]).to_js(),
            "[\"a\", \"b\"].includes(subject)"
        );
    }

    #[test]
    fn test_for_mode() {
        let p = Predicate::Equals(Operand::Number(1));
        assert_eq!(p.clone().for_mode(FilterMode::Whitelist), Some(p.clone()));
        assert_eq!(
            p.clone().for_mode(FilterMode::Blacklist).map(|n| n.to_js()),
            Some("!(subject === 1)".to_string())
        );
        assert_eq!(p.for_mode(FilterMode::None), None);
    }

    #[test]
    fn test_range_and_combinator_js() {
        let p = Predicate::Any(vec![
            Predicate::InRange { start: 1, end: 5 },
            Predicate::InRange { start: 9, end: 9 },
        ]);
        assert_eq!(
            p.to_js(),
            "((subject >= 1 && subject <= 5) || subject === 9)"
        );
        assert_eq!(Predicate::Any(vec![]).to_js(), "false");
        assert_eq!(Predicate::All(vec![]).to_js(), "true");
    }

    #[test]
    fn test_refinement_js_shape() {
        let r = allow_values(Subject::Value, &["x"]);
        assert_eq!(
            r.to_js(),
            ".refine((val) => { const subject = val; return subject === \"x\"; }, { message: \"not allowed\" })"
        );
    }

    #[test]
    fn test_path_prefix_matches_segments() {
        let r = Refinement::new(
            Subject::UrlPath,
            Predicate::PathPrefix("/api/".to_string()),
            "path",
        );
        assert!(r.check("https://example.com/api"));
        assert!(r.check("https://example.com/api/users"));
        assert!(!r.check("https://example.com/apis"));
        assert!(!r.check("https://example.com/"));
    }

    #[test]
    fn test_url_port_defaults() {
        let r = Refinement::new(Subject::UrlPort, Predicate::Equals(443.into()), "port");
        assert!(r.check("https://example.com/"));
        assert!(r.check("http://example.com:443/"));
        assert!(!r.check("http://example.com/"));
    }

    #[test]
    fn test_unparseable_subject_passes() {
        let r = allow_values(Subject::UrlProtocol, &["https"]);
        assert!(r.check("not a url"));
        let r = allow_values(Subject::EmailDomain, &["example.com"]);
        assert!(r.check("no-at-sign"));
    }

    #[test]
    fn test_email_domain_uses_last_at() {
        let r = allow_values(Subject::EmailDomain, &["example.com"]);
        assert!(r.check("\"a@b\"@Example.COM"));
        assert!(!r.check("a@example.org"));
    }

    #[test]
    fn test_mac_normalisation() {
        assert_eq!(normalize_mac("aa-bb-cc-dd-ee-ff"), "AA:BB:CC:DD:EE:FF");
        let r = allow_values(Subject::Mac, &["AA:BB:CC:DD:EE:FF"]);
        assert!(r.check("aa-bb-cc-dd-ee-ff"));
    }
}
