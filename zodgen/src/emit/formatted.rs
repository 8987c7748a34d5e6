//! Formatted string kinds: identifiers, email, URL, colour, timezone.

use super::{escape_class, push_call, NEVER};
use crate::model::{
    ColorFormat, ColorType, EmailType, Filter, FilterMode, NanoIdType, PlainType, UrlType,
};
use crate::refine::{Operand, Predicate, Refinement, Subject};

const HEX_COLOR: &str =
    "z.string().regex(/^#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3}|[A-Fa-f0-9]{8}|[A-Fa-f0-9]{4})$/)";

/// Domain filter of an email address.
pub fn email_refinement(ty: &EmailType) -> Option<Refinement> {
    if ty.domain.is_empty() {
        return None;
    }
    let domains = ty
        .domain
        .iter()
        .map(|d| Operand::Text(d.trim().to_lowercase()))
        .collect();
    let predicate = Predicate::member_of(domains).for_mode(ty.mode)?;
    Some(Refinement::new(
        Subject::EmailDomain,
        predicate,
        "Email domain is not allowed",
    ))
}

pub fn email(ty: &EmailType) -> String {
    let mut schema = "z.string().email()".to_string();
    if let Some(refinement) = email_refinement(ty) {
        schema.push_str(&refinement.to_js());
    }
    schema
}

pub fn uuid(_ty: &PlainType) -> String {
    "z.string().uuid()".to_string()
}

/// GUIDs share the UUID layout.
pub fn guid(_ty: &PlainType) -> String {
    "z.string().uuid()".to_string()
}

pub fn cuid(_ty: &PlainType) -> String {
    "z.string().cuid()".to_string()
}

pub fn ulid(_ty: &PlainType) -> String {
    "z.string().ulid()".to_string()
}

/// `z.string().nanoid()`, or a character class regex when a custom
/// alphabet is given, then the exact length.
pub fn nanoid(ty: &NanoIdType) -> String {
    let mut schema = match ty.alphabet.as_deref() {
        Some(alphabet) if !alphabet.is_empty() => {
            format!("z.string().regex(/^[{}]+$/)", escape_class(alphabet))
        }
        _ => "z.string().nanoid()".to_string(),
    };
    push_call(&mut schema, "length", ty.length);
    schema
}

/// Per-part filters of a URL, in the order protocol, domain, port, path.
pub fn url_refinements(ty: &UrlType) -> Vec<Refinement> {
    let mut refinements = Vec::new();

    if let Some(filter) = active(&ty.protocol) {
        let protocols = filter
            .value
            .iter()
            .map(|p| Operand::Text(p.trim().trim_end_matches(':').to_lowercase()))
            .collect();
        push_part(
            &mut refinements,
            Subject::UrlProtocol,
            Predicate::member_of(protocols),
            filter.mode,
            "URL protocol is not allowed",
        );
    }
    if let Some(filter) = active(&ty.domain) {
        let hosts = filter
            .value
            .iter()
            .map(|d| Operand::Text(d.trim().to_lowercase()))
            .collect();
        push_part(
            &mut refinements,
            Subject::UrlHostname,
            Predicate::member_of(hosts),
            filter.mode,
            "URL domain is not allowed",
        );
    }
    if let Some(filter) = active(&ty.port) {
        let ports = filter
            .value
            .iter()
            .map(|&p| Operand::Number(u64::from(p)))
            .collect();
        push_part(
            &mut refinements,
            Subject::UrlPort,
            Predicate::member_of(ports),
            filter.mode,
            "URL port is not allowed",
        );
    }
    if let Some(filter) = active(&ty.path) {
        let prefixes = filter
            .value
            .iter()
            .map(|p| Predicate::PathPrefix(p.trim().to_string()))
            .collect();
        push_part(
            &mut refinements,
            Subject::UrlPath,
            Predicate::Any(prefixes),
            filter.mode,
            "URL path is not allowed",
        );
    }

    refinements
}

fn active<T>(filter: &Option<Filter<T>>) -> Option<&Filter<T>> {
    filter.as_ref().filter(|f| f.is_active())
}

fn push_part(
    refinements: &mut Vec<Refinement>,
    subject: Subject,
    matched: Predicate,
    mode: FilterMode,
    message: &str,
) {
    if let Some(predicate) = matched.for_mode(mode) {
        refinements.push(Refinement::new(subject, predicate, message));
    }
}

pub fn url(ty: &UrlType) -> String {
    let mut schema = "z.string().url()".to_string();
    for refinement in url_refinements(ty) {
        schema.push_str(&refinement.to_js());
    }
    schema
}

impl ColorFormat {
    /// Regex alternative matching one notation, unanchored.
    pub fn pattern(self) -> &'static str {
        match self {
            ColorFormat::Hex => r"#[A-Fa-f0-9]{6}|#[A-Fa-f0-9]{3}",
            ColorFormat::Hexa => r"#[A-Fa-f0-9]{8}|#[A-Fa-f0-9]{4}",
            ColorFormat::Rgb => r"rgb\(\s*\d{1,3}\s*,\s*\d{1,3}\s*,\s*\d{1,3}\s*\)",
            ColorFormat::Rgba => {
                r"rgba\(\s*\d{1,3}\s*,\s*\d{1,3}\s*,\s*\d{1,3}\s*,\s*(?:0|1|0?\.\d+)\s*\)"
            }
            ColorFormat::Hsl => r"hsl\(\s*\d{1,3}\s*,\s*\d{1,3}%\s*,\s*\d{1,3}%\s*\)",
            ColorFormat::Hsla => {
                r"hsla\(\s*\d{1,3}\s*,\s*\d{1,3}%\s*,\s*\d{1,3}%\s*,\s*(?:0|1|0?\.\d+)\s*\)"
            }
        }
    }
}

/// Notations a colour filter accepts, in canonical order. `None` when the
/// filter is inactive.
pub fn accepted_color_formats(ty: &ColorType) -> Option<Vec<ColorFormat>> {
    if ty.format.is_empty() {
        return None;
    }
    let accepted = match ty.mode {
        FilterMode::Whitelist => ColorFormat::ALL
            .into_iter()
            .filter(|f| ty.format.contains(f))
            .collect(),
        FilterMode::Blacklist => ColorFormat::ALL
            .into_iter()
            .filter(|f| !ty.format.contains(f))
            .collect(),
        FilterMode::None => return None,
    };
    Some(accepted)
}

pub fn color(ty: &ColorType) -> String {
    match accepted_color_formats(ty) {
        None => HEX_COLOR.to_string(),
        Some(formats) if formats.is_empty() => NEVER.to_string(),
        Some(formats) => {
            let alternatives: Vec<&str> = formats.iter().map(|f| f.pattern()).collect();
            format!("z.string().regex(/^(?:{})$/)", alternatives.join("|"))
        }
    }
}

/// IANA names are not checked, only the string shape.
pub fn timezone(_ty: &PlainType) -> String {
    "z.string()".to_string()
}
