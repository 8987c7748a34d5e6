//! Network address kinds.

use crate::model::{AddressType, PlainType};
use crate::refine::{ipv4, normalize_mac, Operand, Predicate, Refinement, Subject};

const MAC_PATTERN: &str = "z.string().regex(/^([0-9A-Fa-f]{2}[:-]){5}([0-9A-Fa-f]{2})$/)";

/// Range filter of an IPv4 address, if it constrains anything.
pub fn ipv4_refinement(ty: &AddressType) -> Option<Refinement> {
    if ty.range.is_empty() {
        return None;
    }
    let predicate = ipv4::range_predicate(&ty.range).for_mode(ty.mode)?;
    Some(Refinement::new(
        Subject::Ipv4Number,
        predicate,
        "IP address is not in the allowed range",
    ))
}

/// Membership filter of an IPv6 address, compared case-insensitively.
pub fn ipv6_refinement(ty: &AddressType) -> Option<Refinement> {
    membership(ty, Subject::Ipv6, str::to_lowercase, "IP address is not in the allowed range")
}

/// Membership filter of a MAC address, compared in normalised form.
pub fn mac_refinement(ty: &AddressType) -> Option<Refinement> {
    membership(ty, Subject::Mac, normalize_mac, "MAC address is not allowed")
}

fn membership(
    ty: &AddressType,
    subject: Subject,
    normalize: fn(&str) -> String,
    message: &str,
) -> Option<Refinement> {
    if ty.range.is_empty() {
        return None;
    }
    let operands = ty
        .range
        .iter()
        .map(|entry| Operand::Text(normalize(entry.trim())))
        .collect();
    let predicate = Predicate::member_of(operands).for_mode(ty.mode)?;
    Some(Refinement::new(subject, predicate, message))
}

fn refined(base: &str, refinement: Option<Refinement>) -> String {
    match refinement {
        Some(refinement) => format!("{}{}", base, refinement.to_js()),
        None => base.to_string(),
    }
}

pub fn ipv4(ty: &AddressType) -> String {
    refined("z.string().ip({ version: \"v4\" })", ipv4_refinement(ty))
}

pub fn ipv6(ty: &AddressType) -> String {
    refined("z.string().ip({ version: \"v6\" })", ipv6_refinement(ty))
}

pub fn cidrv4(_ty: &PlainType) -> String {
    "z.string().cidr({ version: \"v4\" })".to_string()
}

pub fn cidrv6(_ty: &PlainType) -> String {
    "z.string().cidr({ version: \"v6\" })".to_string()
}

pub fn mac(ty: &AddressType) -> String {
    refined(MAC_PATTERN, mac_refinement(ty))
}
