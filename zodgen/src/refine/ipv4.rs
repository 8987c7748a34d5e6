//! IPv4 range entries.
//!
//! An entry is an exact address (`10.0.0.1`), a CIDR block (`10.0.0.0/8`)
//! or a dash range (`10.0.0.1-10.0.0.9`). Every form becomes an inclusive
//! range of 32-bit addresses.

use super::Predicate;

/// Parse a dotted quad. Each octet is one to three digits, at most 255.
pub fn parse_address(text: &str) -> Option<u32> {
    let mut octets = text.split('.');
    let mut address: u32 = 0;
    for _ in 0..4 {
        let octet = octets.next()?;
        if octet.is_empty() || octet.len() > 3 || !octet.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let value: u8 = octet.parse().ok()?;
        address = (address << 8) | u32::from(value);
    }
    if octets.next().is_some() {
        return None;
    }
    Some(address)
}

/// Parse one range entry into inclusive bounds.
pub fn parse_range(entry: &str) -> Option<(u32, u32)> {
    let entry = entry.trim();

    if let Some((base, prefix)) = entry.split_once('/') {
        let prefix: u32 = prefix.trim().parse().ok()?;
        if prefix > 32 {
            return None;
        }
        let mask = if prefix == 0 {
            0
        } else {
            u32::MAX << (32 - prefix)
        };
        let network = parse_address(base.trim())? & mask;
        return Some((network, network | !mask));
    }

    if let Some((start, end)) = entry.split_once('-') {
        let start = parse_address(start.trim())?;
        let end = parse_address(end.trim())?;
        return (start <= end).then_some((start, end));
    }

    parse_address(entry).map(|address| (address, address))
}

/// Any-of predicate over the parseable entries. Entries that do not parse
/// are skipped with a warning.
pub fn range_predicate(entries: &[String]) -> Predicate {
    let ranges = entries
        .iter()
        .filter_map(|entry| match parse_range(entry) {
            Some((start, end)) => Some(Predicate::InRange {
                start: u64::from(start),
                end: u64::from(end),
            }),
            None => {
                tracing::warn!(entry = %entry, "Skipping unparseable IPv4 range entry");
                None
            }
        })
        .collect();
    Predicate::Any(ranges)
}
