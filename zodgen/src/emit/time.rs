//! ISO 8601 date and time kinds.

use crate::model::{DateTimeType, PlainType, TimeType};

pub fn date(_ty: &PlainType) -> String {
    "z.iso.date()".to_string()
}

pub fn time(ty: &TimeType) -> String {
    match ty.precision {
        Some(precision) => format!("z.iso.time({{ precision: {} }})", precision),
        None => "z.iso.time()".to_string(),
    }
}

/// `z.iso.datetime()` with only the options present, in the order
/// offset, local, precision.
pub fn datetime(ty: &DateTimeType) -> String {
    let mut options = Vec::new();
    if let Some(offset) = ty.offset {
        options.push(format!("offset: {}", offset));
    }
    if let Some(local) = ty.local {
        options.push(format!("local: {}", local));
    }
    if let Some(precision) = ty.precision {
        options.push(format!("precision: {}", precision));
    }

    if options.is_empty() {
        "z.iso.datetime()".to_string()
    } else {
        format!("z.iso.datetime({{ {} }})", options.join(", "))
    }
}

pub fn duration(_ty: &PlainType) -> String {
    "z.iso.duration()".to_string()
}
