//! Basic kinds: string, number, boolean, literal, enum, null, any.

use super::{js_literal, js_number, js_string, push_call, NEVER};
use crate::model::{EnumType, LiteralType, LiteralValue, NumberType, PlainType, StringType};

/// `z.string()` with pattern, then length bounds.
pub fn string(ty: &StringType) -> String {
    let mut schema = "z.string()".to_string();

    if let Some(pattern) = &ty.pattern {
        schema.push_str(&format!(".regex(new RegExp({}))", js_string(pattern)));
    }
    push_call(&mut schema, "min", ty.min_length);
    push_call(&mut schema, "max", ty.max_length);

    schema
}

/// `z.number()` with lower bound, upper bound, then step.
pub fn number(ty: &NumberType) -> String {
    let mut schema = "z.number()".to_string();

    if let Some(minimum) = ty.minimum {
        let method = if ty.exclusive_minimum.unwrap_or(false) {
            "gt"
        } else {
            "gte"
        };
        push_call(&mut schema, method, Some(js_number(minimum)));
    }
    if let Some(maximum) = ty.maximum {
        let method = if ty.exclusive_maximum.unwrap_or(false) {
            "lt"
        } else {
            "lte"
        };
        push_call(&mut schema, method, Some(js_number(maximum)));
    }
    push_call(&mut schema, "multipleOf", ty.multiple_of.map(js_number));

    schema
}

pub fn boolean(_ty: &PlainType) -> String {
    "z.boolean()".to_string()
}

pub fn null(_ty: &PlainType) -> String {
    "z.null()".to_string()
}

pub fn any(_ty: &PlainType) -> String {
    "z.any()".to_string()
}

pub fn literal(ty: &LiteralType) -> String {
    literal_value(&ty.value)
}

pub(crate) fn literal_value(value: &LiteralValue) -> String {
    format!("z.literal({})", js_literal(value))
}

/// Enumerations.
///
/// `z.enum()` only takes strings, so any non-string member turns the whole
/// enumeration into a union of literals. Zero members never match; one
/// member is a plain literal.
pub fn enumeration(ty: &EnumType) -> String {
    match ty.values.as_slice() {
        [] => NEVER.to_string(),
        [single] => literal_value(single),
        values if values.iter().all(LiteralValue::is_string) => {
            let members: Vec<String> = values.iter().map(js_literal).collect();
            format!("z.enum([{}])", members.join(", "))
        }
        values => {
            let literals: Vec<String> = values.iter().map(literal_value).collect();
            format!("z.union([{}])", literals.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enum_of(values: Vec<LiteralValue>) -> EnumType {
        EnumType {
            values,
            examples: vec![],
        }
    }

    #[test]
    fn test_string_plain() {
        assert_eq!(string(&StringType::default()), "z.string()");
    }

    #[test]
    fn test_string_all_constraints_in_order() {
        let ty = StringType {
            pattern: Some("^[a-z]+\\d$".to_string()),
            min_length: Some(2),
            max_length: Some(8),
            examples: vec![],
        };
        assert_eq!(
            string(&ty),
            "z.string().regex(new RegExp(\"^[a-z]+\\\\d$\")).min(2).max(8)"
        );
    }

    #[test]
    fn test_string_zero_bound_is_still_emitted() {
        let ty = StringType {
            min_length: Some(0),
            ..Default::default()
        };
        assert_eq!(string(&ty), "z.string().min(0)");
    }

    #[test]
    fn test_number_inclusive_bounds() {
        let ty = NumberType {
            minimum: Some(0.0),
            maximum: Some(100.0),
            ..Default::default()
        };
        assert_eq!(number(&ty), "z.number().gte(0).lte(100)");
    }

    #[test]
    fn test_number_exclusive_bounds() {
        let ty = NumberType {
            minimum: Some(-1.5),
            maximum: Some(1.5),
            exclusive_minimum: Some(true),
            exclusive_maximum: Some(true),
            ..Default::default()
        };
        assert_eq!(number(&ty), "z.number().gt(-1.5).lt(1.5)");
    }

    #[test]
    fn test_number_mixed_bounds_and_step() {
        let ty = NumberType {
            minimum: Some(1.0),
            maximum: Some(10.0),
            exclusive_maximum: Some(true),
            exclusive_minimum: Some(false),
            multiple_of: Some(0.25),
            ..Default::default()
        };
        assert_eq!(number(&ty), "z.number().gte(1).lt(10).multipleOf(0.25)");
    }

    #[test]
    fn test_number_exclusive_flag_without_bound() {
        let ty = NumberType {
            exclusive_minimum: Some(true),
            ..Default::default()
        };
        assert_eq!(number(&ty), "z.number()");
    }

    #[test]
    fn test_simple_kinds() {
        assert_eq!(boolean(&PlainType::default()), "z.boolean()");
        assert_eq!(null(&PlainType::default()), "z.null()");
        assert_eq!(any(&PlainType::default()), "z.any()");
    }

    #[test]
    fn test_literal_values() {
        let lit = |value: LiteralValue| {
            literal(&LiteralType {
                value,
                examples: vec![],
            })
        };
        assert_eq!(lit("on".into()), "z.literal(\"on\")");
        assert_eq!(lit(LiteralValue::Number(42.0)), "z.literal(42)");
        assert_eq!(lit(true.into()), "z.literal(true)");
        assert_eq!(lit(LiteralValue::Null), "z.literal(null)");
    }

    #[test]
    fn test_enum_empty_is_never() {
        assert_eq!(enumeration(&enum_of(vec![])), "z.never()");
    }

    #[test]
    fn test_enum_single_collapses_to_literal() {
        assert_eq!(enumeration(&enum_of(vec!["x".into()])), "z.literal(\"x\")");
        assert_eq!(enumeration(&enum_of(vec![LiteralValue::Number(7.0)])), "z.literal(7)");
    }

    #[test]
    fn test_enum_strings_use_native_enum() {
        let ty = enum_of(vec!["red".into(), "green".into(), "blue".into()]);
        assert_eq!(enumeration(&ty), "z.enum([\"red\", \"green\", \"blue\"])");
    }

    #[test]
    fn test_enum_mixed_uses_literal_union() {
        let ty = enum_of(vec!["a".into(), LiteralValue::Number(1.0), LiteralValue::Null, false.into()]);
        assert_eq!(
            enumeration(&ty),
            "z.union([z.literal(\"a\"), z.literal(1), z.literal(null), z.literal(false)])"
        );
    }
}
