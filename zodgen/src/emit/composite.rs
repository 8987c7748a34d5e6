//! Composite kinds: array, object, tuple, anyOf, allOf, oneOf.
//!
//! Children are generated through the [`Emit`] callback, each one
//! independently; identical children are emitted again wherever they occur.

use super::{js_string, push_call, Emit, NEVER};
use crate::model::{ArrayType, CombinatorType, ObjectType, TupleType};

/// `z.array(<item>)` with item count bounds.
pub fn array(ty: &ArrayType, children: &mut dyn Emit) -> String {
    let mut schema = format!("z.array({})", children.emit(&ty.item_type));

    push_call(&mut schema, "min", ty.min_items);
    push_call(&mut schema, "max", ty.max_items);

    schema
}

/// `z.object({...})`, one property per line.
///
/// Properties missing from `required` are wrapped in `.optional()`.
/// `additionalProperties` picks `.passthrough()` or `.strict()`; left out,
/// Zod's default (strip unknown keys) applies.
pub fn object(ty: &ObjectType, children: &mut dyn Emit) -> String {
    let mut schema = if ty.properties.is_empty() {
        "z.object({})".to_string()
    } else {
        let fields: Vec<String> = ty
            .properties
            .iter()
            .map(|(name, child)| {
                let optional = if ty.is_required(name) {
                    ""
                } else {
                    ".optional()"
                };
                format!("  {}: {}{}", js_string(name), children.emit(child), optional)
            })
            .collect();
        format!("z.object({{\n{}\n}})", fields.join(",\n"))
    };

    match ty.additional_properties {
        Some(true) => schema.push_str(".passthrough()"),
        Some(false) => schema.push_str(".strict()"),
        None => {}
    }

    schema
}

/// `z.tuple([...])` in positional order.
pub fn tuple(ty: &TupleType, children: &mut dyn Emit) -> String {
    let items: Vec<String> = ty.items.iter().map(|item| children.emit(item)).collect();
    format!("z.tuple([{}])", items.join(", "))
}

/// `anyOf` as a union.
pub fn any_of(ty: &CombinatorType, children: &mut dyn Emit) -> String {
    union(ty, children)
}

/// `oneOf` as a union.
///
/// Zod has no exclusive-or combinator, so a value matching several branches
/// is accepted here even though `oneOf` would reject it.
pub fn one_of(ty: &CombinatorType, children: &mut dyn Emit) -> String {
    union(ty, children)
}

/// `allOf` as a left-folded chain of `.and()` intersections.
pub fn all_of(ty: &CombinatorType, children: &mut dyn Emit) -> String {
    let mut types = ty.types.iter();
    let Some(first) = types.next() else {
        return NEVER.to_string();
    };

    let mut schema = children.emit(first);
    for next in types {
        schema = format!("{}.and({})", schema, children.emit(next));
    }
    schema
}

fn union(ty: &CombinatorType, children: &mut dyn Emit) -> String {
    match ty.types.as_slice() {
        [] => NEVER.to_string(),
        [single] => children.emit(single),
        types => {
            let members: Vec<String> = types.iter().map(|t| children.emit(t)).collect();
            format!("z.union([{}])", members.join(", "))
        }
    }
}
