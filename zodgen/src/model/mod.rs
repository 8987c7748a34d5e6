//! Type model.
//!
//! The closed tagged union of type kinds and their attributes. This is pure
//! data; generation lives in [`crate::emit`] and [`crate::driver`].
//!
//! # Components
//!
//! - [`Type`] - A node of a type definition graph
//! - [`TypeKind`] - The `type` discriminator values
//! - [`FilterMode`] / [`Filter`] - Allow/deny list settings
//! - [`LiteralValue`] - Primitive values of `literal` and `enum`

pub mod filter;
pub mod kind;
pub mod types;

pub use filter::{Filter, FilterMode, LiteralValue};
pub use kind::{KindFamily, TypeKind, UnknownTag};
pub use types::{
    AddressType, ArrayType, BinaryType, ColorFormat, ColorType, CombinatorType, DateTimeType,
    EmailType, EnumType, HashType, LiteralType, NanoIdType, NumberType, ObjectType, PlainType,
    Reference, StringType, TimeType, TupleType, Type, UrlType,
};

use serde_json::Value;

use crate::error::{GenerateError, GenerateResult};

impl Type {
    /// Decode a dynamically loaded definition.
    ///
    /// Every kind tag in the graph is checked before typed decoding so an
    /// unrecognised tag anywhere surfaces as [`GenerateError::UnknownKind`]
    /// instead of a generic decoding error.
    pub fn from_value(value: Value) -> GenerateResult<Type> {
        let kind = check_kinds(&value, &mut String::new())?;
        serde_json::from_value(value).map_err(|source| GenerateError::Malformed { kind, source })
    }

    /// Decode a definition from JSON text.
    pub fn from_json(text: &str) -> GenerateResult<Type> {
        let value: Value = serde_json::from_str(text)?;
        Type::from_value(value)
    }

    /// Names referenced anywhere in this graph, in first-seen order.
    pub fn references(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_references(&mut names);
        names
    }

    fn collect_references<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            Type::Ref(reference) => {
                if !names.contains(&reference.name.as_str()) {
                    names.push(&reference.name);
                }
            }
            Type::Array(array) => array.item_type.collect_references(names),
            Type::Object(object) => {
                for child in object.properties.values() {
                    child.collect_references(names);
                }
            }
            Type::Tuple(tuple) => {
                for item in &tuple.items {
                    item.collect_references(names);
                }
            }
            Type::AnyOf(c) | Type::AllOf(c) | Type::OneOf(c) => {
                for child in &c.types {
                    child.collect_references(names);
                }
            }
            _ => {}
        }
    }
}

/// Read the tag of a definition node.
pub(crate) fn read_kind(value: &Value, path: &str) -> GenerateResult<TypeKind> {
    let tag = value
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| GenerateError::MissingKind {
            path: path.to_string(),
        })?;
    tag.parse::<TypeKind>()
        .map_err(|_| GenerateError::unknown_kind(tag))
}

/// Walk the child positions of a definition and validate each tag.
fn check_kinds(value: &Value, path: &mut String) -> GenerateResult<TypeKind> {
    let kind = read_kind(value, path)?;

    match kind {
        TypeKind::Array => {
            if let Some(item) = value.get("itemType") {
                check_child(item, path, "/itemType")?;
            }
        }
        TypeKind::Object => {
            if let Some(properties) = value.get("properties").and_then(Value::as_object) {
                for (name, child) in properties {
                    check_child(child, path, &format!("/properties/{}", name))?;
                }
            }
        }
        TypeKind::Tuple => check_children(value, "items", path)?,
        TypeKind::AnyOf | TypeKind::AllOf | TypeKind::OneOf => {
            check_children(value, "types", path)?
        }
        _ => {}
    }

    Ok(kind)
}

fn check_children(value: &Value, field: &str, path: &mut String) -> GenerateResult<()> {
    if let Some(children) = value.get(field).and_then(Value::as_array) {
        for (index, child) in children.iter().enumerate() {
            check_child(child, path, &format!("/{}/{}", field, index))?;
        }
    }
    Ok(())
}

fn check_child(child: &Value, path: &mut String, segment: &str) -> GenerateResult<()> {
    let len = path.len();
    path.push_str(segment);
    let result = check_kinds(child, path);
    path.truncate(len);
    result.map(|_| ())
}
