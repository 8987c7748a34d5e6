//! Type definitions.
//!
//! A [`Type`] is one node of a definition graph. It is a closed tagged
//! union discriminated by the JSON `type` field; each variant carries the
//! attributes of its kind. Optional attributes left out of a definition
//! emit no constraint.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::filter::{Filter, FilterMode, LiteralValue};
use super::kind::TypeKind;

/// A type definition node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Type {
    // ==========================================================================
    // Basic
    // ==========================================================================
    #[serde(rename = "string")]
    String(StringType),
    #[serde(rename = "number")]
    Number(NumberType),
    #[serde(rename = "boolean")]
    Boolean(PlainType),
    #[serde(rename = "literal")]
    Literal(LiteralType),
    #[serde(rename = "enum")]
    Enum(EnumType),
    #[serde(rename = "null")]
    Null(PlainType),
    #[serde(rename = "any")]
    Any(PlainType),

    // ==========================================================================
    // Composite
    // ==========================================================================
    #[serde(rename = "array")]
    Array(ArrayType),
    #[serde(rename = "object")]
    Object(ObjectType),
    #[serde(rename = "tuple")]
    Tuple(TupleType),
    #[serde(rename = "anyOf")]
    AnyOf(CombinatorType),
    #[serde(rename = "allOf")]
    AllOf(CombinatorType),
    #[serde(rename = "oneOf")]
    OneOf(CombinatorType),

    // ==========================================================================
    // Formatted
    // ==========================================================================
    #[serde(rename = "email")]
    Email(EmailType),
    #[serde(rename = "uuid")]
    Uuid(PlainType),
    #[serde(rename = "cuid")]
    Cuid(PlainType),
    #[serde(rename = "guid")]
    Guid(PlainType),
    #[serde(rename = "ulid")]
    Ulid(PlainType),
    #[serde(rename = "nanoid")]
    NanoId(NanoIdType),
    #[serde(rename = "url")]
    Url(UrlType),
    #[serde(rename = "color")]
    Color(ColorType),
    #[serde(rename = "timezone")]
    Timezone(PlainType),

    // ==========================================================================
    // Binary
    // ==========================================================================
    #[serde(rename = "base32")]
    Base32(BinaryType),
    #[serde(rename = "base36")]
    Base36(BinaryType),
    #[serde(rename = "base64")]
    Base64(BinaryType),
    #[serde(rename = "base64url")]
    Base64Url(BinaryType),
    #[serde(rename = "hex")]
    Hex(BinaryType),
    #[serde(rename = "hash")]
    Hash(HashType),

    // ==========================================================================
    // Network
    // ==========================================================================
    #[serde(rename = "ipv4")]
    Ipv4(AddressType),
    #[serde(rename = "ipv6")]
    Ipv6(AddressType),
    #[serde(rename = "cidrv4")]
    CidrV4(PlainType),
    #[serde(rename = "cidrv6")]
    CidrV6(PlainType),
    #[serde(rename = "mac")]
    Mac(AddressType),

    // ==========================================================================
    // Time
    // ==========================================================================
    #[serde(rename = "date")]
    Date(PlainType),
    #[serde(rename = "time")]
    Time(TimeType),
    #[serde(rename = "datetime")]
    DateTime(DateTimeType),
    #[serde(rename = "duration")]
    Duration(PlainType),

    // ==========================================================================
    // Reference
    // ==========================================================================
    #[serde(rename = "ref")]
    Ref(Reference),
}

impl Type {
    /// The discriminator tag of this node.
    pub fn kind(&self) -> TypeKind {
        match self {
            Type::String(_) => TypeKind::String,
            Type::Number(_) => TypeKind::Number,
            Type::Boolean(_) => TypeKind::Boolean,
            Type::Literal(_) => TypeKind::Literal,
            Type::Enum(_) => TypeKind::Enum,
            Type::Null(_) => TypeKind::Null,
            Type::Any(_) => TypeKind::Any,
            Type::Array(_) => TypeKind::Array,
            Type::Object(_) => TypeKind::Object,
            Type::Tuple(_) => TypeKind::Tuple,
            Type::AnyOf(_) => TypeKind::AnyOf,
            Type::AllOf(_) => TypeKind::AllOf,
            Type::OneOf(_) => TypeKind::OneOf,
            Type::Email(_) => TypeKind::Email,
            Type::Uuid(_) => TypeKind::Uuid,
            Type::Cuid(_) => TypeKind::Cuid,
            Type::Guid(_) => TypeKind::Guid,
            Type::Ulid(_) => TypeKind::Ulid,
            Type::NanoId(_) => TypeKind::NanoId,
            Type::Url(_) => TypeKind::Url,
            Type::Color(_) => TypeKind::Color,
            Type::Timezone(_) => TypeKind::Timezone,
            Type::Base32(_) => TypeKind::Base32,
            Type::Base36(_) => TypeKind::Base36,
            Type::Base64(_) => TypeKind::Base64,
            Type::Base64Url(_) => TypeKind::Base64Url,
            Type::Hex(_) => TypeKind::Hex,
            Type::Hash(_) => TypeKind::Hash,
            Type::Ipv4(_) => TypeKind::Ipv4,
            Type::Ipv6(_) => TypeKind::Ipv6,
            Type::CidrV4(_) => TypeKind::CidrV4,
            Type::CidrV6(_) => TypeKind::CidrV6,
            Type::Mac(_) => TypeKind::Mac,
            Type::Date(_) => TypeKind::Date,
            Type::Time(_) => TypeKind::Time,
            Type::DateTime(_) => TypeKind::DateTime,
            Type::Duration(_) => TypeKind::Duration,
            Type::Ref(_) => TypeKind::Ref,
        }
    }

    // Shorthand constructors, mostly for building graphs in code.

    pub fn string() -> Self {
        Type::String(StringType::default())
    }

    pub fn number() -> Self {
        Type::Number(NumberType::default())
    }

    pub fn boolean() -> Self {
        Type::Boolean(PlainType::default())
    }

    pub fn null() -> Self {
        Type::Null(PlainType::default())
    }

    pub fn any() -> Self {
        Type::Any(PlainType::default())
    }

    pub fn literal(value: impl Into<LiteralValue>) -> Self {
        Type::Literal(LiteralType {
            value: value.into(),
            examples: Vec::new(),
        })
    }

    pub fn enumeration(values: Vec<LiteralValue>) -> Self {
        Type::Enum(EnumType {
            values,
            examples: Vec::new(),
        })
    }

    pub fn array(item: Type) -> Self {
        Type::Array(ArrayType::new(item))
    }

    pub fn tuple(items: Vec<Type>) -> Self {
        Type::Tuple(TupleType {
            items,
            examples: Vec::new(),
        })
    }

    pub fn any_of(types: Vec<Type>) -> Self {
        Type::AnyOf(CombinatorType::new(types))
    }

    pub fn all_of(types: Vec<Type>) -> Self {
        Type::AllOf(CombinatorType::new(types))
    }

    pub fn one_of(types: Vec<Type>) -> Self {
        Type::OneOf(CombinatorType::new(types))
    }

    pub fn reference(name: impl Into<String>) -> Self {
        Type::Ref(Reference::new(name))
    }
}

/// Kinds with no attributes besides `examples`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlainType {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StringType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Value>,
}

/// `exclusiveMinimum`/`exclusiveMaximum` select strict comparison for the
/// matching bound.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclusive_minimum: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclusive_maximum: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiple_of: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiteralType {
    pub value: LiteralValue,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnumType {
    #[serde(default)]
    pub values: Vec<LiteralValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrayType {
    pub item_type: Box<Type>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_items: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_items: Option<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Value>,
}

impl ArrayType {
    pub fn new(item: Type) -> Self {
        Self {
            item_type: Box::new(item),
            min_items: None,
            max_items: None,
            examples: Vec::new(),
        }
    }
}

/// Object with ordered properties.
///
/// Names in `required` that have no matching property are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectType {
    #[serde(default)]
    pub properties: IndexMap<String, Type>,
    #[serde(default)]
    pub required: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Value>,
}

impl ObjectType {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a required property.
    pub fn with_required(mut self, name: impl Into<String>, ty: Type) -> Self {
        let name = name.into();
        self.required.push(name.clone());
        self.properties.insert(name, ty);
        self
    }

    /// Add an optional property.
    pub fn with_optional(mut self, name: impl Into<String>, ty: Type) -> Self {
        self.properties.insert(name.into(), ty);
        self
    }

    pub fn with_additional_properties(mut self, allowed: bool) -> Self {
        self.additional_properties = Some(allowed);
        self
    }

    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TupleType {
    #[serde(default)]
    pub items: Vec<Type>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Value>,
}

/// Children of `anyOf`, `allOf` and `oneOf`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CombinatorType {
    #[serde(default)]
    pub types: Vec<Type>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Value>,
}

impl CombinatorType {
    pub fn new(types: Vec<Type>) -> Self {
        Self {
            types,
            examples: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmailType {
    #[serde(default)]
    pub mode: FilterMode,
    #[serde(default)]
    pub domain: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NanoIdType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alphabet: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Value>,
}

/// URL with per-part filters, applied in the order protocol, domain,
/// port, path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UrlType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<Filter<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<Filter<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<Filter<u16>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Filter<String>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Value>,
}

/// Colour notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    Hex,
    Hexa,
    Rgb,
    Rgba,
    Hsl,
    Hsla,
}

impl ColorFormat {
    pub const ALL: [ColorFormat; 6] = [
        ColorFormat::Hex,
        ColorFormat::Hexa,
        ColorFormat::Rgb,
        ColorFormat::Rgba,
        ColorFormat::Hsl,
        ColorFormat::Hsla,
    ];
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorType {
    #[serde(default)]
    pub mode: FilterMode,
    #[serde(default)]
    pub format: Vec<ColorFormat>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Value>,
}

/// Binary-encoded string. Bounds count decoded bytes, not characters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinaryType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Value>,
}

impl BinaryType {
    pub fn bytes(min_length: Option<u64>, max_length: Option<u64>) -> Self {
        Self {
            min_length,
            max_length,
            examples: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HashType {
    pub algorithm: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Value>,
}

/// `ipv4`, `ipv6` and `mac` addresses with an optional range filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressType {
    #[serde(default)]
    pub mode: FilterMode,
    #[serde(default)]
    pub range: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Value>,
}

impl AddressType {
    pub fn filtered(mode: FilterMode, range: Vec<String>) -> Self {
        Self {
            mode,
            range,
            examples: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<i32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DateTimeType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<i32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Value>,
}

/// Reference to a registered type by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    #[serde(rename = "ref")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Value>,
}

impl Reference {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            examples: Vec::new(),
        }
    }
}
