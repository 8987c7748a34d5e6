//! Kind tags.
//!
//! [`TypeKind`] is the closed set of values the `type` discriminator of a
//! definition may take. It is used to dispatch dynamically loaded
//! definitions and to report unknown tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Family a kind belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KindFamily {
    Basic,
    Composite,
    Formatted,
    Binary,
    Network,
    Time,
    Reference,
}

macro_rules! type_kinds {
    ($( $variant:ident => $tag:literal, $family:ident; )*) => {
        /// Discriminator tag of a [`Type`](crate::model::Type).
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum TypeKind {
            $(
                #[serde(rename = $tag)]
                $variant,
            )*
        }

        impl TypeKind {
            /// Every kind, in declaration order.
            pub const ALL: &'static [TypeKind] = &[$(TypeKind::$variant),*];

            /// The tag as it appears in the `type` field.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(TypeKind::$variant => $tag,)*
                }
            }

            /// The family this kind belongs to.
            pub fn family(&self) -> KindFamily {
                match self {
                    $(TypeKind::$variant => KindFamily::$family,)*
                }
            }
        }

        impl FromStr for TypeKind {
            type Err = UnknownTag;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($tag => Ok(TypeKind::$variant),)*
                    other => Err(UnknownTag(other.to_string())),
                }
            }
        }
    };
}

type_kinds! {
    String => "string", Basic;
    Number => "number", Basic;
    Boolean => "boolean", Basic;
    Literal => "literal", Basic;
    Enum => "enum", Basic;
    Null => "null", Basic;
    Any => "any", Basic;

    Array => "array", Composite;
    Object => "object", Composite;
    Tuple => "tuple", Composite;
    AnyOf => "anyOf", Composite;
    AllOf => "allOf", Composite;
    OneOf => "oneOf", Composite;

    Email => "email", Formatted;
    Uuid => "uuid", Formatted;
    Cuid => "cuid", Formatted;
    Guid => "guid", Formatted;
    Ulid => "ulid", Formatted;
    NanoId => "nanoid", Formatted;
    Url => "url", Formatted;
    Color => "color", Formatted;
    Timezone => "timezone", Formatted;

    Base32 => "base32", Binary;
    Base36 => "base36", Binary;
    Base64 => "base64", Binary;
    Base64Url => "base64url", Binary;
    Hex => "hex", Binary;
    Hash => "hash", Binary;

    Ipv4 => "ipv4", Network;
    Ipv6 => "ipv6", Network;
    CidrV4 => "cidrv4", Network;
    CidrV6 => "cidrv6", Network;
    Mac => "mac", Network;

    Date => "date", Time;
    Time => "time", Time;
    DateTime => "datetime", Time;
    Duration => "duration", Time;

    Ref => "ref", Reference;
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `type` tag outside the closed set of kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTag(pub String);

impl fmt::Display for UnknownTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown type kind '{}'", self.0)
    }
}

impl std::error::Error for UnknownTag {}
