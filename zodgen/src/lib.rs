//! # zodgen
//!
//! Generate [Zod](https://zod.dev/) validator source code from declarative
//! type definitions.
//!
//! A definition is a JSON-compatible tree tagged by a `type` field. Each node
//! becomes one Zod builder expression; composite nodes embed the expressions
//! of their children, and `ref` nodes either inline a named definition from a
//! [`TypeRegistry`] or become a lazy handle to its schema constant.
//!
//! ## Quick Start
//!
//! ```rust
//! use zodgen::{generate, ObjectType, Type, TypeRegistry};
//!
//! let mut registry = TypeRegistry::new();
//! registry.register("Email", Type::Email(Default::default()));
//!
//! let user = Type::Object(
//!     ObjectType::new()
//!         .with_required("email", Type::reference("Email"))
//!         .with_optional("nickname", Type::string()),
//! );
//!
//! assert_eq!(
//!     generate(&user, &registry),
//!     "z.object({\n  \"email\": z.string().email(),\n  \"nickname\": z.string().optional()\n})"
//! );
//! ```
//!
//! ## Kinds
//!
//! | Family | Kinds |
//! |--------|-------|
//! | Basic | `string`, `number`, `boolean`, `literal`, `enum`, `null`, `any` |
//! | Composite | `array`, `object`, `tuple`, `anyOf`, `allOf`, `oneOf` |
//! | Formatted | `email`, `uuid`, `cuid`, `guid`, `ulid`, `nanoid`, `url`, `color`, `timezone` |
//! | Binary | `base32`, `base36`, `base64`, `base64url`, `hex`, `hash` |
//! | Network | `ipv4`, `ipv6`, `cidrv4`, `cidrv6`, `mac` |
//! | Time | `date`, `time`, `datetime`, `duration` |
//! | Reference | `ref` |
//!
//! ## Dynamic Definitions
//!
//! Definitions loaded at runtime go through [`generate_value`], which rejects
//! unrecognised kind tags with [`GenerateError::UnknownKind`]:
//!
//! ```rust
//! use serde_json::json;
//! use zodgen::{generate_value, TypeRegistry};
//!
//! let registry = TypeRegistry::new();
//! let err = generate_value(&json!({ "type": "bigint" }), &registry).unwrap_err();
//! assert_eq!(err.to_string(), "Unknown type kind: bigint");
//! ```

pub mod driver;
pub mod emit;
pub mod error;
pub mod model;
pub mod refine;
pub mod registry;
pub mod resolver;

pub use driver::{DeferReason, DeferredRef, Generator};
pub use error::{GenerateError, GenerateResult};
pub use model::*;
pub use registry::TypeRegistry;
pub use resolver::{lazy_handle, sanitize_identifier, schema_ident};

/// Generate the Zod expression for a type against a registry.
pub fn generate(ty: &Type, registry: &TypeRegistry) -> String {
    Generator::new(registry).generate(ty)
}

/// Decode and generate a dynamically loaded definition.
pub fn generate_value(value: &serde_json::Value, registry: &TypeRegistry) -> GenerateResult<String> {
    Generator::new(registry).generate_value(value)
}
