//! Dispatch driver.
//!
//! [`Generator`] walks a type graph and hands every node to the emitter for
//! its kind. Composite emitters call back into the generator for their
//! children; `ref` nodes go through the resolver.

use serde_json::Value;

use crate::emit::{basic, binary, composite, formatted, network, time, Emit};
use crate::error::GenerateResult;
use crate::model::Type;
use crate::registry::TypeRegistry;

/// Why a reference became a lazy handle instead of an inline expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferReason {
    /// No definition is registered under the name.
    Unregistered,
    /// The name was already being inlined further up.
    Cycle,
}

/// A reference emitted as `z.lazy(() => <Name>Schema)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeferredRef {
    pub name: String,
    pub reason: DeferReason,
}

/// Generation context bound to a registry.
///
/// The registry is borrowed for the generator's lifetime, so it cannot be
/// mutated while code is being generated.
#[derive(Debug)]
pub struct Generator<'r> {
    pub(crate) registry: &'r TypeRegistry,
    /// Names currently being inlined, outermost first.
    pub(crate) inlining: Vec<String>,
    pub(crate) deferred: Vec<DeferredRef>,
}

impl<'r> Generator<'r> {
    pub fn new(registry: &'r TypeRegistry) -> Self {
        Self {
            registry,
            inlining: Vec::new(),
            deferred: Vec::new(),
        }
    }

    pub fn registry(&self) -> &'r TypeRegistry {
        self.registry
    }

    /// Generate the Zod expression for a type.
    ///
    /// The output depends only on the type and the registry contents: the
    /// same input always yields the same text, and identical subtrees are
    /// generated again wherever they occur.
    pub fn generate(&mut self, ty: &Type) -> String {
        let kind = ty.kind();
        tracing::trace!(kind = %kind, family = ?kind.family(), "Generating");

        match ty {
            // Basic
            Type::String(t) => basic::string(t),
            Type::Number(t) => basic::number(t),
            Type::Boolean(t) => basic::boolean(t),
            Type::Literal(t) => basic::literal(t),
            Type::Enum(t) => basic::enumeration(t),
            Type::Null(t) => basic::null(t),
            Type::Any(t) => basic::any(t),

            // Composite
            Type::Array(t) => composite::array(t, self),
            Type::Object(t) => composite::object(t, self),
            Type::Tuple(t) => composite::tuple(t, self),
            Type::AnyOf(t) => composite::any_of(t, self),
            Type::AllOf(t) => composite::all_of(t, self),
            Type::OneOf(t) => composite::one_of(t, self),

            // Formatted
            Type::Email(t) => formatted::email(t),
            Type::Uuid(t) => formatted::uuid(t),
            Type::Cuid(t) => formatted::cuid(t),
            Type::Guid(t) => formatted::guid(t),
            Type::Ulid(t) => formatted::ulid(t),
            Type::NanoId(t) => formatted::nanoid(t),
            Type::Url(t) => formatted::url(t),
            Type::Color(t) => formatted::color(t),
            Type::Timezone(t) => formatted::timezone(t),

            // Binary
            Type::Base32(t) => binary::base32(t),
            Type::Base36(t) => binary::base36(t),
            Type::Base64(t) => binary::base64(t),
            Type::Base64Url(t) => binary::base64url(t),
            Type::Hex(t) => binary::hex(t),
            Type::Hash(t) => binary::hash(t),

            // Network
            Type::Ipv4(t) => network::ipv4(t),
            Type::Ipv6(t) => network::ipv6(t),
            Type::CidrV4(t) => network::cidrv4(t),
            Type::CidrV6(t) => network::cidrv6(t),
            Type::Mac(t) => network::mac(t),

            // Time
            Type::Date(t) => time::date(t),
            Type::Time(t) => time::time(t),
            Type::DateTime(t) => time::datetime(t),
            Type::Duration(t) => time::duration(t),

            // Reference
            Type::Ref(r) => self.resolve_reference(r),
        }
    }

    /// Decode a dynamically loaded definition and generate it.
    ///
    /// Fails with [`GenerateError::UnknownKind`](crate::GenerateError::UnknownKind)
    /// when any node carries an unrecognised tag.
    pub fn generate_value(&mut self, value: &Value) -> GenerateResult<String> {
        let ty = Type::from_value(value.clone())?;
        Ok(self.generate(&ty))
    }

    /// Generate a registered definition with its own name marked as in
    /// progress, so self-references become lazy handles.
    ///
    /// Returns `None` when nothing is registered under `name`.
    pub fn generate_named(&mut self, name: &str) -> Option<String> {
        let registry = self.registry;
        let ty = registry.resolve(name)?;

        self.inlining.push(name.to_string());
        let schema = self.generate(ty);
        self.inlining.pop();

        Some(schema)
    }

    /// Lazy handles emitted so far, without duplicates.
    pub fn deferred(&self) -> &[DeferredRef] {
        &self.deferred
    }
}

impl Emit for Generator<'_> {
    fn emit(&mut self, ty: &Type) -> String {
        self.generate(ty)
    }
}
