//! Reference resolution.
//!
//! A `ref` node whose name is registered is replaced by the full expression
//! of the registered definition. Anything else becomes a lazy handle,
//! `z.lazy(() => <Name>Schema)`, that binds to a schema constant declared
//! elsewhere in the generated module.

use crate::driver::{DeferReason, DeferredRef, Generator};
use crate::model::Reference;

/// Make a reference name usable as a JavaScript identifier by replacing
/// every character outside `[A-Za-z0-9_$]` with `_`.
pub fn sanitize_identifier(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '$' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Name of the schema constant generated for a definition.
pub fn schema_ident(name: &str) -> String {
    format!("{}Schema", sanitize_identifier(name))
}

/// Deferred handle to a schema constant.
pub fn lazy_handle(name: &str) -> String {
    format!("z.lazy(() => {})", schema_ident(name))
}

impl Generator<'_> {
    pub(crate) fn resolve_reference(&mut self, reference: &Reference) -> String {
        let name = reference.name.as_str();

        if self.inlining.iter().any(|n| n == name) {
            tracing::debug!(name, "Reference cycle, emitting lazy handle");
            return self.defer(name, DeferReason::Cycle);
        }

        let registry = self.registry;
        match registry.resolve(name) {
            Some(ty) => {
                self.inlining.push(name.to_string());
                let schema = self.generate(ty);
                self.inlining.pop();
                schema
            }
            None => {
                tracing::debug!(name, "Unregistered reference, emitting lazy handle");
                self.defer(name, DeferReason::Unregistered)
            }
        }
    }

    fn defer(&mut self, name: &str, reason: DeferReason) -> String {
        let seen = self
            .deferred
            .iter()
            .any(|d| d.name == name && d.reason == reason);
        if !seen {
            self.deferred.push(DeferredRef {
                name: name.to_string(),
                reason,
            });
        }
        lazy_handle(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ObjectType, Type};
    use crate::registry::TypeRegistry;

    #[test]
    fn test_sanitize_identifier() {
        assert_eq!(sanitize_identifier("Foo!Bar"), "Foo_Bar");
        assert_eq!(sanitize_identifier("$ok_Name9"), "$ok_Name9");
        assert_eq!(sanitize_identifier("#/types/User"), "__types_User");
        assert_eq!(sanitize_identifier("naïve"), "na_ve");
    }

    #[test]
    fn test_registered_reference_is_inlined() {
        let mut registry = TypeRegistry::new();
        registry.register("Email", Type::string());
        let mut generator = Generator::new(&registry);

        assert_eq!(generator.generate(&Type::reference("Email")), "z.string()");
        assert!(generator.deferred().is_empty());
    }

    #[test]
    fn test_unregistered_reference_is_lazy() {
        let registry = TypeRegistry::new();
        let mut generator = Generator::new(&registry);
        assert_eq!(
            generator.generate(&Type::reference("Foo!Bar")),
            "z.lazy(() => Foo_BarSchema)"
        );
    }

    #[test]
    fn test_self_reference_terminates() {
        let mut registry = TypeRegistry::new();
        registry.register(
            "Tree",
            Type::Object(
                ObjectType::new()
                    .with_required("value", Type::number())
                    .with_required("children", Type::array(Type::reference("Tree"))),
            ),
        );
        let mut generator = Generator::new(&registry);

        let named = generator.generate_named("Tree").unwrap();
        assert!(named.contains("\"children\": z.array(z.lazy(() => TreeSchema))"));

        // Entering through a reference marks the name the same way.
        let inlined = generator.generate(&Type::reference("Tree"));
        assert_eq!(inlined, named);
    }

    #[test]
    fn test_mutual_references_terminate() {
        let mut registry = TypeRegistry::new();
        registry.register(
            "A",
            Type::Object(ObjectType::new().with_optional("b", Type::reference("B"))),
        );
        registry.register(
            "B",
            Type::Object(ObjectType::new().with_optional("a", Type::reference("A"))),
        );
        let mut generator = Generator::new(&registry);

        let a = generator.generate_named("A").unwrap();
        assert_eq!(
            a,
            "z.object({\n  \"b\": z.object({\n  \"a\": z.lazy(() => ASchema).optional()\n}).optional()\n})"
        );
    }
}
