//! Module generator.
//!
//! Turns a populated [`TypeRegistry`] into a TypeScript module with one
//! exported schema constant per registered name, in registration order.

use crate::config::Config;
use crate::error::{CliError, CliResult};
use std::collections::HashMap;
use zodgen::{sanitize_identifier, schema_ident, DeferredRef, Generator, TypeRegistry};

/// Header written at the top of generated modules.
pub const HEADER: &str = "// Auto-generated by zodgen\n// Do not edit manually\n\n";

/// Import line for the Zod runtime.
pub const ZOD_IMPORT: &str = "import { z } from 'zod';\n";

/// Generated output containing all schemas.
#[derive(Debug, Clone)]
pub struct GeneratedOutput {
    /// Complete TypeScript content.
    pub content: String,

    /// Individual generated schemas.
    pub schemas: Vec<GeneratedSchema>,

    /// Referenced names with no definition. Their lazy handles point at
    /// constants the module does not export.
    pub unresolved: Vec<String>,

    /// Every reference emitted as a lazy handle.
    pub deferred: Vec<DeferredRef>,
}

/// A single generated schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSchema {
    /// Registry name.
    pub name: String,

    /// Schema constant name (e.g., "UserSchema").
    pub schema_name: String,

    /// TypeScript type name.
    pub type_name: String,
}

/// Generator for complete TypeScript modules.
pub struct ModuleGenerator {
    config: Config,
}

impl ModuleGenerator {
    /// Create a new module generator with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Generate the module for every definition in `registry`.
    ///
    /// Fails if two names sanitize to the same schema identifier.
    pub fn generate(&self, registry: &TypeRegistry) -> CliResult<GeneratedOutput> {
        let mut generator = Generator::new(registry);
        let mut content = String::new();
        let mut schemas = Vec::with_capacity(registry.len());
        let mut emitted: HashMap<String, &str> = HashMap::with_capacity(registry.len());

        if self.config.output.header {
            content.push_str(HEADER);
        }
        content.push_str(ZOD_IMPORT);

        for name in registry.names() {
            let schema_name = schema_ident(name);
            if let Some(first) = emitted.insert(schema_name.clone(), name) {
                return Err(CliError::duplicate_identifier(schema_name, first, name));
            }

            let Some(expression) = generator.generate_named(name) else {
                continue;
            };
            let schema = GeneratedSchema {
                name: name.to_string(),
                schema_name,
                type_name: sanitize_identifier(name),
            };

            content.push('\n');
            content.push_str(&format!(
                "export const {} = {};\n",
                schema.schema_name, expression
            ));
            if self.config.output.generate_types {
                content.push_str(&format!(
                    "export type {} = z.infer<typeof {}>;\n",
                    schema.type_name, schema.schema_name
                ));
            }

            schemas.push(schema);
        }

        if let Some(cycle) = registry.detect_cycle() {
            tracing::debug!(cycle = %cycle.join(" -> "), "Recursive definitions use lazy handles");
        }

        let unresolved = registry.unresolved();
        for name in &unresolved {
            tracing::warn!(name = %name, "Reference to an undefined type");
        }

        Ok(GeneratedOutput {
            content,
            schemas,
            unresolved,
            deferred: generator.deferred().to_vec(),
        })
    }
}
