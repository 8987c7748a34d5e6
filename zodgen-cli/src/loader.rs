//! Definition loader.
//!
//! A definition file holds either a single definition (a JSON object with a
//! string `type` tag), named after the file stem, or a bundle: an object
//! mapping names to definitions.

use crate::error::LoadError;
use crate::scanner::DefinitionFile;
use serde_json::Value;
use std::path::{Path, PathBuf};
use zodgen::{Type, TypeRegistry};

/// A decoded definition and the file it came from.
#[derive(Debug, Clone)]
pub struct LoadedDefinition {
    /// Registry name.
    pub name: String,

    /// Decoded type.
    pub ty: Type,

    /// Source file.
    pub file: PathBuf,
}

/// Loader for definition files.
#[derive(Debug, Default)]
pub struct DefinitionLoader;

impl DefinitionLoader {
    /// Create a new loader.
    pub fn new() -> Self {
        Self
    }

    /// Load every definition in a scanned file.
    pub fn load_file(&self, file: &DefinitionFile) -> Result<Vec<LoadedDefinition>, LoadError> {
        self.load_source(&file.content, &file.path)
    }

    /// Load definitions from JSON text.
    pub fn load_source(&self, content: &str, path: &Path) -> Result<Vec<LoadedDefinition>, LoadError> {
        let value: Value = serde_json::from_str(content).map_err(|source| LoadError::Json {
            file: path.to_path_buf(),
            source,
        })?;

        let Value::Object(map) = value else {
            return Err(LoadError::NotAnObject {
                file: path.to_path_buf(),
            });
        };

        if map.get("type").is_some_and(Value::is_string) {
            let name = definition_name(path).ok_or_else(|| LoadError::Unnamed {
                file: path.to_path_buf(),
            })?;
            let ty = Type::from_value(Value::Object(map))
                .map_err(|e| LoadError::definition(path.to_path_buf(), &name, e))?;
            return Ok(vec![LoadedDefinition {
                name,
                ty,
                file: path.to_path_buf(),
            }]);
        }

        map.into_iter()
            .map(|(name, definition)| -> Result<LoadedDefinition, LoadError> {
                let ty = Type::from_value(definition)
                    .map_err(|e| LoadError::definition(path.to_path_buf(), &name, e))?;
                Ok(LoadedDefinition {
                    name,
                    ty,
                    file: path.to_path_buf(),
                })
            })
            .collect()
    }

    /// Load multiple files, collecting errors.
    pub fn load_all(&self, files: &[DefinitionFile]) -> (Vec<LoadedDefinition>, Vec<LoadError>) {
        let mut definitions = Vec::new();
        let mut errors = Vec::new();

        for file in files {
            match self.load_file(file) {
                Ok(loaded) => {
                    tracing::debug!(
                        file = %file.relative_path.display(),
                        count = loaded.len(),
                        "Loaded definitions"
                    );
                    definitions.extend(loaded);
                }
                Err(e) => errors.push(e),
            }
        }

        (definitions, errors)
    }
}

/// Register loaded definitions in order. A later definition replaces an
/// earlier one with the same name.
pub fn into_registry(definitions: Vec<LoadedDefinition>) -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    let mut origins: Vec<(String, PathBuf)> = Vec::new();

    for definition in definitions {
        match origins.iter_mut().find(|(name, _)| *name == definition.name) {
            Some((_, origin)) => {
                tracing::warn!(
                    name = %definition.name,
                    first = %origin.display(),
                    second = %definition.file.display(),
                    "Duplicate definition name, keeping the later one"
                );
                *origin = definition.file.clone();
            }
            None => origins.push((definition.name.clone(), definition.file.clone())),
        }
        registry.register(definition.name, definition.ty);
    }

    registry
}

fn definition_name(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(content: &str, path: &str) -> Result<Vec<LoadedDefinition>, LoadError> {
        DefinitionLoader::new().load_source(content, Path::new(path))
    }

    #[test]
    fn test_single_definition_named_after_file() {
        let loaded = load(r#"{ "type": "string", "minLength": 1 }"#, "defs/UserName.json").unwrap();

        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name, "UserName");
        assert_eq!(loaded[0].file, PathBuf::from("defs/UserName.json"));
        assert!(matches!(loaded[0].ty, Type::String(_)));
    }

    #[test]
    fn test_bundle_keeps_declaration_order() {
        let loaded = load(
            r#"{ "Zeta": { "type": "number" }, "Alpha": { "type": "ref", "ref": "Zeta" } }"#,
            "bundle.json",
        )
        .unwrap();

        let names: Vec<_> = loaded.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Zeta", "Alpha"]);
    }

    #[test]
    fn test_bundle_may_define_a_type_named_type() {
        let loaded = load(r#"{ "type": { "type": "boolean" } }"#, "bundle.json").unwrap();
        assert_eq!(loaded[0].name, "type");
        assert_eq!(loaded[0].ty, Type::boolean());
    }

    #[test]
    fn test_invalid_json() {
        let err = load("{ not json", "broken.json").unwrap_err();
        assert!(matches!(err, LoadError::Json { .. }));
        assert_eq!(err.file(), Path::new("broken.json"));
    }

    #[test]
    fn test_top_level_array_is_rejected() {
        let err = load(r#"[{ "type": "string" }]"#, "list.json").unwrap_err();
        assert!(matches!(err, LoadError::NotAnObject { .. }));
    }

    #[test]
    fn test_unknown_kind_names_the_definition() {
        let err = load(r#"{ "Good": { "type": "null" }, "Bad": { "type": "bigint" } }"#, "b.json")
            .unwrap_err();
        match err {
            LoadError::Definition { name, source, .. } => {
                assert_eq!(name, "Bad");
                assert_eq!(source.unknown_tag(), Some("bigint"));
            }
            other => panic!("expected definition error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_all_collects_errors() {
        let files = vec![
            DefinitionFile {
                path: PathBuf::from("a.json"),
                relative_path: PathBuf::from("a.json"),
                content: r#"{ "type": "string" }"#.to_string(),
            },
            DefinitionFile {
                path: PathBuf::from("b.json"),
                relative_path: PathBuf::from("b.json"),
                content: "nope".to_string(),
            },
        ];

        let (definitions, errors) = DefinitionLoader::new().load_all(&files);
        assert_eq!(definitions.len(), 1);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].file(), Path::new("b.json"));
    }

    #[test]
    fn test_into_registry_later_definition_wins() {
        let mut definitions = load(r#"{ "Id": { "type": "string" } }"#, "a.json").unwrap();
        definitions.extend(load(r#"{ "Id": { "type": "number" } }"#, "b.json").unwrap());

        let registry = into_registry(definitions);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.resolve("Id"), Some(&Type::number()));
    }
}
