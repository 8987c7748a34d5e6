//! Type registry for named definitions.

use indexmap::IndexMap;
use std::collections::HashSet;

use crate::model::Type;

/// Named type definitions that `ref` nodes resolve against.
///
/// Entries keep registration order; replacing a name keeps its original
/// position. The registry is filled first and then borrowed immutably by a
/// [`Generator`](crate::Generator).
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: IndexMap<String, Type>,
}

impl TypeRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a definition, replacing any previous one with that name.
    pub fn register(&mut self, name: impl Into<String>, ty: Type) {
        let name = name.into();
        let replaced = self.types.insert(name.clone(), ty).is_some();
        tracing::debug!(name = %name, replaced, "Registered type");
    }

    /// Look up a definition. A miss is a normal outcome.
    pub fn resolve(&self, name: &str) -> Option<&Type> {
        self.types.get(name)
    }

    /// Remove every definition.
    pub fn clear(&mut self) {
        tracing::debug!(count = self.types.len(), "Clearing registry");
        self.types.clear();
    }

    /// Copy of every entry in registration order.
    pub fn snapshot(&self) -> Vec<(String, Type)> {
        self.types
            .iter()
            .map(|(name, ty)| (name.clone(), ty.clone()))
            .collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Type)> {
        self.types.iter().map(|(name, ty)| (name.as_str(), ty))
    }

    /// Get the number of registered definitions.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Referenced names with no registered definition, in first-seen order.
    pub fn unresolved(&self) -> Vec<String> {
        let mut missing: Vec<String> = Vec::new();
        for ty in self.types.values() {
            for name in ty.references() {
                if !self.contains(name) && !missing.iter().any(|m| m == name) {
                    missing.push(name.to_string());
                }
            }
        }
        missing
    }

    /// Find a reference cycle and return its path, first name repeated at
    /// the end.
    pub fn detect_cycle(&self) -> Option<Vec<String>> {
        let mut visited = HashSet::new();
        let mut path = Vec::new();

        for name in self.types.keys() {
            if !visited.contains(name.as_str()) {
                if let Some(cycle) = self.find_cycle(name, &mut visited, &mut path) {
                    return Some(cycle);
                }
            }
        }

        None
    }

    fn find_cycle<'a>(
        &'a self,
        name: &'a str,
        visited: &mut HashSet<&'a str>,
        path: &mut Vec<&'a str>,
    ) -> Option<Vec<String>> {
        if let Some(start) = path.iter().position(|n| *n == name) {
            let mut cycle: Vec<String> = path[start..].iter().map(|n| n.to_string()).collect();
            cycle.push(name.to_string());
            return Some(cycle);
        }
        if visited.contains(name) {
            return None;
        }

        path.push(name);
        if let Some(ty) = self.types.get(name) {
            for dep in ty.references() {
                if let Some(cycle) = self.find_cycle(dep, visited, path) {
                    return Some(cycle);
                }
            }
        }
        path.pop();
        visited.insert(name);

        None
    }
}
