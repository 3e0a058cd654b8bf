//! Nested name registry addressed by dotted paths.
//!
//! DESIGN
//! ======
//! A `Namespace` is a tree of named child namespaces plus named entries.
//! `extend("Page.Login")` walks the path and creates whatever is missing, so
//! page code can organize itself into logical groups without a process-wide
//! global. The owner holds the root; nothing is registered implicitly.

#[cfg(test)]
#[path = "namespace_test.rs"]
mod namespace_test;

use std::collections::BTreeMap;

/// Root name stripped from the front of paths (`BV.Page` == `Page`).
pub const DEFAULT_ROOT: &str = "BV";

/// One level of the registry: child namespaces and named entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Namespace<T> {
    name: String,
    children: BTreeMap<String, Namespace<T>>,
    entries: BTreeMap<String, T>,
}

impl<T> Namespace<T> {
    /// Create an empty root namespace named `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), children: BTreeMap::new(), entries: BTreeMap::new() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolve `path`, creating every missing segment, and return the innermost namespace.
    ///
    /// A leading segment equal to this namespace's own name is skipped. Empty
    /// segments (`"Page..Login"`) are ignored.
    pub fn extend(&mut self, path: &str) -> &mut Namespace<T> {
        let mut current = self;
        for part in segments(current.name(), path) {
            current = current
                .children
                .entry(part.to_owned())
                .or_insert_with(|| Namespace::new(part));
        }
        current
    }

    /// Resolve `path` without creating anything.
    pub fn resolve(&self, path: &str) -> Option<&Namespace<T>> {
        let mut current = self;
        for part in segments(self.name(), path) {
            current = current.child(part)?;
        }
        Some(current)
    }

    /// Insert a named entry, returning the one it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: T) -> Option<T> {
        self.entries.insert(key.into(), value)
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.entries.get(key)
    }

    /// Look up `Group.Sub.key`: everything before the last dot is a namespace path.
    pub fn lookup(&self, path: &str) -> Option<&T> {
        match path.rsplit_once('.') {
            Some((ns, key)) => self.resolve(ns)?.get(key),
            None => self.get(path),
        }
    }

    pub fn child(&self, name: &str) -> Option<&Namespace<T>> {
        self.children.get(name)
    }
}

fn segments<'a>(root: &str, path: &'a str) -> Vec<&'a str> {
    let mut parts: Vec<&str> = path.split('.').filter(|p| !p.is_empty()).collect();
    if parts.first().is_some_and(|first| *first == root) {
        parts.remove(0);
    }
    parts
}
