//! The set of merged HAL entries for one run.

use indexmap::IndexMap;
use serde::Serialize;

use crate::core::HalEntry;

/// All HAL entries seen so far, keyed by package name.
///
/// Entries iterate in the order their package was first seen. The only way
/// in is [`HalRegistry::upsert`], so every entry filed under a name has gone
/// through [`HalEntry::merge`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct HalRegistry {
    entries: IndexMap<String, HalEntry>,
}

impl HalRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        HalRegistry {
            entries: IndexMap::new(),
        }
    }

    /// Insert `entry`, or merge it into the entry already filed under its name.
    ///
    /// # Panics
    ///
    /// Panics if an entry with the same name but a different format exists.
    pub fn upsert(&mut self, entry: HalEntry) {
        match self.entries.get_mut(entry.name()) {
            Some(existing) => {
                tracing::debug!("Merging into existing entry {}", entry.name());
                existing.merge(entry);
            }
            None => {
                tracing::debug!("New {} entry {}", entry.format(), entry.name());
                self.entries.insert(entry.name().to_string(), entry);
            }
        }
    }

    /// Look up an entry by package name.
    pub fn get(&self, name: &str) -> Option<&HalEntry> {
        self.entries.get(name)
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &HalEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a HalRegistry {
    type Item = &'a HalEntry;
    type IntoIter = indexmap::map::Values<'a, String, HalEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fqname::parse_fqname;

    fn upsert(registry: &mut HalRegistry, s: &str) {
        registry.upsert(HalEntry::from_fqname(parse_fqname(s).unwrap()));
    }

    #[test]
    fn test_upsert_merges_by_name() {
        let mut registry = HalRegistry::new();
        upsert(&mut registry, "android.hardware.foo@1.0::IFoo/default");
        upsert(&mut registry, "android.hardware.foo@1.2::IFoo/default");
        upsert(&mut registry, "android.hardware.foo@1.0::IBar/special");

        assert_eq!(registry.len(), 1);
        let entry = registry.get("android.hardware.foo").unwrap();
        assert_eq!(entry.version("1").unwrap().minor(), "2");
        assert_eq!(entry.interface("IFoo").unwrap().instances(), ["default"]);
        assert_eq!(entry.interface("IBar").unwrap().instances(), ["special"]);
    }

    #[test]
    fn test_iteration_follows_first_seen_order() {
        let mut registry = HalRegistry::new();
        upsert(&mut registry, "vendor.b.IB");
        upsert(&mut registry, "android.hardware.a@1.0::IA");
        upsert(&mut registry, "vendor.b.IB/other");
        upsert(&mut registry, "vendor.c.IC");

        let names: Vec<&str> = registry.iter().map(|e| e.name()).collect();
        assert_eq!(names, ["vendor.b", "android.hardware.a", "vendor.c"]);

        let mut looped = Vec::new();
        for entry in &registry {
            looped.push(entry.name());
        }
        assert_eq!(looped, names);
    }

    #[test]
    #[should_panic(expected = "conflicting HAL formats")]
    fn test_same_name_different_format_is_fatal() {
        let mut registry = HalRegistry::new();
        upsert(&mut registry, "android.hardware.foo@1.0::IFoo");
        upsert(&mut registry, "android.hardware.foo.IFoo");
    }
}
