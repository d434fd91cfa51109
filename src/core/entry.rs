//! Merged HAL entries.
//!
//! An entry collects everything the input says about one package: each
//! major version it is required at and each interface with its instances.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use crate::core::{HalInterface, HalVersion};
use crate::fqname::FqName;

/// The interface definition language a HAL is described in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HalFormat {
    /// Versioned `package@major.minor::IFoo/instance` descriptors.
    Hidl,
    /// Unversioned `package.IFoo/instance` descriptors.
    Aidl,
}

impl HalFormat {
    /// Lowercase name used in the `format` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            HalFormat::Hidl => "hidl",
            HalFormat::Aidl => "aidl",
        }
    }
}

impl fmt::Display for HalFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything known about one HAL package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HalEntry {
    name: String,
    format: HalFormat,
    /// Keyed by major version, in first-seen order. Always empty for AIDL.
    versions: IndexMap<String, HalVersion>,
    /// Keyed by interface name, in first-seen order.
    interfaces: IndexMap<String, HalInterface>,
}

impl HalEntry {
    /// Create an entry holding exactly what one descriptor names.
    pub fn from_fqname(fqname: FqName) -> Self {
        let format = fqname.format();

        match fqname {
            FqName::Hidl {
                package,
                version,
                interface,
                instance,
            } => {
                let mut entry = HalEntry::empty(package, format);
                entry.versions.insert(version.major().to_string(), version);
                entry.insert_interface(HalInterface::new(interface, instance));
                entry
            }
            FqName::Aidl {
                package,
                interface,
                instance,
            } => {
                let mut entry = HalEntry::empty(package, format);
                entry.insert_interface(HalInterface::new(interface, instance));
                entry
            }
        }
    }

    fn empty(name: String, format: HalFormat) -> Self {
        HalEntry {
            name,
            format,
            versions: IndexMap::new(),
            interfaces: IndexMap::new(),
        }
    }

    fn insert_interface(&mut self, interface: HalInterface) {
        self.interfaces
            .insert(interface.name().to_string(), interface);
    }

    /// Package name, e.g. `android.hardware.foo`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn format(&self) -> HalFormat {
        self.format
    }

    /// Versions in first-seen order of their major component.
    pub fn versions(&self) -> impl Iterator<Item = &HalVersion> {
        self.versions.values()
    }

    /// Interfaces in first-seen order.
    pub fn interfaces(&self) -> impl Iterator<Item = &HalInterface> {
        self.interfaces.values()
    }

    /// Look up a version by its major component.
    pub fn version(&self, major: &str) -> Option<&HalVersion> {
        self.versions.get(major)
    }

    /// Look up an interface by name.
    pub fn interface(&self, name: &str) -> Option<&HalInterface> {
        self.interfaces.get(name)
    }

    /// Fold `other` into this entry.
    ///
    /// # Panics
    ///
    /// Panics if `other` describes a different package or a different HAL
    /// format. Callers only merge entries filed under the same name, so either
    /// case is a broken invariant rather than bad input.
    pub fn merge(&mut self, other: HalEntry) {
        assert_eq!(
            self.name, other.name,
            "cannot merge entries for different packages"
        );
        assert_eq!(
            self.format, other.format,
            "conflicting HAL formats for package `{}`",
            self.name
        );

        for (major, version) in other.versions {
            match self.versions.get_mut(&major) {
                Some(existing) => existing.merge(&version),
                None => {
                    self.versions.insert(major, version);
                }
            }
        }

        for (name, interface) in other.interfaces {
            match self.interfaces.get_mut(&name) {
                Some(existing) => existing.merge(&interface),
                None => {
                    self.interfaces.insert(name, interface);
                }
            }
        }
    }
}
