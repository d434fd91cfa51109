//! Fully-qualified HAL instance names.
//!
//! A [`FqName`] is one parsed input line. It is either a versioned HIDL name
//! or an unversioned AIDL name; both carry the package, interface and instance.

mod errors;
mod parser;

use std::str::FromStr;

pub use errors::ParseError;
pub use parser::{parse_fqname, strip_version_annotation};

use crate::core::{HalFormat, HalVersion};

/// A parsed fully-qualified instance name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FqName {
    /// `package@major.minor::Interface[/instance]`
    Hidl {
        package: String,
        version: HalVersion,
        interface: String,
        instance: String,
    },
    /// `package.Interface[/instance]`
    Aidl {
        package: String,
        interface: String,
        instance: String,
    },
}

impl FqName {
    pub fn format(&self) -> HalFormat {
        match self {
            FqName::Hidl { .. } => HalFormat::Hidl,
            FqName::Aidl { .. } => HalFormat::Aidl,
        }
    }

    pub fn package(&self) -> &str {
        match self {
            FqName::Hidl { package, .. } | FqName::Aidl { package, .. } => package,
        }
    }

    /// The HIDL version, `None` for AIDL names.
    pub fn version(&self) -> Option<&HalVersion> {
        match self {
            FqName::Hidl { version, .. } => Some(version),
            FqName::Aidl { .. } => None,
        }
    }

    pub fn interface(&self) -> &str {
        match self {
            FqName::Hidl { interface, .. } | FqName::Aidl { interface, .. } => interface,
        }
    }

    pub fn instance(&self) -> &str {
        match self {
            FqName::Hidl { instance, .. } | FqName::Aidl { instance, .. } => instance,
        }
    }
}

impl FromStr for FqName {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_fqname(s)
    }
}
