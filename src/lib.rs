//! fcm-gen - compatibility matrix fragments from HAL instance names
//!
//! This crate turns a list of HIDL and AIDL fully-qualified instance names
//! into merged `<hal>` entries: one per package, with the highest minor
//! version per major version and the union of all instances.

pub mod core;
pub mod fqname;
pub mod ops;
pub mod util;

pub use crate::core::{HalEntry, HalFormat, HalInterface, HalRegistry, HalVersion};
pub use fqname::{parse_fqname, FqName, ParseError};
pub use ops::{build_registry, generate_manifest, GenerateReport};
pub use util::Config;
