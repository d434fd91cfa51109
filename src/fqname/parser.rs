//! Parser for HIDL and AIDL fully-qualified instance names.
//!
//! HIDL: `android.hardware.foo@1.0::IFoo/default`
//! AIDL: `android.hardware.foo.IFoo/default`
//!
//! Anything containing `@` is treated as HIDL. The instance suffix is optional
//! in both grammars and defaults to [`DEFAULT_INSTANCE`].

use std::sync::LazyLock;

use regex::Regex;

use super::{FqName, ParseError};
use crate::core::{HalVersion, DEFAULT_INSTANCE};

/// Trailing ` (@N)` version annotation printed after versioned AIDL names.
static VERSION_ANNOTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" \(@[0-9]+\)$").expect("valid annotation regex"));

/// Remove a trailing ` (@N)` annotation, if any.
pub fn strip_version_annotation(s: &str) -> &str {
    match VERSION_ANNOTATION.find(s) {
        Some(m) => &s[..m.start()],
        None => s,
    }
}

/// Parse one trimmed, non-comment input line.
pub fn parse_fqname(s: &str) -> Result<FqName, ParseError> {
    let s = strip_version_annotation(s);

    if s.contains('@') {
        parse_hidl(s)
    } else {
        parse_aidl(s)
    }
}

fn parse_hidl(s: &str) -> Result<FqName, ParseError> {
    let (head, interface_part) = s
        .rsplit_once("::")
        .ok_or(ParseError::MissingInterfaceSeparator)?;
    let (package, version) = head
        .split_once('@')
        .ok_or(ParseError::MissingVersionSeparator)?;

    let version = parse_version(version)?;
    let (interface, instance) = match interface_part.split_once('/') {
        Some((interface, instance)) => (interface, instance),
        None => (interface_part, DEFAULT_INSTANCE),
    };

    Ok(FqName::Hidl {
        package: non_empty(package, "package name")?,
        version,
        interface: non_empty(interface, "interface name")?,
        instance: non_empty(instance, "instance name")?,
    })
}

fn parse_aidl(s: &str) -> Result<FqName, ParseError> {
    let (package, tail) = s
        .rsplit_once('.')
        .ok_or(ParseError::MissingPackageSeparator)?;

    let (interface, instance) = match tail.split_once('/') {
        Some((_, instance)) if instance.contains('/') => {
            return Err(ParseError::TooManyInstanceSeparators {
                tail: tail.to_string(),
            });
        }
        Some((interface, instance)) => (interface, instance),
        None => (tail, DEFAULT_INSTANCE),
    };

    Ok(FqName::Aidl {
        package: non_empty(package, "package name")?,
        interface: non_empty(interface, "interface name")?,
        instance: non_empty(instance, "instance name")?,
    })
}

/// Parse `major.minor`, both non-empty runs of ASCII digits.
fn parse_version(s: &str) -> Result<HalVersion, ParseError> {
    let invalid = || ParseError::InvalidVersion {
        version: s.to_string(),
    };

    let (major, minor) = s.split_once('.').ok_or_else(invalid)?;
    if !is_digits(major) || !is_digits(minor) {
        return Err(invalid());
    }

    Ok(HalVersion::new(major, minor))
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn non_empty(s: &str, component: &'static str) -> Result<String, ParseError> {
    if s.is_empty() {
        Err(ParseError::EmptyComponent { component })
    } else {
        Ok(s.to_string())
    }
}
