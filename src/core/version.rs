//! HIDL package versions.
//!
//! A version is kept as the pair of digit strings it was written with. The
//! major component is the key an entry files its versions under; the minor
//! component only ever grows as more descriptors are merged.

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

/// A `major.minor` HIDL version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HalVersion {
    major: String,
    minor: String,
}

impl HalVersion {
    /// Create a version from its digit-string components.
    ///
    /// Callers are expected to have validated both components as ASCII digits;
    /// the descriptor parser does this.
    pub fn new(major: impl Into<String>, minor: impl Into<String>) -> Self {
        HalVersion {
            major: major.into(),
            minor: minor.into(),
        }
    }

    /// The major component, as written.
    pub fn major(&self) -> &str {
        &self.major
    }

    /// The minor component, as written.
    pub fn minor(&self) -> &str {
        &self.minor
    }

    /// Whether the minor component is numerically zero.
    pub fn is_minor_zero(&self) -> bool {
        self.minor.bytes().all(|b| b == b'0')
    }

    /// Keep the higher of the two minor versions.
    ///
    /// Both versions must share the same major component. The comparison is
    /// numeric: `1.10` is newer than `1.2`.
    pub fn merge(&mut self, other: &HalVersion) {
        debug_assert_eq!(self.major, other.major, "merging across major versions");

        if compare_digits(&other.minor, &self.minor) == Ordering::Greater {
            tracing::debug!(
                "Raising version {}.{} to {}.{}",
                self.major,
                self.minor,
                other.major,
                other.minor
            );
            self.minor = other.minor.clone();
        }
    }
}

impl fmt::Display for HalVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Compare two ASCII digit strings by numeric value, without a size limit.
fn compare_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');

    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_compares_numerically() {
        let mut version = HalVersion::new("1", "2");
        version.merge(&HalVersion::new("1", "10"));
        assert_eq!(version.minor(), "10");
    }

    #[test]
    fn test_merge_keeps_higher_minor() {
        let mut version = HalVersion::new("2", "10");
        version.merge(&HalVersion::new("2", "9"));
        assert_eq!(version.minor(), "10");

        version.merge(&HalVersion::new("2", "10"));
        assert_eq!(version.minor(), "10");
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(compare_digits("007", "7"), Ordering::Equal);
        assert_eq!(compare_digits("010", "9"), Ordering::Greater);
        assert_eq!(compare_digits("0", "00"), Ordering::Equal);

        assert!(HalVersion::new("1", "00").is_minor_zero());
        assert!(!HalVersion::new("1", "01").is_minor_zero());
    }

    #[test]
    fn test_display() {
        assert_eq!(HalVersion::new("1", "2").to_string(), "1.2");
    }
}
