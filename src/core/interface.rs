//! Interfaces and the instances they are served under.

use serde::Serialize;

/// Instance name used when a descriptor does not name one.
pub const DEFAULT_INSTANCE: &str = "default";

/// One interface type of a HAL together with its instance names.
///
/// Instances keep the order in which they were first seen and never repeat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HalInterface {
    name: String,
    instances: Vec<String>,
}

impl HalInterface {
    /// Create an interface exposing a single instance.
    pub fn new(name: impl Into<String>, instance: impl Into<String>) -> Self {
        HalInterface {
            name: name.into(),
            instances: vec![instance.into()],
        }
    }

    /// Interface type name, e.g. `IFoo`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Instance names in first-seen order.
    pub fn instances(&self) -> &[String] {
        &self.instances
    }

    /// Append every instance of `other` not already present.
    pub fn merge(&mut self, other: &HalInterface) {
        for instance in &other.instances {
            if !self.instances.contains(instance) {
                self.instances.push(instance.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interface(instances: &[&str]) -> HalInterface {
        HalInterface {
            name: "IFoo".to_string(),
            instances: instances.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_merge_unions_in_first_seen_order() {
        let mut iface = interface(&["a", "b"]);
        iface.merge(&interface(&["b", "c"]));
        assert_eq!(iface.instances(), ["a", "b", "c"]);
    }

    #[test]
    fn test_merge_never_reorders_existing() {
        let mut iface = interface(&["b", "a"]);
        iface.merge(&interface(&["c", "a", "d", "b"]));
        assert_eq!(iface.instances(), ["b", "a", "c", "d"]);
    }

    #[test]
    fn test_merge_with_self_is_noop() {
        let mut iface = interface(&["a", "b"]);
        let copy = iface.clone();
        iface.merge(&copy);
        assert_eq!(iface, copy);
    }
}
