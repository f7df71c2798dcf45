//! Validation scenarios.

use std::fmt;

/// The mode a record is validated and serialized under.
///
/// The scenario is chosen by the operation and passed explicitly to
/// [`ShastaResource::validate`](crate::rest::ShastaResource::validate) and
/// [`ShastaResource::safe_attributes`](crate::rest::ShastaResource::safe_attributes);
/// records do not store it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Scenario {
    /// Update mode: writable attributes, input validation without
    /// create-time requirements.
    #[default]
    Default,
    /// Create mode: writable and create-only attributes, full validation.
    Create,
    /// Hydration from trusted server data: everything assignable, no rules.
    Load,
}

impl Scenario {
    /// Returns the scenario name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Create => "create",
            Self::Load => "load",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_names() {
        assert_eq!(Scenario::Default.to_string(), "default");
        assert_eq!(Scenario::Create.to_string(), "create");
        assert_eq!(Scenario::Load.to_string(), "load");
        assert_eq!(Scenario::default(), Scenario::Default);
    }
}
