//! Configuration for structure-dependent name operations.

/// How operations that depend on a second name token treat names without one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MalformedNamePolicy {
    /// A missing last name degrades to the empty string.
    #[default]
    Lenient,
    /// A missing or empty last name is an error.
    Strict,
}

impl MalformedNamePolicy {
    /// Returns true if malformed names are rejected.
    #[must_use]
    pub fn is_strict(self) -> bool {
        matches!(self, Self::Strict)
    }
}

/// Configuration shared by every structure-dependent operation.
///
/// A single config is applied uniformly, so `initials` and
/// `sort_by_last_name` never disagree about what a malformed name means.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NameConfig {
    /// Treatment of names without a last name.
    pub policy: MalformedNamePolicy,
}

impl NameConfig {
    /// Creates a configuration that degrades malformed names silently.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            policy: MalformedNamePolicy::Lenient,
        }
    }

    /// Creates a configuration that rejects malformed names.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            policy: MalformedNamePolicy::Strict,
        }
    }

    /// Builder method to set the malformed name policy.
    #[must_use]
    pub fn with_policy(mut self, policy: MalformedNamePolicy) -> Self {
        self.policy = policy;
        self
    }
}
