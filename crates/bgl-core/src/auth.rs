//! Location authorization tiers and platform status.

/// The permission tier an application asks for.
///
/// `Always` is a strict superset of `WhenInUse`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AuthorizationTier {
    WhenInUse,
    Always,
}

impl AuthorizationTier {
    pub fn as_str(self) -> &'static str {
        match self {
            AuthorizationTier::WhenInUse => "when_in_use",
            AuthorizationTier::Always    => "always",
        }
    }
}

impl std::fmt::Display for AuthorizationTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authorization state the platform currently reports.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AuthorizationStatus {
    /// The user has not been asked yet.
    #[default]
    NotDetermined,
    /// Parental controls or device management forbid location access.
    Restricted,
    Denied,
    WhenInUse,
    Always,
}

impl AuthorizationStatus {
    /// Whether this status grants at least `tier`.
    ///
    /// `Always` satisfies both tiers; `WhenInUse` satisfies only `WhenInUse`.
    #[inline]
    pub fn satisfies(self, tier: AuthorizationTier) -> bool {
        match (self, tier) {
            (AuthorizationStatus::Always, _) => true,
            (AuthorizationStatus::WhenInUse, AuthorizationTier::WhenInUse) => true,
            _ => false,
        }
    }

    /// `true` when the platform will not show a prompt again.
    #[inline]
    pub fn is_refused(self) -> bool {
        matches!(self, AuthorizationStatus::Denied | AuthorizationStatus::Restricted)
    }
}

impl From<AuthorizationTier> for AuthorizationStatus {
    fn from(tier: AuthorizationTier) -> Self {
        match tier {
            AuthorizationTier::WhenInUse => AuthorizationStatus::WhenInUse,
            AuthorizationTier::Always    => AuthorizationStatus::Always,
        }
    }
}
