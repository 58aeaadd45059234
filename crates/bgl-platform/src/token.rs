//! Background-execution tokens.

use std::fmt;

use crate::LocationPlatform;

/// Opaque handle for OS-granted background runtime.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BackgroundToken(pub u64);

impl fmt::Display for BackgroundToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bg-task-{}", self.0)
    }
}

/// Holds at most one open [`BackgroundToken`].
///
/// `begin` while a token is open keeps the existing one, so the OS grant is
/// never leaked; `end` on an empty slot is a no-op.
#[derive(Debug, Default)]
pub struct BackgroundTask {
    open: Option<BackgroundToken>,
}

impl BackgroundTask {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a token named `name` unless one is already open.  Returns the
    /// token that is open afterwards.
    pub fn begin<P: LocationPlatform + ?Sized>(&mut self, platform: &mut P, name: &str) -> BackgroundToken {
        if let Some(token) = self.open {
            return token;
        }
        let token = platform.begin_background_execution(name);
        tracing::debug!(%token, name, "background execution begun");
        self.open = Some(token);
        token
    }

    /// Close the open token, if any.  Returns `true` if a token was closed.
    pub fn end<P: LocationPlatform + ?Sized>(&mut self, platform: &mut P) -> bool {
        match self.open.take() {
            Some(token) => {
                platform.end_background_execution(token);
                tracing::debug!(%token, "background execution ended");
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn current(&self) -> Option<BackgroundToken> {
        self.open
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }
}
