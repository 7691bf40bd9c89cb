//! PIN gate and session authentication state.
//!
//! A session starts locked. [`unlock`] compares a candidate against the
//! store's singleton pin document and flips the session flag only on an
//! exact match. Every failure mode leaves the session unauthenticated:
//! a wrong value and a missing pin document collapse into the same
//! user-visible outcome, while store read failures get their own message
//! so the user knows retrying may help. There is no lockout or attempt
//! counting.

use tracing::{debug, warn};

use crate::error::Error;
use crate::store::NoteStore;

/// Per-session authentication state.
///
/// Passed explicitly to the components that guard on it; lives exactly as
/// long as the session and is never persisted.
#[derive(Debug, Default)]
pub struct Session {
    authenticated: bool,
}

impl Session {
    /// Create a locked session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether the PIN gate has been passed.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}

/// Outcome of a PIN verification attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// The candidate matched; the session is now authenticated.
    Granted,
    /// The candidate did not match (or no pin document exists).
    InvalidPin,
    /// The pin document could not be read.
    VerifyFailed,
}

impl VerifyOutcome {
    /// Check whether access was granted.
    #[must_use]
    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Granted)
    }

    /// The user-visible message for this outcome.
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Self::Granted => "Unlocked",
            Self::InvalidPin => "Invalid PIN",
            Self::VerifyFailed => "Error verifying PIN",
        }
    }
}

/// Verify a candidate PIN against the store and update the session.
///
/// Only an exact string match authenticates. A missing pin document is
/// indistinguishable from a wrong value at this level; read errors surface
/// separately but equally leave the session locked.
pub async fn unlock(session: &mut Session, store: &dyn NoteStore, candidate: &str) -> VerifyOutcome {
    match store.read_pin().await {
        Ok(pin) if pin == candidate => {
            debug!("PIN accepted");
            session.authenticated = true;
            VerifyOutcome::Granted
        }
        Ok(_) => {
            debug!("PIN rejected");
            VerifyOutcome::InvalidPin
        }
        Err(Error::PinMissing) => {
            debug!("PIN rejected: no pin document");
            VerifyOutcome::InvalidPin
        }
        Err(e) => {
            warn!("Failed to verify PIN: {e}");
            VerifyOutcome::VerifyFailed
        }
    }
}
