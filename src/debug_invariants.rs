//! Opt-in invariant checking for mesh structures.
//!
//! Editors call [`debug_invariants!`](crate::debug_invariants) after each
//! successful mutation. The check compiles away unless the build has
//! `debug_assertions` or one of the `strict-invariants` /
//! `check-invariants` features.

use crate::mesh_error::MeshLiteError;

/// Structures whose internal consistency can be verified on demand.
pub trait DebugInvariants {
    /// Validate invariants and return the first violation found.
    fn validate_invariants(&self) -> Result<(), MeshLiteError>;

    /// Panic on the first violation when invariant checking is enabled.
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "debug_assert_invariants");
    }

    /// Cheap yes/no form of [`validate_invariants`](Self::validate_invariants).
    fn is_consistent(&self) -> bool {
        self.validate_invariants().is_ok()
    }
}

/// Run a fallible check and panic with an `[invariants]` message on error
/// when invariant checking is enabled.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}
