//! Structural self-checks for mesh containers.

use crate::mesh_error::MeshError;

/// Trait for validating data structure invariants.
pub trait DebugInvariants {
    /// Validate invariants and return the first error encountered.
    fn validate_invariants(&self) -> Result<(), MeshError>;

    /// Panic with the first violated invariant. Compiled to a no-op unless
    /// debug assertions or one of the invariant features are enabled.
    #[inline]
    fn debug_assert_invariants(&self) {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(e) = self.validate_invariants() {
            panic!("[invariants] {e}");
        }
    }
}

/// Audit `$mesh` after a mutation, naming the operation in the panic message.
#[macro_export]
macro_rules! debug_invariants {
    ($mesh:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(e) = {
            use $crate::debug_invariants::DebugInvariants as _;
            $mesh.validate_invariants()
        } {
            panic!(concat!("[invariants] after ", $($ctx)*, ": {}"), e);
        }
    };
}
