//! Object identity for Strata Switch.
//!
//! The host toolkit owns widget trees and lifetimes; this module only mints
//! the stable identifiers widgets use to tag their timers and log events.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// A unique identifier for a toolkit object.
///
/// Ids are process-unique and never reused. They are handed out at widget
/// construction time and remain valid for the widget's lifetime.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u64);

impl ObjectId {
    /// Allocate the next object id.
    pub fn allocate() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw numeric value, for logging and diagnostics.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({})", self.0)
    }
}

/// Base trait for identifiable toolkit objects.
///
/// Every widget implements this by delegating to its widget base.
pub trait Object {
    /// The unique id of this object.
    fn object_id(&self) -> ObjectId;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let a = ObjectId::allocate();
        let b = ObjectId::allocate();
        assert_ne!(a, b);
        assert!(b.as_u64() > a.as_u64());
    }

    #[test]
    fn test_debug_format() {
        let id = ObjectId::allocate();
        assert_eq!(format!("{:?}", id), format!("ObjectId({})", id.as_u64()));
    }
}
