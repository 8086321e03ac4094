//! Identity type for pipeline steps.
//!
//! `StepId` is a newtype over `u32` that serves as a direct index into
//! `Pipeline::steps`. Steps are append-only, so an id stays valid for the
//! lifetime of the pipeline that issued it.

use std::fmt;

/// Index into `Pipeline::steps`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct StepId(pub u32);

impl StepId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StepId({})", self.0)
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_id() {
        let id = StepId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(format!("{}", id), "StepId(42)");
        assert!(StepId(1) < StepId(2));
    }
}
