use num_traits::{Float, NumCast};

/// Magnitude at or below which an entry counts as zero.
pub const TOLERANCE: f64 = 1e-5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EliminationConfig<T> {
    pub tolerance: T,
}

impl<T: Float> EliminationConfig<T> {
    pub fn new() -> Self {
        EliminationConfig {
            // only fails for a type with no representation of 1e-5
            tolerance: <T as NumCast>::from(TOLERANCE).unwrap_or_else(T::epsilon),
        }
    }

    pub fn with_tolerance(tolerance: T) -> Self {
        EliminationConfig {
            tolerance: tolerance.abs(),
        }
    }

    /// `true` when `value` is too small to be a pivot.
    #[inline(always)]
    pub fn is_negligible(&self, value: T) -> bool {
        !(value.abs() > self.tolerance)
    }
}

impl<T: Float> Default for EliminationConfig<T> {
    fn default() -> Self {
        Self::new()
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
