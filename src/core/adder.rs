use crate::utils::error::{LookupError, Result};

/// Adds parcel counts.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParcelAdder;

impl ParcelAdder {
    pub fn new() -> Self {
        Self
    }

    pub fn sum(&self, x: i32, y: i32) -> Result<i32> {
        x.checked_add(y).ok_or(LookupError::Overflow { x, y })
    }
}
