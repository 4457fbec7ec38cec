use serde::{Deserialize, Serialize};

/// Inclusion rule applied to every decoded pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntensityPredicate {
    GreaterThan(u8),
    AtLeast(u8),
}

impl IntensityPredicate {
    /// Phantom pixels: anything brighter than the black background.
    pub const PHANTOM: Self = IntensityPredicate::GreaterThan(0);
    /// Body pixels: bone tissue starts at 13.
    pub const BODY: Self = IntensityPredicate::AtLeast(13);

    pub fn accepts(&self, value: u8) -> bool {
        match *self {
            IntensityPredicate::GreaterThan(threshold) => value > threshold,
            IntensityPredicate::AtLeast(threshold) => value >= threshold,
        }
    }
}
