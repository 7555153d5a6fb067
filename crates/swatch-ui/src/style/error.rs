use thiserror::Error;

/// Rejected style updates.
///
/// Every variant leaves the previous configuration (and whatever was built
/// from it) untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StyleError {
    #[error("shape kind {0} is out of range (expected 0..=3)")]
    ShapeOutOfRange(i32),

    #[error("gradient kind {0} is out of range (expected 0..=2)")]
    GradientOutOfRange(i32),

    #[error("press color can only be unlocked on a gradient style; set a start/center/end color or gradient stops first")]
    LockRequiresGradient,

    #[error("attribute `{name}` has malformed value {value:?}")]
    MalformedAttribute { name: String, value: String },
}
