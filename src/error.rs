use thiserror::Error;

/// The single failure kind of a remapping operation.
///
/// Numeric edge cases (division by zero at the poles, `asin` overflow, points
/// exactly on the ellipse) are absorbed by [`crate::proj::border`] and never
/// surface here.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WarpError {
    #[error("Computation failure: {0}")]
    ComputationFailure(String),
}

impl WarpError {
    pub fn computation(msg: impl Into<String>) -> Self {
        Self::ComputationFailure(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = WarpError::computation("pixel (3, 4) unreadable");
        assert_eq!(
            err.to_string(),
            "Computation failure: pixel (3, 4) unreadable"
        );
    }
}
