use thiserror::Error;

/// Error type covering every fatal failure the simulation core can report.
///
/// Local numeric recoveries (Eikonal quadratic discriminant, interpolation
/// out-of-range lookups) are handled in place and never surface here.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A geometric object cannot be constructed or used as requested.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Interpolation table invariants violated (dimension mismatch and the
    /// like). Plain out-of-domain lookups return the fill value instead.
    #[error("out of range: {0}")]
    OutOfRange(String),

    /// A wafer stack ordering rule was broken.
    #[error("wafer stack invariant violated: {0}")]
    WaferStackInvariant(String),

    /// The fast-marching solver could not be set up or run.
    #[error("eikonal solver failed: {0}")]
    EikonalFailure(String),

    /// Inconsistent caller-supplied arguments (inverted limits, zero-length
    /// transforms, mismatched buffers).
    #[error("argument mismatch: {0}")]
    ArgumentMismatch(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::ArgumentMismatch("stepx must be positive".into());
        assert!(err.to_string().contains("argument mismatch"));
        assert!(err.to_string().contains("stepx"));
    }
}
