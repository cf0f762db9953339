//! Error type for the checked operations.
//!
//! Most operations in this crate never fail: degenerate input (a singular matrix, a zero-length
//! vector) takes a documented fallback path instead. The `try_*` variants and the slice
//! conversions report these conditions as an [`Error`] instead.

/// Errors returned by fallible conversions and the `try_*` operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A slice did not contain the number of elements required by the target type.
    #[error("expected {expected} elements, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    /// The determinant of the matrix is too close to zero for it to be inverted.
    #[error("matrix is singular and cannot be inverted")]
    SingularMatrix,
    /// A vector or quaternion of (near) zero length cannot be normalized.
    #[error("cannot normalize a zero-length value")]
    ZeroLength,
}

pub(crate) fn check_len(expected: usize, actual: usize) -> Result<(), Error> {
    if expected == actual {
        Ok(())
    } else {
        Err(Error::LengthMismatch { expected, actual })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            Error::LengthMismatch {
                expected: 3,
                actual: 2
            }
            .to_string(),
            "expected 3 elements, got 2"
        );
        assert_eq!(
            Error::SingularMatrix.to_string(),
            "matrix is singular and cannot be inverted"
        );
    }

    #[test]
    fn length_check() {
        assert_eq!(check_len(4, 4), Ok(()));
        assert_eq!(
            check_len(4, 16),
            Err(Error::LengthMismatch {
                expected: 4,
                actual: 16
            })
        );
    }
}
