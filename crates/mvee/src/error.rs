//! Error types surfaced by the MVEE pipeline.
//!
//! - `LinalgError` is internal to the primitives in `linalg`.
//! - `MveeError` is what crosses the public boundary. Singularity is always
//!   reclassified as `Degenerate(Degeneracy::Singular)` before it gets there.

use thiserror::Error;

/// Failures of the small dense primitives.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum LinalgError {
    /// Operand dimensions do not fit the operation (programming defect).
    #[error("{op}: incompatible shapes {left:?} and {right:?}")]
    Shape {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },
    /// LU reported a zero/near-zero pivot or a non-finite inverse.
    #[error("matrix is numerically singular")]
    Singular,
}

/// Why a point configuration cannot support a full-dimensional hull or ellipse.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum Degeneracy {
    #[error("need at least {need} distinct points, got {got}")]
    TooFewPoints { got: usize, need: usize },
    #[error("points are collinear (hull has {vertices} vertices)")]
    Collinear { vertices: usize },
    #[error("point {index} has a non-finite coordinate")]
    NonFinite { index: usize },
    #[error("moment matrix is numerically singular")]
    Singular,
    #[error("step size undefined for maximum leverage {max}")]
    StepSize { max: f64 },
    #[error("shape matrix is not positive definite (eigenvalue {eigenvalue})")]
    NotPositiveDefinite { eigenvalue: f64 },
}

/// Errors visible to callers of the hull/solver/extractor API.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum MveeError {
    /// Mismatched dimensions between components; indicates a caller bug.
    #[error("shape error: {0}")]
    Shape(String),
    /// Input cannot support a full-dimensional hull or ellipse. Recoverable:
    /// report and skip drawing.
    #[error("degenerate input: {0}")]
    Degenerate(#[from] Degeneracy),
    /// A configuration value is outside its documented range.
    #[error("invalid configuration: {field} = {value}")]
    InvalidConfig { field: &'static str, value: f64 },
}

impl MveeError {
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        matches!(self, MveeError::Degenerate(_))
    }
}

impl From<LinalgError> for MveeError {
    fn from(e: LinalgError) -> Self {
        match e {
            LinalgError::Singular => MveeError::Degenerate(Degeneracy::Singular),
            shape @ LinalgError::Shape { .. } => MveeError::Shape(shape.to_string()),
        }
    }
}
