use thiserror::Error;

/// Failure taxonomy for the detection pipeline.
///
/// The postprocessor is total over well-shaped input: an all-below-threshold
/// tensor is an empty result, never an error. Contract violations fail fast
/// instead of being folded into "no detections".
#[derive(Debug, Error)]
pub enum DetectError {
    /// The output tensor does not match the `[1, N, 5 + C]` layout implied
    /// by the class table.
    #[error("output tensor shape mismatch: expected {expected}, got {got:?}")]
    ShapeMismatch { expected: String, got: Vec<usize> },

    /// A class table with zero entries can never label a detection.
    #[error("class table is empty")]
    EmptyClassTable,

    /// The inference collaborator failed to produce an output tensor.
    #[error("inference backend failed to produce an output tensor")]
    ModelUnavailable(#[source] anyhow::Error),

    /// A labels file could not be read.
    #[error("failed to read labels file")]
    LabelFile(#[from] std::io::Error),
}
