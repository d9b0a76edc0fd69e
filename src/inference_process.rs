use ndarray::{Array, ArrayD, Ix4};

/// The model-execution collaborator.
///
/// Implementations own the model weights and runtime (ONNX session, NPU
/// driver, a canned tensor in tests); this crate only depends on the shape
/// and channel semantics of what they return.
pub trait InferenceBackend {
    /// Runs the model on a `(1, 3, H, W)` normalized input and returns the
    /// raw prediction tensor, shaped `[1, N, 5 + C]`.
    fn infer(&mut self, input: Array<f32, Ix4>) -> anyhow::Result<ArrayD<f32>>;
}
