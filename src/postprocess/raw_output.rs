use ndarray::{ArrayView2, ArrayView3, ArrayViewD, Axis, Ix3};

use crate::error::DetectError;
use crate::Result;

/// Validated view over a `[1, N, 5 + C]` prediction tensor.
///
/// Each of the `N` anchor rows holds `[cx, cy, w, h, objectness,
/// class_score_0 .. class_score_{C-1}]` with box geometry already in input
/// grid pixels. `N` and `C` are read from the shape rather than hardcoded,
/// so the same postprocessor serves any model with this layout.
#[derive(Debug, Clone, Copy)]
pub struct RawOutput<'a> {
    view: ArrayView3<'a, f32>,
}

impl<'a> RawOutput<'a> {
    pub fn from_view(view: ArrayViewD<'a, f32>, num_classes: usize) -> Result<Self> {
        let expected = format!("[1, N, {}]", 5 + num_classes);
        let got = view.shape().to_vec();

        let view = view
            .into_dimensionality::<Ix3>()
            .map_err(|_| DetectError::ShapeMismatch {
                expected: expected.clone(),
                got: got.clone(),
            })?;

        let (batch, anchors, columns) = view.dim();
        if batch != 1 || anchors == 0 || columns != 5 + num_classes {
            return Err(DetectError::ShapeMismatch { expected, got });
        }

        Ok(Self { view })
    }

    pub fn num_anchors(&self) -> usize {
        self.view.dim().1
    }

    pub fn num_classes(&self) -> usize {
        self.view.dim().2 - 5
    }

    /// The `N x (5 + C)` anchor matrix with the batch axis stripped.
    pub fn anchors(&self) -> ArrayView2<'a, f32> {
        self.view.index_axis_move(Axis(0), 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_is_read_from_the_tensor() {
        let tensor = ndarray::Array3::<f32>::zeros((1, 7, 10)).into_dyn();
        let raw = RawOutput::from_view(tensor.view(), 5).unwrap();
        assert_eq!(raw.num_anchors(), 7);
        assert_eq!(raw.num_classes(), 5);
    }

    #[test]
    fn wrong_column_count_is_rejected() {
        let tensor = ndarray::Array3::<f32>::zeros((1, 7, 9)).into_dyn();
        let err = RawOutput::from_view(tensor.view(), 5).unwrap_err();
        assert!(matches!(err, DetectError::ShapeMismatch { .. }));
    }

    #[test]
    fn wrong_rank_and_batch_are_rejected() {
        let two_d = ndarray::Array2::<f32>::zeros((7, 10)).into_dyn();
        assert!(RawOutput::from_view(two_d.view(), 5).is_err());

        let batched = ndarray::Array3::<f32>::zeros((2, 7, 10)).into_dyn();
        assert!(RawOutput::from_view(batched.view(), 5).is_err());

        let no_anchors = ndarray::Array3::<f32>::zeros((1, 0, 10)).into_dyn();
        assert!(RawOutput::from_view(no_anchors.view(), 5).is_err());
    }
}
