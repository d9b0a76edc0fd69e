/// Overlap metric and ranking score used by [`nms`].
pub trait Nms {
    fn iou(&self, other: &Self) -> f32;
    fn confidence(&self) -> f32;
}

/// Greedy non-maximum suppression, in place.
///
/// Boxes are sorted by descending confidence (stable, so equal confidences
/// keep decode order), then each candidate is kept only if its IoU with
/// every already-kept box stays at or below `iou_threshold`. Suppression is
/// class-agnostic: overlapping boxes of different classes still compete.
/// Idempotent: re-running on its own output changes nothing.
pub fn nms<T: Nms>(boxes: &mut Vec<T>, iou_threshold: f32) {
    boxes.sort_by(|b1, b2| {
        b2.confidence()
            .partial_cmp(&b1.confidence())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    let mut kept = 0;
    for index in 0..boxes.len() {
        let mut drop = false;
        for prev_index in 0..kept {
            let iou = boxes[prev_index].iou(&boxes[index]);
            if iou > iou_threshold {
                drop = true;
                break;
            }
        }
        if !drop {
            boxes.swap(kept, index);
            kept += 1;
        }
    }
    boxes.truncate(kept);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Scored(f32, f32);

    impl Nms for Scored {
        fn iou(&self, other: &Self) -> f32 {
            self.1.max(other.1)
        }

        fn confidence(&self) -> f32 {
            self.0
        }
    }

    #[test]
    fn keeps_highest_confidence_on_overlap() {
        let mut boxes = vec![Scored(0.7, 0.9), Scored(0.9, 0.9)];
        nms(&mut boxes, 0.5);
        assert_eq!(boxes.len(), 1);
        assert_eq!(boxes[0].0, 0.9);
    }

    #[test]
    fn iou_at_threshold_is_not_suppressed() {
        let mut boxes = vec![Scored(0.9, 0.5), Scored(0.7, 0.5)];
        nms(&mut boxes, 0.5);
        assert_eq!(boxes.len(), 2);
    }
}
