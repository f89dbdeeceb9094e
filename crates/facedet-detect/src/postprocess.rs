use facedet_core::FaceBox;

/// Smallest face side the service will report, in pixels.
pub const MIN_FACE_SIDE: u32 = 20;

/// Drop boxes that are implausibly small or larger than the frame.
///
/// The cascade should never emit an oversized box; the upper bound guards
/// against malformed output all the same.
pub fn filter_faces(faces: Vec<FaceBox>, image_width: u32, image_height: u32) -> Vec<FaceBox> {
    faces
        .into_iter()
        .filter(|f| {
            f.width >= MIN_FACE_SIDE
                && f.height >= MIN_FACE_SIDE
                && f.width <= image_width
                && f.height <= image_height
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxes(dims: &[(u32, u32)]) -> Vec<FaceBox> {
        dims.iter().map(|&(w, h)| FaceBox::new(0, 0, w, h)).collect()
    }

    #[test]
    fn keeps_plausible_boxes() {
        let kept = filter_faces(boxes(&[(40, 50), (20, 20), (640, 480)]), 640, 480);
        assert_eq!(kept.len(), 3);
    }

    #[test]
    fn drops_boxes_under_minimum_side() {
        let kept = filter_faces(boxes(&[(19, 50), (50, 19), (19, 19)]), 640, 480);
        assert!(kept.is_empty());
    }

    #[test]
    fn drops_boxes_exceeding_frame_dimensions() {
        let kept = filter_faces(boxes(&[(641, 100), (100, 481)]), 640, 480);
        assert!(kept.is_empty());
    }

    #[test]
    fn bounds_are_inclusive() {
        // Exactly 20 px and exactly frame-sized boxes survive.
        let kept = filter_faces(boxes(&[(20, 20), (640, 480)]), 640, 480);
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn every_survivor_satisfies_the_invariant() {
        let mixed = boxes(&[(5, 5), (25, 30), (700, 30), (30, 500), (640, 480)]);
        for f in filter_faces(mixed, 640, 480) {
            assert!(f.width >= MIN_FACE_SIDE && f.width <= 640);
            assert!(f.height >= MIN_FACE_SIDE && f.height <= 480);
            assert_eq!(f.score, 1.0);
        }
    }
}
