use crate::backend::DetectorOutput;
use ipc::Detection;
use ndarray::ArrayViewD;

/// Letterbox map computed by the preprocessor for one frame, used here to
/// bring detector coordinates back into original-image pixels.
pub struct TransformParams {
    pub orig_width: u32,
    pub orig_height: u32,
    pub input_width: u32,
    pub input_height: u32,
    pub scale: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

pub struct Postprocessor {
    pub confidence_threshold: f32,
}

impl Postprocessor {
    pub fn new(confidence_threshold: f32) -> Self {
        Self {
            confidence_threshold,
        }
    }

    /// Filter raw detector output by confidence and map every surviving box
    /// into original-image pixel space.
    ///
    /// Engine output order is preserved and no NMS is applied; the engines
    /// emit already-suppressed detections.
    pub fn parse_detections(
        &self,
        output: &DetectorOutput,
        transform: &TransformParams,
    ) -> Vec<Detection> {
        match output {
            DetectorOutput::Decoded {
                labels,
                boxes,
                scores,
            } => self.parse_decoded(labels.view(), boxes.view(), scores.view(), transform),
            DetectorOutput::Queries { boxes, logits } => {
                self.parse_queries(boxes.view(), logits.view(), transform)
            }
        }
    }

    /// Decode-head output: boxes arrive as xyxy in letterbox pixels with
    /// ready-made scores and class ids.
    fn parse_decoded(
        &self,
        labels: ArrayViewD<i64>,
        boxes: ArrayViewD<f32>,
        scores: ArrayViewD<f32>,
        transform: &TransformParams,
    ) -> Vec<Detection> {
        let num_detections = labels.shape()[1];
        let mut detections = Vec::new();

        for i in 0..num_detections {
            let confidence = scores[[0, i]];
            if confidence < self.confidence_threshold {
                continue;
            }

            let (x1, y1, x2, y2) = invert_letterbox(
                boxes[[0, i, 0]],
                boxes[[0, i, 1]],
                boxes[[0, i, 2]],
                boxes[[0, i, 3]],
                transform,
            );

            detections.push(Detection {
                x1,
                y1,
                x2,
                y2,
                confidence,
                class_id: labels[[0, i]] as u32,
            });
        }

        detections
    }

    /// Raw query-head output: per-query cxcywh boxes normalized to [0, 1]
    /// plus class logits. Class 0 is background; surviving classes are
    /// reported 0-indexed.
    fn parse_queries(
        &self,
        boxes: ArrayViewD<f32>,
        logits: ArrayViewD<f32>,
        transform: &TransformParams,
    ) -> Vec<Detection> {
        let num_queries = boxes.shape()[1];
        let num_classes = logits.shape()[2];
        let mut detections = Vec::new();

        for i in 0..num_queries {
            let mut best_logit = f32::NEG_INFINITY;
            let mut best_class = 1usize;
            for c in 1..num_classes {
                let logit = logits[[0, i, c]];
                if logit > best_logit {
                    best_logit = logit;
                    best_class = c;
                }
            }

            let confidence = sigmoid(best_logit);
            if confidence < self.confidence_threshold {
                continue;
            }

            let (x1_norm, y1_norm, x2_norm, y2_norm) = cxcywh_to_xyxy(
                boxes[[0, i, 0]],
                boxes[[0, i, 1]],
                boxes[[0, i, 2]],
                boxes[[0, i, 3]],
            );

            let (x1, y1, x2, y2) = invert_letterbox(
                x1_norm * transform.input_width as f32,
                y1_norm * transform.input_height as f32,
                x2_norm * transform.input_width as f32,
                y2_norm * transform.input_height as f32,
                transform,
            );

            detections.push(Detection {
                x1,
                y1,
                x2,
                y2,
                confidence,
                class_id: (best_class - 1) as u32,
            });
        }

        detections
    }
}

/// Undo the letterbox for one box and clamp it into the image bounds.
fn invert_letterbox(
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
    transform: &TransformParams,
) -> (f32, f32, f32, f32) {
    let to_x = |v: f32| ((v - transform.offset_x) / transform.scale)
        .clamp(0.0, transform.orig_width as f32);
    let to_y = |v: f32| ((v - transform.offset_y) / transform.scale)
        .clamp(0.0, transform.orig_height as f32);

    (to_x(x1), to_y(y1), to_x(x2), to_y(y2))
}

#[inline]
fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

#[inline]
fn cxcywh_to_xyxy(cx: f32, cy: f32, w: f32, h: f32) -> (f32, f32, f32, f32) {
    let x1 = cx - w / 2.0;
    let y1 = cy - h / 2.0;
    let x2 = cx + w / 2.0;
    let y2 = cy + h / 2.0;
    (x1, y1, x2, y2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array, IxDyn};

    fn decoded_output(entries: &[([f32; 4], f32, i64)]) -> DetectorOutput {
        let n = entries.len();
        let mut boxes_data = Vec::with_capacity(n * 4);
        let mut scores_data = Vec::with_capacity(n);
        let mut labels_data = Vec::with_capacity(n);
        for (coords, score, label) in entries {
            boxes_data.extend_from_slice(coords);
            scores_data.push(*score);
            labels_data.push(*label);
        }
        DetectorOutput::Decoded {
            labels: Array::from_shape_vec(IxDyn(&[1, n]), labels_data).unwrap(),
            boxes: Array::from_shape_vec(IxDyn(&[1, n, 4]), boxes_data).unwrap(),
            scores: Array::from_shape_vec(IxDyn(&[1, n]), scores_data).unwrap(),
        }
    }

    /// Queries output with one hot logit per query (1-indexed class).
    fn queries_output(
        boxes_cxcywh: &[[f32; 4]],
        class_logits: &[(usize, f32)],
        num_classes: usize,
    ) -> DetectorOutput {
        let n = boxes_cxcywh.len();
        let mut boxes_data = Vec::with_capacity(n * 4);
        for coords in boxes_cxcywh {
            boxes_data.extend_from_slice(coords);
        }

        let mut logits_data = vec![-10.0f32; n * num_classes];
        for (i, (class_idx, logit)) in class_logits.iter().enumerate() {
            logits_data[i * num_classes + class_idx] = *logit;
        }

        DetectorOutput::Queries {
            boxes: Array::from_shape_vec(IxDyn(&[1, n, 4]), boxes_data).unwrap(),
            logits: Array::from_shape_vec(IxDyn(&[1, n, num_classes]), logits_data).unwrap(),
        }
    }

    fn identity_transform(size: u32) -> TransformParams {
        TransformParams {
            orig_width: size,
            orig_height: size,
            input_width: size,
            input_height: size,
            scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }

    #[test]
    fn test_sigmoid() {
        assert!((sigmoid(0.0) - 0.5).abs() < 1e-6);
        assert!(sigmoid(10.0) > 0.99);
        assert!(sigmoid(-10.0) < 0.01);
    }

    #[test]
    fn test_cxcywh_to_xyxy() {
        let (x1, y1, x2, y2) = cxcywh_to_xyxy(0.5, 0.5, 0.4, 0.2);
        assert!((x1 - 0.3).abs() < 1e-6);
        assert!((y1 - 0.4).abs() < 1e-6);
        assert!((x2 - 0.7).abs() < 1e-6);
        assert!((y2 - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_decoded_confidence_filter() {
        let output = decoded_output(&[
            ([10.0, 10.0, 50.0, 50.0], 0.3, 1),
            ([20.0, 20.0, 60.0, 60.0], 0.5, 2),
            ([30.0, 30.0, 70.0, 70.0], 0.9, 3),
        ]);

        let post = Postprocessor::new(0.5);
        let detections = post.parse_detections(&output, &identity_transform(640));

        // Threshold is inclusive: 0.5 stays, 0.3 goes
        assert_eq!(detections.len(), 2);
        assert_eq!(detections[0].class_id, 2);
        assert_eq!(detections[1].class_id, 3);
    }

    #[test]
    fn test_decoded_inverse_letterbox_full_hd() {
        // 1920x1080 into 640x640: scale = 1/3, offset_y = 140.
        // The full content region maps back to the full image.
        let output = decoded_output(&[([0.0, 140.0, 640.0, 500.0], 0.9, 0)]);

        let post = Postprocessor::new(0.5);
        let transform = TransformParams {
            orig_width: 1920,
            orig_height: 1080,
            input_width: 640,
            input_height: 640,
            scale: 640.0 / 1920.0,
            offset_x: 0.0,
            offset_y: 140.0,
        };
        let detections = post.parse_detections(&output, &transform);

        assert_eq!(detections.len(), 1);
        let det = &detections[0];
        assert!(det.x1.abs() < 0.1);
        assert!(det.y1.abs() < 0.1);
        assert!((det.x2 - 1920.0).abs() < 0.1);
        assert!((det.y2 - 1080.0).abs() < 0.1);
    }

    #[test]
    fn test_decoded_box_in_padding_clamps_to_image_bounds() {
        // Entirely above the content region (y < 140) and entirely below it
        let output = decoded_output(&[
            ([100.0, 20.0, 200.0, 100.0], 0.9, 0),
            ([100.0, 520.0, 200.0, 630.0], 0.9, 1),
        ]);

        let post = Postprocessor::new(0.5);
        let transform = TransformParams {
            orig_width: 1920,
            orig_height: 1080,
            input_width: 640,
            input_height: 640,
            scale: 640.0 / 1920.0,
            offset_x: 0.0,
            offset_y: 140.0,
        };
        let detections = post.parse_detections(&output, &transform);

        // Both are still emitted, clamped into the valid range
        assert_eq!(detections.len(), 2);
        assert_eq!(detections[0].y1, 0.0);
        assert_eq!(detections[0].y2, 0.0);
        assert_eq!(detections[1].y1, 1080.0);
        assert_eq!(detections[1].y2, 1080.0);
        for det in &detections {
            assert!(det.x1 >= 0.0 && det.x2 <= 1920.0);
            assert!(det.x1 <= det.x2 && det.y1 <= det.y2);
        }
    }

    #[test]
    fn test_decoded_output_order_is_preserved() {
        let output = decoded_output(&[
            ([30.0, 30.0, 70.0, 70.0], 0.9, 7),
            ([10.0, 10.0, 50.0, 50.0], 0.6, 3),
            ([20.0, 20.0, 60.0, 60.0], 0.8, 5),
        ]);

        let post = Postprocessor::new(0.5);
        let detections = post.parse_detections(&output, &identity_transform(640));

        let classes: Vec<u32> = detections.iter().map(|d| d.class_id).collect();
        assert_eq!(classes, vec![7, 3, 5]);
    }

    #[test]
    fn test_filter_and_clamp_are_idempotent() {
        let output = decoded_output(&[
            ([-50.0, -20.0, 700.0, 700.0], 0.8, 0),
            ([10.0, 10.0, 50.0, 50.0], 0.4, 1),
            ([20.0, 20.0, 60.0, 60.0], 0.95, 2),
        ]);

        let post = Postprocessor::new(0.5);
        let transform = identity_transform(640);

        let first = post.parse_detections(&output, &transform);
        let second = post.parse_detections(&output, &transform);
        assert_eq!(first, second);
    }

    #[test]
    fn test_decoded_no_detections_above_threshold() {
        let output = decoded_output(&[
            ([10.0, 10.0, 50.0, 50.0], 0.1, 0),
            ([20.0, 20.0, 60.0, 60.0], 0.2, 1),
        ]);

        let post = Postprocessor::new(0.5);
        let detections = post.parse_detections(&output, &identity_transform(640));
        assert!(detections.is_empty());
    }

    #[test]
    fn test_decoded_empty_output() {
        let output = DetectorOutput::Decoded {
            labels: Array::from_shape_vec(IxDyn(&[1, 0]), vec![]).unwrap(),
            boxes: Array::from_shape_vec(IxDyn(&[1, 0, 4]), vec![]).unwrap(),
            scores: Array::from_shape_vec(IxDyn(&[1, 0]), vec![]).unwrap(),
        };

        let post = Postprocessor::new(0.5);
        let detections = post.parse_detections(&output, &identity_transform(640));
        assert!(detections.is_empty());
    }

    #[test]
    fn test_queries_argmax_skips_background_and_reindexes() {
        let boxes = [
            [0.1, 0.1, 0.1, 0.1],
            [0.4, 0.4, 0.1, 0.1],
            [0.7, 0.7, 0.1, 0.1],
        ];
        // 1-indexed classes in the logits, 0-indexed in the output
        let logits = [(1usize, 5.0f32), (40, 5.0), (80, 5.0)];
        let output = queries_output(&boxes, &logits, 91);

        let post = Postprocessor::new(0.7);
        let detections = post.parse_detections(&output, &identity_transform(512));

        assert_eq!(detections.len(), 3);
        assert_eq!(detections[0].class_id, 0);
        assert_eq!(detections[1].class_id, 39);
        assert_eq!(detections[2].class_id, 79);
        for det in &detections {
            assert!(det.confidence > 0.99);
        }
    }

    #[test]
    fn test_queries_confidence_comes_from_sigmoid() {
        let boxes = [
            [0.1, 0.1, 0.1, 0.1],
            [0.2, 0.2, 0.1, 0.1],
            [0.3, 0.3, 0.1, 0.1],
        ];
        // sigmoid(0.62) ~ 0.65 (dropped), sigmoid(0.85) ~ 0.70 (boundary),
        // sigmoid(1.39) ~ 0.80 (kept)
        let logits = [(1usize, 0.62f32), (2, 0.85), (3, 1.39)];
        let output = queries_output(&boxes, &logits, 91);

        let post = Postprocessor::new(0.7);
        let detections = post.parse_detections(&output, &identity_transform(512));

        assert_eq!(detections.len(), 2);
        assert!((detections[0].confidence - 0.7).abs() < 0.02);
        assert!(detections[1].confidence > 0.75);
        assert_eq!(detections[0].class_id, 1);
        assert_eq!(detections[1].class_id, 2);
    }

    #[test]
    fn test_queries_coordinate_inverse_transform() {
        // Original 800x600 into 512x512: scale = 0.64, offset_y = 64.
        // Box cxcywh (0.5, 0.5, 0.2, 0.2) -> xyxy (0.4, 0.4, 0.6, 0.6)
        // -> letterbox (204.8, 204.8, 307.2, 307.2)
        // -> original (320, 220, 480, 380)
        let output = queries_output(&[[0.5, 0.5, 0.2, 0.2]], &[(1, 5.0)], 91);

        let post = Postprocessor::new(0.7);
        let transform = TransformParams {
            orig_width: 800,
            orig_height: 600,
            input_width: 512,
            input_height: 512,
            scale: 0.64,
            offset_x: 0.0,
            offset_y: 64.0,
        };
        let detections = post.parse_detections(&output, &transform);

        assert_eq!(detections.len(), 1);
        let det = &detections[0];
        assert!((det.x1 - 320.0).abs() < 0.1, "x1 was {}", det.x1);
        assert!((det.y1 - 220.0).abs() < 0.1, "y1 was {}", det.y1);
        assert!((det.x2 - 480.0).abs() < 0.1, "x2 was {}", det.x2);
        assert!((det.y2 - 380.0).abs() < 0.1, "y2 was {}", det.y2);
    }

    #[test]
    fn test_queries_all_below_threshold() {
        let boxes = [[0.1, 0.1, 0.1, 0.1], [0.2, 0.2, 0.1, 0.1]];
        let logits = [(1usize, -2.0f32), (2, -0.1)];
        let output = queries_output(&boxes, &logits, 91);

        let post = Postprocessor::new(0.7);
        let detections = post.parse_detections(&output, &identity_transform(512));
        assert!(detections.is_empty());
    }

    #[test]
    fn test_queries_empty_output() {
        let output = DetectorOutput::Queries {
            boxes: Array::from_shape_vec(IxDyn(&[1, 0, 4]), vec![]).unwrap(),
            logits: Array::from_shape_vec(IxDyn(&[1, 0, 91]), vec![]).unwrap(),
        };

        let post = Postprocessor::new(0.7);
        let detections = post.parse_detections(&output, &identity_transform(512));
        assert!(detections.is_empty());
    }
}
