use super::{DetectorBackend, DetectorOutput};
use ndarray::{Array, Array2, IxDyn};
use std::ffi::CString;

#[cxx::bridge]
mod ffi {
    unsafe extern "C++" {
        include!("detector_engine.hpp");

        #[namespace = "detector"]
        type DetectorEngine;

        #[namespace = "detector"]
        fn new_detector_engine() -> UniquePtr<DetectorEngine>;

        #[namespace = "detector"]
        unsafe fn load_engine(self: Pin<&mut DetectorEngine>, path: *const c_char) -> bool;

        #[namespace = "detector"]
        unsafe fn infer_raw(
            self: Pin<&mut DetectorEngine>,
            images: *const f32,
            orig_sizes: *const i64,
            out_labels: *mut i64,
            out_boxes: *mut f32,
            out_scores: *mut f32,
        ) -> bool;

        #[namespace = "detector"]
        fn num_detections(self: &DetectorEngine) -> i32;

        #[namespace = "detector"]
        fn input_width(self: &DetectorEngine) -> i32;

        #[namespace = "detector"]
        fn input_height(self: &DetectorEngine) -> i32;
    }
}

/// TensorRT adapter for engines exported with a decode head
/// (labels/boxes/scores bindings).
///
/// The C++ side owns the runtime, engine, execution context and device
/// buffers; buffers are sized from the engine's advertised binding shapes
/// and released in reverse acquisition order on drop.
pub struct TrtBackend {
    inner: cxx::UniquePtr<ffi::DetectorEngine>,
    num_detections: usize,
    orig_sizes: Array2<i64>,
}

impl DetectorBackend for TrtBackend {
    fn load_engine(path: &str, input_size: (u32, u32)) -> anyhow::Result<Self> {
        let mut inner = ffi::new_detector_engine();

        if inner.is_null() {
            return Err(anyhow::anyhow!("failed to create TensorRT engine instance"));
        }

        let c_path = CString::new(path)?;

        if !unsafe { inner.pin_mut().load_engine(c_path.as_ptr()) } {
            return Err(anyhow::anyhow!(
                "failed to load TensorRT engine from {}",
                path
            ));
        }

        let engine_input = (inner.input_width() as u32, inner.input_height() as u32);
        anyhow::ensure!(
            engine_input == input_size,
            "engine input {}x{} does not match configured input {}x{}",
            engine_input.0,
            engine_input.1,
            input_size.0,
            input_size.1,
        );

        let num_detections = inner.num_detections() as usize;

        let orig_sizes = Array2::from_shape_vec(
            (1, 2),
            vec![input_size.1 as i64, input_size.0 as i64],
        )?;

        Ok(Self {
            inner,
            num_detections,
            orig_sizes,
        })
    }

    fn infer(&mut self, images: &Array<f32, IxDyn>) -> anyhow::Result<DetectorOutput> {
        let mut labels = Array::<i64, IxDyn>::zeros(IxDyn(&[1, self.num_detections]));
        let mut boxes = Array::<f32, IxDyn>::zeros(IxDyn(&[1, self.num_detections, 4]));
        let mut scores = Array::<f32, IxDyn>::zeros(IxDyn(&[1, self.num_detections]));

        let success = unsafe {
            self.inner.pin_mut().infer_raw(
                images.as_ptr(),
                self.orig_sizes.as_ptr(),
                labels.as_mut_ptr(),
                boxes.as_mut_ptr(),
                scores.as_mut_ptr(),
            )
        };

        if !success {
            return Err(anyhow::anyhow!("TensorRT inference failed"));
        }

        Ok(DetectorOutput::Decoded {
            labels,
            boxes,
            scores,
        })
    }

    fn engine_input_size(&self) -> Option<(u32, u32)> {
        Some((
            self.inner.input_width() as u32,
            self.inner.input_height() as u32,
        ))
    }
}
