use ndarray::{Array, ArrayD, IxDyn};

#[cfg(feature = "ort-backend")]
pub mod ort;

#[cfg(feature = "trt-backend")]
pub mod trt;

/// Raw output of one forward pass, shaped by how the engine was exported.
///
/// The postprocessor branches on the variant; nothing else in the pipeline
/// assumes a particular binding order.
pub enum DetectorOutput {
    /// Engine with a decode head: `labels` \[1, N\] class ids,
    /// `boxes` \[1, N, 4\] xyxy in letterbox-pixel space,
    /// `scores` \[1, N\] in \[0, 1\]. N is the engine's fixed detection count.
    Decoded {
        labels: ArrayD<i64>,
        boxes: ArrayD<f32>,
        scores: ArrayD<f32>,
    },
    /// Raw query head: `boxes` \[1, N, 4\] cxcywh normalized to \[0, 1\],
    /// `logits` \[1, N, C\] unnormalized class logits with class 0 as
    /// background.
    Queries {
        boxes: ArrayD<f32>,
        logits: ArrayD<f32>,
    },
}

/// One loaded detector engine.
///
/// An adapter only exists in the loaded state: `load_engine` either returns
/// a fully initialized backend (engine deserialized, execution context and
/// device buffers ready) or an error. Dropping the adapter releases the
/// engine resources. Not safe for concurrent use; the pipeline is
/// single-threaded.
pub trait DetectorBackend {
    /// Deserialize the engine at `path` and prepare it for inference.
    /// `input_size` is the (width, height) the preprocessor letterboxes to.
    fn load_engine(path: &str, input_size: (u32, u32)) -> anyhow::Result<Self>
    where
        Self: Sized;

    /// Run one synchronous forward pass over a 1x3xHxW input tensor.
    ///
    /// Failure is frame-scoped: the backend stays usable for the next frame.
    fn infer(&mut self, images: &Array<f32, IxDyn>) -> anyhow::Result<DetectorOutput>;

    /// Input size advertised by the engine, if it can be introspected.
    fn engine_input_size(&self) -> Option<(u32, u32)> {
        None
    }
}
