use crate::{
    backend::DetectorBackend,
    config::InferenceConfig,
    processing::{
        post::{Postprocessor, TransformParams},
        pre::Preprocessor,
    },
};
use anyhow::Context;
use common::wait_for_resource;
use ipc::{DetectionWriter, FrameReader, SignalKind, SignalQueue};
use std::thread;
use std::time::Duration;

/// The inference event loop: wait for a frame signal, collapse any backlog,
/// read the latest frame, run the detector, publish detections, signal the
/// controller.
pub struct PipelineService<B: DetectorBackend> {
    backend: B,
    config: InferenceConfig,
    preprocessor: Preprocessor,
    postprocessor: Postprocessor,
}

impl<B: DetectorBackend> PipelineService<B> {
    pub fn new(backend: B, config: InferenceConfig) -> Self {
        let preprocessor = Preprocessor::new(config.input_size);
        let postprocessor = Postprocessor::new(config.confidence_threshold);
        Self {
            backend,
            config,
            preprocessor,
            postprocessor,
        }
    }

    pub fn run(mut self) -> anyhow::Result<()> {
        tracing::info!(
            model_path = %self.config.model_path,
            "Inference pipeline starting"
        );

        // Capture may start after us: keep retrying for its resources.
        // Our own slot and the controller edge are created here and are
        // fatal if they cannot be.
        let mut frame_reader = wait_for_resource(
            || FrameReader::with_path(&self.config.frame_buffer_path),
            self.config.retry_interval_ms,
            "Frame buffer",
        );

        let mut detection_writer = DetectionWriter::build_with_path(
            &self.config.detection_buffer_path,
            ipc::paths::DEFAULT_DETECTION_BUFFER_SIZE,
        )
        .context("Failed to open detection buffer")?;

        let frame_signal = wait_for_resource(
            || SignalQueue::open(SignalKind::FrameCaptureToInference),
            self.config.retry_interval_ms,
            "Frame signal",
        );

        let controller_signal = SignalQueue::ensure(SignalKind::DetectionInferenceToController)
            .context("Failed to create controller signal")?;

        tracing::info!("Starting inference loop (event-driven)");

        let mut frames_processed = 0u64;
        let mut frames_skipped = 0u64;
        let mut total_detections = 0u64;

        loop {
            if let Err(e) = frame_signal.wait() {
                tracing::error!(error = %e, "Signal wait failed");
                thread::sleep(Duration::from_millis(self.config.retry_interval_ms));
                continue;
            }

            // Collapse any backlog so the slot read below picks up the
            // latest frame; everything in between is counted as skipped
            match frame_signal.drain() {
                Ok(skipped) => {
                    if skipped > 0 {
                        frames_skipped += skipped as u64;
                        tracing::trace!(skipped, "Collapsed signal backlog");
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to drain frame signal");
                }
            }

            match self.process_frame(&frame_reader, &mut detection_writer) {
                Ok(detections) => {
                    frames_processed += 1;
                    total_detections += detections as u64;

                    // A full queue means the controller already has a
                    // wakeup pending; dropping this one is harmless
                    if let Err(e) = controller_signal.post() {
                        tracing::warn!(error = %e, "Failed to signal controller");
                    }

                    frame_reader.mark_read();

                    if frames_processed % 10 == 0 {
                        tracing::debug!(
                            frames_processed,
                            frames_skipped,
                            total_detections,
                            detections,
                            "Frame processed"
                        );
                    }
                    if frames_processed % 100 == 0 {
                        tracing::info!(
                            frames_processed,
                            frames_skipped,
                            total_detections,
                            "Pipeline stats"
                        );
                    }
                }
                Err(e) => {
                    // Frame-scoped: nothing is left inconsistent, the next
                    // signal brings a fresh frame
                    tracing::warn!(error = %e, "Failed to process frame");
                }
            }
        }
    }

    fn process_frame(
        &mut self,
        frame_reader: &FrameReader,
        detection_writer: &mut DetectionWriter,
    ) -> anyhow::Result<usize> {
        let frame = frame_reader
            .get_frame()
            .ok_or_else(|| anyhow::anyhow!("no frame available (torn read or empty slot)"))?;

        let frame_number = frame.frame_number();
        let timestamp_ns = frame.timestamp_ns();
        let camera_id = frame.camera_id();
        let width = frame.width();
        let height = frame.height();

        let pixels = frame
            .pixels()
            .ok_or_else(|| anyhow::anyhow!("frame record carries no pixel data"))?;

        tracing::trace!(
            frame_number,
            width,
            height,
            format = ?frame.format(),
            "Preprocessing frame"
        );

        let pre = self
            .preprocessor
            .run(pixels.bytes(), width, height, frame.format())?;

        let output = self.backend.infer(&pre.tensor)?;

        let transform = TransformParams {
            orig_width: width,
            orig_height: height,
            input_width: self.config.input_size.0,
            input_height: self.config.input_size.1,
            scale: pre.scale,
            offset_x: pre.offset_x,
            offset_y: pre.offset_y,
        };

        let detections = self.postprocessor.parse_detections(&output, &transform);

        detection_writer.write(frame_number, timestamp_ns, camera_id, &detections)?;

        Ok(detections.len())
    }
}
