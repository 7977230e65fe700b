use super::{DetectorBackend, DetectorOutput};
use ndarray::{Array, Array2, IxDyn};
use ort::{
    session::{builder::GraphOptimizationLevel, Session},
    value::TensorRef,
};

#[derive(Debug, Clone, Copy)]
pub enum ExecutionProvider {
    Cpu,
    Cuda,
}

/// Which output signature the loaded model exposes, detected from the
/// session's advertised output names at load time.
enum OutputHeads {
    Decoded,
    Queries,
}

pub struct OrtBackend {
    session: Session,
    heads: OutputHeads,
    input_name: String,
    orig_sizes: Array2<i64>,
}

impl OrtBackend {
    /// Load a model with the given execution provider.
    pub fn load_with_provider(
        path: &str,
        input_size: (u32, u32),
        provider: ExecutionProvider,
    ) -> anyhow::Result<Self> {
        // Initialize the ORT environment (idempotent)
        let _ = ort::init().commit();

        let mut builder = Session::builder()?
            .with_optimization_level(GraphOptimizationLevel::Level3)?
            .with_intra_threads(4)?;

        match provider {
            ExecutionProvider::Cuda => {
                tracing::info!("Initializing ONNX Runtime with CUDA execution provider");
                builder = builder.with_execution_providers([
                    ort::execution_providers::CUDAExecutionProvider::default()
                        .with_device_id(0)
                        .build()
                        .error_on_failure(),
                ])?;
            }
            ExecutionProvider::Cpu => {
                tracing::info!("Initializing ONNX Runtime with CPU execution provider");
            }
        }

        let session = builder.commit_from_file(path)?;

        let output_names: Vec<&str> = session.outputs.iter().map(|o| o.name.as_str()).collect();
        let heads = if output_names.contains(&"scores") {
            OutputHeads::Decoded
        } else if output_names.contains(&"dets") {
            OutputHeads::Queries
        } else {
            anyhow::bail!("unrecognized detector output signature: {output_names:?}");
        };

        let input_name = session
            .inputs
            .first()
            .map(|i| i.name.clone())
            .ok_or_else(|| anyhow::anyhow!("model advertises no inputs"))?;

        // The decode head wants the target size it should express boxes in;
        // handing it the letterbox size keeps boxes in letterbox-pixel space
        // so the postprocessor can invert the transform itself.
        let orig_sizes = Array2::from_shape_vec(
            (1, 2),
            vec![input_size.1 as i64, input_size.0 as i64],
        )?;

        tracing::info!(model_path = path, "Model loaded");
        Ok(Self {
            session,
            heads,
            input_name,
            orig_sizes,
        })
    }
}

impl DetectorBackend for OrtBackend {
    fn load_engine(path: &str, input_size: (u32, u32)) -> anyhow::Result<Self> {
        Self::load_with_provider(path, input_size, ExecutionProvider::Cuda)
    }

    fn infer(&mut self, images: &Array<f32, IxDyn>) -> anyhow::Result<DetectorOutput> {
        match self.heads {
            OutputHeads::Decoded => {
                let outputs = self.session.run(ort::inputs![
                    "images" => TensorRef::from_array_view(images.view())?,
                    "orig_target_sizes" => TensorRef::from_array_view(self.orig_sizes.view())?
                ])?;

                let labels = outputs["labels"].try_extract_array::<i64>()?;
                let boxes = outputs["boxes"].try_extract_array::<f32>()?;
                let scores = outputs["scores"].try_extract_array::<f32>()?;

                Ok(DetectorOutput::Decoded {
                    labels: labels.into_owned(),
                    boxes: boxes.into_owned(),
                    scores: scores.into_owned(),
                })
            }
            OutputHeads::Queries => {
                let outputs = self.session.run(ort::inputs![
                    self.input_name.as_str() => TensorRef::from_array_view(images.view())?
                ])?;

                let boxes = outputs["dets"].try_extract_array::<f32>()?;
                let logits = outputs["labels"].try_extract_array::<f32>()?;

                Ok(DetectorOutput::Queries {
                    boxes: boxes.into_owned(),
                    logits: logits.into_owned(),
                })
            }
        }
    }
}
