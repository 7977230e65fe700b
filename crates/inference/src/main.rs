use anyhow::Context;
use inference::backend::DetectorBackend;
use inference::config::InferenceConfig;
use inference::service::PipelineService;

#[cfg(not(any(feature = "ort-backend", feature = "trt-backend")))]
compile_error!("select a detector backend: ort-backend or trt-backend");

#[cfg(feature = "trt-backend")]
use inference::backend::trt::TrtBackend as Backend;

#[cfg(all(feature = "ort-backend", not(feature = "trt-backend")))]
use inference::backend::ort::OrtBackend as Backend;

fn main() -> anyhow::Result<()> {
    let config = InferenceConfig::from_env()?;
    common::setup_logging(config.environment.clone());

    // A missing or broken engine is fatal; everything the capture process
    // owns is waited for inside the service instead.
    let backend = Backend::load_engine(&config.model_path, config.input_size)
        .with_context(|| format!("failed to load detector engine from {}", config.model_path))?;

    if let Some((w, h)) = backend.engine_input_size() {
        anyhow::ensure!(
            (w, h) == config.input_size,
            "engine input {}x{} does not match configured input {}x{}",
            w,
            h,
            config.input_size.0,
            config.input_size.1,
        );
    }

    PipelineService::new(backend, config).run()
}
