use std::env;

pub use common::Environment;

#[derive(Debug, Clone)]
pub struct InferenceConfig {
    pub environment: Environment,
    pub model_path: String,
    pub input_size: (u32, u32),
    pub confidence_threshold: f32,
    pub retry_interval_ms: u64,
    pub frame_buffer_path: String,
    pub detection_buffer_path: String,
}

impl InferenceConfig {
    /// Load configuration from environment variables with sensible defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        let environment = Environment::from_env();

        let model_path =
            env::var("MODEL_PATH").unwrap_or_else(|_| "../../models/model_fp16.engine".to_string());

        let input_width = env::var("INPUT_WIDTH")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(640);

        let input_height = env::var("INPUT_HEIGHT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(640);

        let confidence_threshold = env::var("CONFIDENCE_THRESHOLD")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(0.5);

        let retry_interval_ms = env::var("RETRY_INTERVAL_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(500);

        let frame_buffer_path = env::var("FRAME_BUFFER_PATH")
            .unwrap_or_else(|_| ipc::paths::FRAME_BUFFER_PATH.to_string());

        let detection_buffer_path = env::var("DETECTION_BUFFER_PATH")
            .unwrap_or_else(|_| ipc::paths::DETECTION_BUFFER_PATH.to_string());

        Ok(Self {
            environment,
            model_path,
            input_size: (input_width, input_height),
            confidence_threshold,
            retry_interval_ms,
            frame_buffer_path,
            detection_buffer_path,
        })
    }

    /// Default configuration for tests.
    #[cfg(test)]
    pub fn test_default() -> Self {
        Self {
            environment: Environment::Development,
            model_path: "/models/model.onnx".to_string(),
            input_size: (640, 640),
            confidence_threshold: 0.5,
            retry_interval_ms: 100,
            frame_buffer_path: ipc::paths::FRAME_BUFFER_PATH.to_string(),
            detection_buffer_path: ipc::paths::DETECTION_BUFFER_PATH.to_string(),
        }
    }
}
