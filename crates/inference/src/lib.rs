pub mod backend;
pub mod config;
pub mod processing;
pub mod service;

pub use backend::{DetectorBackend, DetectorOutput};
pub use config::InferenceConfig;
pub use service::PipelineService;
