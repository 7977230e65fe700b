use std::time::Duration;

/// Block until a peer-owned resource becomes available.
///
/// Used for startup ordering between processes: the frame buffer and frame
/// signal are created by capture, which may start after the pipeline.
pub fn wait_for_resource<F, T, E>(mut connect: F, poll_interval_ms: u64, resource_name: &str) -> T
where
    F: FnMut() -> Result<T, E>,
    E: std::fmt::Display,
{
    loop {
        match connect() {
            Ok(resource) => {
                tracing::info!("{} connected", resource_name);
                return resource;
            }
            Err(e) => {
                tracing::info!("Waiting for {} ({}), retrying...", resource_name, e);
                std::thread::sleep(Duration::from_millis(poll_interval_ms));
            }
        }
    }
}
