//! Well-known IPC names shared by every process in the system.
//!
//! Keeping the shared-memory paths, signal queue names, and buffer sizes in
//! one module means producers and consumers can never disagree on them.

/// Frame buffer path - written by capture, read by inference and gateway
pub const FRAME_BUFFER_PATH: &str = "/dev/shm/bridge_frame_buffer";

/// Detection buffer path - written by inference, read by the controller
pub const DETECTION_BUFFER_PATH: &str = "/dev/shm/bridge_detection_buffer";

/// Signal queue for capture -> inference frame notifications
pub const SIGNAL_FRAME_INFERENCE: &str = "/bridge_frame_inference";

/// Signal queue for capture -> gateway frame notifications
pub const SIGNAL_FRAME_GATEWAY: &str = "/bridge_frame_gateway";

/// Signal queue for inference -> controller detection notifications
pub const SIGNAL_DETECTION_CONTROLLER: &str = "/bridge_detection_controller";

/// Default frame buffer size (6MB - enough for 1920x1080 RGB)
pub const DEFAULT_FRAME_BUFFER_SIZE: usize = 6 * 1024 * 1024;

/// Default detection buffer size (1MB - enough for many detections)
pub const DEFAULT_DETECTION_BUFFER_SIZE: usize = 1024 * 1024;

/// Signal queues hold at most this many pending tokens
pub const SIGNAL_CAPACITY: usize = 10;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_paths_are_absolute() {
        assert!(FRAME_BUFFER_PATH.starts_with('/'));
        assert!(DETECTION_BUFFER_PATH.starts_with('/'));
    }

    #[test]
    fn test_signal_names_start_with_slash() {
        assert!(SIGNAL_FRAME_INFERENCE.starts_with('/'));
        assert!(SIGNAL_FRAME_GATEWAY.starts_with('/'));
        assert!(SIGNAL_DETECTION_CONTROLLER.starts_with('/'));
    }

    #[test]
    fn test_buffer_sizes_reasonable() {
        assert!(DEFAULT_FRAME_BUFFER_SIZE >= 1024 * 1024);
        assert!(DEFAULT_DETECTION_BUFFER_SIZE >= 1024 * 1024);
    }
}
