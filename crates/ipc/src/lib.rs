pub mod detection_reader;
pub mod detection_writer;
pub mod errors;
pub mod frame_reader;
pub mod frame_writer;
pub mod header;
mod macros;
pub mod mmap_reader;
pub(crate) mod mmap_writer;
pub mod paths;
pub mod signal;
pub mod types;
mod utils;

pub use detection_reader::{DetectionReader, DetectionRecord};
pub use detection_writer::DetectionWriter;
pub use errors::SlotError;
pub use frame_reader::FrameReader;
pub use frame_writer::FrameWriter;
pub use mmap_reader::MmapReader;
pub use signal::{SignalError, SignalKind, SignalQueue};
pub use types::Detection;
