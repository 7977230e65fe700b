use crate::macros::impl_slot_reader_base;
use crate::paths;
use crate::types::Detection;
use crate::utils::verified_root;

/// Owned copy of one detection record.
#[derive(Debug, Clone)]
pub struct DetectionRecord {
    pub frame_number: u64,
    pub timestamp_ns: u64,
    pub camera_id: u32,
    pub detections: Vec<Detection>,
}

/// Consumer side of the detection slot.
pub struct DetectionReader {
    reader: crate::mmap_reader::MmapReader,
}

impl_slot_reader_base!(DetectionReader, paths::DETECTION_BUFFER_PATH);

impl DetectionReader {
    /// Latest consistent detection record, if any.
    ///
    /// Same torn-read protocol as the frame slot: the sequence counter is
    /// checked on both sides of the payload access and the record is
    /// verified before use.
    pub fn get_detections(&self) -> Option<DetectionRecord> {
        let seq = self.reader.current_sequence();

        if seq == 0 {
            return None;
        }

        let buffer = self.reader.buffer();

        if self.reader.current_sequence() != seq {
            tracing::debug!(
                sequence = seq,
                "publication overlapped read, dropping detections"
            );
            return None;
        }

        let result = match verified_root::<schema::DetectionResult>(buffer) {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(error = %e, "torn or corrupt detection record");
                return None;
            }
        };

        let detections = result
            .detections()
            .map(|d| d.iter().map(|det| Detection::from(&det)).collect())
            .unwrap_or_default();

        Some(DetectionRecord {
            frame_number: result.frame_number(),
            timestamp_ns: result.timestamp_ns(),
            camera_id: result.camera_id(),
            detections,
        })
    }

    /// Whether the current record contains a detection of the given class.
    pub fn contains_class(&self, class_id: u32) -> bool {
        self.get_detections()
            .map(|record| record.detections.iter().any(|d| d.class_id == class_id))
            .unwrap_or(false)
    }
}
