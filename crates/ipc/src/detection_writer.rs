use crate::errors::SlotError;
use crate::macros::impl_slot_writer_base;
use crate::paths;
use crate::types::Detection;

/// Producer side of the detection slot.
pub struct DetectionWriter {
    writer: crate::mmap_writer::MmapWriter,
    builder: flatbuffers::FlatBufferBuilder<'static>,
}

impl_slot_writer_base!(
    DetectionWriter,
    paths::DETECTION_BUFFER_PATH,
    paths::DEFAULT_DETECTION_BUFFER_SIZE
);

impl DetectionWriter {
    /// Publish one detection record.
    ///
    /// Frame number, timestamp and camera id are copied from the frame the
    /// detections were computed on so consumers can correlate the two slots.
    /// Fails without touching the slot if the serialized record does not fit
    /// the mapping's payload region.
    pub fn write(
        &mut self,
        frame_number: u64,
        timestamp_ns: u64,
        camera_id: u32,
        detections: &[Detection],
    ) -> Result<(), SlotError> {
        self.builder.reset();

        let bbox_vec: Vec<_> = detections
            .iter()
            .map(|d| {
                schema::BoundingBox::create(
                    &mut self.builder,
                    &schema::BoundingBoxArgs {
                        x1: d.x1,
                        y1: d.y1,
                        x2: d.x2,
                        y2: d.y2,
                        confidence: d.confidence,
                        class_id: d.class_id,
                    },
                )
            })
            .collect();

        let detections_offset = self.builder.create_vector(&bbox_vec);

        let detection_result = schema::DetectionResult::create(
            &mut self.builder,
            &schema::DetectionResultArgs {
                frame_number,
                timestamp_ns,
                camera_id,
                detections: Some(detections_offset),
            },
        );

        self.builder.finish(detection_result, None);
        let data = self.builder.finished_data();

        self.writer.write(data)
    }
}
