use crate::errors::SlotError;
use crate::macros::impl_slot_writer_base;
use crate::paths;
use schema::{ColorFormat, FrameArgs};

/// Producer side of the frame slot.
pub struct FrameWriter {
    writer: crate::mmap_writer::MmapWriter,
    builder: flatbuffers::FlatBufferBuilder<'static>,
}

impl_slot_writer_base!(
    FrameWriter,
    paths::FRAME_BUFFER_PATH,
    paths::DEFAULT_FRAME_BUFFER_SIZE
);

impl FrameWriter {
    #[allow(clippy::too_many_arguments)]
    pub fn write(
        &mut self,
        frame_number: u64,
        timestamp_ns: u64,
        camera_id: u32,
        width: u32,
        height: u32,
        format: ColorFormat,
        pixels: &[u8],
    ) -> Result<(), SlotError> {
        let channels = if format == ColorFormat::GRAY { 1 } else { 3 };

        self.builder.reset();
        let pixels_vec = self.builder.create_vector(pixels);

        let frame = schema::Frame::create(
            &mut self.builder,
            &FrameArgs {
                camera_id,
                frame_number,
                timestamp_ns,
                width,
                height,
                channels,
                format,
                pixels: Some(pixels_vec),
            },
        );

        self.builder.finish(frame, None);
        let data = self.builder.finished_data();

        self.writer.write(data)
    }
}
