use crate::macros::impl_slot_reader_base;
use crate::paths;
use crate::utils::verified_root;

/// Consumer side of the frame slot.
pub struct FrameReader {
    reader: crate::mmap_reader::MmapReader,
}

impl_slot_reader_base!(FrameReader, paths::FRAME_BUFFER_PATH);

impl FrameReader {
    /// Latest consistent frame record, if any.
    ///
    /// The sequence counter is loaded before and after touching the payload;
    /// a publication overlapping the read changes the counter and the frame
    /// is dropped instead of surfacing half-written bytes. Verification then
    /// rejects records the double-check could not catch.
    ///
    /// The returned view borrows the mapping and is only valid until the
    /// next call.
    pub fn get_frame(&self) -> Option<schema::Frame<'_>> {
        let seq = self.reader.current_sequence();

        // No frame ever published
        if seq == 0 {
            return None;
        }

        let buffer = self.reader.buffer();

        if self.reader.current_sequence() != seq {
            tracing::debug!(sequence = seq, "publication overlapped read, dropping frame");
            return None;
        }

        match verified_root::<schema::Frame>(buffer) {
            Ok(frame) => Some(frame),
            Err(e) => {
                tracing::warn!(error = %e, "torn or corrupt frame record");
                None
            }
        }
    }
}
