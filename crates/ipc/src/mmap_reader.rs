use crate::errors::SlotError;
use crate::header::Header;
use memmap2::{Mmap, MmapOptions};
use std::fs::File;
use std::path::Path;
use std::sync::atomic::Ordering;

/// Read-only view of a shared-memory slot.
///
/// Readers never mutate the mapping; the only reader-local state is the
/// last sequence marked read, which lets callers detect missed updates.
pub struct MmapReader {
    _file: File,
    mmap: Mmap,
    last_sequence: u64,
}

impl MmapReader {
    /// Open an existing slot read-only. Fails if the backing file is absent
    /// or smaller than the slot header.
    pub fn build(path: impl AsRef<Path>) -> Result<Self, SlotError> {
        let file = File::open(path)?;

        let len = file.metadata()?.len();
        if len < Header::SIZE as u64 {
            return Err(SlotError::MappingTooSmall(len));
        }

        let mmap = unsafe { MmapOptions::new().map(&file)? };

        Ok(Self {
            _file: file,
            mmap,
            last_sequence: 0,
        })
    }

    fn header(&self) -> &Header {
        // The mapping is page-aligned, which satisfies the 8-byte alignment
        // the atomic requires.
        unsafe { &*(self.mmap.as_ptr() as *const Header) }
    }

    /// Acquire-load of the slot's sequence counter.
    pub fn current_sequence(&self) -> u64 {
        self.header().sequence.load(Ordering::Acquire)
    }

    /// Payload region of the slot (everything after the header).
    pub fn buffer(&self) -> &[u8] {
        &self.mmap[Header::SIZE..]
    }

    /// Returns the current sequence if a record was published since the
    /// last `mark_read()`.
    pub fn has_new_data(&self) -> Option<u64> {
        let seq = self.current_sequence();
        (seq != 0 && seq != self.last_sequence).then_some(seq)
    }

    /// Record the current sequence as consumed.
    pub fn mark_read(&mut self) {
        self.last_sequence = self.current_sequence();
    }

    pub fn last_sequence(&self) -> u64 {
        self.last_sequence
    }
}
