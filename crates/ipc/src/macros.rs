/// Generates the common slot-writer constructors: `build()`,
/// `build_with_path()` and `sequence()`.
///
/// The front door opens an existing slot (preserving its sequence) when the
/// backing file is present and creates a fresh zero-sequence slot otherwise.
macro_rules! impl_slot_writer_base {
    ($struct_name:ident, $default_path:expr, $default_size:expr) => {
        impl $struct_name {
            pub fn build() -> Result<Self, $crate::SlotError> {
                Self::build_with_path($default_path, $default_size)
            }

            pub fn build_with_path(
                mmap_path: &str,
                mmap_size: usize,
            ) -> Result<Self, $crate::SlotError> {
                let writer = if std::path::Path::new(mmap_path).exists() {
                    $crate::mmap_writer::MmapWriter::open_existing(mmap_path)?
                } else {
                    $crate::mmap_writer::MmapWriter::create_and_init(mmap_path, mmap_size)?
                };
                let builder = flatbuffers::FlatBufferBuilder::new();
                Ok(Self { writer, builder })
            }

            pub fn sequence(&self) -> u64 {
                self.writer.sequence()
            }
        }
    };
}

/// Generates the common slot-reader constructors: `build()`, `with_path()`,
/// `current_sequence()` and `mark_read()`.
macro_rules! impl_slot_reader_base {
    ($struct_name:ident, $default_path:expr) => {
        impl $struct_name {
            pub fn build() -> Result<Self, $crate::SlotError> {
                Self::with_path($default_path)
            }

            pub fn with_path(mmap_path: &str) -> Result<Self, $crate::SlotError> {
                let reader = $crate::mmap_reader::MmapReader::build(mmap_path)?;
                Ok(Self { reader })
            }

            pub fn current_sequence(&self) -> u64 {
                self.reader.current_sequence()
            }

            pub fn mark_read(&mut self) {
                self.reader.mark_read();
            }
        }
    };
}

pub(crate) use impl_slot_reader_base;
pub(crate) use impl_slot_writer_base;
