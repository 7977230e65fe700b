use crate::errors::SlotError;
use crate::header::Header;
use memmap2::{MmapMut, MmapOptions};
use std::fs::OpenOptions;
use std::os::unix::fs::OpenOptionsExt;
use std::path::Path;
use std::sync::atomic::Ordering;

#[derive(Debug)]
pub(crate) struct MmapWriter {
    mmap: MmapMut,
    sequence: u64,
}

impl MmapWriter {
    /// Create or open a slot file and reset the sequence to 0.
    ///
    /// Creates the file (mode 0660) if it doesn't exist, expands it if
    /// undersized. Readers attached to the old mapping will wait for new
    /// data, since sequence 0 means "nothing published".
    ///
    /// Use `open_existing()` instead to preserve the sequence across a
    /// writer restart.
    pub fn create_and_init(path: impl AsRef<Path>, size: usize) -> Result<Self, SlotError> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .mode(0o660)
            .open(&path)?;

        // Only resize if the file is smaller than needed
        if file.metadata()?.len() < size as u64 {
            file.set_len(size as u64)?;
        }

        let mut mmap = unsafe { MmapOptions::new().map_mut(&file)? };

        let header = unsafe { &mut *(mmap.as_mut_ptr() as *mut Header) };
        header.sequence.store(0, Ordering::Release);

        Ok(Self { mmap, sequence: 0 })
    }

    /// Open an existing slot file and preserve its sequence number.
    ///
    /// Use this when a writer restarts: attached readers keep observing a
    /// monotonically increasing sequence instead of seeing it jump back to
    /// zero.
    ///
    /// A file too small to hold the header is refused rather than trusted;
    /// callers that want to recover should re-create the slot.
    pub fn open_existing(path: impl AsRef<Path>) -> Result<Self, SlotError> {
        let file = OpenOptions::new().read(true).write(true).open(path)?;

        let len = file.metadata()?.len();
        if len < Header::SIZE as u64 {
            return Err(SlotError::MappingTooSmall(len));
        }

        let mmap = unsafe { MmapOptions::new().map_mut(&file)? };

        let header = unsafe { &*(mmap.as_ptr() as *const Header) };
        let sequence = header.sequence.load(Ordering::Acquire);

        Ok(Self { mmap, sequence })
    }

    /// Publish one record: copy the payload, then bump the sequence.
    ///
    /// Memory ordering:
    /// 1. Payload is written first via copy_from_slice
    /// 2. Sequence is published with `Ordering::Release`
    ///
    /// Readers loading the sequence with Acquire therefore see the complete
    /// payload. An oversized payload is rejected before any byte of the
    /// slot is touched, so the previous record stays intact.
    pub fn write(&mut self, data: &[u8]) -> Result<(), SlotError> {
        let available = self.mmap.len() - Header::SIZE;
        if data.len() > available {
            return Err(SlotError::PayloadTooLarge {
                required: data.len(),
                available,
            });
        }

        self.mmap[Header::SIZE..Header::SIZE + data.len()].copy_from_slice(data);

        self.sequence += 1;
        let header = unsafe { &mut *(self.mmap.as_mut_ptr() as *mut Header) };
        header.sequence.store(self.sequence, Ordering::Release);

        Ok(())
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mmap_reader::MmapReader;
    use tempfile::NamedTempFile;

    #[test]
    fn test_new_writer_initializes_sequence_to_zero() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path();

        let writer = MmapWriter::create_and_init(path, 1024).unwrap();
        assert_eq!(writer.sequence(), 0);

        let reader = MmapReader::build(path).unwrap();
        assert_eq!(
            reader.current_sequence(),
            0,
            "sequence in the mapping should be initialized to 0"
        );
    }

    #[test]
    fn test_write_increments_sequence() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path();

        let mut writer = MmapWriter::create_and_init(path, 1024).unwrap();

        writer.write(b"data1").unwrap();
        assert_eq!(writer.sequence(), 1);

        writer.write(b"data2").unwrap();
        assert_eq!(writer.sequence(), 2);

        let reader = MmapReader::build(path).unwrap();
        assert_eq!(reader.current_sequence(), 2);
    }

    #[test]
    fn test_payload_visible_after_sequence_update() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path();

        let mut writer = MmapWriter::create_and_init(path, 1024).unwrap();
        let test_data = b"memory ordering test";

        writer.write(test_data).unwrap();

        let mut reader = MmapReader::build(path).unwrap();
        assert_eq!(reader.current_sequence(), 1);
        assert_eq!(&reader.buffer()[..test_data.len()], test_data);

        assert_eq!(reader.has_new_data(), Some(1));
        reader.mark_read();
        assert_eq!(reader.last_sequence(), 1);
        assert_eq!(reader.has_new_data(), None);
    }

    #[test]
    fn test_oversize_write_rejected_without_mutation() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path();

        let mut writer = MmapWriter::create_and_init(path, 64).unwrap();
        writer.write(b"small").unwrap();
        assert_eq!(writer.sequence(), 1);

        let big = vec![0u8; 1024];
        let err = writer.write(&big).unwrap_err();
        assert!(matches!(
            err,
            SlotError::PayloadTooLarge {
                required: 1024,
                available: 56
            }
        ));

        // Neither the sequence nor the previous payload moved
        assert_eq!(writer.sequence(), 1);
        let reader = MmapReader::build(path).unwrap();
        assert_eq!(reader.current_sequence(), 1);
        assert_eq!(&reader.buffer()[..5], b"small");
    }

    #[test]
    fn test_open_existing_preserves_sequence() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path();

        {
            let mut writer = MmapWriter::create_and_init(path, 1024).unwrap();
            writer.write(b"frame 1").unwrap();
            writer.write(b"frame 2").unwrap();
            writer.write(b"frame 3").unwrap();
            assert_eq!(writer.sequence(), 3);
        }

        // Writer restart
        let mut writer = MmapWriter::open_existing(path).unwrap();
        assert_eq!(
            writer.sequence(),
            3,
            "open_existing should continue from the sequence in the file"
        );

        writer.write(b"frame 4").unwrap();
        assert_eq!(writer.sequence(), 4);

        let reader = MmapReader::build(path).unwrap();
        assert_eq!(reader.current_sequence(), 4);
    }

    #[test]
    fn test_open_existing_refuses_undersized_file() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path();
        std::fs::write(path, b"abc").unwrap();

        let err = MmapWriter::open_existing(path).unwrap_err();
        assert!(matches!(err, SlotError::MappingTooSmall(3)));
    }

    #[test]
    fn test_writer_restart_safe_with_attached_readers() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path();

        let mut writer = MmapWriter::create_and_init(path, 1024).unwrap();
        writer.write(b"initial").unwrap();
        drop(writer);

        let mut reader = MmapReader::build(path).unwrap();
        assert_eq!(reader.current_sequence(), 1);

        // Restart the writer while the reader keeps its mapping
        let mut writer = MmapWriter::open_existing(path).unwrap();
        writer.write(b"new data").unwrap();

        assert_eq!(reader.current_sequence(), 2);
        reader.mark_read();

        drop(writer);
        let mut writer = MmapWriter::open_existing(path).unwrap();
        writer.write(b"more data").unwrap();

        assert_eq!(reader.current_sequence(), 3);
    }

    #[test]
    fn test_concurrent_producer_consumer() {
        use std::thread;
        use std::time::Duration;

        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_path_buf();

        const NUM_FRAMES: u64 = 30;
        const FRAME_SIZE: usize = 256;

        let path_producer = path.clone();
        let path_consumer = path.clone();

        let producer = thread::spawn(move || {
            let mut writer =
                MmapWriter::create_and_init(&path_producer, FRAME_SIZE + Header::SIZE).unwrap();
            thread::sleep(Duration::from_millis(50));

            for i in 1..=NUM_FRAMES {
                let mut data = vec![0u8; FRAME_SIZE];
                data[..8].copy_from_slice(&i.to_le_bytes());
                writer.write(&data).unwrap();
                assert_eq!(writer.sequence(), i);
                thread::sleep(Duration::from_millis(10));
            }

            writer.sequence()
        });

        let consumer = thread::spawn(move || {
            thread::sleep(Duration::from_millis(20));
            let mut reader = MmapReader::build(&path_consumer).unwrap();
            let mut frames_seen = Vec::new();

            let start = std::time::Instant::now();
            let timeout = Duration::from_secs(5);

            while frames_seen.len() < NUM_FRAMES as usize {
                if start.elapsed() > timeout {
                    panic!("consumer timeout: only saw {} frames", frames_seen.len());
                }

                if reader.has_new_data().is_some() {
                    let buffer = reader.buffer();
                    let mut frame_num_bytes = [0u8; 8];
                    frame_num_bytes.copy_from_slice(&buffer[..8]);
                    frames_seen.push(u64::from_le_bytes(frame_num_bytes));
                    reader.mark_read();
                } else {
                    thread::sleep(Duration::from_millis(5));
                }
            }

            frames_seen.len() as u64
        });

        let final_producer_seq = producer.join().expect("producer thread panicked");
        let frames_consumed = consumer.join().expect("consumer thread panicked");

        assert_eq!(final_producer_seq, NUM_FRAMES);
        assert_eq!(frames_consumed, NUM_FRAMES);
    }
}
