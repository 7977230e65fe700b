use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("payload too large for slot: need {required} bytes, {available} available")]
    PayloadTooLarge { required: usize, available: usize },

    #[error("mapping too small to hold the slot header ({0} bytes)")]
    MappingTooSmall(u64),

    #[error("record verification failed: {0}")]
    InvalidRecord(String),
}
