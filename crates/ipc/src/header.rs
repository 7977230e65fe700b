use std::sync::atomic::AtomicU64;

/// Shared-memory slot header.
///
/// Writer protocol:
/// 1. Write payload bytes into the data region
/// 2. Publish the sequence with `Ordering::Release`
///
/// Reader protocol:
/// 1. Load the sequence with `Ordering::Acquire`
/// 2. If the sequence changed, the payload is guaranteed visible
///
/// The Release-Acquire pair ensures all payload writes happen-before the
/// sequence store, and the sequence load happens-before any payload read.
/// Readers additionally re-load the sequence after reading the payload to
/// reject publications that overlapped the read (torn reads).
///
/// `#[repr(C, align(8))]` keeps the AtomicU64 8-byte aligned regardless of
/// how the mapping is obtained, which atomic operations require.
#[repr(C, align(8))]
pub struct Header {
    /// Monotonically increasing sequence number.
    /// Starts at 0, increments once per publication.
    /// 0 means "no record ever published".
    pub sequence: AtomicU64,
}

impl Header {
    pub const SIZE: usize = std::mem::size_of::<Self>();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_alignment() {
        assert_eq!(
            std::mem::align_of::<Header>(),
            8,
            "Header must be 8-byte aligned for AtomicU64"
        );
    }

    #[test]
    fn test_header_size() {
        assert_eq!(Header::SIZE, 8, "Header is exactly the sequence counter");
    }
}
