use crate::errors::SlotError;

/// Verify and access a FlatBuffers root with bounds checking.
///
/// The verifier walks every offset in the record against the supplied buffer
/// length, so malformed or half-written input is rejected without panicking.
pub(crate) fn verified_root<'a, T>(buffer: &'a [u8]) -> Result<T::Inner, SlotError>
where
    T: flatbuffers::Follow<'a> + flatbuffers::Verifiable + 'a,
{
    if buffer.len() < 8 {
        return Err(SlotError::InvalidRecord(format!(
            "buffer too small for flatbuffers: {} bytes",
            buffer.len()
        )));
    }

    flatbuffers::root::<T>(buffer).map_err(|e| SlotError::InvalidRecord(e.to_string()))
}
