use crate::error::{EncodeError, EncodeResult};

/// Growable byte sink for encoded output.
///
/// All growth goes through `try_reserve`, so exhausted memory surfaces as
/// [`EncodeError::AllocationFailure`] instead of aborting the process. The
/// backing `Vec` grows geometrically, keeping appends amortized O(1) per
/// byte.
#[derive(Debug, Default)]
pub(crate) struct OutputBuffer {
    bytes: Vec<u8>,
}

impl OutputBuffer {
    pub fn write_byte(&mut self, byte: u8) -> EncodeResult<()> {
        self.reserve(1)?;
        self.bytes.push(byte);

        Ok(())
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> EncodeResult<()> {
        self.reserve(bytes.len())?;
        self.bytes.extend_from_slice(bytes);

        Ok(())
    }

    /// Write an `i64` as decimal digits, with no intermediate heap string.
    pub fn write_decimal_i64(&mut self, value: i64) -> EncodeResult<()> {
        let mut digits = itoa::Buffer::new();

        self.write_bytes(digits.format(value).as_bytes())
    }

    /// Write a byte length as decimal digits.
    pub fn write_length(&mut self, length: usize) -> EncodeResult<()> {
        let mut digits = itoa::Buffer::new();

        self.write_bytes(digits.format(length).as_bytes())
    }

    pub fn capacity(&self) -> usize {
        self.bytes.capacity()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Copy the finished output out; the buffer itself stays reusable.
    pub fn to_bytes(&self) -> EncodeResult<Vec<u8>> {
        let mut output = Vec::new();
        output
            .try_reserve_exact(self.bytes.len())
            .map_err(|_| EncodeError::AllocationFailure)?;
        output.extend_from_slice(self.as_slice());

        Ok(output)
    }

    /// Reset the length to zero, retaining capacity for reuse.
    pub fn clear(&mut self) {
        self.bytes.clear();
    }

    fn reserve(&mut self, additional: usize) -> EncodeResult<()> {
        self.bytes
            .try_reserve(additional)
            .map_err(|_| EncodeError::AllocationFailure)
    }
}
