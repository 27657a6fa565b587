//! Little-endian byte sink for the encode path.
//!
//! Encoding never fails: [`BinaryWriter`] grows as needed and every write
//! is a pure append. Size mismatches are therefore impossible to produce on
//! the write path as long as `wire_size()` and `write_to()` agree, which is
//! exactly the property the round-trip tests pin down.

/// An append-only byte buffer with little-endian integer writes.
#[derive(Debug, Default)]
pub struct BinaryWriter {
    buf: Vec<u8>,
}

impl BinaryWriter {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Creates a writer with pre-allocated capacity.
    ///
    /// Callers that know `wire_size()` up front should use this to avoid
    /// reallocation during serialization.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Bytes written so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Appends a single byte.
    pub fn write_u8(&mut self, value: u8) {
        self.buf.push(value);
    }

    /// Appends a `u16` in little-endian order.
    pub fn write_u16(&mut self, value: u16) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Appends a `u32` in little-endian order.
    pub fn write_u32(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Appends a `u64` in little-endian order.
    pub fn write_u64(&mut self, value: u64) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Appends a signed byte.
    pub fn write_i8(&mut self, value: i8) {
        self.buf.push(value as u8);
    }

    /// Appends an `i16` in little-endian order.
    pub fn write_i16(&mut self, value: i16) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Appends raw bytes verbatim.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Appends `count` zero bytes. Used for reserved fields and padding.
    pub fn write_zeros(&mut self, count: usize) {
        self.buf.resize(self.buf.len() + count, 0);
    }

    /// Consumes the writer and returns the accumulated bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Borrows the accumulated bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_are_little_endian() {
        let mut writer = BinaryWriter::new();
        writer.write_u16(0x0102);
        writer.write_u32(0x01020304);
        assert_eq!(writer.into_bytes(), vec![0x02, 0x01, 0x04, 0x03, 0x02, 0x01]);
    }

    #[test]
    fn u64_low_byte_first() {
        let mut writer = BinaryWriter::new();
        writer.write_u64(1);
        assert_eq!(writer.into_bytes(), vec![1, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn signed_writes_are_twos_complement() {
        let mut writer = BinaryWriter::new();
        writer.write_i8(-1);
        writer.write_i16(-2);
        assert_eq!(writer.into_bytes(), vec![0xFF, 0xFE, 0xFF]);
    }

    #[test]
    fn write_zeros_appends_exactly_count() {
        let mut writer = BinaryWriter::new();
        writer.write_u8(0xAA);
        writer.write_zeros(3);
        assert_eq!(writer.into_bytes(), vec![0xAA, 0, 0, 0]);
    }

    #[test]
    fn len_tracks_written_bytes() {
        let mut writer = BinaryWriter::with_capacity(16);
        assert!(writer.is_empty());
        writer.write_bytes(&[1, 2, 3]);
        assert_eq!(writer.len(), 3);
    }
}
