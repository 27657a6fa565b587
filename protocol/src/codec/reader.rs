//! Little-endian cursor over a borrowed byte slice.
//!
//! [`BinaryReader`] is the single entry point for every decode operation in
//! the codec. It never copies the underlying buffer, never reads past its
//! bounds, and reports exactly how many bytes a failed read wanted. All
//! multi-byte integers are little-endian -- there is no big-endian path
//! anywhere in the wire format.

use super::error::{CodecError, CodecResult};

/// A bounds-checked read cursor over `&[u8]`.
///
/// Each read consumes exactly the requested width or fails with
/// [`CodecError::StreamTruncated`] naming the entity that asked. A reader is
/// a pure cursor: it owns no bytes and holds no state beyond its position,
/// so decoding is a pure function of (position, remaining bytes).
#[derive(Debug)]
pub struct BinaryReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> BinaryReader<'a> {
    /// Wraps a byte slice in a reader positioned at its start.
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left to read.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Returns `true` while at least one byte is left.
    pub fn has_remaining(&self) -> bool {
        self.pos < self.buf.len()
    }

    fn take(&mut self, count: usize, entity: &'static str) -> CodecResult<&'a [u8]> {
        if self.remaining() < count {
            return Err(CodecError::StreamTruncated {
                entity,
                needed: count,
                remaining: self.remaining(),
            });
        }
        let slice = &self.buf[self.pos..self.pos + count];
        self.pos += count;
        Ok(slice)
    }

    /// Reads a single byte.
    pub fn read_u8(&mut self, entity: &'static str) -> CodecResult<u8> {
        Ok(self.take(1, entity)?[0])
    }

    /// Reads a little-endian `u16`.
    pub fn read_u16(&mut self, entity: &'static str) -> CodecResult<u16> {
        let bytes = self.take(2, entity)?;
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    /// Reads a little-endian `u32`.
    pub fn read_u32(&mut self, entity: &'static str) -> CodecResult<u32> {
        let bytes = self.take(4, entity)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Reads a little-endian `u64`.
    pub fn read_u64(&mut self, entity: &'static str) -> CodecResult<u64> {
        let bytes = self.take(8, entity)?;
        let mut arr = [0u8; 8];
        arr.copy_from_slice(bytes);
        Ok(u64::from_le_bytes(arr))
    }

    /// Reads a signed byte.
    pub fn read_i8(&mut self, entity: &'static str) -> CodecResult<i8> {
        Ok(self.read_u8(entity)? as i8)
    }

    /// Reads a little-endian `i16`.
    pub fn read_i16(&mut self, entity: &'static str) -> CodecResult<i16> {
        Ok(self.read_u16(entity)? as i16)
    }

    /// Reads a fixed-size byte array.
    pub fn read_array<const N: usize>(&mut self, entity: &'static str) -> CodecResult<[u8; N]> {
        let bytes = self.take(N, entity)?;
        let mut arr = [0u8; N];
        arr.copy_from_slice(bytes);
        Ok(arr)
    }

    /// Reads `count` bytes into an owned vector.
    pub fn read_vec(&mut self, count: usize, entity: &'static str) -> CodecResult<Vec<u8>> {
        Ok(self.take(count, entity)?.to_vec())
    }

    /// Consumes `count` bytes without interpreting them.
    ///
    /// Used for reserved fields and inter-element padding: the bytes must be
    /// present, but their content is ignored.
    pub fn skip(&mut self, count: usize, entity: &'static str) -> CodecResult<()> {
        self.take(count, entity)?;
        Ok(())
    }

    /// Splits off a bounded sub-reader over the next `len` bytes.
    ///
    /// The parent cursor advances past the region immediately; the returned
    /// reader cannot see beyond it. This is how budget-bounded "remaining"
    /// collections (the aggregate payload) are decoded.
    pub fn sub_reader(&mut self, len: usize, entity: &'static str) -> CodecResult<BinaryReader<'a>> {
        Ok(BinaryReader::new(self.take(len, entity)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_little_endian_integers() {
        let bytes = [0x01, 0x00, 0x02, 0x01, 0x04, 0x03, 0x02, 0x01];
        let mut reader = BinaryReader::new(&bytes);
        assert_eq!(reader.read_u8("test").unwrap(), 1);
        assert_eq!(reader.read_u16("test").unwrap(), 0x0102);
        assert_eq!(reader.read_u32("test").unwrap(), 0x01020304);
        assert!(!reader.has_remaining());
    }

    #[test]
    fn read_u64_consumes_eight_bytes() {
        let bytes = [0x01, 0, 0, 0, 0, 0, 0, 0, 0xFF];
        let mut reader = BinaryReader::new(&bytes);
        assert_eq!(reader.read_u64("test").unwrap(), 1);
        assert_eq!(reader.position(), 8);
        assert_eq!(reader.remaining(), 1);
    }

    #[test]
    fn truncated_read_reports_needed_and_remaining() {
        let mut reader = BinaryReader::new(&[0x01, 0x02, 0x03]);
        let err = reader.read_u64("Height").unwrap_err();
        assert_eq!(
            err,
            CodecError::StreamTruncated {
                entity: "Height",
                needed: 8,
                remaining: 3,
            }
        );
        // A failed read consumes nothing.
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn signed_reads_preserve_sign() {
        let mut reader = BinaryReader::new(&[0xFF, 0xFE, 0xFF]);
        assert_eq!(reader.read_i8("test").unwrap(), -1);
        assert_eq!(reader.read_i16("test").unwrap(), -2);
    }

    #[test]
    fn sub_reader_is_bounded() {
        let bytes = [1, 2, 3, 4, 5];
        let mut reader = BinaryReader::new(&bytes);
        let mut sub = reader.sub_reader(3, "test").unwrap();
        assert_eq!(sub.read_vec(3, "test").unwrap(), vec![1, 2, 3]);
        assert!(sub.read_u8("test").is_err());
        // The parent skipped straight past the region.
        assert_eq!(reader.read_u8("test").unwrap(), 4);
    }

    #[test]
    fn skip_consumes_without_interpreting() {
        let mut reader = BinaryReader::new(&[0xAA, 0xBB, 0xCC]);
        reader.skip(2, "test").unwrap();
        assert_eq!(reader.read_u8("test").unwrap(), 0xCC);
    }

    #[test]
    fn read_array_roundtrip() {
        let mut reader = BinaryReader::new(&[9, 8, 7, 6]);
        let arr: [u8; 4] = reader.read_array("test").unwrap();
        assert_eq!(arr, [9, 8, 7, 6]);
    }
}
