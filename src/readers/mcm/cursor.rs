use super::ReadError;

/// Cursor over the immutable input bytes. Every read moves the position
/// forward; a read past the end fails with [`ReadError::UnexpectedEof`].
pub(crate) struct ByteCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub(crate) fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], ReadError> {
        let end = self.pos + n;
        if end > self.buf.len() {
            return Err(ReadError::UnexpectedEof {
                offset: self.pos,
                needed: end - self.buf.len(),
            });
        }
        let bytes = &self.buf[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }

    pub(crate) fn read_i32(&mut self) -> Result<i32, ReadError> {
        let b = self.take(4)?;
        Ok(i32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    pub(crate) fn read_u32(&mut self) -> Result<u32, ReadError> {
        let b = self.take(4)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    pub(crate) fn read_f32(&mut self) -> Result<f32, ReadError> {
        let b = self.take(4)?;
        Ok(f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    pub(crate) fn read_f32_array(&mut self, n: usize) -> Result<Vec<f32>, ReadError> {
        let bytes = self.take(n * 4)?;
        Ok(bytes
            .chunks_exact(4)
            .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect())
    }

    pub(crate) fn read_u16_array(&mut self, n: usize) -> Result<Vec<u16>, ReadError> {
        let bytes = self.take(n * 2)?;
        Ok(bytes
            .chunks_exact(2)
            .map(|c| u16::from_le_bytes([c[0], c[1]]))
            .collect())
    }

    /// Reads a length-prefixed string: 4-byte signed byte length, then that
    /// many raw bytes as text. A length of zero or less yields an empty
    /// string without consuming further bytes.
    pub(crate) fn read_string(&mut self) -> Result<String, ReadError> {
        let len = self.read_i32()?;
        if len <= 0 {
            return Ok(String::new());
        }
        let bytes = self.take(len as usize)?;
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }

    /// Reads a count field that is structurally required to be non-negative.
    pub(crate) fn read_count(&mut self, field: &'static str) -> Result<usize, ReadError> {
        let value = self.read_i32()?;
        if value < 0 {
            return Err(ReadError::MalformedCount { field, value });
        }
        Ok(value as usize)
    }
}
