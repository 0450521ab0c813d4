use spyglass_dns_domain::DecodeError;

/// Read-only, bounds-checked view over one DNS message buffer.
///
/// Offsets are always absolute (relative to the start of the message)
/// because compression pointers reference absolute offsets, never
/// section-relative ones. Every accessor fails with
/// [`DecodeError::OutOfBounds`] instead of panicking or reading adjacent
/// memory.
#[derive(Debug, Clone, Copy)]
pub struct MessageView<'a> {
    buf: &'a [u8],
}

impl<'a> MessageView<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    fn check(&self, offset: usize, len: usize) -> Result<(), DecodeError> {
        match offset.checked_add(len) {
            Some(end) if end <= self.buf.len() => Ok(()),
            _ => Err(DecodeError::OutOfBounds {
                offset,
                len,
                have: self.buf.len(),
            }),
        }
    }

    pub fn read_u8(&self, offset: usize) -> Result<u8, DecodeError> {
        self.check(offset, 1)?;
        Ok(self.buf[offset])
    }

    pub fn read_u16(&self, offset: usize) -> Result<u16, DecodeError> {
        self.check(offset, 2)?;
        Ok(u16::from_be_bytes([self.buf[offset], self.buf[offset + 1]]))
    }

    pub fn read_u32(&self, offset: usize) -> Result<u32, DecodeError> {
        self.check(offset, 4)?;
        Ok(u32::from_be_bytes([
            self.buf[offset],
            self.buf[offset + 1],
            self.buf[offset + 2],
            self.buf[offset + 3],
        ]))
    }

    pub fn slice(&self, offset: usize, len: usize) -> Result<&'a [u8], DecodeError> {
        self.check(offset, len)?;
        Ok(&self.buf[offset..offset + len])
    }
}

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;
