#![allow(dead_code)]

/// Wire-format message encoder used only by tests.
///
/// Writes names uncompressed; compression pointers are placed explicitly
/// with `push_pointer` so tests control exactly where they land and what
/// they target.
pub struct MessageBuilder {
    buf: Vec<u8>,
}

impl MessageBuilder {
    /// A builder holding an all-zero 12-byte header.
    pub fn new() -> Self {
        Self { buf: vec![0u8; 12] }
    }

    pub fn with_header(
        id: u16,
        flags: u16,
        qdcount: u16,
        ancount: u16,
        nscount: u16,
        arcount: u16,
    ) -> Self {
        let mut builder = Self::new();
        builder.buf[0..2].copy_from_slice(&id.to_be_bytes());
        builder.buf[2..4].copy_from_slice(&flags.to_be_bytes());
        builder.buf[4..6].copy_from_slice(&qdcount.to_be_bytes());
        builder.buf[6..8].copy_from_slice(&ancount.to_be_bytes());
        builder.buf[8..10].copy_from_slice(&nscount.to_be_bytes());
        builder.buf[10..12].copy_from_slice(&arcount.to_be_bytes());
        builder
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Appends an uncompressed name, returning the offset it starts at.
    pub fn push_name(&mut self, name: &str) -> usize {
        let start = self.buf.len();
        let trimmed = name.strip_suffix('.').unwrap_or(name);
        if !trimmed.is_empty() {
            for label in trimmed.split('.') {
                self.buf.push(label.len() as u8);
                self.buf.extend_from_slice(label.as_bytes());
            }
        }
        self.buf.push(0);
        start
    }

    /// Appends a compression pointer to `target`, returning its offset.
    pub fn push_pointer(&mut self, target: usize) -> usize {
        let start = self.buf.len();
        let word = 0xC000u16 | target as u16;
        self.buf.extend_from_slice(&word.to_be_bytes());
        start
    }

    pub fn push_u8(&mut self, value: u8) {
        self.buf.push(value);
    }

    pub fn push_u16(&mut self, value: u16) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    pub fn push_u32(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Appends a full question entry, returning its offset.
    pub fn push_question(&mut self, name: &str, qtype: u16, qclass: u16) -> usize {
        let start = self.push_name(name);
        self.push_u16(qtype);
        self.push_u16(qclass);
        start
    }

    /// Appends the fixed record fields that follow a record's name.
    pub fn push_record_fields(&mut self, rtype: u16, class: u16, ttl: u32, rdata: &[u8]) {
        self.push_u16(rtype);
        self.push_u16(class);
        self.push_u32(ttl);
        self.push_u16(rdata.len() as u16);
        self.push_bytes(rdata);
    }

    pub fn finish(self) -> Vec<u8> {
        self.buf
    }
}
