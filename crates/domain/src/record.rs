use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

use serde::Serialize;

use crate::name::DomainName;
use crate::record_class::RecordClass;
use crate::record_type::RecordType;

/// Decoded rdata, tagged by what the (class, type) pair said it holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RecordData {
    A(Ipv4Addr),
    Aaaa(Ipv6Addr),
    CanonicalName(DomainName),
    /// Raw bytes for every type the decoder does not interpret.
    Opaque(Vec<u8>),
}

impl fmt::Display for RecordData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordData::A(addr) => write!(f, "{}", addr),
            RecordData::Aaaa(addr) => write!(f, "{}", addr),
            RecordData::CanonicalName(name) => write!(f, "{}", name),
            // RFC 3597 generic rdata notation.
            RecordData::Opaque(bytes) => {
                write!(f, "\\# {}", bytes.len())?;
                if !bytes.is_empty() {
                    write!(f, " ")?;
                    for b in bytes {
                        write!(f, "{:02x}", b)?;
                    }
                }
                Ok(())
            }
        }
    }
}

/// One entry of the answer, authority, or additional section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceRecord {
    pub name: DomainName,
    pub record_type: RecordType,
    pub class: RecordClass,
    pub ttl: u32,
    pub rdata_len: u16,
    pub data: RecordData,
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.name, self.ttl, self.class, self.record_type, self.data
        )
    }
}
