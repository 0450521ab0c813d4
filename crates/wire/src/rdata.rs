use std::net::{Ipv4Addr, Ipv6Addr};

use spyglass_dns_domain::{DecodeError, DecodeLimits, RecordClass, RecordData, RecordType};

use crate::name::decode_name;
use crate::view::MessageView;

/// Decodes the rdata span at `offset` according to its (class, type) pair.
///
/// The whole-message view is required because CNAME rdata may contain
/// compression pointers, and those reference absolute message offsets.
/// Unhandled pairs pass through as [`RecordData::Opaque`]; adding a type
/// means adding a match arm.
pub fn decode_rdata(
    view: &MessageView,
    record_type: RecordType,
    class: RecordClass,
    offset: usize,
    len: usize,
    limits: &DecodeLimits,
) -> Result<RecordData, DecodeError> {
    match (class, record_type) {
        (RecordClass::In, RecordType::A) => {
            if len != 4 {
                return Err(DecodeError::MalformedRecord(format!(
                    "A rdata is {} bytes, expected 4",
                    len
                )));
            }
            let bytes = view.slice(offset, 4)?;
            Ok(RecordData::A(Ipv4Addr::new(
                bytes[0], bytes[1], bytes[2], bytes[3],
            )))
        }

        (RecordClass::In, RecordType::AAAA) => {
            if len != 16 {
                return Err(DecodeError::MalformedRecord(format!(
                    "AAAA rdata is {} bytes, expected 16",
                    len
                )));
            }
            let mut octets = [0u8; 16];
            octets.copy_from_slice(view.slice(offset, 16)?);
            Ok(RecordData::Aaaa(Ipv6Addr::from(octets)))
        }

        (RecordClass::In, RecordType::CNAME) => {
            let (name, consumed) = decode_name(view, offset, limits)?;
            if consumed != len {
                return Err(DecodeError::MalformedRecord(format!(
                    "CNAME rdata declares {} bytes but the name field occupies {}",
                    len, consumed
                )));
            }
            Ok(RecordData::CanonicalName(name))
        }

        _ => Ok(RecordData::Opaque(view.slice(offset, len)?.to_vec())),
    }
}
