use spyglass_dns_domain::{
    DecodeError, DecodeLimits, Question, RecordClass, RecordType, ResourceRecord,
};

use crate::name::decode_name;
use crate::rdata::decode_rdata;
use crate::view::MessageView;

/// Parses one question entry at `offset`: name, then 16-bit type and class.
pub fn parse_question(
    view: &MessageView,
    offset: usize,
    limits: &DecodeLimits,
) -> Result<(Question, usize), DecodeError> {
    let (name, name_len) = decode_name(view, offset, limits)?;
    let record_type = RecordType::from_u16(view.read_u16(offset + name_len)?);
    let class = RecordClass::from_u16(view.read_u16(offset + name_len + 2)?);
    Ok((Question::new(name, record_type, class), name_len + 4))
}

/// Parses one resource record at `offset`: name, then type, class, TTL,
/// rdata length, and the rdata span itself.
pub fn parse_record(
    view: &MessageView,
    offset: usize,
    limits: &DecodeLimits,
) -> Result<(ResourceRecord, usize), DecodeError> {
    let (name, name_len) = decode_name(view, offset, limits)?;
    let mut pos = offset + name_len;

    let record_type = RecordType::from_u16(view.read_u16(pos)?);
    pos += 2;
    let class = RecordClass::from_u16(view.read_u16(pos)?);
    pos += 2;
    let ttl = view.read_u32(pos)?;
    pos += 4;
    let rdata_len = view.read_u16(pos)?;
    pos += 2;

    // The length field itself is the inconsistent datum here, so this is
    // a record error rather than a plain bounds error.
    let rdata_span = rdata_len as usize;
    if pos + rdata_span > view.len() {
        return Err(DecodeError::MalformedRecord(format!(
            "rdata length {} at offset {} runs past the {}-byte message",
            rdata_len,
            pos,
            view.len()
        )));
    }

    let data = decode_rdata(view, record_type, class, pos, rdata_span, limits)?;

    Ok((
        ResourceRecord {
            name,
            record_type,
            class,
            ttl,
            rdata_len,
            data,
        },
        name_len + 10 + rdata_span,
    ))
}
