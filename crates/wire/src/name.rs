use spyglass_dns_domain::{DecodeError, DecodeLimits, DomainName};

use crate::view::MessageView;

/// Top two bits of a length byte: `11` marks a compression pointer,
/// `00` a literal label. `01` and `10` are reserved label types.
const POINTER_TAG: u8 = 0xC0;

/// Mask selecting the 14-bit target offset out of a pointer word.
const POINTER_OFFSET_MASK: u16 = 0x3FFF;

/// Decodes the (possibly compressed) name field starting at `offset`.
///
/// Returns the name and the number of bytes the field as encoded at
/// `offset` occupies: a terminated label run counts its terminator, a
/// pointer counts exactly its own 2 bytes. Bytes at a pointer's target are
/// shared storage and never counted against the referencing field.
pub fn decode_name(
    view: &MessageView,
    offset: usize,
    limits: &DecodeLimits,
) -> Result<(DomainName, usize), DecodeError> {
    let mut name = DomainName::root();
    let consumed = decode_labels(view, offset, limits, &mut name, 0)?;
    Ok((name, consumed))
}

fn decode_labels(
    view: &MessageView,
    offset: usize,
    limits: &DecodeLimits,
    name: &mut DomainName,
    depth: usize,
) -> Result<usize, DecodeError> {
    if depth > limits.max_pointer_hops {
        return Err(DecodeError::MalformedName(format!(
            "more than {} compression pointer hops",
            limits.max_pointer_hops
        )));
    }

    let mut pos = offset;
    loop {
        let control = view.read_u8(pos)?;

        if control == 0 {
            return Ok(pos - offset + 1);
        }

        if control & POINTER_TAG == POINTER_TAG {
            let word = view.read_u16(pos)?;
            let target = (word & POINTER_OFFSET_MASK) as usize;

            // Wire convention: a name may only reference something that
            // appears earlier in the message. Checked at every hop; the
            // depth cap above bounds hop chains that stay backward.
            if target >= pos {
                return Err(DecodeError::MalformedName(format!(
                    "pointer at offset {} targets offset {}, which is not earlier in the message",
                    pos, target
                )));
            }

            decode_labels(view, target, limits, name, depth + 1)?;

            // Nothing may follow a pointer within the same name field.
            return Ok(pos - offset + 2);
        }

        if control & POINTER_TAG != 0 {
            return Err(DecodeError::MalformedName(format!(
                "reserved label type 0x{:02X} at offset {}",
                control, pos
            )));
        }

        let label_len = control as usize;
        let label_bytes = view.slice(pos + 1, label_len)?;
        let label = String::from_utf8_lossy(label_bytes);
        name.push_label(&label)?;
        pos += 1 + label_len;
    }
}
