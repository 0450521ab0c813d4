use tracing::debug;

use spyglass_dns_domain::{
    DecodeError, DecodeLimits, Header, Message, Opcode, Question, ResourceRecord, ResponseCode,
};

use crate::section::{parse_question, parse_record};
use crate::view::MessageView;

const HEADER_LEN: usize = 12;

/// Decodes whole DNS messages under a set of [`DecodeLimits`].
///
/// Stateless between calls; one decoder may serve any number of decode
/// calls, concurrently, over separate buffers.
#[derive(Debug, Clone, Default)]
pub struct MessageDecoder {
    limits: DecodeLimits,
}

impl MessageDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: DecodeLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &DecodeLimits {
        &self.limits
    }

    /// Decodes one complete DNS message.
    ///
    /// All-or-nothing: the first error aborts the decode, and no partially
    /// populated message is ever returned.
    pub fn decode(&self, buf: &[u8]) -> Result<Message, DecodeError> {
        if buf.len() > self.limits.max_message_len {
            return Err(DecodeError::MalformedMessage(format!(
                "{}-byte message exceeds the {}-byte limit",
                buf.len(),
                self.limits.max_message_len
            )));
        }

        let view = MessageView::new(buf);
        let header = parse_header(&view)?;

        for (count, section) in [
            (header.question_count, "question"),
            (header.answer_count, "answer"),
            (header.authority_count, "authority"),
            (header.additional_count, "additional"),
        ] {
            if count > self.limits.max_section_count {
                return Err(DecodeError::MalformedMessage(format!(
                    "{} section declares {} entries, limit is {}",
                    section, count, self.limits.max_section_count
                )));
            }
        }

        let mut pos = HEADER_LEN;

        let mut questions: Vec<Question> = Vec::with_capacity(header.question_count as usize);
        for index in 0..header.question_count {
            let (question, consumed) = parse_question(&view, pos, &self.limits)
                .map_err(|e| section_error(e, "question", index, header.question_count))?;
            questions.push(question);
            pos += consumed;
        }

        let answers = self.parse_records(&view, &mut pos, header.answer_count, "answer")?;
        let authorities = self.parse_records(&view, &mut pos, header.authority_count, "authority")?;
        let additionals =
            self.parse_records(&view, &mut pos, header.additional_count, "additional")?;

        debug!(
            id = header.id,
            kind = header.kind(),
            questions = questions.len(),
            answers = answers.len(),
            authorities = authorities.len(),
            additionals = additionals.len(),
            "DNS message decoded"
        );

        Ok(Message {
            header,
            questions,
            answers,
            authorities,
            additionals,
        })
    }

    fn parse_records(
        &self,
        view: &MessageView,
        pos: &mut usize,
        count: u16,
        section: &str,
    ) -> Result<Vec<ResourceRecord>, DecodeError> {
        let mut records = Vec::with_capacity(count as usize);
        for index in 0..count {
            let (record, consumed) = parse_record(view, *pos, &self.limits)
                .map_err(|e| section_error(e, section, index, count))?;
            records.push(record);
            *pos += consumed;
        }
        Ok(records)
    }
}

/// A bounds failure inside a section walk means the declared counts cannot
/// be satisfied by the buffer; name and record failures keep their stage.
fn section_error(err: DecodeError, section: &str, index: u16, count: u16) -> DecodeError {
    match err {
        DecodeError::OutOfBounds { .. } => DecodeError::MalformedMessage(format!(
            "{} section truncated at entry {} of {}",
            section,
            index + 1,
            count
        )),
        other => other,
    }
}

fn parse_header(view: &MessageView) -> Result<Header, DecodeError> {
    let id = view.read_u16(0)?;
    let flags = view.read_u16(2)?;
    let question_count = view.read_u16(4)?;
    let answer_count = view.read_u16(6)?;
    let authority_count = view.read_u16(8)?;
    let additional_count = view.read_u16(10)?;

    Ok(Header {
        id,
        response: flags & 0x8000 != 0,
        opcode: Opcode::from_u8(((flags >> 11) & 0x0F) as u8),
        authoritative: flags & 0x0400 != 0,
        truncated: flags & 0x0200 != 0,
        recursion_desired: flags & 0x0100 != 0,
        recursion_available: flags & 0x0080 != 0,
        reserved: ((flags >> 4) & 0x07) as u8,
        response_code: ResponseCode::from_u8((flags & 0x0F) as u8),
        question_count,
        answer_count,
        authority_count,
        additional_count,
    })
}
