use serde::Serialize;

use crate::header::Header;
use crate::question::Question;
use crate::record::ResourceRecord;

/// One fully decoded DNS message. Built fresh per decode call; never
/// partially populated, since a failed decode yields an error instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub header: Header,
    pub questions: Vec<Question>,
    pub answers: Vec<ResourceRecord>,
    pub authorities: Vec<ResourceRecord>,
    pub additionals: Vec<ResourceRecord>,
}

impl Message {
    pub fn record_count(&self) -> usize {
        self.answers.len() + self.authorities.len() + self.additionals.len()
    }
}
