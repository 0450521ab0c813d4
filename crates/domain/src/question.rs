use std::fmt;

use serde::Serialize;

use crate::name::DomainName;
use crate::record_class::RecordClass;
use crate::record_type::RecordType;

/// One entry of the question section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub name: DomainName,
    pub record_type: RecordType,
    pub class: RecordClass,
}

impl Question {
    pub fn new(name: DomainName, record_type: RecordType, class: RecordClass) -> Self {
        Self {
            name,
            record_type,
            class,
        }
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.name, self.class, self.record_type)
    }
}
