use std::fmt;
use std::str::FromStr;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RecordClass {
    /// Internet, the class every record in practice belongs to.
    In,
    Ch,
    Hs,
    None,
    Any,
    Unknown(u16),
}

impl RecordClass {
    pub fn from_u16(code: u16) -> Self {
        match code {
            1 => RecordClass::In,
            3 => RecordClass::Ch,
            4 => RecordClass::Hs,
            254 => RecordClass::None,
            255 => RecordClass::Any,
            other => RecordClass::Unknown(other),
        }
    }

    pub fn to_u16(&self) -> u16 {
        match self {
            RecordClass::In => 1,
            RecordClass::Ch => 3,
            RecordClass::Hs => 4,
            RecordClass::None => 254,
            RecordClass::Any => 255,
            RecordClass::Unknown(other) => *other,
        }
    }
}

impl fmt::Display for RecordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordClass::In => write!(f, "IN"),
            RecordClass::Ch => write!(f, "CH"),
            RecordClass::Hs => write!(f, "HS"),
            RecordClass::None => write!(f, "NONE"),
            RecordClass::Any => write!(f, "ANY"),
            RecordClass::Unknown(code) => write!(f, "CLASS{}", code),
        }
    }
}

impl FromStr for RecordClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        match upper.as_str() {
            "IN" => Ok(RecordClass::In),
            "CH" => Ok(RecordClass::Ch),
            "HS" => Ok(RecordClass::Hs),
            "NONE" => Ok(RecordClass::None),
            "ANY" => Ok(RecordClass::Any),
            _ => match upper.strip_prefix("CLASS") {
                Some(digits) => digits
                    .parse::<u16>()
                    .map(RecordClass::from_u16)
                    .map_err(|_| format!("Unknown record class: {}", s)),
                None => Err(format!("Unknown record class: {}", s)),
            },
        }
    }
}
