use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::errors::DecodeError;

/// Largest wire-format size of a whole name: labels plus the terminator.
pub const MAX_WIRE_LEN: usize = 255;

/// Largest single label the wire format can carry (6-bit length).
pub const MAX_LABEL_LEN: usize = 63;

/// A decoded domain name: an ordered label sequence with the wire-format
/// size limits enforced on every mutation.
///
/// `wire_len()` tracks the size the name would occupy encoded without
/// compression (one length byte per label, the label bytes, one terminator).
/// `push_label` rejects anything that would take that size past 255 bytes,
/// so a name that decodes successfully is always re-encodable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DomainName {
    labels: Vec<String>,
}

impl DomainName {
    pub fn root() -> Self {
        Self { labels: Vec::new() }
    }

    pub fn is_root(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    /// Bytes the name occupies encoded without compression.
    pub fn wire_len(&self) -> usize {
        self.labels.iter().map(|l| 1 + l.len()).sum::<usize>() + 1
    }

    /// Appends one label, enforcing the per-label and whole-name limits.
    pub fn push_label(&mut self, label: &str) -> Result<(), DecodeError> {
        if label.is_empty() {
            return Err(DecodeError::MalformedName("empty label".to_string()));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(DecodeError::MalformedName(format!(
                "label of {} bytes exceeds the {}-byte limit",
                label.len(),
                MAX_LABEL_LEN
            )));
        }
        if self.wire_len() + 1 + label.len() > MAX_WIRE_LEN {
            return Err(DecodeError::MalformedName(format!(
                "name would exceed the {}-byte wire limit",
                MAX_WIRE_LEN
            )));
        }
        self.labels.push(label.to_string());
        Ok(())
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.labels.is_empty() {
            return write!(f, ".");
        }
        for (i, label) in self.labels.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{}", label)?;
        }
        Ok(())
    }
}

impl FromStr for DomainName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.strip_suffix('.').unwrap_or(s);
        let mut name = DomainName::root();
        if trimmed.is_empty() {
            return Ok(name);
        }
        for label in trimmed.split('.') {
            name.push_label(label)
                .map_err(|e| format!("Invalid domain name '{}': {}", s, e))?;
        }
        Ok(name)
    }
}

impl Serialize for DomainName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
