//! Spyglass DNS Wire Layer
//!
//! Decodes one raw DNS message (the UDP payload, starting at the 12-byte
//! header) into the domain-layer structures. Pure and synchronous: the
//! caller hands in a byte buffer, the decoder hands back a [`Message`] or
//! a [`DecodeError`], and nothing is shared between calls.
//!
//! [`Message`]: spyglass_dns_domain::Message
//! [`DecodeError`]: spyglass_dns_domain::DecodeError
pub mod message;
pub mod name;
pub mod rdata;
pub mod section;
pub mod view;

pub use message::MessageDecoder;
pub use name::decode_name;
pub use rdata::decode_rdata;
pub use section::{parse_question, parse_record};
pub use view::MessageView;
