mod alphabet;
mod identifier_error;
mod identifier_hash;
mod packed_identifier;
mod radix;

pub use identifier_error::IdentifierError;
pub use identifier_hash::{identifier_hash, packed_words};
pub use packed_identifier::PackedIdentifier;
