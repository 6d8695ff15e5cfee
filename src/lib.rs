//! Compact, deterministic encoding and hashing of short identifiers.
//!
//! - [`hash`]: MurmurHash3 (x86_32 and x86_128) over raw bytes.
//! - [`identifier::PackedIdentifier`]: case-insensitive identifiers of up to
//!   24 symbols packed into two `u64` words.
//! - [`identifier::identifier_hash`]: `u32` ids for identifiers of any length.
//!
//! None of the hashes here are cryptographic.

pub mod constants;
pub mod hash;
pub mod identifier;
mod macros;
