mod fold;
mod hash_error;
mod mix;
mod murmur3_x86_32;
mod murmur3_x86_128;

pub use fold::fold_to_u16;
pub use hash_error::HashInputError;
pub use murmur3_x86_32::{hash32, hash32_range};
pub use murmur3_x86_128::hash128;
