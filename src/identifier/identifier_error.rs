use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IdentifierError {
    /// A symbol outside the encoder's alphabet. `position` counts symbols
    /// from the start of the identifier.
    #[error("unsupported character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },

    /// The identifier does not fit into a `PackedIdentifier`.
    #[error("identifier is {length} symbols long; at most {max} are supported")]
    LengthExceeded { length: usize, max: usize },

    /// The words could not have been produced by packing an identifier.
    #[error("words {a:#018x}, {b:#018x} do not encode a packed identifier")]
    MalformedWords { a: u64, b: u64 },
}

impl IdentifierError {
    /// Builds an `InvalidCharacter` error for the symbol starting at byte
    /// `position` of `identifier`.
    ///
    /// Encoders stop at the first rejected byte, so every byte before it is
    /// ASCII and the byte offset doubles as the symbol position.
    pub(crate) fn invalid_character_at(identifier: &str, position: usize) -> Self {
        let character = identifier
            .get(position..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER);

        IdentifierError::InvalidCharacter {
            character,
            position,
        }
    }
}
