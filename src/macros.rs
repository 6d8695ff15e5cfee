/// Compile-time `PackedIdentifier` constructor.
///
/// Packs a string literal into a [`PackedIdentifier`](crate::identifier::PackedIdentifier)
/// during compilation. Literals that are too long or contain symbols outside
/// `a-z`, `A-Z`, `0-9` fail to compile.
///
/// ## Example
///
/// ```rust
/// use idpack::identifier::PackedIdentifier;
/// use idpack::packed_identifier;
///
/// const TIMEOUT: PackedIdentifier = packed_identifier!("RequestTimeout");
/// assert_eq!(TIMEOUT, PackedIdentifier::new("requesttimeout").unwrap());
/// ```
///
/// ```rust,compile_fail
/// let _ = idpack::packed_identifier!("not-valid");
/// ```
#[macro_export]
macro_rules! packed_identifier {
    ($name:literal) => {{
        const ID: $crate::identifier::PackedIdentifier =
            $crate::identifier::PackedIdentifier::from_literal($name);
        ID
    }};
}
