use idpack::identifier::{IdentifierError, PackedIdentifier};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

fn random_identifier(rng: &mut StdRng, max_length: usize) -> String {
    let length = rng.random_range(0..=max_length);
    (0..length)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

fn packed(identifier: &str) -> PackedIdentifier {
    PackedIdentifier::new(identifier).expect("identifier should pack")
}

#[test]
fn equality_is_case_insensitive() {
    assert_eq!(packed("asdf"), packed("asdf"));
    assert_eq!(packed("Asdf"), packed("asdF"));
    assert_eq!(packed("Abc"), packed("abc"));
    assert_ne!(packed("Asdf"), packed("1234"));
    assert_ne!(packed("Abcd"), packed("1234"));
}

#[test]
fn decodes_to_lower_case() {
    let names = [
        "",
        "a",
        "aa",
        "A9",
        "Abcdefghijklmnopqrst",
        "999999999999999999999999",
    ];

    let decoded: Vec<String> = names.iter().map(|name| packed(name).to_string()).collect();
    let expected: Vec<String> = names.iter().map(|name| name.to_lowercase()).collect();

    assert_eq!(decoded, expected);
}

#[test]
fn random_identifiers_round_trip() {
    let mut rng = StdRng::seed_from_u64(0x1d_5eed);

    for _ in 0..2_000 {
        let name = random_identifier(&mut rng, PackedIdentifier::MAX_LENGTH);
        let id = packed(&name);

        assert_eq!(id.to_string(), name.to_lowercase(), "name {name:?}");
        assert_eq!(id.len(), name.len());
        assert_eq!(String::from(id), name.to_lowercase());
    }
}

#[test]
fn rejects_invalid_identifiers() {
    for name in ["a ", "aaaaaaaaaaaaaaaaaaaaaaaaa", "!"] {
        assert!(PackedIdentifier::new(name).is_err(), "name {name:?}");
    }

    assert_eq!(
        PackedIdentifier::new(&"9".repeat(25)),
        Err(IdentifierError::LengthExceeded {
            length: 25,
            max: 24
        })
    );
}

#[test]
fn invalid_character_error_names_the_symbol() {
    assert_eq!(
        PackedIdentifier::new("a "),
        Err(IdentifierError::InvalidCharacter {
            character: ' ',
            position: 1
        })
    );
    assert_eq!(
        PackedIdentifier::new("snake_case"),
        Err(IdentifierError::InvalidCharacter {
            character: '_',
            position: 5
        })
    );
    assert_eq!(
        PackedIdentifier::new("abcdefghijklmnop-q"),
        Err(IdentifierError::InvalidCharacter {
            character: '-',
            position: 16
        })
    );
    assert_eq!(
        PackedIdentifier::new("café"),
        Err(IdentifierError::InvalidCharacter {
            character: 'é',
            position: 3
        })
    );

    let message = PackedIdentifier::new("!").unwrap_err().to_string();
    assert!(message.contains("'!'"), "message {message:?}");
}

#[test]
fn length_is_counted_in_characters() {
    // 24 characters, more than 24 bytes: the character check reports it
    let name = format!("{}é", "a".repeat(23));
    assert_eq!(
        PackedIdentifier::new(&name),
        Err(IdentifierError::InvalidCharacter {
            character: 'é',
            position: 23
        })
    );
}

#[test]
fn empty_identifier_is_canonical() {
    assert_eq!(packed(""), PackedIdentifier::EMPTY);
    assert_eq!(PackedIdentifier::default(), PackedIdentifier::EMPTY);
    assert_eq!(
        PackedIdentifier::from_option(None),
        Ok(PackedIdentifier::EMPTY)
    );
    assert_eq!(
        PackedIdentifier::from_option(Some("")),
        Ok(PackedIdentifier::EMPTY)
    );
    assert_eq!(PackedIdentifier::EMPTY.words(), (0, 0));
    assert_eq!(PackedIdentifier::EMPTY.to_string(), "");
    assert!(PackedIdentifier::EMPTY.is_empty());
    assert_eq!(PackedIdentifier::EMPTY.len(), 0);
}

#[test]
fn only_the_empty_identifier_has_a_zero_first_word() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..500 {
        let name = random_identifier(&mut rng, PackedIdentifier::MAX_LENGTH);
        let id = packed(&name);
        assert_eq!(id.a() == 0, name.is_empty(), "name {name:?}");
    }
}

#[test]
fn second_word_holds_symbols_past_the_twelfth() {
    let short = packed("abcdefghijkl");
    assert_eq!(short.b(), 0);

    let long = packed("abcdefghijklab");
    assert_eq!(long.a(), short.a());
    assert_eq!(long.b(), packed("ab").a());
    assert_eq!(long.to_string(), "abcdefghijklab");
}

#[test]
fn packs_with_positional_radix_37() {
    // "ab" -> 1 * (0 + 1) + 37 * (1 + 1)
    assert_eq!(packed("ab").words(), (75, 0));
    assert_eq!(packed("9").words(), (36, 0));
    assert_eq!(packed("abcdefghijkl").a(), 2189237897003900622);
}

#[test]
fn ordering_follows_the_packed_words() {
    let mut rng = StdRng::seed_from_u64(42);
    let ids: Vec<PackedIdentifier> = (0..200)
        .map(|_| packed(&random_identifier(&mut rng, PackedIdentifier::MAX_LENGTH)))
        .collect();

    for x in &ids {
        for y in &ids {
            assert_eq!(x.cmp(y), x.words().cmp(&y.words()));
        }
    }

    let sample = &ids[..60];
    for x in sample {
        for y in sample {
            for z in sample {
                if x < y && y < z {
                    assert!(x < z, "{x:?} < {y:?} < {z:?}");
                }
                if x <= y && y <= z {
                    assert!(x <= z, "{x:?} <= {y:?} <= {z:?}");
                }
            }
        }
    }
}

#[test]
fn ordering_is_not_alphabetical() {
    // The first symbol is the least significant digit of `a`
    assert!(packed("b") < packed("aa"));
    assert!("b" > "aa");
}

#[test]
fn distinct_names_pack_to_distinct_values() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut names = HashSet::new();
    let mut ids = HashSet::new();

    for _ in 0..2_000 {
        let name = random_identifier(&mut rng, PackedIdentifier::MAX_LENGTH).to_lowercase();
        if names.insert(name.clone()) {
            assert!(ids.insert(packed(&name)), "collision for {name:?}");
        }
    }
}

#[test]
fn string_conversions() {
    let parsed: PackedIdentifier = "UserName".parse().unwrap();
    let from_str = PackedIdentifier::try_from("USERNAME").unwrap();
    let from_string = PackedIdentifier::try_from(String::from("username")).unwrap();

    assert_eq!(parsed, from_str);
    assert_eq!(parsed, from_string);
    assert_eq!(String::from(parsed), "username");
    assert!("user name".parse::<PackedIdentifier>().is_err());
}

#[test]
fn byte_layout_round_trips() {
    let id = packed("ConnectionPoolMaxIdle42");
    let bytes = id.to_le_bytes();

    assert_eq!(&bytes[..8], &id.a().to_le_bytes());
    assert_eq!(&bytes[8..], &id.b().to_le_bytes());
    assert_eq!(PackedIdentifier::from_le_bytes(bytes), Ok(id));
    assert_eq!(PackedIdentifier::from_words(id.a(), id.b()), Ok(id));
}

#[test]
fn rejects_words_packing_cannot_produce() {
    // A zero digit below the highest symbol
    assert_eq!(
        PackedIdentifier::from_words(37, 0),
        Err(IdentifierError::MalformedWords { a: 37, b: 0 })
    );
    // `b` set while `a` is empty or not full
    assert!(PackedIdentifier::from_words(0, 1).is_err());
    assert!(PackedIdentifier::from_words(packed("abc").a(), 1).is_err());
    // More than 12 symbols in one word
    assert!(PackedIdentifier::from_words(u64::MAX, 0).is_err());

    let mut bytes = [0u8; 16];
    bytes[8] = 1;
    assert!(PackedIdentifier::from_le_bytes(bytes).is_err());
}

#[test]
fn debug_shows_the_decoded_text() {
    let debug = format!("{:?}", packed("Abc"));
    assert!(debug.contains("text: abc"), "{debug}");
}
