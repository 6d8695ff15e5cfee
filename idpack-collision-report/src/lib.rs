use idpack::hash::{fold_to_u16, hash32};
use idpack::identifier::{IdentifierError, identifier_hash};
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::hash::Hash;

/// A way of turning an identifier into a numeric id, as compared by the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashStrategy {
    /// `hash32` over the identifier's ASCII bytes.
    Murmur32,

    /// `Murmur32` folded to 16 bits.
    Murmur16,

    /// `identifier_hash`.
    Identifier32,

    /// `Identifier32` folded to 16 bits.
    Identifier16,
}

impl HashStrategy {
    pub const ALL: [HashStrategy; 4] = [
        HashStrategy::Murmur32,
        HashStrategy::Murmur16,
        HashStrategy::Identifier32,
        HashStrategy::Identifier16,
    ];

    pub fn label(self) -> &'static str {
        match self {
            HashStrategy::Murmur32 => "murmur3 32bit",
            HashStrategy::Murmur16 => "murmur3 16bit",
            HashStrategy::Identifier32 => "identifier 32bit",
            HashStrategy::Identifier16 => "identifier 16bit",
        }
    }

    /// Computes the id; 16-bit strategies are widened back to `u32`.
    pub fn digest(self, identifier: &str, seed: u32) -> Result<u32, IdentifierError> {
        let digest = match self {
            HashStrategy::Murmur32 => hash32(identifier.as_bytes(), seed),
            HashStrategy::Murmur16 => fold_to_u16(hash32(identifier.as_bytes(), seed)) as u32,
            HashStrategy::Identifier32 => identifier_hash(identifier, seed)?,
            HashStrategy::Identifier16 => fold_to_u16(identifier_hash(identifier, seed)?) as u32,
        };
        Ok(digest)
    }
}

/// Counts the digests that repeat an earlier one.
pub fn count_collisions<T, I>(digests: I) -> usize
where
    T: Hash + Eq,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    let mut collisions = 0;

    for digest in digests {
        if !seen.insert(digest) {
            collisions += 1;
        }
    }

    collisions
}

/// Identifiers prepared for the report, plus what was dropped on the way.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct IdentifierSet {
    /// Lower-cased, deduplicated and sorted.
    pub identifiers: Vec<String>,
    pub skipped_underscored: usize,
    pub skipped_invalid: usize,
}

/// Normalizes raw input lines into an [`IdentifierSet`].
///
/// Lines are trimmed and lower-cased; blank lines are ignored. Names with `_`
/// are dropped unless `keep_underscored` is set, and names the identifier
/// hasher rejects are dropped and counted.
pub fn collect_identifiers<I>(lines: I, keep_underscored: bool) -> IdentifierSet
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut set = IdentifierSet::default();
    let mut unique = BTreeSet::new();

    for line in lines {
        let name = line.as_ref().trim();
        if name.is_empty() {
            continue;
        }

        if !keep_underscored && name.contains('_') {
            set.skipped_underscored += 1;
            continue;
        }

        if let Err(err) = identifier_hash(name, 0) {
            tracing::debug!(name, %err, "skipping identifier");
            set.skipped_invalid += 1;
            continue;
        }

        unique.insert(name.to_ascii_lowercase());
    }

    set.identifiers = unique.into_iter().collect();
    set
}

#[derive(Debug, Clone, PartialEq)]
pub struct StrategyResult {
    pub strategy: HashStrategy,
    pub collisions: usize,
    pub percent: f64,
}

/// Collision statistics for one identifier set.
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionReport {
    pub total: usize,
    pub average_length: f64,
    pub max_length: usize,
    pub results: Vec<StrategyResult>,
}

impl CollisionReport {
    pub fn build(identifiers: &[String], seed: u32) -> Result<Self, IdentifierError> {
        let total = identifiers.len();
        let total_length: usize = identifiers.iter().map(String::len).sum();
        let max_length = identifiers.iter().map(String::len).max().unwrap_or(0);
        let average_length = if total == 0 {
            0.0
        } else {
            total_length as f64 / total as f64
        };

        let mut results = Vec::with_capacity(HashStrategy::ALL.len());
        for strategy in HashStrategy::ALL {
            let digests = identifiers
                .iter()
                .map(|identifier| strategy.digest(identifier, seed))
                .collect::<Result<Vec<u32>, _>>()?;

            let collisions = count_collisions(digests);
            let percent = if total == 0 {
                0.0
            } else {
                collisions as f64 * 100.0 / total as f64
            };

            tracing::debug!(strategy = strategy.label(), collisions, "strategy measured");

            results.push(StrategyResult {
                strategy,
                collisions,
                percent,
            });
        }

        Ok(CollisionReport {
            total,
            average_length,
            max_length,
            results,
        })
    }
}

impl fmt::Display for CollisionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Identifier Count: {}", self.total)?;
        writeln!(f, "Avg. Identifier Length: {:.2}", self.average_length)?;
        writeln!(f, "Max. Identifier Length: {}", self.max_length)?;

        for result in &self.results {
            writeln!(
                f,
                "[{}]\t{} ({:.4}%) collisions.",
                result.strategy.label(),
                result.collisions,
                result.percent
            )?;
        }
        Ok(())
    }
}
