// src/simulation/results.rs
use std::collections::HashMap;
use std::fmt;

/// Holds the measurement histogram of a circuit execution: classical
/// bit-strings (highest bit leftmost) mapped to occurrence counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationResult {
    counts: HashMap<String, usize>,
    shots: usize,
}

impl SimulationResult {
    /// Creates a result from sampled counts. (Internal visibility)
    pub(crate) fn new(counts: HashMap<String, usize>, shots: usize) -> Self {
        Self { counts, shots }
    }

    /// The histogram mapping measured bit-strings to counts.
    pub fn counts(&self) -> &HashMap<String, usize> {
        &self.counts
    }

    /// Total number of shots sampled.
    pub fn shots(&self) -> usize {
        self.shots
    }

    /// The highest-count key and its count. Ties break toward the
    /// lexicographically smallest key so the answer is deterministic.
    pub fn most_frequent(&self) -> Option<(&str, usize)> {
        self.counts
            .iter()
            .max_by(|(ka, ca), (kb, cb)| ca.cmp(cb).then_with(|| kb.cmp(ka)))
            .map(|(key, count)| (key.as_str(), *count))
    }

    /// Converts a histogram key into a binary vector, leftmost character
    /// first, for comparison against field-element expansions.
    pub fn key_bits(key: &str) -> Vec<u8> {
        key.chars().map(|c| u8::from(c == '1')).collect()
    }
}

impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Simulation Results ({} shots):", self.shots)?;
        if self.counts.is_empty() {
            writeln!(f, "  No measurements were recorded.")?;
        } else {
            // Sort by count (descending), then key, for readable output.
            let mut sorted: Vec<_> = self.counts.iter().collect();
            sorted.sort_by(|(ka, ca), (kb, cb)| cb.cmp(ca).then_with(|| ka.cmp(kb)));
            for (key, count) in sorted {
                writeln!(f, "  {}: {}", key, count)?;
            }
        }
        Ok(())
    }
}
