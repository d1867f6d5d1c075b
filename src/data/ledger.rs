//! The suspect ledger
//!
//! A chained hash table mapping clue text to the suspect it implicates.
//! Insertion prepends to the bucket chain and never searches for an existing
//! key, so repeated insertions of the same clue all stay in the ledger.

use serde::{Deserialize, Serialize};

/// Number of fixed buckets.
const BUCKETS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct LedgerEntry {
    clue: String,
    suspect: String,
    next: Option<Box<LedgerEntry>>,
}

/// Ledger of every clue→suspect relation recorded during the investigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuspectLedger {
    buckets: Vec<Option<Box<LedgerEntry>>>,
}

impl Default for SuspectLedger {
    fn default() -> Self {
        Self {
            buckets: (0..BUCKETS).map(|_| None).collect(),
        }
    }
}

/// Sum of the key's byte values, modulo the bucket count. Collisions are
/// common for short alphabetic keys and that is fine here.
fn bucket_of(key: &str) -> usize {
    key.bytes().map(usize::from).sum::<usize>() % BUCKETS
}

impl SuspectLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a clue→suspect relation. O(1) prepend; duplicates accumulate.
    pub fn insert(&mut self, clue: &str, suspect: &str) {
        let bucket = &mut self.buckets[bucket_of(clue)];
        let next = bucket.take();
        *bucket = Some(Box::new(LedgerEntry {
            clue: clue.to_string(),
            suspect: suspect.to_string(),
            next,
        }));
    }

    /// Every entry, in bucket-index order and newest-first within a bucket.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.buckets.iter().flat_map(|bucket| ChainIter {
            next: bucket.as_deref(),
        })
    }

    /// The suspect cited by the most entries, with their citation count.
    ///
    /// Counts are per distinct suspect name, exact string equality. Ties go
    /// to the suspect seen first in [`entries`](Self::entries) scan order;
    /// a later suspect only wins with a strictly greater count. `None` when
    /// the ledger is empty.
    pub fn most_cited(&self) -> Option<(String, usize)> {
        let mut tallies: Vec<(&str, usize)> = Vec::new();
        for (_, suspect) in self.entries() {
            match tallies.iter_mut().find(|(name, _)| *name == suspect) {
                Some((_, count)) => *count += 1,
                None => tallies.push((suspect, 1)),
            }
        }

        let mut best: Option<(&str, usize)> = None;
        for &(name, count) in &tallies {
            if best.map_or(true, |(_, max)| count > max) {
                best = Some((name, count));
            }
        }
        best.map(|(name, count)| (name.to_string(), count))
    }

    pub fn len(&self) -> usize {
        self.entries().count()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Option::is_none)
    }
}

struct ChainIter<'a> {
    next: Option<&'a LedgerEntry>,
}

impl<'a> Iterator for ChainIter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.next?;
        self.next = entry.next.as_deref();
        Some((entry.clue.as_str(), entry.suspect.as_str()))
    }
}
