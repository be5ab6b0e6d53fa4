pub use super::value_objects::{BilingualTitle, LegisinfoId, PartyAffiliation, RidingAffiliation};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Domain entity - Bill
///
/// Immutable once fetched; `legisinfo_id` is the identity key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    pub session: String,
    pub legisinfo_id: LegisinfoId,
    pub introduced: String,
    pub name: BilingualTitle,
    pub number: String,
    pub url: String,
}

impl Bill {
    /// Display heading, e.g. "C-11: An Act to amend the Broadcasting Act"
    pub fn heading(&self) -> String {
        format!("{}: {}", self.number, self.name.en)
    }

    pub fn english_title(&self) -> &str {
        &self.name.en
    }
}

/// Domain entity - Member of Parliament
///
/// Immutable once fetched; `name` is the identity key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberOfParliament {
    pub name: String,
    pub url: String,
    pub current_party: PartyAffiliation,
    pub current_riding: RidingAffiliation,
    pub image: String,
}

impl MemberOfParliament {
    /// English short name of the member's current party
    pub fn party_name(&self) -> &str {
        &self.current_party.short_name.en
    }

    /// "Riding, Province" label for list rendering
    pub fn riding_label(&self) -> String {
        format!("{}, {}", self.current_riding.name.en, self.current_riding.province)
    }
}

/// Derived aggregate - seat count per party, keyed by the party's
/// English short name. Lexicographic key order keeps rendering stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyTally {
    counts: BTreeMap<String, usize>,
}

impl PartyTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one member for the given party
    pub fn record(&mut self, party: &str) {
        *self.counts.entry(party.to_string()).or_insert(0) += 1;
    }

    pub fn count_for(&self, party: &str) -> usize {
        self.counts.get(party).copied().unwrap_or(0)
    }

    /// Sum of all buckets; must equal the size of the member collection
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Number of distinct parties
    pub fn party_count(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(party, count)| (party.as_str(), *count))
    }
}
