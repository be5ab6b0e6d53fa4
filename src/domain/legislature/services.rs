use super::entities::{MemberOfParliament, PartyTally};

/// Доменный сервис - агрегация депутатов по партиям
pub struct PartyTallyService;

impl PartyTallyService {
    pub fn new() -> Self {
        Self
    }

    /// Single-pass aggregation: each member increments exactly one bucket,
    /// keyed by the party's English short name.
    pub fn tally_members(&self, mps: &[MemberOfParliament]) -> PartyTally {
        let mut tally = PartyTally::new();
        for mp in mps {
            tally.record(mp.party_name());
        }
        tally
    }

    /// Invariant check: tally counts must sum to the member collection size
    pub fn validate_tally(&self, tally: &PartyTally, mps: &[MemberOfParliament]) -> bool {
        tally.total() == mps.len()
    }
}

impl Default for PartyTallyService {
    fn default() -> Self {
        Self::new()
    }
}
