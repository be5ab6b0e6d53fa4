use commons_dashboard_wasm::domain::legislature::{
    MemberOfParliament, PartyAffiliation, PartyTallyService, RidingAffiliation,
};
use quickcheck_macros::quickcheck;

const PARTIES: [&str; 5] = ["Liberal", "Conservative", "NDP", "Green", "Rhinoceros"];

fn mp_for(index: usize, party: &str) -> MemberOfParliament {
    MemberOfParliament {
        name: format!("Member {index}"),
        url: String::new(),
        current_party: PartyAffiliation::new(party),
        current_riding: RidingAffiliation::new("Somewhere", "ON"),
        image: String::new(),
    }
}

#[quickcheck]
fn tally_total_matches_member_count(party_picks: Vec<u8>) -> bool {
    let mps: Vec<MemberOfParliament> = party_picks
        .iter()
        .enumerate()
        .map(|(index, pick)| mp_for(index, PARTIES[*pick as usize % PARTIES.len()]))
        .collect();

    let service = PartyTallyService::new();
    let tally = service.tally_members(&mps);

    tally.total() == mps.len() && service.validate_tally(&tally, &mps)
}

#[quickcheck]
fn bucket_count_never_exceeds_member_count(party_picks: Vec<u8>) -> bool {
    let mps: Vec<MemberOfParliament> = party_picks
        .iter()
        .enumerate()
        .map(|(index, pick)| mp_for(index, PARTIES[*pick as usize % PARTIES.len()]))
        .collect();

    let tally = PartyTallyService::new().tally_members(&mps);
    tally.party_count() <= mps.len()
}
