use commons_dashboard_wasm::domain::legislature::{
    MemberOfParliament, PartyAffiliation, PartyTallyService, RidingAffiliation,
};

fn mp(name: &str, party: &str, riding: &str, province: &str) -> MemberOfParliament {
    MemberOfParliament {
        name: name.to_string(),
        url: format!("https://openparliament.ca/politicians/{name}/"),
        current_party: PartyAffiliation::new(party),
        current_riding: RidingAffiliation::new(riding, province),
        image: format!("https://openparliament.ca/media/{name}.jpg"),
    }
}

#[test]
fn tally_counts_members_per_party() {
    let mps = vec![
        mp("Jane Smith", "Liberal", "Halifax", "NS"),
        mp("Robert Roy", "Bloc Québécois", "Joliette", "QC"),
        mp("Ann Lee", "Liberal", "Davenport", "ON"),
        mp("Gord Hill", "NDP", "Burnaby South", "BC"),
    ];

    let tally = PartyTallyService::new().tally_members(&mps);

    assert_eq!(tally.count_for("Liberal"), 2);
    assert_eq!(tally.count_for("Bloc Québécois"), 1);
    assert_eq!(tally.count_for("NDP"), 1);
    assert_eq!(tally.party_count(), 3);
}

#[test]
fn tally_total_equals_collection_size() {
    let mps = vec![
        mp("Jane Smith", "Liberal", "Halifax", "NS"),
        mp("Ann Lee", "Liberal", "Davenport", "ON"),
        mp("Gord Hill", "NDP", "Burnaby South", "BC"),
    ];

    let service = PartyTallyService::new();
    let tally = service.tally_members(&mps);

    assert_eq!(tally.total(), mps.len());
    assert!(service.validate_tally(&tally, &mps));
}

#[test]
fn empty_collection_yields_empty_tally() {
    let service = PartyTallyService::new();
    let tally = service.tally_members(&[]);

    assert!(tally.is_empty());
    assert_eq!(tally.total(), 0);
    assert_eq!(tally.party_count(), 0);
    assert!(service.validate_tally(&tally, &[]));
}

#[test]
fn each_member_lands_in_exactly_one_bucket() {
    let mps = vec![
        mp("Jane Smith", "Liberal", "Halifax", "NS"),
        mp("Gord Hill", "NDP", "Burnaby South", "BC"),
    ];

    let tally = PartyTallyService::new().tally_members(&mps);
    let buckets: Vec<(&str, usize)> = tally.iter().collect();

    assert_eq!(buckets.len(), 2);
    assert_eq!(tally.count_for("Liberal") + tally.count_for("NDP"), mps.len());
    assert_eq!(tally.count_for("Green"), 0);
}
