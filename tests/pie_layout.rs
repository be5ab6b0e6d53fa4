use commons_dashboard_wasm::domain::chart::{
    FALLBACK_PARTY_COLOR, PIE_START_ANGLE, Party, PieLayoutService,
};
use commons_dashboard_wasm::domain::legislature::PartyTally;
use std::f64::consts::TAU;

#[test]
fn empty_tally_renders_zero_segments() {
    let layout = PieLayoutService::new().layout(&PartyTally::new());
    assert!(layout.is_empty());
}

#[test]
fn single_party_fills_the_circle() {
    let mut tally = PartyTally::new();
    tally.record("Liberal");
    tally.record("Liberal");

    let layout = PieLayoutService::new().layout(&tally);

    assert_eq!(layout.len(), 1);
    assert_eq!(layout[0].count, 2);
    assert_eq!(layout[0].fraction, 1.0);
    assert_eq!(layout[0].start_angle, PIE_START_ANGLE);
    assert_eq!(layout[0].end_angle, PIE_START_ANGLE + TAU);
}

#[test]
fn slices_are_contiguous_and_cover_the_circle() {
    let mut tally = PartyTally::new();
    for _ in 0..3 {
        tally.record("Conservative");
    }
    for _ in 0..2 {
        tally.record("Liberal");
    }
    tally.record("NDP");

    let layout = PieLayoutService::new().layout(&tally);

    assert_eq!(layout.len(), 3);
    for pair in layout.windows(2) {
        assert_eq!(pair[0].end_angle, pair[1].start_angle);
    }
    assert_eq!(layout[0].start_angle, PIE_START_ANGLE);
    assert_eq!(layout.last().unwrap().end_angle, PIE_START_ANGLE + TAU);

    let fraction_sum: f64 = layout.iter().map(|slice| slice.fraction).sum();
    assert!((fraction_sum - 1.0).abs() < 1e-9);
}

#[test]
fn counts_follow_tally_order() {
    let mut tally = PartyTally::new();
    tally.record("NDP");
    tally.record("Conservative");
    tally.record("Conservative");

    let layout = PieLayoutService::new().layout(&tally);

    // BTreeMap key order: Conservative before NDP
    assert_eq!(layout[0].label, "Conservative");
    assert_eq!(layout[0].count, 2);
    assert_eq!(layout[1].label, "NDP");
    assert_eq!(layout[1].count, 1);
}

#[test]
fn unlisted_party_gets_fallback_color() {
    let mut tally = PartyTally::new();
    tally.record("Rhinoceros");
    tally.record("Liberal");

    let layout = PieLayoutService::new().layout(&tally);

    let rhino = layout.iter().find(|slice| slice.label == "Rhinoceros").unwrap();
    let liberal = layout.iter().find(|slice| slice.label == "Liberal").unwrap();

    assert_eq!(rhino.color, FALLBACK_PARTY_COLOR);
    assert_eq!(liberal.color, Party::Liberal.color());
}

#[test]
fn slice_lookup_by_angle() {
    let mut tally = PartyTally::new();
    tally.record("Conservative");
    tally.record("Liberal");

    let service = PieLayoutService::new();
    let layout = service.layout(&tally);

    let first = service.slice_at(&layout, PIE_START_ANGLE).unwrap();
    assert_eq!(first.label, layout[0].label);

    let past_half = service.slice_at(&layout, PIE_START_ANGLE + TAU * 0.75).unwrap();
    assert_eq!(past_half.label, layout[1].label);

    // Wrapped angles land in the same slices
    let wrapped = service.slice_at(&layout, PIE_START_ANGLE - TAU * 0.25).unwrap();
    assert_eq!(wrapped.label, layout[1].label);

    assert!(service.slice_at(&[], 0.0).is_none());
}
