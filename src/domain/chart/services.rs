use super::palette::party_color;
use super::value_objects::{PieSlice, normalize_angle, PIE_START_ANGLE};
use crate::domain::legislature::PartyTally;
use std::f64::consts::TAU;

/// Доменный сервис - раскладка круговой диаграммы
pub struct PieLayoutService;

impl PieLayoutService {
    pub fn new() -> Self {
        Self
    }

    /// Map a tally to contiguous slices in the tally's deterministic order.
    ///
    /// The final slice's end angle is pinned to the exact full circle so
    /// floating-point drift never leaves a gap. An empty tally yields no
    /// slices.
    pub fn layout(&self, tally: &PartyTally) -> Vec<PieSlice> {
        let total = tally.total();
        if total == 0 {
            return Vec::new();
        }

        let party_count = tally.party_count();
        let mut slices = Vec::with_capacity(party_count);
        let mut start_angle = PIE_START_ANGLE;

        for (index, (party, count)) in tally.iter().enumerate() {
            let fraction = count as f64 / total as f64;
            let end_angle = if index + 1 == party_count {
                PIE_START_ANGLE + TAU
            } else {
                start_angle + fraction * TAU
            };

            slices.push(PieSlice {
                label: party.to_string(),
                count,
                fraction,
                start_angle,
                end_angle,
                color: party_color(party),
            });

            start_angle = end_angle;
        }

        slices
    }

    /// Slice under the given angle, if any
    pub fn slice_at<'a>(&self, slices: &'a [PieSlice], angle: f64) -> Option<&'a PieSlice> {
        let normalized = normalize_angle(angle);
        slices.iter().find(|slice| slice.contains_angle(normalized))
    }
}

impl Default for PieLayoutService {
    fn default() -> Self {
        Self::new()
    }
}
