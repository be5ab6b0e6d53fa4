use super::value_objects::Color;
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Value Object - parties with reserved chart colors
///
/// The variants parse from the English short names the backend emits;
/// anything else falls through to [`FALLBACK_PARTY_COLOR`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, AsRefStr)]
pub enum Party {
    #[strum(serialize = "Liberal")]
    Liberal,

    #[strum(serialize = "Conservative")]
    Conservative,

    #[strum(serialize = "NDP")]
    Ndp,

    #[strum(to_string = "Bloc Québécois", serialize = "Bloc")]
    Bloc,

    #[strum(serialize = "Green")]
    Green,

    #[strum(serialize = "Independent")]
    Independent,
}

impl Party {
    pub fn color(&self) -> Color {
        match self {
            Party::Liberal => Color::from_hex(0xD71920),
            Party::Conservative => Color::from_hex(0x1A4782),
            Party::Ndp => Color::from_hex(0xF37021),
            Party::Bloc => Color::from_hex(0x33B2CC),
            Party::Green => Color::from_hex(0x3D9B35),
            Party::Independent => Color::from_hex(0x71717A),
        }
    }
}

/// Серый цвет для партий вне таблицы
pub const FALLBACK_PARTY_COLOR: Color = Color { r: 0.616, g: 0.639, b: 0.686, a: 1.0 };

/// Chart color for a party's English short name, fallback for unlisted ones
pub fn party_color(short_name: &str) -> Color {
    Party::from_str(short_name).map(|party| party.color()).unwrap_or(FALLBACK_PARTY_COLOR)
}
