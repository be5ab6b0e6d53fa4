use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};

/// Value Object - LEGISinfo идентификатор законопроекта
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, From, Into, Display, Serialize, Deserialize,
)]
#[display(fmt = "{}", _0)]
pub struct LegisinfoId(u64);

impl LegisinfoId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Value Object - двуязычное название законопроекта
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BilingualTitle {
    pub en: String,
    pub fr: String,
}

impl BilingualTitle {
    pub fn new(en: impl Into<String>, fr: impl Into<String>) -> Self {
        Self { en: en.into(), fr: fr.into() }
    }
}

/// English-only label, as the backend ships it for parties and ridings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnglishLabel {
    pub en: String,
}

impl EnglishLabel {
    pub fn new(en: impl Into<String>) -> Self {
        Self { en: en.into() }
    }
}

/// Value Object - партийная принадлежность депутата
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyAffiliation {
    pub short_name: EnglishLabel,
}

impl PartyAffiliation {
    pub fn new(short_name: impl Into<String>) -> Self {
        Self { short_name: EnglishLabel::new(short_name) }
    }
}

/// Value Object - избирательный округ депутата
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RidingAffiliation {
    pub name: EnglishLabel,
    pub province: String,
}

impl RidingAffiliation {
    pub fn new(name: impl Into<String>, province: impl Into<String>) -> Self {
        Self { name: EnglishLabel::new(name), province: province.into() }
    }
}
