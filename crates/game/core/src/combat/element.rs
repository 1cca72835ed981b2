//! Elemental affinities and the cyclic advantage table.

use crate::config::CombatTables;

/// Damage element carried by attacks and worn by targets.
///
/// Fire beats Ice, Ice beats Lightning, Lightning beats Fire. `Null` sits
/// outside the cycle.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Element {
    Fire,
    Ice,
    Lightning,
    #[default]
    Null,
}

impl Element {
    /// The element this one deals bonus damage to.
    pub const fn beats(self) -> Option<Element> {
        match self {
            Element::Fire => Some(Element::Ice),
            Element::Ice => Some(Element::Lightning),
            Element::Lightning => Some(Element::Fire),
            Element::Null => None,
        }
    }

    pub const fn is_null(self) -> bool {
        matches!(self, Element::Null)
    }
}

/// Damage multiplier for an attack element against a target element.
///
/// ```text
///              target: Fire   Ice   Lightning
/// Fire                 1.0    1.5   0.5
/// Ice                  0.5    1.0   1.5
/// Lightning            1.5    0.5   1.0
/// ```
///
/// A `Null` attacker is always neutral. A `Null` target has no weakness, so
/// every attacker is neutral against it too.
pub fn elemental_multiplier(attack: Element, target: Element, tables: &CombatTables) -> f32 {
    let params = tables.elemental;

    if attack.is_null() || target.is_null() || attack == target {
        return 1.0;
    }

    if attack.beats() == Some(target) {
        params.advantage
    } else {
        params.disadvantage
    }
}
