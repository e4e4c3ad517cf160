use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

pub const SUPER_EFFECTIVE: f64 = 1.5;
pub const NEUTRAL: f64 = 1.0;
pub const NOT_VERY_EFFECTIVE: f64 = 0.5;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CraftureType {
    Forest,
    Ice,
    Fire,
    Water,
    Shadow,
    Flower,
    Cube,
    Thunder,
    Rock,
    Ghost,
    Mechanical,
}

impl fmt::Display for CraftureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name: &'static str = self.into();
        write!(f, "{}", name)
    }
}

impl CraftureType {
    /// All eleven element types in declaration order.
    pub fn all() -> impl Iterator<Item = CraftureType> {
        <Self as IntoEnumIterator>::iter()
    }

    /// Defender types this element deals 1.5x damage to.
    pub fn strong_against(self) -> &'static [CraftureType] {
        use CraftureType::*;

        match self {
            Forest => &[Water, Rock],
            Ice => &[Forest, Flower],
            Fire => &[Forest, Ice, Flower, Mechanical],
            Water => &[Fire, Rock, Mechanical],
            Shadow => &[Ghost, Flower],
            Flower => &[Water, Rock],
            Cube => &[Ghost, Mechanical],
            Thunder => &[Water, Mechanical],
            Rock => &[Fire, Ice, Thunder],
            Ghost => &[Shadow, Ghost],
            Mechanical => &[Ice, Rock, Cube],
        }
    }

    /// Defender types this element deals 0.5x damage to.
    pub fn weak_against(self) -> &'static [CraftureType] {
        use CraftureType::*;

        match self {
            Forest => &[Fire, Ice, Mechanical],
            Ice => &[Water, Ice],
            Fire => &[Water, Rock],
            Water => &[Forest, Flower],
            Shadow => &[Thunder],
            Flower => &[Fire, Ice],
            Cube => &[Rock],
            Thunder => &[Rock, Forest],
            Rock => &[Water, Forest],
            Ghost => &[Cube],
            Mechanical => &[Fire, Water, Thunder],
        }
    }

    /// Damage multiplier for a move of `attacking` type hitting a `defending` creature.
    /// Returns 1.5 (strong), 0.5 (weak) or 1.0 for every unlisted matchup.
    pub fn type_effectiveness(attacking: CraftureType, defending: CraftureType) -> f64 {
        if attacking.strong_against().contains(&defending) {
            SUPER_EFFECTIVE
        } else if attacking.weak_against().contains(&defending) {
            NOT_VERY_EFFECTIVE
        } else {
            NEUTRAL
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_type_is_both_strong_and_weak_against_the_same_defender() {
        for attacking in CraftureType::all() {
            for defending in attacking.strong_against() {
                assert!(
                    !attacking.weak_against().contains(defending),
                    "{} lists {} as both strong and weak",
                    attacking,
                    defending
                );
            }
        }
    }

    #[test]
    fn matchups_are_declared_not_mirrored() {
        // Fire is strong against Ice, but Ice never declares Fire as a weak matchup.
        assert_eq!(
            CraftureType::type_effectiveness(CraftureType::Fire, CraftureType::Ice),
            SUPER_EFFECTIVE
        );
        assert_eq!(
            CraftureType::type_effectiveness(CraftureType::Ice, CraftureType::Fire),
            NEUTRAL
        );
    }

    #[test]
    fn unlisted_matchups_are_neutral() {
        assert_eq!(
            CraftureType::type_effectiveness(CraftureType::Cube, CraftureType::Flower),
            NEUTRAL
        );
        assert_eq!(
            CraftureType::type_effectiveness(CraftureType::Forest, CraftureType::Fire),
            NOT_VERY_EFFECTIVE
        );
    }

    #[test]
    fn parses_lowercase_names() {
        assert_eq!("mechanical".parse::<CraftureType>(), Ok(CraftureType::Mechanical));
        assert_eq!(CraftureType::Thunder.to_string(), "thunder");
    }
}
