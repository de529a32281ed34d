//! Food profiles: the flavour and structure signature a wine must meet.
//!
//! A profile is derived fresh from a [`SteakOrder`] for every scoring pass
//! and never stored.

use crate::steak::SteakOrder;

const BASE_SPICE: i32 = 0;
const BASE_FUNK: i32 = 0;
const BASE_RICHNESS: i32 = 5;

/// Target signature derived from a steak order.
///
/// Spice, funk and richness accumulate add-on adjustments without clamping,
/// so they may leave the `1..=10` scale or go negative.
///
/// # Examples
/// ```
/// use sommelier_core::{AddOn, Doneness, FoodProfile, SteakCut, SteakOrder};
///
/// let order = SteakOrder::new(SteakCut::Ribeye, Doneness::MediumRare)
///     .with_add_on(AddOn::BlueCheese);
/// let profile = FoodProfile::derive(&order);
/// assert_eq!(profile.fattiness, 9);
/// assert_eq!(profile.char_level, 4);
/// assert_eq!(profile.funk_level, 4);
/// assert_eq!(profile.richness, 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoodProfile {
    /// Fat content of the cut.
    pub fattiness: u8,
    /// Flavour intensity of the cut.
    pub intensity: u8,
    /// Char from the cooking level.
    pub char_level: u8,
    /// Ideal tannin level; continuous.
    pub tannin_need: f64,
    /// Spice contributed by add-ons.
    pub spice_level: i32,
    /// Funk contributed by add-ons.
    pub funk_level: i32,
    /// Overall richness.
    pub richness: i32,
}

impl FoodProfile {
    /// Derive the profile for `order`.
    ///
    /// Add-on adjustments are plain sums, so their order does not matter.
    #[expect(
        clippy::float_arithmetic,
        reason = "tannin need scales intensity by a doneness multiplier"
    )]
    #[must_use]
    pub fn derive(order: &SteakOrder) -> Self {
        let cut = order.cut;
        let intensity = cut.intensity();
        let base = Self {
            fattiness: cut.fattiness(),
            intensity,
            char_level: order.doneness.char_level(),
            tannin_need: f64::from(intensity) * order.doneness.tannin_boost(),
            spice_level: BASE_SPICE,
            funk_level: BASE_FUNK,
            richness: BASE_RICHNESS,
        };
        order.add_ons.iter().fold(base, |mut profile, add_on| {
            profile.spice_level += add_on.spice_adjustment();
            profile.funk_level += add_on.funk_adjustment();
            profile.richness += add_on.richness_adjustment();
            profile
        })
    }
}

impl From<&SteakOrder> for FoodProfile {
    fn from(order: &SteakOrder) -> Self {
        Self::derive(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steak::{AddOn, Doneness, SteakCut};
    use rstest::rstest;

    #[rstest]
    #[expect(clippy::float_arithmetic, reason = "test compares floating point values")]
    fn ribeye_medium_rare_matches_reference() {
        let profile = FoodProfile::derive(&SteakOrder::new(SteakCut::Ribeye, Doneness::MediumRare));
        assert_eq!(profile.fattiness, 9);
        assert_eq!(profile.intensity, 9);
        assert_eq!(profile.char_level, 4);
        assert!((profile.tannin_need - 7.65).abs() < 1e-9);
        assert_eq!(
            (profile.spice_level, profile.funk_level, profile.richness),
            (0, 0, 5)
        );
    }

    #[rstest]
    #[case(Doneness::Rare, 2)]
    #[case(Doneness::MediumRare, 4)]
    #[case(Doneness::Medium, 6)]
    #[case(Doneness::MediumWell, 8)]
    #[case(Doneness::WellDone, 10)]
    fn char_level_follows_doneness(#[case] doneness: Doneness, #[case] expected: u8) {
        let profile = FoodProfile::derive(&SteakOrder::new(SteakCut::Sirloin, doneness));
        assert_eq!(profile.char_level, expected);
    }

    #[rstest]
    fn cut_constants_and_tannin_need_are_exact() {
        for cut in SteakCut::ALL {
            for doneness in Doneness::ALL {
                let profile = FoodProfile::derive(&SteakOrder::new(cut, doneness));
                assert_eq!(profile.fattiness, cut.fattiness());
                assert_eq!(profile.intensity, cut.intensity());
                assert_eq!(
                    profile.tannin_need,
                    f64::from(cut.intensity()) * doneness.tannin_boost()
                );
            }
        }
    }

    #[rstest]
    fn add_ons_stack_without_clamping() {
        let order = AddOn::ALL
            .into_iter()
            .fold(SteakOrder::new(SteakCut::Skirt, Doneness::Rare), SteakOrder::with_add_on);
        let profile = FoodProfile::derive(&order);
        assert_eq!(profile.spice_level, 5);
        assert_eq!(profile.funk_level, 6);
        assert_eq!(profile.richness, 15);
    }

    #[rstest]
    fn shrimp_oscar_pushes_funk_negative() {
        let order = SteakOrder::new(SteakCut::FiletMignon, Doneness::Medium)
            .with_add_on(AddOn::ShrimpOscar);
        let profile = FoodProfile::from(&order);
        assert_eq!(profile.funk_level, -2);
        assert_eq!(profile.richness, 7);
    }
}
