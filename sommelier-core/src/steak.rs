//! Steak orders: cut, doneness and sauce or topping add-ons.
//!
//! Each enum carries its flavour constants as `match` tables so the food
//! profile derivation never consults hidden state.
//!
//! # Examples
//! ```
//! use std::str::FromStr;
//! use sommelier_core::{AddOn, Doneness, SteakCut, SteakOrder};
//!
//! let order = SteakOrder::new(SteakCut::from_str("NY Strip").unwrap(), Doneness::Medium)
//!     .with_add_on(AddOn::AuPoivre);
//! assert_eq!(order.cut.to_string(), "NY Strip");
//! assert!(order.has_add_on(AddOn::AuPoivre));
//! ```

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error returned when a cut, doneness or add-on name is not recognised.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {kind} '{value}'")]
pub struct ParseVariantError {
    /// Kind of value being parsed, e.g. `"cut"`.
    pub kind: &'static str,
    /// Input that failed to parse.
    pub value: String,
}

fn normalise(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| match c {
            ' ' | '_' => '-',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

/// Match `raw` against either the kebab-case key or the label of a variant.
fn parse_variant<T: Copy>(
    all: &[T],
    kind: &'static str,
    raw: &str,
    key: impl Fn(T) -> &'static str,
    label: impl Fn(T) -> &'static str,
) -> Result<T, ParseVariantError> {
    let wanted = normalise(raw);
    all.iter()
        .copied()
        .find(|variant| key(*variant) == wanted || normalise(label(*variant)) == wanted)
        .ok_or_else(|| ParseVariantError {
            kind,
            value: raw.to_owned(),
        })
}

/// Steak cuts on the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum SteakCut {
    /// Heavily marbled rib cut.
    #[default]
    Ribeye,
    /// Lean tenderloin.
    FiletMignon,
    /// Short loin strip.
    NyStrip,
    /// Strip and tenderloin on the bone, large format.
    Porterhouse,
    /// Strip and tenderloin on the bone.
    TBone,
    /// Lean hip cut.
    Sirloin,
    /// Shoulder blade cut.
    FlatIron,
    /// Thin plate cut.
    Skirt,
}

impl SteakCut {
    /// Every cut in menu order.
    pub const ALL: [Self; 8] = [
        Self::Ribeye,
        Self::FiletMignon,
        Self::NyStrip,
        Self::Porterhouse,
        Self::TBone,
        Self::Sirloin,
        Self::FlatIron,
        Self::Skirt,
    ];

    /// Fat content on the `1..=10` scale.
    #[must_use]
    pub const fn fattiness(self) -> u8 {
        match self {
            Self::Ribeye => 9,
            Self::FiletMignon => 4,
            Self::NyStrip => 7,
            Self::Porterhouse | Self::TBone => 8,
            Self::Sirloin => 5,
            Self::FlatIron | Self::Skirt => 6,
        }
    }

    /// Beefy flavour intensity on the `1..=10` scale.
    #[must_use]
    pub const fn intensity(self) -> u8 {
        match self {
            Self::Ribeye => 9,
            Self::FiletMignon => 5,
            Self::NyStrip | Self::Porterhouse | Self::TBone | Self::Skirt => 8,
            Self::Sirloin => 6,
            Self::FlatIron => 7,
        }
    }

    /// Kebab-case key used in configuration and JSON.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ribeye => "ribeye",
            Self::FiletMignon => "filet-mignon",
            Self::NyStrip => "ny-strip",
            Self::Porterhouse => "porterhouse",
            Self::TBone => "t-bone",
            Self::Sirloin => "sirloin",
            Self::FlatIron => "flat-iron",
            Self::Skirt => "skirt",
        }
    }

    /// Menu label, as used in explanation text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ribeye => "Ribeye",
            Self::FiletMignon => "Filet Mignon",
            Self::NyStrip => "NY Strip",
            Self::Porterhouse => "Porterhouse",
            Self::TBone => "T-Bone",
            Self::Sirloin => "Sirloin",
            Self::FlatIron => "Flat Iron",
            Self::Skirt => "Skirt Steak",
        }
    }
}

impl fmt::Display for SteakCut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SteakCut {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant(&Self::ALL, "cut", s, Self::as_str, Self::label)
    }
}

/// How far the steak is cooked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Doneness {
    /// Cool red centre.
    Rare,
    /// Warm red centre.
    #[default]
    MediumRare,
    /// Warm pink centre.
    Medium,
    /// Slightly pink centre.
    MediumWell,
    /// Cooked through.
    WellDone,
}

impl Doneness {
    /// Every doneness from rare to well-done.
    pub const ALL: [Self; 5] = [
        Self::Rare,
        Self::MediumRare,
        Self::Medium,
        Self::MediumWell,
        Self::WellDone,
    ];

    /// Multiplier applied to the cut intensity to derive the tannin need.
    ///
    /// More char calls for more grip: `0.7` at rare up to `1.3` at well-done.
    #[must_use]
    pub const fn tannin_boost(self) -> f64 {
        match self {
            Self::Rare => 0.7,
            Self::MediumRare => 0.85,
            Self::Medium => 1.0,
            Self::MediumWell => 1.15,
            Self::WellDone => 1.3,
        }
    }

    /// Char level on a `2..=10` scale in steps of two.
    #[must_use]
    pub const fn char_level(self) -> u8 {
        match self {
            Self::Rare => 2,
            Self::MediumRare => 4,
            Self::Medium => 6,
            Self::MediumWell => 8,
            Self::WellDone => 10,
        }
    }

    /// Kebab-case key used in configuration and JSON.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rare => "rare",
            Self::MediumRare => "medium-rare",
            Self::Medium => "medium",
            Self::MediumWell => "medium-well",
            Self::WellDone => "well-done",
        }
    }

    /// Menu label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Rare => "Rare",
            Self::MediumRare => "Medium-Rare",
            Self::Medium => "Medium",
            Self::MediumWell => "Medium-Well",
            Self::WellDone => "Well-Done",
        }
    }
}

impl fmt::Display for Doneness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Doneness {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant(&Self::ALL, "doneness", s, Self::as_str, Self::label)
    }
}

/// Sauces and toppings that shift the flavour profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum AddOn {
    /// Peppercorn crust and sauce.
    AuPoivre,
    /// Red wine and marrow sauce.
    Bordelaise,
    /// Blue cheese crumble.
    BlueCheese,
    /// Reduced veal stock.
    DemiGlace,
    /// Sweet bourbon glaze.
    BourbonGlaze,
    /// Crab or shrimp with béarnaise.
    ShrimpOscar,
}

impl AddOn {
    /// Every add-on in menu order.
    pub const ALL: [Self; 6] = [
        Self::AuPoivre,
        Self::Bordelaise,
        Self::BlueCheese,
        Self::DemiGlace,
        Self::BourbonGlaze,
        Self::ShrimpOscar,
    ];

    /// Change to the food's spice level.
    #[must_use]
    pub const fn spice_adjustment(self) -> i32 {
        match self {
            Self::AuPoivre => 3,
            Self::Bordelaise | Self::BourbonGlaze => 1,
            Self::BlueCheese | Self::DemiGlace | Self::ShrimpOscar => 0,
        }
    }

    /// Change to the food's funk level. Seafood toppings pull it down.
    #[must_use]
    pub const fn funk_adjustment(self) -> i32 {
        match self {
            Self::BlueCheese => 4,
            Self::Bordelaise => 2,
            Self::AuPoivre | Self::DemiGlace => 1,
            Self::BourbonGlaze => 0,
            Self::ShrimpOscar => -2,
        }
    }

    /// Change to the food's richness.
    #[must_use]
    pub const fn richness_adjustment(self) -> i32 {
        match self {
            Self::DemiGlace | Self::BourbonGlaze | Self::BlueCheese | Self::ShrimpOscar => 2,
            Self::Bordelaise | Self::AuPoivre => 1,
        }
    }

    /// Kebab-case key used in configuration and JSON.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AuPoivre => "au-poivre",
            Self::Bordelaise => "bordelaise",
            Self::BlueCheese => "blue-cheese",
            Self::DemiGlace => "demi-glace",
            Self::BourbonGlaze => "bourbon-glaze",
            Self::ShrimpOscar => "shrimp-oscar",
        }
    }

    /// Menu label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AuPoivre => "Au Poivre",
            Self::Bordelaise => "Bordelaise",
            Self::BlueCheese => "Blue Cheese",
            Self::DemiGlace => "Demi-glace",
            Self::BourbonGlaze => "Bourbon Glaze",
            Self::ShrimpOscar => "Shrimp Oscar",
        }
    }
}

impl fmt::Display for AddOn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AddOn {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant(&Self::ALL, "add-on", s, Self::as_str, Self::label)
    }
}

/// A configured steak: one cut, one doneness and any set of add-ons.
///
/// Add-ons form a set, so selection order is irrelevant and duplicates
/// collapse.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SteakOrder {
    /// Selected cut.
    pub cut: SteakCut,
    /// Selected doneness.
    pub doneness: Doneness,
    /// Selected add-ons.
    #[cfg_attr(feature = "serde", serde(default))]
    pub add_ons: BTreeSet<AddOn>,
}

impl SteakOrder {
    /// Construct an order without add-ons.
    #[must_use]
    pub const fn new(cut: SteakCut, doneness: Doneness) -> Self {
        Self {
            cut,
            doneness,
            add_ons: BTreeSet::new(),
        }
    }

    /// Add an add-on while returning `self` for chaining.
    #[must_use]
    pub fn with_add_on(mut self, add_on: AddOn) -> Self {
        self.add_ons.insert(add_on);
        self
    }

    /// Report whether `add_on` is part of the order.
    #[must_use]
    pub fn has_add_on(&self, add_on: AddOn) -> bool {
        self.add_ons.contains(&add_on)
    }

    /// Select `add_on` if absent, deselect it otherwise.
    ///
    /// Returns whether the add-on is selected afterwards.
    pub fn toggle_add_on(&mut self, add_on: AddOn) -> bool {
        if self.add_ons.remove(&add_on) {
            false
        } else {
            self.add_ons.insert(add_on);
            true
        }
    }
}
