//! Wine catalog entries and their structural attributes.

use std::fmt;
use std::ops::RangeInclusive;

use thiserror::Error;

/// Inclusive scale shared by every structural attribute and tolerance.
pub const LEVEL_RANGE: RangeInclusive<u8> = 1..=10;

/// Structural attributes tracked for each wine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// Grip and astringency.
    Tannin,
    /// Toast and vanilla from barrel ageing.
    Oak,
    /// Pepper and baking spice.
    Spice,
    /// Earthiness, including brett.
    Funk,
    /// Weight on the palate, light to full.
    Body,
    /// Freshness.
    Acidity,
}

impl Attribute {
    /// Return the attribute as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use sommelier_core::Attribute;
    ///
    /// assert_eq!(Attribute::Funk.as_str(), "funk");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tannin => "tannin",
            Self::Oak => "oak",
            Self::Spice => "spice",
            Self::Funk => "funk",
            Self::Body => "body",
            Self::Acidity => "acidity",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The six structural levels of a wine, each on the `1..=10` scale.
///
/// # Examples
/// ```
/// use sommelier_core::{Attribute, Structure};
///
/// let structure = Structure::new(8, 7, 4, 2, 9, 6);
/// assert_eq!(structure.level(Attribute::Body), 9);
/// assert!(structure.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Structure {
    /// Tannin level.
    pub tannin: u8,
    /// Oak level.
    pub oak: u8,
    /// Spice level.
    pub spice: u8,
    /// Funk (earthiness) level.
    pub funk: u8,
    /// Body level.
    pub body: u8,
    /// Acidity level.
    pub acidity: u8,
}

impl Structure {
    /// Construct a structure from levels in attribute order.
    #[must_use]
    pub const fn new(tannin: u8, oak: u8, spice: u8, funk: u8, body: u8, acidity: u8) -> Self {
        Self {
            tannin,
            oak,
            spice,
            funk,
            body,
            acidity,
        }
    }

    /// Return the level recorded for `attribute`.
    #[must_use]
    pub const fn level(&self, attribute: Attribute) -> u8 {
        match attribute {
            Attribute::Tannin => self.tannin,
            Attribute::Oak => self.oak,
            Attribute::Spice => self.spice,
            Attribute::Funk => self.funk,
            Attribute::Body => self.body,
            Attribute::Acidity => self.acidity,
        }
    }

    /// Check that every level sits inside [`LEVEL_RANGE`].
    ///
    /// # Errors
    /// Returns [`WineError::LevelOutOfRange`] for the first offending
    /// attribute.
    pub fn validate(&self) -> Result<(), WineError> {
        const ATTRIBUTES: [Attribute; 6] = [
            Attribute::Tannin,
            Attribute::Oak,
            Attribute::Spice,
            Attribute::Funk,
            Attribute::Body,
            Attribute::Acidity,
        ];
        ATTRIBUTES
            .into_iter()
            .find(|attribute| !LEVEL_RANGE.contains(&self.level(*attribute)))
            .map_or(Ok(()), |attribute| {
                Err(WineError::LevelOutOfRange {
                    attribute,
                    level: self.level(attribute),
                })
            })
    }
}

/// A wine on the list.
///
/// Catalog entries are immutable once loaded; the catalog owns them and the
/// engine only borrows them.
///
/// # Examples
/// ```
/// use sommelier_core::{Structure, Wine};
///
/// # fn main() -> Result<(), sommelier_core::WineError> {
/// let wine = Wine::new(
///     1,
///     "Stag's Leap Artemis",
///     "Cabernet Sauvignon",
///     "Full-bodied red",
///     "Napa Valley, CA",
///     65.0,
///     Structure::new(8, 7, 4, 2, 9, 6),
/// )?
/// .with_vintage(2020);
/// assert_eq!(wine.vintage, Some(2020));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Wine {
    /// Unique identifier within the catalog.
    pub id: u64,
    /// Label name.
    pub name: String,
    /// Grape variety or blend.
    pub grape: String,
    /// Short style description.
    pub style: String,
    /// Region of origin.
    pub region: String,
    /// Bottle price.
    pub price: f64,
    /// Vintage year, absent for non-vintage wines.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub vintage: Option<u16>,
    /// Structural levels used for scoring.
    pub structure: Structure,
}

/// Errors returned by [`Wine::new`] and [`Wine::validate`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum WineError {
    /// A structural level fell outside `1..=10`.
    #[error("{attribute} level {level} is outside 1..=10")]
    LevelOutOfRange {
        /// Offending attribute.
        attribute: Attribute,
        /// Level supplied for it.
        level: u8,
    },
    /// The price was negative or not finite.
    #[error("price {price} must be a finite, non-negative amount")]
    InvalidPrice {
        /// Price supplied.
        price: f64,
    },
}

impl Wine {
    /// Validate and construct a [`Wine`] without a vintage.
    ///
    /// # Errors
    /// Returns [`WineError`] when the price or any level is invalid.
    pub fn new(
        id: u64,
        name: impl Into<String>,
        grape: impl Into<String>,
        style: impl Into<String>,
        region: impl Into<String>,
        price: f64,
        structure: Structure,
    ) -> Result<Self, WineError> {
        let wine = Self {
            id,
            name: name.into(),
            grape: grape.into(),
            style: style.into(),
            region: region.into(),
            price,
            vintage: None,
            structure,
        };
        wine.validate()?;
        Ok(wine)
    }

    /// Attach a vintage year.
    #[must_use]
    pub const fn with_vintage(mut self, year: u16) -> Self {
        self.vintage = Some(year);
        self
    }

    /// Re-check the invariants enforced by [`Wine::new`].
    ///
    /// Fields are public, so values deserialised or edited after construction
    /// should pass through here before scoring.
    ///
    /// # Errors
    /// Returns [`WineError`] when the price or any level is invalid.
    pub fn validate(&self) -> Result<(), WineError> {
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(WineError::InvalidPrice { price: self.price });
        }
        self.structure.validate()
    }
}
