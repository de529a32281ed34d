//! Short natural-language rationales for scored wines.
//!
//! Sentences are gathered in a fixed order: score band, tannin comment,
//! add-on notes, then the style line. Only the first [`MAX_SENTENCES`] are
//! kept, so a wine with several add-on notes loses its style line.
#![forbid(unsafe_code)]

use sommelier_core::{AddOn, SteakOrder, Structure, Wine};

/// Scores at or above this open with the most enthusiastic line.
pub const FANTASTIC_THRESHOLD: f64 = 85.0;
/// Scores at or above this (and below [`FANTASTIC_THRESHOLD`]) open
/// positively.
pub const STRONG_THRESHOLD: f64 = 70.0;
/// Most sentences an explanation carries.
pub const MAX_SENTENCES: usize = 3;

const GRIPPY_TANNIN: u8 = 7;
const SOFT_TANNIN: u8 = 4;
const PEPPERY_SPICE: u8 = 6;
const EARTHY_FUNK: u8 = 5;

fn opening(score: f64) -> &'static str {
    if score >= FANTASTIC_THRESHOLD {
        "This is a fantastic match!"
    } else if score >= STRONG_THRESHOLD {
        "This pairs really well!"
    } else {
        "This is a solid choice."
    }
}

fn tannin_note(structure: Structure, order: &SteakOrder) -> Option<String> {
    if structure.tannin >= GRIPPY_TANNIN {
        Some(format!(
            "The grippy tannins complement the richness of your {}.",
            order.cut
        ))
    } else if structure.tannin <= SOFT_TANNIN {
        Some("Soft tannins won't overpower your steak.".to_owned())
    } else {
        None
    }
}

fn add_on_notes(structure: Structure, order: &SteakOrder) -> impl Iterator<Item = String> {
    [
        (order.has_add_on(AddOn::AuPoivre) && structure.spice >= PEPPERY_SPICE)
            .then_some("The peppery notes echo your au poivre sauce beautifully."),
        (order.has_add_on(AddOn::BlueCheese) && structure.funk >= EARTHY_FUNK)
            .then_some("Its earthy character plays nicely with the blue cheese."),
        order
            .has_add_on(AddOn::ShrimpOscar)
            .then_some("Fresh enough to handle the shrimp oscar topping."),
    ]
    .into_iter()
    .flatten()
    .map(str::to_owned)
}

/// Describe the wine's dominant style.
///
/// The first matching rule wins: big and tannic, oaky, fresh, earthy, and
/// finally a fruit-forward default.
///
/// # Examples
/// ```
/// use sommelier_core::Structure;
/// use sommelier_scorer::style_descriptor;
///
/// assert_eq!(style_descriptor(&Structure::new(8, 7, 4, 2, 9, 6)), "bold, powerful flavors");
/// assert_eq!(style_descriptor(&Structure::new(5, 4, 5, 6, 6, 7)), "bright freshness");
/// ```
#[must_use]
pub const fn style_descriptor(structure: &Structure) -> &'static str {
    if structure.body >= 8 && structure.tannin >= 7 {
        "bold, powerful flavors"
    } else if structure.oak >= 7 {
        "rich, toasty oak notes"
    } else if structure.acidity >= 7 {
        "bright freshness"
    } else if structure.funk >= 6 {
        "earthy, complex character"
    } else {
        "smooth, approachable fruit"
    }
}

/// Explain why `wine` suits `order` at the given `score`.
///
/// The text depends only on its inputs, never on the wine's rank.
///
/// # Examples
/// ```
/// use sommelier_core::{SteakOrder, seed_catalog};
/// use sommelier_scorer::explain;
///
/// let catalog = seed_catalog();
/// let text = explain(&catalog[1], &SteakOrder::default(), 81.45);
/// assert_eq!(
///     text,
///     "This pairs really well! This Napa Valley, CA Merlot brings smooth, approachable fruit."
/// );
/// ```
#[must_use]
pub fn explain(wine: &Wine, order: &SteakOrder, score: f64) -> String {
    let structure = wine.structure;
    let style = format!(
        "This {} {} brings {}.",
        wine.region,
        wine.grape,
        style_descriptor(&structure)
    );
    std::iter::once(opening(score).to_owned())
        .chain(tannin_note(structure, order))
        .chain(add_on_notes(structure, order))
        .chain(std::iter::once(style))
        .take(MAX_SENTENCES)
        .collect::<Vec<_>>()
        .join(" ")
}
