//! The house wine list used when no catalog is supplied.
//!
//! The list is returned by value so callers pass it to the engine
//! explicitly; nothing holds it as process-wide state.

use crate::{Structure, Wine};

struct SeedEntry {
    name: &'static str,
    grape: &'static str,
    style: &'static str,
    region: &'static str,
    price: f64,
    vintage: u16,
    structure: Structure,
}

const SEED: [SeedEntry; 6] = [
    SeedEntry {
        name: "Stag's Leap Artemis",
        grape: "Cabernet Sauvignon",
        style: "Full-bodied red",
        region: "Napa Valley, CA",
        price: 65.0,
        vintage: 2020,
        structure: Structure::new(8, 7, 4, 2, 9, 6),
    },
    SeedEntry {
        name: "Duckhorn Merlot",
        grape: "Merlot",
        style: "Medium to full-bodied red",
        region: "Napa Valley, CA",
        price: 55.0,
        vintage: 2021,
        structure: Structure::new(6, 6, 3, 2, 7, 5),
    },
    SeedEntry {
        name: "Ridge Geyserville",
        grape: "Zinfandel Blend",
        style: "Bold red blend",
        region: "Sonoma, CA",
        price: 48.0,
        vintage: 2021,
        structure: Structure::new(7, 5, 8, 3, 8, 6),
    },
    SeedEntry {
        name: "Antica Terra Willamette",
        grape: "Pinot Noir",
        style: "Medium-bodied red",
        region: "Willamette Valley, OR",
        price: 75.0,
        vintage: 2020,
        structure: Structure::new(5, 4, 5, 6, 6, 7),
    },
    SeedEntry {
        name: "Caymus Cabernet",
        grape: "Cabernet Sauvignon",
        style: "Full-bodied red",
        region: "Napa Valley, CA",
        price: 95.0,
        vintage: 2021,
        structure: Structure::new(9, 8, 3, 1, 10, 5),
    },
    SeedEntry {
        name: "Beaucastel Châteauneuf",
        grape: "Grenache Blend",
        style: "Full-bodied red",
        region: "Rhône, France",
        price: 85.0,
        vintage: 2019,
        structure: Structure::new(7, 3, 7, 7, 8, 6),
    },
];

/// Return the six-wine house list, with ids `1..=6` in list order.
///
/// # Examples
/// ```
/// use sommelier_core::seed_catalog;
///
/// let catalog = seed_catalog();
/// assert_eq!(catalog.len(), 6);
/// assert_eq!(catalog[0].name, "Stag's Leap Artemis");
/// ```
#[must_use]
pub fn seed_catalog() -> Vec<Wine> {
    (1_u64..)
        .zip(SEED.iter())
        .map(|(id, entry)| Wine {
            id,
            name: entry.name.to_owned(),
            grape: entry.grape.to_owned(),
            style: entry.style.to_owned(),
            region: entry.region.to_owned(),
            price: entry.price,
            vintage: Some(entry.vintage),
            structure: entry.structure,
        })
        .collect()
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "tests should fail fast when setup breaks")]
mod tests {
    use super::*;

    #[test]
    fn every_seed_wine_is_valid() {
        for wine in seed_catalog() {
            assert!(wine.validate().is_ok(), "{} should validate", wine.name);
        }
    }

    #[test]
    fn ids_follow_list_order() {
        let ids: Vec<u64> = seed_catalog().iter().map(|wine| wine.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn artemis_carries_reference_structure() {
        let catalog = seed_catalog();
        let artemis = catalog.first().expect("seed catalog is not empty");
        assert_eq!(artemis.structure, Structure::new(8, 7, 4, 2, 9, 6));
        assert_eq!(artemis.price, 65.0);
        assert_eq!(artemis.vintage, Some(2020));
    }
}
