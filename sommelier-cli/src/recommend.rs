//! Recommend command implementation for the Sommelier CLI.

use std::collections::BTreeSet;
use std::io::Write;
use std::str::FromStr;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use sommelier_core::{
    AddOn, Budget, Doneness, ParseVariantError, RecommendRequest, Recommendations, Recommender,
    SteakCut, SteakOrder, UserPreferences, seed_catalog,
};
use sommelier_recommender::CatalogRecommender;

use crate::catalog::load_catalog;
use crate::fs::file_is_file;
use crate::{
    ARG_ADD_ONS, ARG_BUDGET_MAX, ARG_BUDGET_MIN, ARG_CATALOG, ARG_CUT, ARG_DONENESS,
    ARG_FUNK_TOLERANCE, ARG_OAK_TOLERANCE, ARG_SPICE_TOLERANCE, ARG_TANNIN_TOLERANCE, CliError,
    write_json,
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank a wine list for a steak order. Unset options fall back \
                 to a medium-rare ribeye, mid-scale tolerances and a budget of \
                 0 to 200. The house list is used unless --catalog points at \
                 a JSON array of wines.",
    about = "Recommend wines for a steak order"
)]
#[ortho_config(prefix = "SOMMELIER")]
pub(crate) struct RecommendArgs {
    /// Steak cut, e.g. `ribeye` or `"NY Strip"`.
    #[arg(long = ARG_CUT, value_name = "cut")]
    #[serde(default)]
    pub(crate) cut: Option<String>,
    /// Doneness, e.g. `medium-rare`.
    #[arg(long = ARG_DONENESS, value_name = "doneness")]
    #[serde(default)]
    pub(crate) doneness: Option<String>,
    /// Comma-separated add-ons, e.g. `au-poivre,blue-cheese`.
    #[arg(long = ARG_ADD_ONS, value_name = "list")]
    #[serde(default)]
    pub(crate) add_ons: Option<String>,
    /// Highest comfortable tannin level (1 to 10).
    #[arg(long = ARG_TANNIN_TOLERANCE, value_name = "level")]
    #[serde(default)]
    pub(crate) tannin_tolerance: Option<u8>,
    /// Highest comfortable oak level (1 to 10).
    #[arg(long = ARG_OAK_TOLERANCE, value_name = "level")]
    #[serde(default)]
    pub(crate) oak_tolerance: Option<u8>,
    /// Highest comfortable spice level (1 to 10).
    #[arg(long = ARG_SPICE_TOLERANCE, value_name = "level")]
    #[serde(default)]
    pub(crate) spice_tolerance: Option<u8>,
    /// Highest comfortable funk level (1 to 10).
    #[arg(long = ARG_FUNK_TOLERANCE, value_name = "level")]
    #[serde(default)]
    pub(crate) funk_tolerance: Option<u8>,
    /// Lowest acceptable bottle price.
    #[arg(long = ARG_BUDGET_MIN, value_name = "price")]
    #[serde(default)]
    pub(crate) budget_min: Option<f64>,
    /// Highest acceptable bottle price.
    #[arg(long = ARG_BUDGET_MAX, value_name = "price")]
    #[serde(default)]
    pub(crate) budget_max: Option<f64>,
    /// Path to a JSON array of wines to rank instead of the house list.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecommendConfig {
    /// The steak being paired.
    pub(crate) order: SteakOrder,
    /// Validated tolerances and budget.
    pub(crate) preferences: UserPreferences,
    /// Catalog file; `None` selects the house list.
    pub(crate) catalog: Option<Utf8PathBuf>,
}

impl RecommendConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        self.catalog
            .as_deref()
            .map_or(Ok(()), |path| Self::require_existing(path, ARG_CATALOG))
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

fn parse_option<T>(raw: Option<&str>, field: &'static str) -> Result<Option<T>, CliError>
where
    T: FromStr<Err = ParseVariantError>,
{
    raw.map(str::parse)
        .transpose()
        .map_err(|source| CliError::InvalidValue { field, source })
}

fn parse_add_ons(raw: Option<&str>) -> Result<BTreeSet<AddOn>, CliError> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| {
            name.parse().map_err(|source| CliError::InvalidValue {
                field: ARG_ADD_ONS,
                source,
            })
        })
        .collect()
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let cut: SteakCut = parse_option(args.cut.as_deref(), ARG_CUT)?.unwrap_or_default();
        let doneness: Doneness =
            parse_option(args.doneness.as_deref(), ARG_DONENESS)?.unwrap_or_default();
        let order = SteakOrder {
            cut,
            doneness,
            add_ons: parse_add_ons(args.add_ons.as_deref())?,
        };

        let defaults = UserPreferences::default();
        let budget = Budget::new(
            args.budget_min.unwrap_or(defaults.budget.min),
            args.budget_max.unwrap_or(defaults.budget.max),
        )?;
        let preferences = UserPreferences::new(
            args.tannin_tolerance.unwrap_or(defaults.tannin_tolerance),
            args.oak_tolerance.unwrap_or(defaults.oak_tolerance),
            args.spice_tolerance.unwrap_or(defaults.spice_tolerance),
            args.funk_tolerance.unwrap_or(defaults.funk_tolerance),
            budget,
        )?;

        Ok(Self {
            order,
            preferences,
            catalog: args.catalog,
        })
    }
}

pub(crate) fn run_recommend_with(
    args: RecommendArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let recommendations = execute_recommend(args)?;
    write_json(writer, &recommendations)
}

fn execute_recommend(args: RecommendArgs) -> Result<Recommendations, CliError> {
    let config = resolve_recommend_config(args)?;
    recommend_for(&config)
}

fn resolve_recommend_config(args: RecommendArgs) -> Result<RecommendConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

pub(crate) fn recommend_for(config: &RecommendConfig) -> Result<Recommendations, CliError> {
    let catalog = match &config.catalog {
        Some(path) => load_catalog(path)?,
        None => seed_catalog(),
    };
    let request = RecommendRequest::new(&catalog, &config.order, &config.preferences);
    CatalogRecommender::default()
        .recommend(&request)
        .map_err(|source| CliError::Recommend { source })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
