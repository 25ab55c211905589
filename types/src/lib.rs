//! Shared types for CUPPA
//!
//! This crate contains serializable types that are shared between the
//! engine (cuppa-core) and any front end driving it: the metric and
//! grouping catalogues, the three published view datasets, and the
//! application configuration.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Metric Catalogue
// ─────────────────────────────────────────────────────────────────────────────

/// Numeric metric plotted on the trend view - determines the y-axis value.
///
/// Wire keys are the camelCase column names of the source dataset
/// (`totalCupPoints`, `cleanCup`, ...); display labels match the
/// dashboard dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MetricKey {
    #[default]
    Aroma,
    Flavor,
    Aftertaste,
    Acidity,
    Body,
    Balance,
    Uniformity,
    CleanCup,
    Sweetness,
    CupperPoints,
    TotalCupPoints,
    Moisture,
    Altitude,
}

impl MetricKey {
    /// All metrics in dropdown order.
    pub const ALL: [MetricKey; 13] = [
        MetricKey::Aroma,
        MetricKey::Flavor,
        MetricKey::Aftertaste,
        MetricKey::Acidity,
        MetricKey::Body,
        MetricKey::Balance,
        MetricKey::Uniformity,
        MetricKey::CleanCup,
        MetricKey::Sweetness,
        MetricKey::CupperPoints,
        MetricKey::TotalCupPoints,
        MetricKey::Moisture,
        MetricKey::Altitude,
    ];

    /// Wire key, as it appears in the source dataset's header row.
    pub fn as_key(&self) -> &'static str {
        match self {
            MetricKey::Aroma => "aroma",
            MetricKey::Flavor => "flavor",
            MetricKey::Aftertaste => "aftertaste",
            MetricKey::Acidity => "acidity",
            MetricKey::Body => "body",
            MetricKey::Balance => "balance",
            MetricKey::Uniformity => "uniformity",
            MetricKey::CleanCup => "cleanCup",
            MetricKey::Sweetness => "sweetness",
            MetricKey::CupperPoints => "cupperPoints",
            MetricKey::TotalCupPoints => "totalCupPoints",
            MetricKey::Moisture => "moisture",
            MetricKey::Altitude => "altitude",
        }
    }

    /// Display label for selection UIs.
    pub fn label(&self) -> &'static str {
        match self {
            MetricKey::Aroma => "Aroma",
            MetricKey::Flavor => "Flavour",
            MetricKey::Aftertaste => "Aftertaste",
            MetricKey::Acidity => "Acidity",
            MetricKey::Body => "Body",
            MetricKey::Balance => "Balance",
            MetricKey::Uniformity => "Uniformity",
            MetricKey::CleanCup => "Clean Cup",
            MetricKey::Sweetness => "Sweetness",
            MetricKey::CupperPoints => "Cupper Points",
            MetricKey::TotalCupPoints => "Total Cup Points",
            MetricKey::Moisture => "Moisture %",
            MetricKey::Altitude => "Altitude",
        }
    }

    /// Parse a wire key. Unknown keys are rejected rather than defaulted.
    pub fn from_key(key: &str) -> Option<MetricKey> {
        Self::ALL.iter().copied().find(|m| m.as_key() == key)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Grouping Catalogue
// ─────────────────────────────────────────────────────────────────────────────

/// Categorical field that buckets samples for the pie view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GroupingDimension {
    #[default]
    HarvestYear,
    CountryOfOrigin,
    Distributor,
}

impl GroupingDimension {
    /// All dimensions in dropdown order.
    pub const ALL: [GroupingDimension; 3] = [
        GroupingDimension::HarvestYear,
        GroupingDimension::CountryOfOrigin,
        GroupingDimension::Distributor,
    ];

    /// Wire key, as it appears in the source dataset's header row.
    pub fn as_key(&self) -> &'static str {
        match self {
            GroupingDimension::HarvestYear => "harvestYear",
            GroupingDimension::CountryOfOrigin => "countryOfOrigin",
            GroupingDimension::Distributor => "distributor",
        }
    }

    /// Display label for selection UIs.
    pub fn label(&self) -> &'static str {
        match self {
            GroupingDimension::HarvestYear => "Year",
            GroupingDimension::CountryOfOrigin => "Country",
            GroupingDimension::Distributor => "Distributor",
        }
    }

    /// Parse a wire key. Unknown keys are rejected rather than defaulted.
    pub fn from_key(key: &str) -> Option<GroupingDimension> {
        Self::ALL.iter().copied().find(|d| d.as_key() == key)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Published View Datasets
// ─────────────────────────────────────────────────────────────────────────────

/// Hover metadata attached to every trend point.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HoverInfo {
    pub country_of_origin: String,
    pub region: String,
    pub distributor: String,
    pub harvest_year: String,
    /// Grading date formatted as `DD.MM.YYYY.`; empty when unknown.
    pub grading_date: String,
}

/// One point of the trend line: x = place, y = active metric value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub place: u32,
    /// Missing metric values stay missing (`null` on the wire).
    pub value: Option<f64>,
    pub hover: HoverInfo,
}

/// One category of the pie breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieSlice {
    pub category: String,
    pub count: u64,
}

/// One country of the world map view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldEntry {
    pub country: String,
    /// ISO-3166 alpha-3 code when the country name is recognized.
    pub code: Option<String>,
    pub score: f64,
}

/// The three render-ready datasets, republished after every recomputation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewDatasets {
    pub main_series: Vec<TrendPoint>,
    pub pie: Vec<PieSlice>,
    pub world: Vec<WorldEntry>,
}

// ─────────────────────────────────────────────────────────────────────────────
// App Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration.
///
/// Persistence lives in cuppa-core behind the `ExplorerConfigExt` trait;
/// this type only carries the serializable fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExplorerConfig {
    /// Path of the dataset file loaded on startup. Empty until first `load`.
    #[serde(default)]
    pub dataset_path: String,
    /// Metric shown when a session starts.
    #[serde(default)]
    pub default_metric: MetricKey,
    /// Grouping dimension active when a session starts.
    #[serde(default)]
    pub default_dimension: GroupingDimension,
}
