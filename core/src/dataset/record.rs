use chrono::NaiveDate;
use cuppa_types::{GroupingDimension, MetricKey};

/// One coffee-quality record.
///
/// `place` is the row ordinal, unique and stable for the session.
/// Numeric metrics are `None` when the source value was missing or not a
/// number; `grading_date` is `None` when the source value failed to parse.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sample {
    pub place: u32,
    pub country_of_origin: String,
    pub region: String,
    pub distributor: String,
    pub harvest_year: String,
    pub grading_date: Option<NaiveDate>,

    pub aroma: Option<f64>,
    pub flavor: Option<f64>,
    pub aftertaste: Option<f64>,
    pub acidity: Option<f64>,
    pub body: Option<f64>,
    pub balance: Option<f64>,
    pub uniformity: Option<f64>,
    pub clean_cup: Option<f64>,
    pub sweetness: Option<f64>,
    pub cupper_points: Option<f64>,
    pub total_cup_points: Option<f64>,
    pub moisture: Option<f64>,
    pub altitude: Option<f64>,
}

impl Sample {
    /// Value of a metric field, selected by key.
    pub fn metric(&self, key: MetricKey) -> Option<f64> {
        match key {
            MetricKey::Aroma => self.aroma,
            MetricKey::Flavor => self.flavor,
            MetricKey::Aftertaste => self.aftertaste,
            MetricKey::Acidity => self.acidity,
            MetricKey::Body => self.body,
            MetricKey::Balance => self.balance,
            MetricKey::Uniformity => self.uniformity,
            MetricKey::CleanCup => self.clean_cup,
            MetricKey::Sweetness => self.sweetness,
            MetricKey::CupperPoints => self.cupper_points,
            MetricKey::TotalCupPoints => self.total_cup_points,
            MetricKey::Moisture => self.moisture,
            MetricKey::Altitude => self.altitude,
        }
    }

    /// Value of a categorical field, selected by grouping dimension.
    pub fn dimension(&self, dimension: GroupingDimension) -> &str {
        match dimension {
            GroupingDimension::HarvestYear => &self.harvest_year,
            GroupingDimension::CountryOfOrigin => &self.country_of_origin,
            GroupingDimension::Distributor => &self.distributor,
        }
    }

    /// Grading date as `DD.MM.YYYY.`, empty when unknown.
    pub fn formatted_grading_date(&self) -> String {
        match self.grading_date {
            Some(date) => date.format("%d.%m.%Y.").to_string(),
            None => String::new(),
        }
    }
}
