use chrono::NaiveDate;
use hashbrown::HashMap;

use super::Sample;
use super::error::ParseError;

/// Date formats seen in the source data: English long form (after ordinal
/// suffix removal), ISO, and US numeric.
const DATE_FORMATS: [&str; 3] = ["%B %d, %Y", "%Y-%m-%d", "%m/%d/%Y"];

/// One raw dataset row: a field-name to value mapping, as handed over by
/// the ingestion boundary.
#[derive(Debug, Clone, Default)]
pub struct RawRow {
    fields: HashMap<String, String>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut row = Self::new();
        for (field, value) in pairs {
            row.set(field, value);
        }
        row
    }

    pub fn set(&mut self, field: &str, value: &str) {
        self.fields.insert(field.to_string(), value.to_string());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }
}

/// Turns raw rows into [`Sample`]s.
///
/// Only a missing or non-numeric `place` rejects a row; every other field
/// degrades to its empty/absent form.
pub struct RowParser;

impl RowParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse_row(&self, row_number: u64, row: &RawRow) -> Result<Sample, ParseError> {
        let place = row
            .get("place")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ParseError::MissingPlace { row_number })?;
        let place = place
            .trim()
            .parse::<u32>()
            .map_err(|_| ParseError::InvalidPlace {
                row_number,
                value: place.to_string(),
            })?;

        Ok(Sample {
            place,
            country_of_origin: text_field(row, "countryOfOrigin"),
            region: text_field(row, "region"),
            distributor: text_field(row, "distributor"),
            harvest_year: text_field(row, "harvestYear"),
            grading_date: row.get("gradingDate").and_then(parse_grading_date),
            aroma: metric_field(row, "aroma"),
            flavor: metric_field(row, "flavor"),
            aftertaste: metric_field(row, "aftertaste"),
            acidity: metric_field(row, "acidity"),
            body: metric_field(row, "body"),
            balance: metric_field(row, "balance"),
            uniformity: metric_field(row, "uniformity"),
            clean_cup: metric_field(row, "cleanCup"),
            sweetness: metric_field(row, "sweetness"),
            cupper_points: metric_field(row, "cupperPoints"),
            total_cup_points: metric_field(row, "totalCupPoints"),
            moisture: metric_field(row, "moisture"),
            altitude: metric_field(row, "altitude"),
        })
    }
}

impl Default for RowParser {
    fn default() -> Self {
        Self::new()
    }
}

fn text_field(row: &RawRow, field: &str) -> String {
    row.get(field).unwrap_or("").trim().to_string()
}

fn metric_field(row: &RawRow, field: &str) -> Option<f64> {
    row.get(field).and_then(|v| v.trim().parse::<f64>().ok())
}

/// Parse a grading date, yielding `None` for anything unparsable.
pub fn parse_grading_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    let normalized = strip_ordinal_suffix(trimmed);
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&normalized, fmt).ok())
}

// "April 4th, 2015" -> "April 4, 2015"; the suffix is only removed right
// after a digit and at a word boundary, so month names keep their letters.
fn strip_ordinal_suffix(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let chars: Vec<char> = value.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        if i > 0 && i + 1 < chars.len() && chars[i - 1].is_ascii_digit() {
            let pair = [
                chars[i].to_ascii_lowercase(),
                chars[i + 1].to_ascii_lowercase(),
            ];
            let is_suffix = matches!(pair, ['s', 't'] | ['n', 'd'] | ['r', 'd'] | ['t', 'h']);
            let at_boundary = i + 2 >= chars.len() || !chars[i + 2].is_alphanumeric();
            if is_suffix && at_boundary {
                i += 2;
                continue;
            }
        }
        out.push(chars[i]);
        i += 1;
    }
    out
}
