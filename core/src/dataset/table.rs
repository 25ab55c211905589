use hashbrown::HashMap;

use super::error::ParseError;
use super::parser::{RawRow, RowParser};
use super::record::Sample;

/// Ordered, immutable collection of parsed samples.
///
/// Insertion order is load order and is load-bearing: the country
/// aggregate's running score depends on it. Lookup by `place` goes
/// through an index kept consistent at the only mutation point, `load`.
#[derive(Debug, Clone, Default)]
pub struct SampleTable {
    samples: Vec<Sample>,
    by_place: HashMap<u32, usize>,
}

impl SampleTable {
    /// Parse raw rows into a table. Fails on the first structurally
    /// malformed row; rows with unparsable dates are accepted.
    pub fn load(rows: &[RawRow]) -> Result<Self, ParseError> {
        let parser = RowParser::new();
        let mut samples = Vec::with_capacity(rows.len());
        let mut by_place = HashMap::with_capacity(rows.len());

        for (idx, row) in rows.iter().enumerate() {
            let row_number = idx as u64 + 1;
            let sample = parser.parse_row(row_number, row)?;
            if by_place.insert(sample.place, samples.len()).is_some() {
                return Err(ParseError::DuplicatePlace {
                    row_number,
                    place: sample.place,
                });
            }
            samples.push(sample);
        }

        tracing::info!(samples = samples.len(), "sample table loaded");
        Ok(Self { samples, by_place })
    }

    pub fn get(&self, place: u32) -> Option<&Sample> {
        self.by_place.get(&place).map(|&idx| &self.samples[idx])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(place: &str, country: &str) -> RawRow {
        RawRow::from_pairs([
            ("place", place),
            ("countryOfOrigin", country),
            ("totalCupPoints", "80"),
        ])
    }

    #[test]
    fn load_preserves_order_and_indexes_by_place() {
        let rows = vec![row("3", "Peru"), row("1", "Brazil"), row("2", "Kenya")];
        let table = SampleTable::load(&rows).unwrap();
        assert_eq!(table.len(), 3);
        let order: Vec<u32> = table.iter().map(|s| s.place).collect();
        assert_eq!(order, vec![3, 1, 2]);
        assert_eq!(table.get(1).unwrap().country_of_origin, "Brazil");
        assert!(table.get(9).is_none());
    }

    #[test]
    fn load_fails_on_malformed_row() {
        let rows = vec![row("1", "Brazil"), RawRow::from_pairs([("countryOfOrigin", "Peru")])];
        let err = SampleTable::load(&rows).unwrap_err();
        assert!(matches!(err, ParseError::MissingPlace { row_number: 2 }));
    }

    #[test]
    fn load_fails_on_duplicate_place() {
        let rows = vec![row("1", "Brazil"), row("1", "Peru")];
        let err = SampleTable::load(&rows).unwrap_err();
        assert!(matches!(
            err,
            ParseError::DuplicatePlace {
                row_number: 2,
                place: 1
            }
        ));
    }
}
