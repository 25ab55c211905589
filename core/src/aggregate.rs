//! Per-country running score for the world view

use hashbrown::HashMap;

use crate::dataset::SampleTable;

/// One country's entry in the aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryScore {
    pub country: String,
    pub score: f64,
}

/// Mapping from country of origin to a running score, in first-seen order.
///
/// Built once per session; the table is immutable, so it never needs
/// invalidation.
#[derive(Debug, Clone, Default)]
pub struct CountryAggregate {
    entries: Vec<CountryScore>,
    index: HashMap<String, usize>,
}

impl CountryAggregate {
    /// Walk the table once in stored order. First occurrence of a country
    /// inserts its `total_cup_points`; every later occurrence replaces the
    /// score with `(existing + points) / 2`. The result depends on row
    /// order - this pairwise recurrence is the contract, not a mean.
    pub fn build(table: &SampleTable) -> Self {
        let mut aggregate = Self::default();
        for sample in table.iter() {
            let points = sample.total_cup_points.unwrap_or(0.0);
            match aggregate.index.get(sample.country_of_origin.as_str()) {
                Some(&idx) => {
                    let entry = &mut aggregate.entries[idx];
                    entry.score = (entry.score + points) / 2.0;
                }
                None => {
                    aggregate
                        .index
                        .insert(sample.country_of_origin.clone(), aggregate.entries.len());
                    aggregate.entries.push(CountryScore {
                        country: sample.country_of_origin.clone(),
                        score: points,
                    });
                }
            }
        }
        aggregate
    }

    pub fn get(&self, country: &str) -> Option<f64> {
        self.index.get(country).map(|&idx| self.entries[idx].score)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CountryScore> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::RawRow;

    fn table_from(rows: &[(&str, &str, &str)]) -> SampleTable {
        let raw: Vec<RawRow> = rows
            .iter()
            .map(|(place, country, points)| {
                RawRow::from_pairs([
                    ("place", *place),
                    ("countryOfOrigin", *country),
                    ("totalCupPoints", *points),
                ])
            })
            .collect();
        SampleTable::load(&raw).unwrap()
    }

    #[test]
    fn pairwise_running_average_worked_example() {
        let table = table_from(&[
            ("1", "Brazil", "85"),
            ("2", "Brazil", "89"),
            ("3", "Peru", "80"),
        ]);
        let aggregate = CountryAggregate::build(&table);
        assert_eq!(aggregate.len(), 2);
        assert_eq!(aggregate.get("Brazil"), Some(87.0));
        assert_eq!(aggregate.get("Peru"), Some(80.0));
    }

    #[test]
    fn result_is_order_dependent() {
        // 80, 90, 70 -> ((80+90)/2 + 70)/2 = 77.5
        let forward = table_from(&[
            ("1", "Kenya", "80"),
            ("2", "Kenya", "90"),
            ("3", "Kenya", "70"),
        ]);
        // 70, 90, 80 -> ((70+90)/2 + 80)/2 = 80
        let reversed = table_from(&[
            ("1", "Kenya", "70"),
            ("2", "Kenya", "90"),
            ("3", "Kenya", "80"),
        ]);
        let a = CountryAggregate::build(&forward).get("Kenya").unwrap();
        let b = CountryAggregate::build(&reversed).get("Kenya").unwrap();
        assert_eq!(a, 77.5);
        assert_eq!(b, 80.0);
        assert_ne!(a, b);
    }

    #[test]
    fn build_is_deterministic_for_a_fixed_order() {
        let table = table_from(&[
            ("1", "Brazil", "82"),
            ("2", "Peru", "79"),
            ("3", "Brazil", "88"),
        ]);
        let first = CountryAggregate::build(&table);
        let second = CountryAggregate::build(&table);
        let a: Vec<_> = first.iter().cloned().collect();
        let b: Vec<_> = second.iter().cloned().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn first_seen_order_is_preserved() {
        let table = table_from(&[
            ("1", "Peru", "80"),
            ("2", "Brazil", "85"),
            ("3", "Peru", "82"),
        ]);
        let aggregate = CountryAggregate::build(&table);
        let order: Vec<&str> = aggregate.iter().map(|e| e.country.as_str()).collect();
        assert_eq!(order, vec!["Peru", "Brazil"]);
    }

    #[test]
    fn missing_points_contribute_zero() {
        let raw = vec![RawRow::from_pairs([("place", "1"), ("countryOfOrigin", "Haiti")])];
        let table = SampleTable::load(&raw).unwrap();
        let aggregate = CountryAggregate::build(&table);
        assert_eq!(aggregate.get("Haiti"), Some(0.0));
    }
}
