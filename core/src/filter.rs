//! Selection-driven derivations for the pie and world views
//!
//! Pure functions over the table, the country aggregate and the current
//! selection. The Point and Multi policies differ on purpose: a point
//! click re-filters the whole table by the clicked row's dimension value,
//! a brush takes exactly the brushed rows, and on the world view a brush
//! excludes the brushed countries instead of isolating them.

use std::collections::HashSet;

use cuppa_types::{GroupingDimension, PieSlice, WorldEntry};
use hashbrown::HashMap;

use crate::aggregate::{CountryAggregate, CountryScore};
use crate::dataset::SampleTable;
use crate::geo;
use crate::selection::Selection;

/// The multiset of dimension values the pie view tallies.
///
/// Unknown places and empty brush sets yield an empty multiset; stale
/// selection events are an empty-view condition, never an error.
pub fn pie_values(
    table: &SampleTable,
    dimension: GroupingDimension,
    selection: &Selection,
) -> Vec<String> {
    match selection {
        Selection::None => table
            .iter()
            .map(|sample| sample.dimension(dimension).to_string())
            .collect(),
        Selection::Point(place) => {
            let Some(clicked) = table.get(*place) else {
                return Vec::new();
            };
            let wanted = clicked.dimension(dimension);
            table
                .iter()
                .filter(|sample| sample.dimension(dimension) == wanted)
                .map(|sample| sample.dimension(dimension).to_string())
                .collect()
        }
        Selection::Multi(places) => table
            .iter()
            .filter(|sample| places.contains(&sample.place))
            .map(|sample| sample.dimension(dimension).to_string())
            .collect(),
    }
}

/// Fold a multiset of dimension values into category counts,
/// first-seen order.
pub fn tally(values: &[String]) -> Vec<PieSlice> {
    let mut slices: Vec<PieSlice> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for value in values {
        match index.get(value.as_str()) {
            Some(&idx) => slices[idx].count += 1,
            None => {
                index.insert(value.as_str(), slices.len());
                slices.push(PieSlice {
                    category: value.clone(),
                    count: 1,
                });
            }
        }
    }
    slices
}

/// The aggregate entries shown on the world map for the current selection.
pub fn world_display_subset(
    aggregate: &CountryAggregate,
    table: &SampleTable,
    selection: &Selection,
) -> Vec<WorldEntry> {
    match selection {
        Selection::None => aggregate.iter().map(world_entry).collect(),
        Selection::Point(place) => {
            let Some(clicked) = table.get(*place) else {
                return Vec::new();
            };
            match aggregate.get(&clicked.country_of_origin) {
                Some(score) => vec![world_entry(&CountryScore {
                    country: clicked.country_of_origin.clone(),
                    score,
                })],
                None => Vec::new(),
            }
        }
        Selection::Multi(places) => {
            let excluded: HashSet<&str> = places
                .iter()
                .filter_map(|place| table.get(*place))
                .map(|sample| sample.country_of_origin.as_str())
                .collect();
            aggregate
                .iter()
                .filter(|entry| !excluded.contains(entry.country.as_str()))
                .map(world_entry)
                .collect()
        }
    }
}

fn world_entry(entry: &CountryScore) -> WorldEntry {
    WorldEntry {
        country: entry.country.clone(),
        code: geo::country_code(&entry.country).map(str::to_string),
        score: entry.score,
    }
}
