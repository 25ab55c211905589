//! Integration tests for the session binder
//!
//! Feeds input signals through a session built from a small in-memory
//! dataset and checks the three published datasets stay consistent.

use cuppa_types::{GroupingDimension, MetricKey, PieSlice};

use crate::dataset::{RawRow, SampleTable};
use crate::selection::Selection;

use super::{ExplorerSession, InputSignal};

fn fixture_rows() -> Vec<RawRow> {
    let rows = [
        ("1", "Brazil", "Cerrado", "Bourbon Trade", "2014", "April 4th, 2015", "7.5", "85"),
        ("2", "Brazil", "Mogiana", "Bourbon Trade", "2015", "2015-05-10", "8.0", "89"),
        ("3", "Peru", "Cajamarca", "Andes Export", "2014", "sometime", "7.0", "80"),
        ("4", "Kenya", "Nyeri", "Rift Traders", "2015", "", "8.2", "90"),
        ("5", "Kenya", "Kirinyaga", "Rift Traders", "2013/2014", "June 1st, 2014", "7.9", "84"),
    ];
    rows.iter()
        .map(|(place, country, region, distributor, year, date, aroma, points)| {
            RawRow::from_pairs([
                ("place", *place),
                ("countryOfOrigin", *country),
                ("region", *region),
                ("distributor", *distributor),
                ("harvestYear", *year),
                ("gradingDate", *date),
                ("aroma", *aroma),
                ("totalCupPoints", *points),
            ])
        })
        .collect()
}

fn fixture_session() -> ExplorerSession {
    let table = SampleTable::load(&fixture_rows()).unwrap();
    ExplorerSession::with_defaults(table)
}

fn slice<'a>(pie: &'a [PieSlice], category: &str) -> Option<&'a PieSlice> {
    pie.iter().find(|s| s.category == category)
}

#[test]
fn initial_datasets_cover_the_full_table() {
    let session = fixture_session();
    let datasets = session.datasets();

    assert_eq!(datasets.main_series.len(), 5);
    assert_eq!(datasets.main_series[0].value, Some(7.5));
    assert_eq!(datasets.main_series[0].hover.grading_date, "04.04.2015.");
    assert_eq!(datasets.main_series[2].hover.grading_date, "");

    // Default grouping is harvest year.
    let total: u64 = datasets.pie.iter().map(|s| s.count).sum();
    assert_eq!(total, 5);
    assert_eq!(slice(&datasets.pie, "2014").unwrap().count, 2);
    assert_eq!(slice(&datasets.pie, "2013/2014").unwrap().count, 1);

    // Full aggregate, first-seen order, pairwise Kenya score.
    let countries: Vec<&str> = datasets.world.iter().map(|e| e.country.as_str()).collect();
    assert_eq!(countries, vec!["Brazil", "Peru", "Kenya"]);
    assert_eq!(datasets.world[0].score, 87.0);
    assert_eq!(datasets.world[2].score, 87.0);
    assert_eq!(datasets.world[2].code.as_deref(), Some("KEN"));
}

#[test]
fn metric_change_replots_the_series_only() {
    let mut session = fixture_session();
    let before_pie = session.datasets().pie.clone();
    let before_world = session.datasets().world.clone();

    let datasets = session.apply(InputSignal::MetricChanged {
        metric: MetricKey::TotalCupPoints,
    });
    assert_eq!(datasets.main_series[0].value, Some(85.0));
    assert_eq!(datasets.main_series[4].value, Some(84.0));
    assert_eq!(datasets.pie, before_pie);
    assert_eq!(datasets.world, before_world);
}

#[test]
fn missing_metric_values_stay_missing_in_the_series() {
    let mut session = fixture_session();
    let datasets = session.apply(InputSignal::MetricChanged {
        metric: MetricKey::Moisture,
    });
    assert!(datasets.main_series.iter().all(|p| p.value.is_none()));
    assert_eq!(datasets.main_series.len(), 5);
}

#[test]
fn dimension_change_retallies_the_pie() {
    let mut session = fixture_session();
    let datasets = session.apply(InputSignal::DimensionChanged {
        dimension: GroupingDimension::Distributor,
    });
    assert_eq!(slice(&datasets.pie, "Bourbon Trade").unwrap().count, 2);
    assert_eq!(slice(&datasets.pie, "Rift Traders").unwrap().count, 2);
    assert_eq!(slice(&datasets.pie, "Andes Export").unwrap().count, 1);
}

#[test]
fn click_refilters_pie_and_isolates_country() {
    let mut session = fixture_session();
    session.apply(InputSignal::DimensionChanged {
        dimension: GroupingDimension::CountryOfOrigin,
    });
    let datasets = session.apply(InputSignal::PointSelected { place: 1 });

    // All rows sharing the clicked row's country count.
    assert_eq!(datasets.pie.len(), 1);
    assert_eq!(datasets.pie[0].category, "Brazil");
    assert_eq!(datasets.pie[0].count, 2);

    assert_eq!(datasets.world.len(), 1);
    assert_eq!(datasets.world[0].country, "Brazil");

    // The trend line itself is never narrowed.
    assert_eq!(datasets.main_series.len(), 5);
}

#[test]
fn brush_takes_selected_rows_and_excludes_their_countries() {
    let mut session = fixture_session();
    session.apply(InputSignal::DimensionChanged {
        dimension: GroupingDimension::CountryOfOrigin,
    });
    let datasets = session.apply(InputSignal::MultiSelected { places: vec![1, 3] });

    // Pie: exactly the brushed rows, no re-filtering.
    let total: u64 = datasets.pie.iter().map(|s| s.count).sum();
    assert_eq!(total, 2);
    assert_eq!(slice(&datasets.pie, "Brazil").unwrap().count, 1);
    assert_eq!(slice(&datasets.pie, "Peru").unwrap().count, 1);

    // World: brushed countries are removed from the map.
    assert_eq!(datasets.world.len(), 1);
    assert_eq!(datasets.world[0].country, "Kenya");
}

#[test]
fn clear_restores_the_unselected_view() {
    let mut session = fixture_session();
    let initial = session.datasets().clone();
    session.apply(InputSignal::PointSelected { place: 2 });
    let datasets = session.apply(InputSignal::SelectionCleared);
    assert_eq!(*datasets, initial);
    assert!(session.selection().is_none());
}

#[test]
fn last_event_wins_across_event_kinds() {
    let mut session = fixture_session();
    session.apply(InputSignal::PointSelected { place: 1 });
    session.apply(InputSignal::MultiSelected { places: vec![2, 3] });
    session.apply(InputSignal::PointSelected { place: 1 });
    assert_eq!(*session.selection(), Selection::point(1));

    let mut fresh = fixture_session();
    fresh.apply(InputSignal::PointSelected { place: 1 });
    assert_eq!(session.datasets(), fresh.datasets());
}

#[test]
fn stale_selection_blanks_pie_and_world_only() {
    let mut session = fixture_session();
    let datasets = session.apply(InputSignal::PointSelected { place: 404 });
    assert!(datasets.pie.is_empty());
    assert!(datasets.world.is_empty());
    assert_eq!(datasets.main_series.len(), 5);
}

#[test]
fn subscribers_see_every_republication() {
    let mut session = fixture_session();
    let receiver = session.subscribe();
    session.apply(InputSignal::PointSelected { place: 3 });
    let published = receiver.borrow();
    assert_eq!(*published, *session.datasets());
    assert_eq!(published.world.len(), 1);
    assert_eq!(published.world[0].country, "Peru");
}
