use cuppa_types::{GroupingDimension, HoverInfo, MetricKey, TrendPoint, ViewDatasets};
use tokio::sync::watch;

use crate::aggregate::CountryAggregate;
use crate::dataset::SampleTable;
use crate::filter;
use crate::selection::Selection;

use super::signal::InputSignal;

/// Binds input state to the three published view datasets.
///
/// Owns the immutable table, the active metric/dimension, the current
/// selection and the cached country aggregate. Every applied signal is a
/// full synchronous recomputation; signals are processed strictly in
/// arrival order, so the published datasets always reflect the last
/// event. Hosts with more than one thread must serialize access behind a
/// single lock.
pub struct ExplorerSession {
    table: SampleTable,
    metric: MetricKey,
    dimension: GroupingDimension,
    selection: Selection,
    aggregate: CountryAggregate,
    datasets: ViewDatasets,
    publisher: watch::Sender<ViewDatasets>,
}

impl ExplorerSession {
    pub fn new(table: SampleTable, metric: MetricKey, dimension: GroupingDimension) -> Self {
        let aggregate = CountryAggregate::build(&table);
        let (publisher, _) = watch::channel(ViewDatasets::default());
        let mut session = Self {
            table,
            metric,
            dimension,
            selection: Selection::None,
            aggregate,
            datasets: ViewDatasets::default(),
            publisher,
        };
        session.recompute();
        session
    }

    /// New session with the initial dropdown values.
    pub fn with_defaults(table: SampleTable) -> Self {
        Self::new(table, MetricKey::default(), GroupingDimension::default())
    }

    /// Apply one input signal, recompute and republish all three datasets.
    pub fn apply(&mut self, signal: InputSignal) -> &ViewDatasets {
        tracing::debug!(?signal, "applying input signal");
        match signal {
            InputSignal::MetricChanged { metric } => self.metric = metric,
            InputSignal::DimensionChanged { dimension } => self.dimension = dimension,
            InputSignal::PointSelected { place } => self.selection = Selection::point(place),
            InputSignal::MultiSelected { places } => self.selection = Selection::multi(places),
            InputSignal::SelectionCleared => self.selection = Selection::None,
        }
        self.recompute();
        &self.datasets
    }

    fn recompute(&mut self) {
        let main_series = self
            .table
            .iter()
            .map(|sample| TrendPoint {
                place: sample.place,
                value: sample.metric(self.metric),
                hover: HoverInfo {
                    country_of_origin: sample.country_of_origin.clone(),
                    region: sample.region.clone(),
                    distributor: sample.distributor.clone(),
                    harvest_year: sample.harvest_year.clone(),
                    grading_date: sample.formatted_grading_date(),
                },
            })
            .collect();
        let pie = filter::tally(&filter::pie_values(
            &self.table,
            self.dimension,
            &self.selection,
        ));
        let world = filter::world_display_subset(&self.aggregate, &self.table, &self.selection);

        self.datasets = ViewDatasets {
            main_series,
            pie,
            world,
        };
        self.publisher.send_replace(self.datasets.clone());
    }

    /// The most recently published datasets.
    pub fn datasets(&self) -> &ViewDatasets {
        &self.datasets
    }

    /// Subscribe to dataset republication.
    pub fn subscribe(&self) -> watch::Receiver<ViewDatasets> {
        self.publisher.subscribe()
    }

    pub fn table(&self) -> &SampleTable {
        &self.table
    }

    pub fn metric(&self) -> MetricKey {
        self.metric
    }

    pub fn dimension(&self) -> GroupingDimension {
        self.dimension
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }
}
