use cuppa_types::{GroupingDimension, MetricKey};

/// Input occurrences from the driving layer.
///
/// Each one replaces exactly one piece of session state and triggers a
/// full synchronous recomputation of the published datasets.
#[derive(Debug, Clone, PartialEq)]
pub enum InputSignal {
    /// The trend view's metric dropdown changed.
    MetricChanged { metric: MetricKey },
    /// The pie view's grouping dropdown changed.
    DimensionChanged { dimension: GroupingDimension },
    /// A single point was clicked on the trend view.
    PointSelected { place: u32 },
    /// A brush selected multiple points on the trend view.
    MultiSelected { places: Vec<u32> },
    /// The selection was dismissed.
    SelectionCleared,
}
