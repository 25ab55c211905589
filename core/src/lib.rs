pub mod aggregate;
pub mod config;
pub mod dataset;
pub mod filter;
pub mod geo;
pub mod selection;
pub mod session;

// Re-exports for convenience
pub use aggregate::{CountryAggregate, CountryScore};
pub use config::{ConfigError, ExplorerConfigExt};
pub use dataset::{ParseError, RawRow, ReaderError, RowParser, Sample, SampleTable, read_rows};
pub use filter::{pie_values, tally, world_display_subset};
pub use geo::country_code;
pub use selection::Selection;
pub use session::{ExplorerSession, InputSignal};
