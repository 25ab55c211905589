mod binder;
mod signal;

#[cfg(test)]
mod binder_tests;

pub use binder::ExplorerSession;
pub use signal::InputSignal;
