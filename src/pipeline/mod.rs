//! Pipelines.
//!
//! A run builds the removable word dictionary ([DictionaryBuilder]),
//! then streams a word vector file through a [LineFilter].
//! [Killer] ties both to a [crate::config::Config].
mod dictionary_builder;
mod killer;
mod line_filter;
pub mod pipeline;

pub use dictionary_builder::{DictionaryBuilder, SelectedWords};
pub use killer::Killer;
pub use line_filter::{FilterReport, LineFilter, Verdict, FLUSH_INTERVAL};
pub use pipeline::Pipeline;
