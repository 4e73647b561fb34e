//! Conversion pipeline for one audiobook.
//!
//! The driver runs a fixed sequence for a single input file:
//!
//! ```text
//! validate input -> create output dir -> probe -> extract cover
//!     -> transcode each chapter -> report
//! ```
//!
//! Probe failures and an empty chapter list abort the run; cover
//! extraction and individual chapter transcodes never do. Per-chapter
//! outcomes are collected into a [`SplitReport`](crate::models::SplitReport)
//! and surfaced incrementally through [`SplitEvent`] callbacks.

mod driver;
mod errors;
mod events;

pub use driver::{run_split, run_split_with_events, COVER_FILENAME, SUPPORTED_EXTENSIONS};
pub use errors::{SplitError, SplitResult};
pub use events::SplitEvent;
