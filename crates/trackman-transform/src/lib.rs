//! Row and column transformations for combined Trackman datasets.
//!
//! [`normalize`] projects raw per-game exports onto the frozen column
//! universe during the combine pass. The remaining modules are single-pass
//! column operations applied to an already-combined dataset.

pub mod clean;
pub mod error;
pub mod normalize;
pub mod numeric;
pub mod teams;

pub use clean::{CleanStats, clean_table};
pub use error::TransformError;
pub use normalize::{NormalizeOptions, normalize_table};
pub use numeric::parse_numeric;
pub use teams::{TeamFilterStats, backfill_team_names, filter_missing_teams};
