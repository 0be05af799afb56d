//! Ascent observation data substrate
//!
//! An [`ObservationTable`] accumulates evaluated (input, output) rows for one
//! generator instance. The table is append-only and its row identity is
//! positional: after any sequence of appends the identities are exactly
//! `0..row_count()`, an integer sequence, regardless of the labels attached
//! to incoming batches. Identity is never stored, so it cannot drift or
//! collide with heterogeneous input labels.
//!
//! Incoming data arrives as a rectangular [`Batch`]. Batch row labels may be
//! absent, integral, or numeric text; genuinely non-numeric labels are a
//! caller contract violation and fail the whole append, leaving the table
//! untouched.

#![deny(unsafe_code)]

pub mod batch;
pub mod error;
pub mod table;
pub mod value;

pub use batch::Batch;
pub use error::DataError;
pub use table::ObservationTable;
pub use value::{RowLabel, Value};
