//! Travel-time matrix.
//!
//! Provides a dense directed travel-time matrix built from trips.

mod matrix;

pub use matrix::TravelMatrix;
