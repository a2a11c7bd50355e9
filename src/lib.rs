//! Library for bil-fixture ─ synthesizes the sample.bil grid used to exercise BIL readers.

pub mod bil;

pub use bil::{generate, grid_values, FIXTURE_FILE_NAME, FIXTURE_SIZE_BYTES, GRID_COLS, GRID_ROWS};
