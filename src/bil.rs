// SPDX-FileCopyrightText: 2025 Russ Fellows <russ.fellows@gmail.com>
// SPDX-License-Identifier: GPL-3.0-or-later

// src/bil.rs
//
// Single-band BIL fixture: a fixed 10x10 grid of int16 samples,
// written as raw little-endian values with no header.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Fixed grid dimensions; the sample layout is part of the fixture contract.
pub const GRID_ROWS: usize = 10;
pub const GRID_COLS: usize = 10;

/// Total file size: one little-endian `i16` per cell, nothing else.
pub const FIXTURE_SIZE_BYTES: usize = GRID_ROWS * GRID_COLS * 2;

/// File name the generator writes, relative to the working directory.
pub const FIXTURE_FILE_NAME: &str = "sample.bil";

/// Compute the grid in row-major order: value = row * 10 + col.
/// Every value lands in [0, 99], so the signed storage type never sees a sign.
pub fn grid_values() -> Vec<i16> {
    let mut values = Vec::with_capacity(GRID_ROWS * GRID_COLS);
    for row in 0..GRID_ROWS {
        for col in 0..GRID_COLS {
            values.push((row * GRID_COLS + col) as i16);
        }
    }
    values
}

/// Write the fixture to `path`: 100 consecutive little-endian `i16`s, no
/// header, no delimiters. Creates or truncates, so re-running yields a
/// byte-identical file.
pub fn generate(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create fixture file at {:?}", path))?;
    let mut writer = BufWriter::new(file);

    for value in grid_values() {
        writer
            .write_all(&value.to_le_bytes())
            .with_context(|| format!("Failed to write sample to {:?}", path))?;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to flush fixture file at {:?}", path))?;

    debug!("Wrote {} bytes to {:?}", FIXTURE_SIZE_BYTES, path);
    Ok(())
}
