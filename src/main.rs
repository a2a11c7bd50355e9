// SPDX-FileCopyrightText: 2025 Russ Fellows <russ.fellows@gmail.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use anyhow::Result;
use bil_fixture::bil;
use std::path::Path;
use tracing::info;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("bil_fixture=warn")
        .init();

    info!("bil-fixture v{} starting", env!("CARGO_PKG_VERSION"));

    bil::generate(Path::new(bil::FIXTURE_FILE_NAME))?;

    println!(
        "Created {} with {} int16 values",
        bil::FIXTURE_FILE_NAME,
        bil::GRID_ROWS * bil::GRID_COLS
    );
    Ok(())
}
