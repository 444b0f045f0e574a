mod app;
mod assets;
mod effects;
mod logging;
mod ui;

use std::path::PathBuf;

use anyhow::Result;

fn main() -> Result<()> {
    logging::initialize(logging::LogDestination::File);

    // Media browser root: first CLI argument, or ./media next to the binary.
    let media_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("./media"));

    app::run(&media_dir)
}
