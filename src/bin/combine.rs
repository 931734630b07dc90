use anyhow::{Context, Result};
use profiler::dataset::combine;
use profiler::sites::{COMBINED_OUTPUT, DYNAMIC_OUTPUT, STATIC_OUTPUT};
use tracing::info;

fn main() -> Result<()> {
    profiler::init_tracing();

    let rows = combine(&[STATIC_OUTPUT, DYNAMIC_OUTPUT], COMBINED_OUTPUT)
        .with_context(|| format!("failed to combine into {}", COMBINED_OUTPUT))?;

    info!("Combined {} rows into '{}'.", rows, COMBINED_OUTPUT);
    Ok(())
}
