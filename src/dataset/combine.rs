use crate::dataset::{Dataset, DatasetError};
use std::path::Path;
use tracing::info;

/// Concatenate several dataset files into `output`.
///
/// Columns are matched by name; a column one file lacks is left empty for
/// that file's rows. Rows keep their file order, then row order. Returns
/// the number of rows written.
pub fn combine<P: AsRef<Path>>(inputs: &[P], output: impl AsRef<Path>) -> Result<usize, DatasetError> {
    let mut combined = Dataset::new();

    for input in inputs {
        let part = Dataset::load(input)?;
        info!(path = %input.as_ref().display(), rows = part.len(), "adding dataset");
        combined.extend(part);
    }

    combined.write(output)?;
    Ok(combined.len())
}
