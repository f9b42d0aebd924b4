pub mod csv;
pub mod json;

use crate::counter::CountResult;
use std::io;
use std::path::Path;

/// Generate a report in the appropriate format based on file extension
pub fn generate<P: AsRef<Path>>(path: P, results: &[CountResult]) -> io::Result<()> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let mut file = std::fs::File::create(path)?;

    match ext.as_str() {
        "json" => json::write(&mut file, results),
        _ => csv::write(&mut file, results),
    }
}

/// Summary statistics for a batch of results
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub counted: usize,
    pub failed: usize,
    pub frames: usize,
}

impl Summary {
    pub fn from_results(results: &[CountResult]) -> Self {
        let mut summary = Self {
            total: results.len(),
            ..Self::default()
        };

        for r in results {
            if r.is_error() {
                summary.failed += 1;
            } else {
                summary.counted += 1;
                summary.frames += r.frame_count;
            }
        }

        summary
    }
}
