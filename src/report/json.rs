//! JSON report generation

use crate::counter::CountResult;
use crate::report::Summary;
use serde::Serialize;
use std::io::{self, Write};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    summary: JsonSummary,
    files: &'a [CountResult],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonSummary {
    total: usize,
    counted: usize,
    failed: usize,
    frame_count: usize,
}

pub fn write<W: Write>(writer: &mut W, results: &[CountResult]) -> io::Result<()> {
    let summary = Summary::from_results(results);

    let report = JsonReport {
        summary: JsonSummary {
            total: summary.total,
            counted: summary.counted,
            failed: summary.failed,
            frame_count: summary.frames,
        },
        files: results,
    };

    serde_json::to_writer_pretty(&mut *writer, &report).map_err(io::Error::from)?;
    writeln!(writer)
}
