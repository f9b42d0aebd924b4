//! CSV report generation

use crate::counter::CountResult;
use std::io::{self, Write};

pub fn write<W: Write>(writer: &mut W, results: &[CountResult]) -> io::Result<()> {
    // Header
    writeln!(writer, "file,frame_count,vbr_summary,declared_frames,error")?;

    // Rows
    for r in results {
        let vbr = r
            .vbr_summary
            .map(|k| format!("{:?}", k))
            .unwrap_or_else(|| "-".to_string());

        let declared = r
            .declared_frames
            .map(|n| n.to_string())
            .unwrap_or_else(|| "n/a".to_string());

        writeln!(
            writer,
            "{},{},{},{},{}",
            escape_csv(&r.file),
            r.frame_count,
            vbr,
            declared,
            escape_csv(r.error.as_deref().unwrap_or(""))
        )?;
    }

    Ok(())
}

fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
