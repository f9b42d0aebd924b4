//! Frame walking
//!
//! Starts after a leading ID3v2 tag and hops from header to header. A position
//! that does not decode as a header costs one byte of resynchronization, so a
//! scan takes at most `bytes.len()` steps.

use super::frame::{parse_header, HEADER_LEN};
use super::id3::skip_leading_tag;
use super::vbr::{SideInfoLayout, VbrKind, VbrSummary};
use serde::Serialize;
use tracing::{debug, trace};

/// Knobs for a scan. The default reproduces the fixed side-info layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOptions {
    pub side_info: SideInfoLayout,
}

impl ScanOptions {
    pub fn with_side_info(mut self, layout: SideInfoLayout) -> Self {
        self.side_info = layout;
        self
    }
}

/// What a scan found besides the frame count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    /// Audio frames counted.
    pub frames: usize,
    /// Bytes covered by the leading ID3v2 tag (0 if none).
    pub tag_len: usize,
    /// Offset of the first valid frame header, summary frame included.
    pub first_frame_offset: Option<usize>,
    /// Summary frame skipped at the start of the stream.
    pub vbr_summary: Option<VbrKind>,
    /// Frame count the summary frame claims, if it has one.
    pub declared_frames: Option<u32>,
    /// Single-byte resynchronization steps taken.
    pub skipped_bytes: usize,
}

/// Walk `bytes` and count MPEG-1 Layer III audio frames.
///
/// Never fails: empty, truncated and non-MP3 input all produce a summary with
/// `frames == 0`.
pub fn scan(bytes: &[u8], options: &ScanOptions) -> ScanSummary {
    let mut summary = ScanSummary {
        tag_len: skip_leading_tag(bytes),
        ..Default::default()
    };

    if summary.tag_len > 0 {
        debug!(tag_len = summary.tag_len, "skipping ID3v2 tag");
    }

    let mut cursor = summary.tag_len;

    // Needs HEADER_LEN bytes of headroom past the cursor
    while cursor
        .checked_add(HEADER_LEN)
        .is_some_and(|end| end < bytes.len())
    {
        let before = cursor;

        match parse_header(bytes, cursor) {
            None => {
                summary.skipped_bytes += 1;
                cursor += 1;
            }
            Some(header) => {
                let first = summary.first_frame_offset.is_none();
                if first {
                    summary.first_frame_offset = Some(cursor);
                }

                let vbr = if first {
                    VbrSummary::detect(bytes, cursor, &header, options.side_info)
                } else {
                    None
                };

                match vbr {
                    Some(vbr) => {
                        debug!(offset = cursor, kind = ?vbr.kind, "skipping VBR summary frame");
                        summary.vbr_summary = Some(vbr.kind);
                        summary.declared_frames = vbr.declared_frames;
                    }
                    None => {
                        trace!(offset = cursor, size = header.frame_size, "frame");
                        summary.frames += 1;
                    }
                }

                debug_assert!(header.frame_size >= 96, "frame shorter than 96 bytes");
                cursor = cursor.saturating_add(header.frame_size as usize);
            }
        }

        debug_assert!(cursor > before, "scan cursor must strictly increase");
    }

    debug!(
        frames = summary.frames,
        skipped_bytes = summary.skipped_bytes,
        "scan finished"
    );

    summary
}

/// Count frames with explicit options.
pub fn count_frames_with(bytes: &[u8], options: &ScanOptions) -> usize {
    scan(bytes, options).frames
}

/// Count frames using the fixed side-info layout.
pub fn count_frames(bytes: &[u8]) -> usize {
    count_frames_with(bytes, &ScanOptions::default())
}
