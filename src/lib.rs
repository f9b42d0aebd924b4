//! mp3count - Count audio frames in MP3 files
//!
//! Walks the frame headers of an MPEG-1 Layer III stream and counts the audio
//! frames, skipping a leading ID3v2 tag and the Xing/Info/VBRI summary frame
//! some encoders put at the start of the stream.
//!
//! # Quick Start
//!
//! ```no_run
//! let data = std::fs::read("song.mp3").unwrap();
//! let frames = mp3count::count_frames_from_bytes(&data);
//! println!("{} frames", frames);
//!
//! // Same count, straight from the file
//! assert_eq!(mp3count::count_frames_from_source("song.mp3").unwrap(), frames);
//! ```
//!
//! # Robustness
//!
//! Counting is total: any byte sequence yields a count. Bytes that do not
//! decode as a header are stepped over one at a time until the stream syncs
//! again, so garbage, trailing tags and truncated files simply count fewer
//! frames. Only the file-reading entry point can fail, and only with
//! [`Error::Io`].
//!
//! # Modules
//!
//! - [`mp3`]: Header decoding, ID3v2 skipping, VBR summary detection, scanning
//! - [`counter`]: File-level counting with a size limit
//! - [`config`]: TOML configuration
//! - [`report`]: Output formatters (JSON, CSV)

pub mod config;
pub mod counter;
pub mod error;
pub mod mp3;
pub mod report;

use std::path::Path;

pub use config::Config;
pub use counter::{CountResult, FrameCounter};
pub use error::{Error, Result};
pub use mp3::{ScanOptions, ScanSummary, SideInfoLayout, VbrKind};

/// Count the audio frames in an in-memory MP3 stream.
pub fn count_frames_from_bytes(data: &[u8]) -> usize {
    mp3::count_frames(data)
}

/// Read a file fully and count its audio frames.
///
/// Gives the same count as [`count_frames_from_bytes`] on the file's contents.
pub fn count_frames_from_source<P: AsRef<Path>>(path: P) -> Result<usize> {
    let data = std::fs::read(path)?;
    Ok(count_frames_from_bytes(&data))
}
