pub mod frame;
pub mod id3;
pub mod scan;
pub mod vbr;

pub use frame::{parse_header, ChannelMode, FrameHeader};
pub use id3::skip_leading_tag;
pub use scan::{count_frames, count_frames_with, scan, ScanOptions, ScanSummary};
pub use vbr::{is_vbr_summary_frame, SideInfoLayout, VbrKind, VbrSummary};
