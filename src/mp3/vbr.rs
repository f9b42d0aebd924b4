//! Xing/Info and VBRI summary frame detection
//!
//! Encoders put a VBR summary in the first frame of the stream. The frame has
//! a valid MPEG header but carries statistics instead of audio, so it must not
//! be counted.
//!
//! - Xing/Info (LAME, most encoders): signature right after the side info.
//!   "Xing" for VBR streams, "Info" for CBR.
//! - VBRI (Fraunhofer): signature 32 bytes after the header.

use super::frame::{FrameHeader, HEADER_LEN};
use serde::{Deserialize, Serialize};

/// Side information size assumed by the fixed layout (MPEG-1 stereo).
const FIXED_SIDE_INFO_LEN: usize = 32;

/// Which VBR summary signature was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VbrKind {
    Xing,
    Info,
    Vbri,
}

/// Where to look for the summary signature inside the first frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SideInfoLayout {
    /// Always assume 32 bytes of side info: Xing/Info at +36, VBRI at +40.
    ///
    /// A mono stream's Xing frame (17 bytes of side info) is not recognized
    /// and gets counted as audio.
    #[default]
    Fixed,
    /// Xing/Info at +21 for mono frames and +36 otherwise. VBRI at +36, with
    /// +40 still accepted.
    ChannelAware,
}

/// A detected summary frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VbrSummary {
    pub kind: VbrKind,
    /// Frame count declared by the encoder, when the header carries one.
    pub declared_frames: Option<u32>,
}

impl VbrSummary {
    /// Look for a summary signature in the frame at `offset`.
    ///
    /// With [`SideInfoLayout::Fixed`] this finds a summary exactly when
    /// [`is_vbr_summary_frame`] does.
    pub fn detect(
        bytes: &[u8],
        offset: usize,
        header: &FrameHeader,
        layout: SideInfoLayout,
    ) -> Option<Self> {
        if layout == SideInfoLayout::Fixed && !is_vbr_summary_frame(bytes, offset) {
            return None;
        }

        let xing_at = match layout {
            SideInfoLayout::Fixed => HEADER_LEN + FIXED_SIDE_INFO_LEN,
            SideInfoLayout::ChannelAware => HEADER_LEN + header.side_info_len(),
        };

        if let Some(pos) = offset.checked_add(xing_at) {
            let kind = match signature_at(bytes, pos) {
                Some(b"Xing") => Some(VbrKind::Xing),
                Some(b"Info") => Some(VbrKind::Info),
                _ => None,
            };
            if let Some(kind) = kind {
                return Some(VbrSummary {
                    kind,
                    declared_frames: xing_frame_count(bytes, pos),
                });
            }
        }

        let vbri_candidates: &[usize] = match layout {
            SideInfoLayout::Fixed => &[HEADER_LEN + FIXED_SIDE_INFO_LEN + 4],
            SideInfoLayout::ChannelAware => &[
                HEADER_LEN + FIXED_SIDE_INFO_LEN,
                HEADER_LEN + FIXED_SIDE_INFO_LEN + 4,
            ],
        };

        vbri_candidates
            .iter()
            .filter_map(|&rel| offset.checked_add(rel))
            .find(|&pos| signature_at(bytes, pos) == Some(b"VBRI"))
            .map(|pos| VbrSummary {
                kind: VbrKind::Vbri,
                declared_frames: read_u32_be(bytes, pos + 14),
            })
    }
}

/// Fixed-layout check: "Xing" or "Info" at `offset + 36`, or "VBRI" at
/// `offset + 40`. Reads past the end of `bytes` are no match.
pub fn is_vbr_summary_frame(bytes: &[u8], offset: usize) -> bool {
    let xing_at = offset.checked_add(HEADER_LEN + FIXED_SIDE_INFO_LEN);
    let vbri_at = offset.checked_add(HEADER_LEN + FIXED_SIDE_INFO_LEN + 4);

    matches!(
        xing_at.and_then(|pos| signature_at(bytes, pos)),
        Some(b"Xing") | Some(b"Info")
    ) || vbri_at.and_then(|pos| signature_at(bytes, pos)) == Some(b"VBRI")
}

fn signature_at(bytes: &[u8], pos: usize) -> Option<&[u8; 4]> {
    bytes.get(pos..pos.checked_add(4)?)?.try_into().ok()
}

fn read_u32_be(bytes: &[u8], pos: usize) -> Option<u32> {
    signature_at(bytes, pos).map(|b| u32::from_be_bytes(*b))
}

/// Xing layout: signature (4), flags (4), then frames (4) if flag bit 0 is set.
fn xing_frame_count(bytes: &[u8], sig_pos: usize) -> Option<u32> {
    let flags = read_u32_be(bytes, sig_pos + 4)?;
    if flags & 0x01 == 0 {
        return None;
    }
    read_u32_be(bytes, sig_pos + 8)
}
