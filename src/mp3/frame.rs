//! MPEG-1 Layer III frame header parsing
//!
//! MP3 frames start with a sync word (11 bits of 1s) followed by header info.
//! Frame header structure (4 bytes):
//! AAAAAAAA AAABBCCD EEEEFFGH IIJJKLMM
//!
//! A = sync (11 bits)
//! B = MPEG version (2 bits): 00=2.5, 01=reserved, 10=2, 11=1
//! C = Layer (2 bits): 00=reserved, 01=III, 10=II, 11=I
//! D = Protection bit (CRC)
//! E = Bitrate index (4 bits)
//! F = Sample rate index (2 bits)
//! G = Padding bit
//! H = Private bit
//! I = Channel mode (2 bits)
//! J = Mode extension (2 bits)
//! K = Copyright
//! L = Original
//! M = Emphasis (2 bits)
//!
//! Only MPEG-1 Layer III is accepted. Everything else is "not a frame".

/// Length of a frame header in bytes.
pub const HEADER_LEN: usize = 4;

/// Version field value for MPEG-1.
const VERSION_MPEG1: u8 = 3;

/// Layer field value for Layer III.
const LAYER_III: u8 = 1;

/// Layer III slot-size constant in `144 * bitrate / sample_rate`.
const LAYER3_SLOT_FACTOR: u32 = 144;

// Bitrate lookup table, MPEG-1 Layer III (kbps)
// Index 0 = free format, 15 = bad
const BITRATES_V1_L3: [Option<u32>; 16] = [
    None,
    Some(32),
    Some(40),
    Some(48),
    Some(56),
    Some(64),
    Some(80),
    Some(96),
    Some(112),
    Some(128),
    Some(160),
    Some(192),
    Some(224),
    Some(256),
    Some(320),
    None,
];

// Sample rate lookup table, MPEG-1 (Hz)
const SAMPLE_RATES_V1: [Option<u32>; 4] = [Some(44100), Some(48000), Some(32000), None];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelMode {
    Stereo,
    JointStereo,
    DualChannel,
    Mono,
}

impl ChannelMode {
    fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0 => ChannelMode::Stereo,
            1 => ChannelMode::JointStereo,
            2 => ChannelMode::DualChannel,
            _ => ChannelMode::Mono,
        }
    }
}

/// A decoded MPEG-1 Layer III frame header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    pub bitrate: u32,
    pub sample_rate: u32,
    pub padding: bool,
    pub channel_mode: ChannelMode,
    /// Total frame length, header included.
    pub frame_size: u32,
}

// Bitfield accessors. Each takes the raw header byte it reads from.

/// Byte 0 and the top 3 bits of byte 1 form the 11-bit sync word.
pub fn sync_ok(b0: u8, b1: u8) -> bool {
    b0 == 0xFF && (b1 & 0xE0) == 0xE0
}

/// MPEG version (bits 4-3 of byte 1)
pub fn version_id_of(b1: u8) -> u8 {
    (b1 >> 3) & 0x03
}

/// Layer (bits 2-1 of byte 1)
pub fn layer_of(b1: u8) -> u8 {
    (b1 >> 1) & 0x03
}

/// Bitrate index (bits 7-4 of byte 2)
pub fn bitrate_index_of(b2: u8) -> u8 {
    (b2 >> 4) & 0x0F
}

/// Sample rate index (bits 3-2 of byte 2)
pub fn sample_rate_index_of(b2: u8) -> u8 {
    (b2 >> 2) & 0x03
}

/// Padding (bit 1 of byte 2)
pub fn padding_of(b2: u8) -> bool {
    (b2 >> 1) & 0x01 == 1
}

/// Channel mode (bits 7-6 of byte 3)
pub fn channel_mode_of(b3: u8) -> ChannelMode {
    ChannelMode::from_bits(b3 >> 6)
}

/// Bitrate in kbps for a 4-bit index, `None` for free format and the bad index.
pub fn bitrate_kbps(index: u8) -> Option<u32> {
    BITRATES_V1_L3.get(usize::from(index)).copied().flatten()
}

/// Sample rate in Hz for a 2-bit index, `None` for the reserved index.
pub fn sample_rate_hz(index: u8) -> Option<u32> {
    SAMPLE_RATES_V1.get(usize::from(index)).copied().flatten()
}

/// `floor(144 * bitrate * 1000 / sample_rate) + padding`
pub fn frame_size(bitrate_kbps: u32, sample_rate_hz: u32, padding: bool) -> u32 {
    LAYER3_SLOT_FACTOR * bitrate_kbps * 1000 / sample_rate_hz + u32::from(padding)
}

impl FrameHeader {
    /// Parse a 4-byte MPEG-1 Layer III frame header
    pub fn parse(header: [u8; 4]) -> Option<Self> {
        let [b0, b1, b2, b3] = header;

        if !sync_ok(b0, b1) {
            return None;
        }

        if version_id_of(b1) != VERSION_MPEG1 || layer_of(b1) != LAYER_III {
            return None;
        }

        let bitrate = bitrate_kbps(bitrate_index_of(b2))?;
        let sample_rate = sample_rate_hz(sample_rate_index_of(b2))?;
        let padding = padding_of(b2);

        Some(FrameHeader {
            bitrate,
            sample_rate,
            padding,
            channel_mode: channel_mode_of(b3),
            frame_size: frame_size(bitrate, sample_rate, padding),
        })
    }

    /// Size of the Layer III side-information block that follows the header.
    pub fn side_info_len(&self) -> usize {
        match self.channel_mode {
            ChannelMode::Mono => 17,
            _ => 32,
        }
    }
}

/// Parse the frame header at `offset`, or `None` if fewer than 4 bytes remain
/// or the bytes there are not an MPEG-1 Layer III header.
pub fn parse_header(bytes: &[u8], offset: usize) -> Option<FrameHeader> {
    let end = offset.checked_add(HEADER_LEN)?;
    let header: [u8; 4] = bytes.get(offset..end)?.try_into().ok()?;
    FrameHeader::parse(header)
}
