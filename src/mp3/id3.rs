//! ID3v2 tag skipping
//!
//! ID3v2 header: "ID3" (3) + version (2) + flags (1) + size (4) = 10 bytes.
//! The size is a synch-safe integer: 7 data bits per byte, most significant
//! byte first, so no byte of it can look like a frame sync.

/// Length of the fixed ID3v2 header.
pub const ID3V2_HEADER_LEN: usize = 10;

const ID3_MAGIC: &[u8; 3] = b"ID3";

/// Decode a 4-byte synch-safe integer.
pub fn synchsafe_u32(bytes: [u8; 4]) -> u32 {
    bytes
        .iter()
        .fold(0u32, |acc, &b| (acc << 7) | u32::from(b & 0x7F))
}

/// Offset of the first byte after a leading ID3v2 tag, or 0 if there is none.
///
/// The declared size is not checked against the buffer length, so the result
/// can point past the end of `bytes`. Size bytes missing from a truncated
/// header read as 0, so a present tag always skips at least 10 bytes.
pub fn skip_leading_tag(bytes: &[u8]) -> usize {
    if !bytes.starts_with(ID3_MAGIC) {
        return 0;
    }

    let mut size = [0u8; 4];
    for (i, b) in size.iter_mut().enumerate() {
        *b = bytes.get(6 + i).copied().unwrap_or(0);
    }
    ID3V2_HEADER_LEN + synchsafe_u32(size) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id3_header(size: [u8; 4]) -> Vec<u8> {
        let mut data = vec![
            b'I', b'D', b'3', // ID3 magic
            0x04, 0x00, // Version 2.4.0
            0x00, // Flags
        ];
        data.extend_from_slice(&size);
        data
    }

    #[test]
    fn test_no_tag() {
        assert_eq!(skip_leading_tag(&[]), 0);
        assert_eq!(skip_leading_tag(&[0xFF, 0xFB, 0x90, 0x00]), 0);
        assert_eq!(skip_leading_tag(b"TAG not at start"), 0);
    }

    #[test]
    fn test_empty_tag() {
        assert_eq!(skip_leading_tag(&id3_header([0, 0, 0, 0])), 10);
    }

    #[test]
    fn test_synchsafe_size() {
        // 0x00 0x00 0x02 0x01 = 2 * 128 + 1 = 257
        assert_eq!(skip_leading_tag(&id3_header([0x00, 0x00, 0x02, 0x01])), 10 + 257);
        // Max value: 28 bits set
        assert_eq!(synchsafe_u32([0x7F, 0x7F, 0x7F, 0x7F]), 0x0FFF_FFFF);
    }

    #[test]
    fn test_high_bit_is_ignored() {
        // Only the low 7 bits of each size byte carry data
        assert_eq!(synchsafe_u32([0x80, 0x80, 0x80, 0x81]), 1);
    }

    #[test]
    fn test_size_may_exceed_buffer() {
        let data = id3_header([0x00, 0x00, 0x10, 0x00]);
        assert_eq!(skip_leading_tag(&data), 10 + 2048);
        assert!(skip_leading_tag(&data) > data.len());
    }

    #[test]
    fn test_truncated_header() {
        // Magic present but the size field is cut off: missing bytes are 0
        assert_eq!(skip_leading_tag(b"ID3\x04\x00\x00\x00"), 10);
        assert_eq!(skip_leading_tag(b"ID3"), 10);
        // 0x01 at byte 6 is the top synch-safe digit: 1 << 21
        assert_eq!(skip_leading_tag(b"ID3\x04\x00\x00\x01"), 10 + (1 << 21));
    }
}
