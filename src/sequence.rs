//! Line value generation for hexseq.
//!
//! Line `i` (1-based) carries the byte value `i mod 256`, rendered as exactly
//! two uppercase hex digits. Nothing here touches the filesystem, so the
//! writer and the tests share the same source of truth.

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Return the byte value carried by 1-based line `i`.
pub fn byte_for_line(i: u64) -> u8 {
    (i & 0xFF) as u8
}

/// Encode `v` as two uppercase ASCII hex digits.
pub fn hex_byte(v: u8) -> [u8; 2] {
    [HEX_DIGITS[(v >> 4) as usize], HEX_DIGITS[(v & 0x0F) as usize]]
}

/// Format line `i` without its trailing newline (e.g. `10` -> `"0A"`).
pub fn format_line(i: u64) -> String {
    format!("{:02X}", byte_for_line(i))
}

/// Iterator over the byte values of lines `1..=length`.
///
/// A `length` of zero or below yields nothing.
#[derive(Debug, Clone)]
pub struct HexSequence {
    next: u64,
    end: u64,
}

impl HexSequence {
    pub fn new(length: i64) -> Self {
        HexSequence {
            next: 1,
            end: line_count(length),
        }
    }
}

impl Iterator for HexSequence {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.next > self.end {
            return None;
        }
        let v = byte_for_line(self.next);
        self.next += 1;
        Some(v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end + 1).saturating_sub(self.next);
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

/// Number of lines produced for a requested `length`.
pub fn line_count(length: i64) -> u64 {
    length.max(0) as u64
}
