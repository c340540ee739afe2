/// Size of a switchable ROM bank.
pub const BANK_SIZE: u64 = 0x4000;

/// Format a byte count as a human-readable size string (e.g., "4 KB", "2 MB").
///
/// Uses exact integer division; values that aren't clean multiples of KB/MB
/// are shown in bytes.
pub fn format_bytes(bytes: u64) -> String {
    if bytes >= 1024 * 1024 && bytes.is_multiple_of(1024 * 1024) {
        format!("{} MB", bytes / (1024 * 1024))
    } else if bytes >= 1024 && bytes.is_multiple_of(1024) {
        format!("{} KB", bytes / 1024)
    } else {
        format!("{} bytes", bytes)
    }
}

/// Read a null-terminated ASCII string from a byte slice.
///
/// Stops at the first null byte, filters out non-printable characters,
/// and returns the result. No trimming is performed.
pub fn read_ascii(buf: &[u8]) -> String {
    buf.iter()
        .take_while(|&&b| b != 0)
        .filter(|&&b| (0x20..0x7F).contains(&b))
        .map(|&b| b as char)
        .collect()
}

/// Split a byte into its `(low, high)` 4-bit halves.
pub fn nibbles(b: u8) -> (u8, u8) {
    (b & 0xF, (b >> 4) & 0xF)
}

/// Read a little-endian u16 at `pos`.
///
/// Panics if `buf` is shorter than `pos + 2`; callers index fixed record
/// layouts whose size is checked when the table is read.
pub fn u16_le(buf: &[u8], pos: usize) -> u16 {
    u16::from_le_bytes([buf[pos], buf[pos + 1]])
}

/// Translate an address seen by the CPU while `bank` is switched in to an
/// absolute image offset.
///
/// Addresses below 0x4000 are in the fixed home bank and map to themselves.
pub fn bank_offset(bank: u8, addr: u16) -> u64 {
    let addr = u64::from(addr);
    if addr < BANK_SIZE {
        addr
    } else {
        (addr - BANK_SIZE) + u64::from(bank) * BANK_SIZE
    }
}
