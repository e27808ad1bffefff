//! Human-readable byte counts.

const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
const STEP: u64 = 1024;

/// Format a byte count as `"<value> <unit>"`.
///
/// Picks the largest unit the value reaches (GB is the ceiling), rounds to two
/// decimals and drops trailing zeros: `1536 -> "1.5 KB"`, `1024 -> "1 KB"`.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut index = 0;
    let mut scale = 1u64;
    while index < UNITS.len() - 1 && bytes / scale >= STEP {
        scale *= STEP;
        index += 1;
    }

    let value = bytes as f64 / scale as f64;
    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, UNITS[index])
}

#[cfg(test)]
mod tests {
    use super::*;

    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    #[test]
    fn test_format_size_zero() {
        assert_eq!(format_size(0), "0 Bytes");
    }

    #[test]
    fn test_format_size_bytes() {
        assert_eq!(format_size(1), "1 Bytes");
        assert_eq!(format_size(512), "512 Bytes");
        assert_eq!(format_size(1023), "1023 Bytes");
    }

    #[test]
    fn test_format_size_kb() {
        assert_eq!(format_size(KB), "1 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(1152), "1.13 KB");
        assert_eq!(format_size(MB - 1), "1024 KB");
    }

    #[test]
    fn test_format_size_exact_powers() {
        assert_eq!(format_size(MB), "1 MB");
        assert_eq!(format_size(GB), "1 GB");
        assert_eq!(format_size(1_234_567), "1.18 MB");
    }

    #[test]
    fn test_format_size_caps_at_gb() {
        assert_eq!(format_size(10 * GB), "10 GB");
        assert_eq!(format_size(2048 * GB), "2048 GB");
    }

    #[test]
    fn test_unit_keeps_value_below_step() {
        for bytes in [1, 1000, KB, 5 * KB + 3, 700 * MB, 3 * GB / 2] {
            let rendered = format_size(bytes);
            let (value, _) = rendered.split_once(' ').unwrap();
            let value: f64 = value.parse().unwrap();
            assert!((1.0..=1024.0).contains(&value), "{bytes} -> {rendered}");
        }
    }
}
