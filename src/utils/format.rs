//! # 字节大小格式化
//!
//! 把字节数格式化为人类可读字符串（1000 进制，与 macOS 文件大小
//! 显示习惯一致）。
//!
//! ## 依赖关系
//! - 被 `commands/compress.rs` 使用
//! - 无外部模块依赖

/// 格式化字节大小，如 1234567 -> "1.2 MB"
pub fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["KB", "MB", "GB", "TB"];

    if bytes < 1000 {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64;
    let mut unit = "B";
    for next in UNITS {
        if value < 1000.0 {
            break;
        }
        value /= 1000.0;
        unit = next;
    }

    if value < 10.0 {
        format!("{:.2} {}", value, unit)
    } else if value < 100.0 {
        format!("{:.1} {}", value, unit)
    } else {
        format!("{:.0} {}", value, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(999), "999 B");
    }

    #[test]
    fn test_kilobytes() {
        assert_eq!(format_size(1000), "1.00 KB");
        assert_eq!(format_size(52_400), "52.4 KB");
    }

    #[test]
    fn test_megabytes() {
        assert_eq!(format_size(1_234_567), "1.23 MB");
        assert_eq!(format_size(250_000_000), "250 MB");
    }

    #[test]
    fn test_gigabytes() {
        assert_eq!(format_size(3_500_000_000), "3.50 GB");
    }
}
