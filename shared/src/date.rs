//! Định dạng ngày và tiền tệ theo quy ước vi-VN
//!
//! Backend trả ngày dạng ISO (`2024-03-05` hoặc kèm giờ); UI hiển thị
//! `dd/mm/yyyy`. Số tiền nhóm ba chữ số bằng dấu chấm.

use chrono::{NaiveDate, NaiveDateTime};

/// Đọc phần ngày của một chuỗi ISO, chấp nhận cả chuỗi datetime.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let date_part = raw.get(..10)?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// `2024-03-05` -> `05/03/2024`; trả `None` nếu chuỗi không hợp lệ.
pub fn format_vn_date(raw: &str) -> Option<String> {
    parse_date(raw).map(|d| d.format("%d/%m/%Y").to_string())
}

/// Hiển thị ngày có thể vắng mặt, dùng "-" làm chỗ trống.
pub fn display_date(raw: Option<&str>) -> String {
    raw.and_then(format_vn_date).unwrap_or_else(|| "-".to_string())
}

/// `2024-03-05T14:30:00` (hoặc `2024-03-05 14:30:00`) -> `05/03/2024 14:30`.
pub fn format_vn_datetime(raw: &str) -> Option<String> {
    let normalized = raw.replace('T', " ");
    let trimmed = normalized.get(..19)?;
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|dt| dt.format("%d/%m/%Y %H:%M").to_string())
}

/// Nhóm ba chữ số bằng dấu chấm: 1234567 -> "1.234.567".
pub fn group_digits(value: i64) -> String {
    let negative = value < 0;
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Hiển thị số tiền VNĐ, "-" khi vắng mặt.
pub fn display_vnd(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{} VNĐ", group_digits(v.round() as i64)),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_vn_date() {
        assert_eq!(format_vn_date("2024-03-05").as_deref(), Some("05/03/2024"));
        // Chuỗi datetime cũng chỉ lấy phần ngày.
        assert_eq!(
            format_vn_date("2024-12-31T23:59:59").as_deref(),
            Some("31/12/2024")
        );
        assert_eq!(format_vn_date("không phải ngày"), None);
        assert_eq!(format_vn_date(""), None);
    }

    #[test]
    fn test_display_date_placeholder() {
        assert_eq!(display_date(None), "-");
        assert_eq!(display_date(Some("2024-01-02")), "02/01/2024");
        assert_eq!(display_date(Some("hỏng")), "-");
    }

    #[test]
    fn test_format_vn_datetime() {
        assert_eq!(
            format_vn_datetime("2024-03-05T14:30:00").as_deref(),
            Some("05/03/2024 14:30")
        );
        assert_eq!(
            format_vn_datetime("2024-03-05 08:01:59").as_deref(),
            Some("05/03/2024 08:01")
        );
        assert_eq!(format_vn_datetime("2024-03-05"), None);
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(999), "999");
        assert_eq!(group_digits(1_000), "1.000");
        assert_eq!(group_digits(1_234_567), "1.234.567");
        assert_eq!(group_digits(-25_000), "-25.000");
    }

    #[test]
    fn test_display_vnd() {
        assert_eq!(display_vnd(Some(1_500_000.0)), "1.500.000 VNĐ");
        assert_eq!(display_vnd(None), "-");
    }
}
