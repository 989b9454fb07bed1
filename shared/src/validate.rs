//! Kiểm tra trường bắt buộc phía client
//!
//! Chỉ kiểm tra không-rỗng; mọi ràng buộc nghiệp vụ khác thuộc về
//! backend. Form phải dừng trước khi gọi mạng nếu có lỗi ở đây.

/// Lỗi gắn với một trường cụ thể của form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Nhãn hiển thị của trường.
    pub field: &'static str,
    pub message: String,
}

/// Duyệt các cặp (nhãn, giá trị) và trả lỗi cho từng trường rỗng.
pub fn require_non_empty(fields: &[(&'static str, &str)]) -> Result<(), Vec<FieldError>> {
    let errors: Vec<FieldError> = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| FieldError {
            field,
            message: format!("Vui lòng nhập {field}"),
        })
        .collect();

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Chuẩn hóa trường tùy chọn của form: chuỗi rỗng thành `None` để
/// payload bỏ hẳn trường thay vì gửi "".
pub fn none_if_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Ghép các thông báo lỗi thành một dòng hiển thị trong banner.
pub fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_filled_passes() {
        assert!(require_non_empty(&[("Họ tên", "Nguyễn Văn A"), ("Mã NV", "NV001")]).is_ok());
    }

    #[test]
    fn test_empty_and_whitespace_fields_are_reported() {
        let errors = require_non_empty(&[
            ("Họ tên", ""),
            ("Mã NV", "NV001"),
            ("Email", "   "),
        ])
        .unwrap_err();

        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "Họ tên");
        assert_eq!(errors[0].message, "Vui lòng nhập Họ tên");
        assert_eq!(errors[1].field, "Email");
    }

    #[test]
    fn test_none_if_empty_trims() {
        assert_eq!(none_if_empty("  "), None);
        assert_eq!(none_if_empty(""), None);
        assert_eq!(none_if_empty(" 0988 "), Some("0988".to_string()));
    }

    #[test]
    fn test_join_messages() {
        let errors = require_non_empty(&[("Họ tên", ""), ("Email", "")]).unwrap_err();
        assert_eq!(
            join_messages(&errors),
            "Vui lòng nhập Họ tên; Vui lòng nhập Email"
        );
    }
}
