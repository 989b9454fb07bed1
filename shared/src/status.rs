//! Từ vựng trạng thái và ánh xạ badge
//!
//! Trạng thái chứng chỉ do backend tính sẵn; client chỉ nhận diện ba
//! nhãn đã biết và mọi giá trị lạ rơi về badge trung tính thay vì lỗi.

use serde::{Deserialize, Serialize};
use std::fmt;

// =========================================================
// Trạng thái chứng chỉ
// =========================================================

/// Ba nhãn backend trả về, cộng nhánh dự phòng cho giá trị lạ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CertificateStatus {
    /// "Còn hạn"
    Valid,
    /// "Sắp hết hạn"
    ExpiringSoon,
    /// "Hết hạn"
    Expired,
    /// Giá trị không nhận diện được, giữ nguyên văn để hiển thị.
    Unknown(String),
}

impl CertificateStatus {
    pub fn label(&self) -> &str {
        match self {
            CertificateStatus::Valid => "Còn hạn",
            CertificateStatus::ExpiringSoon => "Sắp hết hạn",
            CertificateStatus::Expired => "Hết hạn",
            CertificateStatus::Unknown(raw) => raw,
        }
    }

    /// Lớp badge daisyUI; nhãn lạ dùng màu trung tính.
    pub fn badge_class(&self) -> &'static str {
        match self {
            CertificateStatus::Valid => "badge-success",
            CertificateStatus::ExpiringSoon => "badge-warning",
            CertificateStatus::Expired => "badge-error",
            CertificateStatus::Unknown(_) => "badge-ghost",
        }
    }
}

impl Default for CertificateStatus {
    fn default() -> Self {
        CertificateStatus::Unknown(String::new())
    }
}

impl From<String> for CertificateStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Còn hạn" => CertificateStatus::Valid,
            "Sắp hết hạn" => CertificateStatus::ExpiringSoon,
            "Hết hạn" => CertificateStatus::Expired,
            _ => CertificateStatus::Unknown(raw),
        }
    }
}

impl From<CertificateStatus> for String {
    fn from(status: CertificateStatus) -> Self {
        status.label().to_string()
    }
}

impl fmt::Display for CertificateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Bộ lọc trạng thái của màn hình chứng chỉ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Valid,
    Expiring,
    Expired,
}

impl StatusFilter {
    pub fn keeps(&self, status: &CertificateStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Valid => *status == CertificateStatus::Valid,
            StatusFilter::Expiring => *status == CertificateStatus::ExpiringSoon,
            StatusFilter::Expired => *status == CertificateStatus::Expired,
        }
    }

    /// Giá trị tham số `?status=` khi muốn lọc phía server.
    pub fn query_value(&self) -> Option<&'static str> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Valid => Some("Còn hạn"),
            StatusFilter::Expiring => Some("expiring"),
            StatusFilter::Expired => Some("Hết hạn"),
        }
    }
}

// =========================================================
// Trạng thái nhân viên
// =========================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EmployeeStatus {
    Active,
    Inactive,
    Unknown(String),
}

impl EmployeeStatus {
    pub fn label(&self) -> &str {
        match self {
            EmployeeStatus::Active => "Hoạt động",
            EmployeeStatus::Inactive => "Không hoạt động",
            EmployeeStatus::Unknown(raw) => raw,
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "badge-success",
            _ => "badge-ghost",
        }
    }

    /// Giá trị gửi lại backend ("active"/"inactive").
    pub fn wire_value(&self) -> &str {
        match self {
            EmployeeStatus::Active => "active",
            EmployeeStatus::Inactive => "inactive",
            EmployeeStatus::Unknown(raw) => raw,
        }
    }
}

impl Default for EmployeeStatus {
    fn default() -> Self {
        EmployeeStatus::Active
    }
}

impl From<String> for EmployeeStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "active" => EmployeeStatus::Active,
            "inactive" => EmployeeStatus::Inactive,
            _ => EmployeeStatus::Unknown(raw),
        }
    }
}

impl From<EmployeeStatus> for String {
    fn from(status: EmployeeStatus) -> Self {
        status.wire_value().to_string()
    }
}

// =========================================================
// Nhãn trạng thái dạng chuỗi tự do
// =========================================================

/// Badge cho trạng thái dự án; tập nhãn nhỏ cố định, nhãn lạ về màu
/// trung tính.
pub fn project_status_badge(status: &str) -> &'static str {
    match status {
        "Đang thực hiện" => "badge-primary",
        "Hoàn thành" => "badge-success",
        "Tạm dừng" => "badge-warning",
        _ => "badge-ghost",
    }
}

/// Badge cho trạng thái phê duyệt hợp đồng đối tác.
pub fn contract_status_badge(status: &str) -> &'static str {
    match status {
        "Chờ tiếp nhận" => "badge-warning",
        "Đã duyệt" => "badge-success",
        _ => "badge-ghost",
    }
}

/// Badge cho tình trạng tiến độ hợp đồng.
pub fn condition_status_badge(status: &str) -> &'static str {
    match status {
        "Đúng tiến độ" => "badge-success",
        "Trễ tiến độ" => "badge-error",
        _ => "badge-ghost",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_certificate_status_roundtrip() {
        for label in ["Còn hạn", "Sắp hết hạn", "Hết hạn"] {
            let status = CertificateStatus::from(label.to_string());
            assert_eq!(status.label(), label);
            assert!(!matches!(status, CertificateStatus::Unknown(_)));
        }
    }

    #[test]
    fn test_unknown_status_keeps_raw_label_and_neutral_badge() {
        let status = CertificateStatus::from("Đang chờ duyệt".to_string());
        assert_eq!(status.label(), "Đang chờ duyệt");
        assert_eq!(status.badge_class(), "badge-ghost");
    }

    #[test]
    fn test_badge_mapping_is_total() {
        // Ba nhãn đã biết có màu cố định, mọi chuỗi khác (kể cả rỗng)
        // đều ra màu trung tính, không bao giờ panic.
        assert_eq!(
            CertificateStatus::from("Còn hạn".to_string()).badge_class(),
            "badge-success"
        );
        assert_eq!(
            CertificateStatus::from("Sắp hết hạn".to_string()).badge_class(),
            "badge-warning"
        );
        assert_eq!(
            CertificateStatus::from("Hết hạn".to_string()).badge_class(),
            "badge-error"
        );
        assert_eq!(
            CertificateStatus::from(String::new()).badge_class(),
            "badge-ghost"
        );
    }

    #[test]
    fn test_status_filter() {
        let valid = CertificateStatus::Valid;
        let expiring = CertificateStatus::ExpiringSoon;

        assert!(StatusFilter::All.keeps(&valid));
        assert!(StatusFilter::Expiring.keeps(&expiring));
        assert!(!StatusFilter::Expiring.keeps(&valid));
        assert_eq!(StatusFilter::Expiring.query_value(), Some("expiring"));
        assert_eq!(StatusFilter::All.query_value(), None);
    }

    #[test]
    fn test_employee_status_wire_roundtrip() {
        let status = EmployeeStatus::from("inactive".to_string());
        assert_eq!(status, EmployeeStatus::Inactive);
        assert_eq!(status.wire_value(), "inactive");
        assert_eq!(status.label(), "Không hoạt động");
    }

    #[test]
    fn test_free_form_badges_fall_back() {
        assert_eq!(project_status_badge("Hoàn thành"), "badge-success");
        assert_eq!(project_status_badge("???"), "badge-ghost");
        assert_eq!(contract_status_badge("Đã duyệt"), "badge-success");
        assert_eq!(condition_status_badge("Trễ tiến độ"), "badge-error");
    }
}
