//! Mô hình dữ liệu dùng chung giữa các màn hình QLNS
//!
//! Mọi bản ghi ở đây là bản sao thụ động của dữ liệu backend trả về:
//! client không tự tính toán hay kiểm tra nghiệp vụ, chỉ giải mã JSON
//! và hiển thị. Các quan hệ lồng nhau (chứng chỉ, dự án, hợp đồng của
//! một nhân viên) chỉ xuất hiện khi gọi endpoint chi tiết.

use serde::{Deserialize, Serialize};

pub mod date;
pub mod envelope;
pub mod filter;
pub mod status;
pub mod validate;

pub use envelope::{ListResponse, PageMeta, absolute_index};
pub use status::{CertificateStatus, EmployeeStatus, StatusFilter};

// =========================================================
// Hằng số (Constants)
// =========================================================

/// Khóa LocalStorage lưu token đăng nhập.
pub const STORAGE_TOKEN_KEY: &str = "qlns_token";

/// Đuôi file chứng chỉ chấp nhận ở ô upload (chỉ là gợi ý UI,
/// backend mới là nơi kiểm tra thật sự).
pub const CERTIFICATE_FILE_ACCEPT: &str = ".pdf,.jpg,.jpeg,.png";

// =========================================================
// Phiên đăng nhập (Auth)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: User,
    pub token: String,
}

// =========================================================
// Nhân sự & phòng ban
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub id: i64,
    pub name: String,
}

/// Bản ghi pivot của quan hệ nhân viên - dự án (vai trò, ngày tham gia).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MembershipPivot {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub joined_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub employee_code: String,
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub status: EmployeeStatus,
    #[serde(default)]
    pub department_id: Option<i64>,
    #[serde(default)]
    pub department: Option<Department>,
    /// Chỉ có khi backend trả kèm quan hệ (endpoint chi tiết hoặc list mở rộng).
    #[serde(default)]
    pub certificates: Option<Vec<Certificate>>,
    #[serde(default)]
    pub projects: Option<Vec<Project>>,
    #[serde(default)]
    pub contracts: Option<Vec<EmploymentContract>>,
    /// Có mặt khi nhân viên nằm trong danh sách thành viên của một dự án.
    #[serde(default)]
    pub pivot: Option<MembershipPivot>,
}

impl Employee {
    /// Số chứng chỉ backend trả kèm, 0 nếu quan hệ chưa được nạp.
    pub fn certificate_count(&self) -> usize {
        self.certificates.as_ref().map_or(0, Vec::len)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeePayload {
    pub full_name: String,
    pub employee_code: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub department_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    pub status: String,
}

// =========================================================
// Dự án
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub client: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    /// Nhãn trạng thái backend trả về nguyên văn ("Đang thực hiện", ...).
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub employees: Option<Vec<Employee>>,
    /// Có mặt khi dự án nằm trong danh sách dự án của một nhân viên.
    #[serde(default)]
    pub pivot: Option<MembershipPivot>,
}

impl Project {
    pub fn member_count(&self) -> usize {
        self.employees.as_ref().map_or(0, Vec::len)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectPayload {
    pub code: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    pub start_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub status: String,
}

/// Thân request `POST /projects/{id}/assign`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignEmployeePayload {
    pub employee_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joined_date: Option<String>,
}

// =========================================================
// Hợp đồng
//
// Hai thực thể khác nhau cùng mang tên "hợp đồng":
// - `PartnerContract`: hợp đồng đối tác/kinh doanh, là tài nguyên
//   của endpoint /contracts (màn hình danh sách + chi tiết).
// - `EmploymentContract`: hợp đồng lao động, chỉ xuất hiện lồng
//   trong bản ghi chi tiết nhân viên.
// Không cần trường phân biệt vì hai kiểu không bao giờ đi qua cùng
// một endpoint.
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmploymentContract {
    pub id: i64,
    pub contract_number: String,
    #[serde(default)]
    pub contract_type: Option<String>,
    #[serde(default)]
    pub salary: Option<f64>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartnerContract {
    #[serde(default)]
    pub id: i64,
    pub contract_number: String,
    #[serde(default)]
    pub classification: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub project_name: Option<String>,
    #[serde(default)]
    pub contract_content: Option<String>,
    #[serde(default)]
    pub signing_date: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub extension_date: Option<String>,
    #[serde(default)]
    pub duration_days: Option<i64>,
    #[serde(default)]
    pub contract_value: Option<f64>,
    #[serde(default)]
    pub adjusted_value: Option<f64>,
    #[serde(default)]
    pub value_difference: Option<f64>,
    #[serde(default)]
    pub vat_rate: Option<String>,
    #[serde(default)]
    pub approval_status: Option<String>,
    #[serde(default)]
    pub contract_status: Option<String>,
    #[serde(default)]
    pub condition_status: Option<String>,
    #[serde(default)]
    pub investor: Option<String>,
    #[serde(default)]
    pub legal_entity: Option<String>,
    #[serde(default)]
    pub advance_payment: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub representative: Option<String>,
    #[serde(default)]
    pub representative_title: Option<String>,
    #[serde(default)]
    pub bank_account: Option<String>,
    #[serde(default)]
    pub bank_name: Option<String>,
    #[serde(default)]
    pub account_holder: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub appendix_number: Option<String>,
    #[serde(default)]
    pub revision_count: Option<i64>,
    #[serde(default)]
    pub extension_count: Option<i64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub updated_by: Option<String>,
}

/// Các trường của form thêm/sửa hợp đồng đối tác. Chuỗi rỗng được
/// chuẩn hóa thành `None` trước khi gửi.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractPayload {
    pub contract_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signing_date: Option<String>,
    pub start_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjusted_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub investor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

// =========================================================
// Chứng chỉ
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificateType {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Thời hạn hiệu lực tính theo tháng.
    #[serde(default)]
    pub validity_period: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificateTypePayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validity_period: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    pub id: i64,
    #[serde(default)]
    pub employee_id: Option<i64>,
    #[serde(default)]
    pub certificate_type_id: Option<i64>,
    pub certificate_number: String,
    #[serde(default)]
    pub issued_by: Option<String>,
    #[serde(default)]
    pub issued_date: Option<String>,
    #[serde(default)]
    pub expiry_date: Option<String>,
    /// Đường dẫn file backend lưu, nếu có upload.
    #[serde(default)]
    pub file_path: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    /// Trạng thái do backend tính, client chỉ hiển thị/lọc.
    #[serde(default)]
    pub status: CertificateStatus,
    #[serde(default)]
    pub employee: Option<Employee>,
    #[serde(default)]
    pub certificate_type: Option<CertificateType>,
}

/// Dữ liệu form chứng chỉ trước khi đóng gói thành multipart.
/// File đính kèm đi riêng (kiểu `web_sys::File` phía frontend).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CertificateDraft {
    pub employee_id: String,
    pub certificate_type_id: String,
    pub certificate_number: String,
    pub issued_by: String,
    pub issued_date: String,
    pub expiry_date: String,
    pub notes: String,
}

impl CertificateDraft {
    /// Các cặp (tên trường, giá trị) đưa vào FormData; trường rỗng
    /// bị bỏ qua, giống cách bản gốc chỉ append giá trị khác null.
    pub fn multipart_fields(&self) -> Vec<(&'static str, &str)> {
        [
            ("employee_id", self.employee_id.as_str()),
            ("certificate_type_id", self.certificate_type_id.as_str()),
            ("certificate_number", self.certificate_number.as_str()),
            ("issued_by", self.issued_by.as_str()),
            ("issued_date", self.issued_date.as_str()),
            ("expiry_date", self.expiry_date.as_str()),
            ("notes", self.notes.as_str()),
        ]
        .into_iter()
        .filter(|(_, v)| !v.is_empty())
        .collect()
    }
}

#[cfg(test)]
mod tests;
