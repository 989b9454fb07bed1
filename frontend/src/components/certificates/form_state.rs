//! Trạng thái form của hai modal màn hình chứng chỉ
//!
//! Gom signal thành struct, lo luôn việc reset, đổ dữ liệu khi sửa và
//! kiểm tra trường bắt buộc trước khi dựng payload.

use leptos::prelude::*;

use qlns_shared::validate::{join_messages, none_if_empty, require_non_empty};
use qlns_shared::{Certificate, CertificateDraft, CertificateType, CertificateTypePayload};

/// Form loại chứng chỉ.
#[derive(Clone, Copy)]
pub struct TypeForm {
    pub name: RwSignal<String>,
    pub description: RwSignal<String>,
    pub validity_period: RwSignal<String>,
}

impl TypeForm {
    pub fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            validity_period: RwSignal::new(String::new()),
        }
    }

    pub fn reset(&self) {
        self.name.set(String::new());
        self.description.set(String::new());
        self.validity_period.set(String::new());
    }

    pub fn fill(&self, record: &CertificateType) {
        self.name.set(record.name.clone());
        self.description
            .set(record.description.clone().unwrap_or_default());
        self.validity_period.set(
            record
                .validity_period
                .map(|months| months.to_string())
                .unwrap_or_default(),
        );
    }

    pub fn validate(&self) -> Result<CertificateTypePayload, String> {
        let name = self.name.get_untracked();
        require_non_empty(&[("Tên loại chứng chỉ", &name)])
            .map_err(|errors| join_messages(&errors))?;

        let validity_raw = self.validity_period.get_untracked();
        let validity_period = if validity_raw.trim().is_empty() {
            None
        } else {
            Some(
                validity_raw
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| "Thời hạn (tháng) không hợp lệ".to_string())?,
            )
        };

        Ok(CertificateTypePayload {
            name: name.trim().to_string(),
            description: none_if_empty(&self.description.get_untracked()),
            validity_period,
        })
    }
}

/// Form chứng chỉ của nhân viên. `certificate_type_id` do màn hình
/// đặt sẵn theo loại đang thao tác; file đính kèm đọc từ input lúc
/// submit chứ không giữ trong signal.
#[derive(Clone, Copy)]
pub struct CertificateForm {
    pub employee_id: RwSignal<String>,
    pub certificate_type_id: RwSignal<String>,
    pub certificate_number: RwSignal<String>,
    pub issued_by: RwSignal<String>,
    pub issued_date: RwSignal<String>,
    pub expiry_date: RwSignal<String>,
    pub notes: RwSignal<String>,
}

impl CertificateForm {
    pub fn new() -> Self {
        Self {
            employee_id: RwSignal::new(String::new()),
            certificate_type_id: RwSignal::new(String::new()),
            certificate_number: RwSignal::new(String::new()),
            issued_by: RwSignal::new(String::new()),
            issued_date: RwSignal::new(String::new()),
            expiry_date: RwSignal::new(String::new()),
            notes: RwSignal::new(String::new()),
        }
    }

    pub fn reset_for_type(&self, type_id: i64) {
        self.employee_id.set(String::new());
        self.certificate_type_id.set(type_id.to_string());
        self.certificate_number.set(String::new());
        self.issued_by.set(String::new());
        self.issued_date.set(String::new());
        self.expiry_date.set(String::new());
        self.notes.set(String::new());
    }

    pub fn fill(&self, record: &Certificate) {
        self.employee_id.set(
            record
                .employee_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
        );
        self.certificate_type_id.set(
            record
                .certificate_type_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
        );
        self.certificate_number.set(record.certificate_number.clone());
        self.issued_by.set(record.issued_by.clone().unwrap_or_default());
        self.issued_date
            .set(record.issued_date.clone().unwrap_or_default());
        self.expiry_date
            .set(record.expiry_date.clone().unwrap_or_default());
        self.notes.set(record.notes.clone().unwrap_or_default());
    }

    pub fn validate(&self) -> Result<CertificateDraft, String> {
        let employee_id = self.employee_id.get_untracked();
        let certificate_number = self.certificate_number.get_untracked();
        let issued_date = self.issued_date.get_untracked();

        require_non_empty(&[
            ("Nhân viên", &employee_id),
            ("Mã chứng chỉ", &certificate_number),
            ("Ngày cấp", &issued_date),
        ])
        .map_err(|errors| join_messages(&errors))?;

        Ok(CertificateDraft {
            employee_id: employee_id.trim().to_string(),
            certificate_type_id: self.certificate_type_id.get_untracked(),
            certificate_number: certificate_number.trim().to_string(),
            issued_by: self.issued_by.get_untracked().trim().to_string(),
            issued_date: issued_date.trim().to_string(),
            expiry_date: self.expiry_date.get_untracked().trim().to_string(),
            notes: self.notes.get_untracked().trim().to_string(),
        })
    }
}
