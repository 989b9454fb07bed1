//! Bộ lọc phía client cho danh sách hợp đồng
//!
//! Các vị từ chạy trên dữ liệu đã tải về bộ nhớ, không gửi lên server.
//! Chuỗi rỗng / khoảng trống nghĩa là không lọc theo trường đó.

use chrono::NaiveDate;

use crate::PartnerContract;
use crate::date::parse_date;

/// Tập vị từ lọc của màn hình hợp đồng.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContractFilter {
    pub contract_number: String,
    pub industry: String,
    pub project_name: String,
    pub start_from: Option<NaiveDate>,
    pub start_to: Option<NaiveDate>,
    pub end_from: Option<NaiveDate>,
    pub end_to: Option<NaiveDate>,
}

impl ContractFilter {
    pub fn is_empty(&self) -> bool {
        self.contract_number.trim().is_empty()
            && self.industry.trim().is_empty()
            && self.project_name.trim().is_empty()
            && self.start_from.is_none()
            && self.start_to.is_none()
            && self.end_from.is_none()
            && self.end_to.is_none()
    }

    pub fn matches(&self, contract: &PartnerContract) -> bool {
        if !contains_ci(&contract.contract_number, &self.contract_number) {
            return false;
        }
        if !contains_ci_opt(contract.industry.as_deref(), &self.industry) {
            return false;
        }
        if !contains_ci_opt(contract.project_name.as_deref(), &self.project_name) {
            return false;
        }

        let start = contract.start_date.as_deref().and_then(parse_date);
        if !within(start, self.start_from, self.start_to) {
            return false;
        }

        let end = contract.end_date.as_deref().and_then(parse_date);
        if !within(end, self.end_from, self.end_to) {
            return false;
        }

        true
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    let needle = needle.trim();
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn contains_ci_opt(haystack: Option<&str>, needle: &str) -> bool {
    if needle.trim().is_empty() {
        return true;
    }
    haystack.is_some_and(|h| contains_ci(h, needle))
}

// Ngày vắng mặt hoặc hỏng không so sánh được nên luôn đi qua bộ lọc
// khoảng, giữ nguyên hành vi "không rõ thì không loại".
fn within(value: Option<NaiveDate>, from: Option<NaiveDate>, to: Option<NaiveDate>) -> bool {
    match value {
        None => true,
        Some(d) => from.is_none_or(|f| d >= f) && to.is_none_or(|t| d <= t),
    }
}

#[cfg(test)]
mod tests;
