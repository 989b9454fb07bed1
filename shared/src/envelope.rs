//! Giải mã phản hồi danh sách
//!
//! Backend trả danh sách theo một trong hai dạng: mảng trần
//! `[...]` hoặc phong bì phân trang
//! `{data: [...], current_page, last_page, per_page, total}`.
//! Client phải chấp nhận cả hai mà không cần biết trước endpoint
//! nào dùng dạng nào.

use serde::{Deserialize, Serialize};

/// Siêu dữ liệu phân trang kèm theo phong bì.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub current_page: u32,
    pub last_page: u32,
    pub per_page: u32,
    pub total: u64,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            current_page: 1,
            last_page: 1,
            per_page: 0,
            total: 0,
        }
    }
}

/// Phong bì phân trang kiểu Laravel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedList<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub current_page: Option<u32>,
    #[serde(default)]
    pub last_page: Option<u32>,
    #[serde(default)]
    pub per_page: Option<u32>,
    #[serde(default)]
    pub total: Option<u64>,
}

/// Phản hồi danh sách: phong bì hoặc mảng trần.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Paginated(PaginatedList<T>),
    Items(Vec<T>),
}

impl<T> ListResponse<T> {
    /// Rút phần tử ra, bỏ siêu dữ liệu nếu có.
    pub fn into_items(self) -> Vec<T> {
        match self {
            ListResponse::Paginated(p) => p.data,
            ListResponse::Items(items) => items,
        }
    }

    /// Siêu dữ liệu phân trang; mảng trần coi như một trang duy nhất.
    pub fn page_meta(&self) -> PageMeta {
        match self {
            ListResponse::Paginated(p) => PageMeta {
                current_page: p.current_page.unwrap_or(1),
                last_page: p.last_page.unwrap_or(1),
                per_page: p.per_page.unwrap_or(p.data.len() as u32),
                total: p.total.unwrap_or(p.data.len() as u64),
            },
            ListResponse::Items(items) => PageMeta {
                current_page: 1,
                last_page: 1,
                per_page: items.len() as u32,
                total: items.len() as u64,
            },
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ListResponse::Paginated(p) => p.data.len(),
            ListResponse::Items(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Số thứ tự tuyệt đối của một dòng khi bảng được phân trang phía
/// server: trang 3, mỗi trang 20 dòng thì dòng thứ 5 mang số 45.
pub fn absolute_index(page: u32, per_page: u32, local_index: usize) -> usize {
    (page.max(1) as usize - 1) * per_page as usize + local_index + 1
}

#[cfg(test)]
mod tests;
