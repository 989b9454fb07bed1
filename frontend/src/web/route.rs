//! Định nghĩa route - tầng mô hình
//!
//! Thuần logic, không đụng tới DOM hay web_sys. Hai route chi tiết
//! mang id bản ghi nên đường dẫn được parse/sinh động.

use std::fmt::Display;

/// Các màn hình của ứng dụng.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// Trang đăng nhập.
    Login,
    /// Danh sách nhân sự (đồng thời là trang chủ).
    #[default]
    Employees,
    /// Chi tiết một nhân viên.
    EmployeeDetail(i64),
    /// Danh sách hợp đồng đối tác.
    Contracts,
    /// Chi tiết một hợp đồng.
    ContractDetail(i64),
    /// Danh sách dự án.
    Projects,
    /// Quản lý loại chứng chỉ và chứng chỉ.
    Certificates,
    /// Tra cứu chéo (chứng chỉ / nhân sự / dự án).
    Search,
    NotFound,
}

impl AppRoute {
    /// Parse URL path thành route.
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" | "/employees" => Self::Employees,
            "/login" => Self::Login,
            "/contracts" => Self::Contracts,
            "/projects" => Self::Projects,
            "/certificates" => Self::Certificates,
            "/certificates/search" => Self::Search,
            _ => {
                if let Some(id) = parse_id(trimmed, "/employees/") {
                    Self::EmployeeDetail(id)
                } else if let Some(id) = parse_id(trimmed, "/contracts/") {
                    Self::ContractDetail(id)
                } else {
                    Self::NotFound
                }
            }
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Self::Login => "/login".to_string(),
            Self::Employees => "/employees".to_string(),
            Self::EmployeeDetail(id) => format!("/employees/{id}"),
            Self::Contracts => "/contracts".to_string(),
            Self::ContractDetail(id) => format!("/contracts/{id}"),
            Self::Projects => "/projects".to_string(),
            Self::Certificates => "/certificates".to_string(),
            Self::Search => "/certificates/search".to_string(),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// **Guard: route này có đòi hỏi đăng nhập không.**
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Self::Login | Self::NotFound)
    }

    /// Người đã đăng nhập không nên ở lại route này (trang login).
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login)
    }

    /// Mục sidebar tương ứng; route chi tiết tính về màn danh sách.
    pub fn nav_root(&self) -> AppRoute {
        match self {
            Self::EmployeeDetail(_) => Self::Employees,
            Self::ContractDetail(_) => Self::Contracts,
            other => *other,
        }
    }

    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    pub fn auth_success_redirect() -> Self {
        Self::Employees
    }
}

fn parse_id(path: &str, prefix: &str) -> Option<i64> {
    path.strip_prefix(prefix)?.parse().ok()
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}
