//! Client HTTP gọi REST API backend QLNS
//!
//! Mọi request đính kèm `Authorization: Bearer <token>` nếu token đang
//! nằm trong LocalStorage; token được đọc lại ở từng request nên đăng
//! xuất có hiệu lực ngay với cả những thao tác bấm sau đó. Phản hồi
//! lỗi được phân loại thành [`ApiError`] để màn hình tự quyết định
//! cách hiển thị.

use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_storage::{LocalStorage as BrowserStorage, Storage};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

use qlns_shared::{
    AssignEmployeePayload, Certificate, CertificateDraft, CertificateType,
    CertificateTypePayload, ContractPayload, Department, Employee, EmployeePayload,
    ListResponse, LoginRequest, LoginResponse, PartnerContract, Project, ProjectPayload,
    STORAGE_TOKEN_KEY, User,
};

/// Base URL mặc định khi không cấu hình `QLNS_API_URL` lúc build.
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api";

/// Nơi backend phục vụ file tĩnh đã upload (file chứng chỉ).
const DEFAULT_STORAGE_URL: &str = "http://127.0.0.1:8000/storage";

/// URL tuyệt đối tới một file backend đã lưu.
pub fn storage_file_url(path: &str) -> String {
    let base = option_env!("QLNS_STORAGE_URL").unwrap_or(DEFAULT_STORAGE_URL);
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

// =========================================================
// Phân loại lỗi
// =========================================================

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Không tạo được request (FormData, serialize thân JSON...).
    #[error("Không tạo được yêu cầu: {0}")]
    Request(String),
    /// Lỗi đường truyền, server không trả lời.
    #[error("Lỗi kết nối máy chủ: {0}")]
    Network(String),
    /// Token hỏng hoặc hết hạn.
    #[error("Phiên đăng nhập không hợp lệ hoặc đã hết hạn, vui lòng đăng nhập lại")]
    Unauthorized,
    #[error("Không tìm thấy dữ liệu yêu cầu")]
    NotFound,
    /// Lỗi kiểm tra dữ liệu, giữ nguyên thông báo của server.
    #[error("{0}")]
    Validation(String),
    #[error("Máy chủ trả về lỗi {status}: {message}")]
    Server { status: u16, message: String },
    /// Phản hồi 2xx nhưng không giải mã được.
    #[error("Không đọc được phản hồi từ máy chủ: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Thân lỗi JSON server hay trả về: message + map lỗi theo trường.
#[derive(Debug, Deserialize)]
struct ServerErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: Option<std::collections::BTreeMap<String, Vec<String>>>,
}

async fn error_from_response(response: Response) -> ApiError {
    let status = response.status();
    let status_text = response.status_text();
    let body = response.text().await.unwrap_or_default();
    let parsed: Option<ServerErrorBody> = serde_json::from_str(&body).ok();

    let message = parsed
        .as_ref()
        .and_then(|b| b.message.clone())
        .unwrap_or(status_text);

    match status {
        401 => ApiError::Unauthorized,
        404 => ApiError::NotFound,
        400 | 422 => {
            // Lỗi theo trường được ghép lại một dòng, giữ nguyên văn.
            let detail = parsed
                .and_then(|b| b.errors)
                .map(|errors| {
                    errors
                        .into_values()
                        .flatten()
                        .collect::<Vec<_>>()
                        .join("; ")
                })
                .filter(|joined| !joined.is_empty())
                .unwrap_or(message);
            ApiError::Validation(detail)
        }
        _ => ApiError::Server { status, message },
    }
}

fn network_error(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

fn request_error(err: JsValue) -> ApiError {
    ApiError::Request(format!("{err:?}"))
}

// =========================================================
// Client
// =========================================================

#[derive(Clone, Debug, PartialEq)]
pub struct QlnsApi {
    base_url: String,
}

impl Default for QlnsApi {
    fn default() -> Self {
        Self::new()
    }
}

impl QlnsApi {
    pub fn new() -> Self {
        Self::with_base_url(option_env!("QLNS_API_URL").unwrap_or(DEFAULT_BASE_URL))
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Token hiện hành trong LocalStorage, nếu có.
    fn bearer() -> Option<String> {
        BrowserStorage::get::<String>(STORAGE_TOKEN_KEY).ok()
    }

    fn authorized(builder: RequestBuilder) -> RequestBuilder {
        match Self::bearer() {
            Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
            None => builder,
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        if !response.ok() {
            return Err(error_from_response(response).await);
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn expect_ok(response: Response) -> ApiResult<()> {
        if !response.ok() {
            return Err(error_from_response(response).await);
        }
        Ok(())
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = Self::authorized(Request::get(&self.url(path)))
            .send()
            .await
            .map_err(network_error)?;
        Self::decode(response).await
    }

    async fn post_json<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let request = Self::authorized(Request::post(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Request(e.to_string()))?;
        let response = request.send().await.map_err(network_error)?;
        Self::decode(response).await
    }

    async fn post_unit<B: serde::Serialize>(&self, path: &str, body: &B) -> ApiResult<()> {
        let request = Self::authorized(Request::post(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Request(e.to_string()))?;
        let response = request.send().await.map_err(network_error)?;
        Self::expect_ok(response).await
    }

    async fn put_unit<B: serde::Serialize>(&self, path: &str, body: &B) -> ApiResult<()> {
        let request = Self::authorized(Request::put(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Request(e.to_string()))?;
        let response = request.send().await.map_err(network_error)?;
        Self::expect_ok(response).await
    }

    async fn delete_unit(&self, path: &str) -> ApiResult<()> {
        let response = Self::authorized(Request::delete(&self.url(path)))
            .send()
            .await
            .map_err(network_error)?;
        Self::expect_ok(response).await
    }

    // =====================================================
    // Phiên đăng nhập
    // =====================================================

    pub async fn login(&self, username: &str, password: &str) -> ApiResult<LoginResponse> {
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        self.post_json("/login", &body).await
    }

    /// Thu hồi token phía server. Token truyền tường minh vì lúc gọi
    /// LocalStorage đã bị xóa.
    pub async fn logout_with_token(&self, token: &str) -> ApiResult<()> {
        let response = Request::post(&self.url("/logout"))
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await
            .map_err(network_error)?;
        Self::expect_ok(response).await
    }

    pub async fn me(&self) -> ApiResult<User> {
        self.get_json("/me").await
    }

    // =====================================================
    // Phòng ban
    // =====================================================

    pub async fn list_departments(&self) -> ApiResult<ListResponse<Department>> {
        self.get_json("/departments").await
    }

    // =====================================================
    // Nhân sự
    // =====================================================

    pub async fn list_employees(&self) -> ApiResult<ListResponse<Employee>> {
        self.get_json("/employees").await
    }

    pub async fn get_employee(&self, id: i64) -> ApiResult<Employee> {
        self.get_json(&format!("/employees/{id}")).await
    }

    pub async fn create_employee(&self, payload: &EmployeePayload) -> ApiResult<()> {
        self.post_unit("/employees", payload).await
    }

    pub async fn update_employee(&self, id: i64, payload: &EmployeePayload) -> ApiResult<()> {
        self.put_unit(&format!("/employees/{id}"), payload).await
    }

    pub async fn delete_employee(&self, id: i64) -> ApiResult<()> {
        self.delete_unit(&format!("/employees/{id}")).await
    }

    // =====================================================
    // Hợp đồng đối tác
    // =====================================================

    pub async fn list_contracts(&self, page: u32) -> ApiResult<ListResponse<PartnerContract>> {
        self.get_json(&format!("/contracts?page={page}")).await
    }

    pub async fn get_contract(&self, id: i64) -> ApiResult<PartnerContract> {
        self.get_json(&format!("/contracts/{id}")).await
    }

    pub async fn create_contract(&self, payload: &ContractPayload) -> ApiResult<()> {
        self.post_unit("/contracts", payload).await
    }

    pub async fn update_contract(&self, id: i64, payload: &ContractPayload) -> ApiResult<()> {
        self.put_unit(&format!("/contracts/{id}"), payload).await
    }

    pub async fn delete_contract(&self, id: i64) -> ApiResult<()> {
        self.delete_unit(&format!("/contracts/{id}")).await
    }

    /// Tải file Excel danh sách hợp đồng (bytes thô).
    pub async fn export_contracts(&self) -> ApiResult<Vec<u8>> {
        let response = Self::authorized(Request::get(&self.url("/contracts/export")))
            .send()
            .await
            .map_err(network_error)?;
        if !response.ok() {
            return Err(error_from_response(response).await);
        }
        response
            .binary()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn import_contracts(&self, file: &File) -> ApiResult<()> {
        let form = FormData::new().map_err(request_error)?;
        form.append_with_blob_and_filename("file", file, &file.name())
            .map_err(request_error)?;
        let request = Self::authorized(Request::post(&self.url("/contracts/import")))
            .body(form)
            .map_err(|e| ApiError::Request(e.to_string()))?;
        let response = request.send().await.map_err(network_error)?;
        Self::expect_ok(response).await
    }

    // =====================================================
    // Dự án
    // =====================================================

    pub async fn list_projects(&self) -> ApiResult<ListResponse<Project>> {
        self.get_json("/projects").await
    }

    pub async fn get_project(&self, id: i64) -> ApiResult<Project> {
        self.get_json(&format!("/projects/{id}")).await
    }

    pub async fn create_project(&self, payload: &ProjectPayload) -> ApiResult<()> {
        self.post_unit("/projects", payload).await
    }

    pub async fn update_project(&self, id: i64, payload: &ProjectPayload) -> ApiResult<()> {
        self.put_unit(&format!("/projects/{id}"), payload).await
    }

    pub async fn delete_project(&self, id: i64) -> ApiResult<()> {
        self.delete_unit(&format!("/projects/{id}")).await
    }

    pub async fn assign_employee(
        &self,
        project_id: i64,
        payload: &AssignEmployeePayload,
    ) -> ApiResult<()> {
        self.post_unit(&format!("/projects/{project_id}/assign"), payload)
            .await
    }

    pub async fn remove_employee(&self, project_id: i64, employee_id: i64) -> ApiResult<()> {
        self.delete_unit(&format!("/projects/{project_id}/remove/{employee_id}"))
            .await
    }

    // =====================================================
    // Loại chứng chỉ
    // =====================================================

    pub async fn list_certificate_types(&self) -> ApiResult<ListResponse<CertificateType>> {
        self.get_json("/certificate-types").await
    }

    pub async fn create_certificate_type(
        &self,
        payload: &CertificateTypePayload,
    ) -> ApiResult<()> {
        self.post_unit("/certificate-types", payload).await
    }

    pub async fn update_certificate_type(
        &self,
        id: i64,
        payload: &CertificateTypePayload,
    ) -> ApiResult<()> {
        self.put_unit(&format!("/certificate-types/{id}"), payload)
            .await
    }

    pub async fn delete_certificate_type(&self, id: i64) -> ApiResult<()> {
        self.delete_unit(&format!("/certificate-types/{id}")).await
    }

    // =====================================================
    // Chứng chỉ
    // =====================================================

    pub async fn list_certificates(
        &self,
        status: Option<&str>,
    ) -> ApiResult<ListResponse<Certificate>> {
        let path = match status {
            Some(status) => format!("/certificates?status={status}"),
            None => "/certificates".to_string(),
        };
        self.get_json(&path).await
    }

    pub async fn certificates_by_employee(
        &self,
        employee_id: i64,
    ) -> ApiResult<ListResponse<Certificate>> {
        self.get_json(&format!("/certificates/employee/{employee_id}"))
            .await
    }

    pub async fn certificates_by_type(
        &self,
        type_id: i64,
    ) -> ApiResult<ListResponse<Certificate>> {
        self.get_json(&format!("/certificates/type/{type_id}")).await
    }

    pub async fn expiring_certificates(&self) -> ApiResult<ListResponse<Certificate>> {
        self.get_json("/certificates/expiring/list").await
    }

    pub async fn expired_certificates(&self) -> ApiResult<ListResponse<Certificate>> {
        self.get_json("/certificates/expired/list").await
    }

    /// Tạo chứng chỉ, kèm file nếu người dùng chọn. Thân request là
    /// multipart để backend nhận được cả file lẫn trường văn bản.
    pub async fn create_certificate(
        &self,
        draft: &CertificateDraft,
        file: Option<&File>,
    ) -> ApiResult<()> {
        let form = Self::certificate_form(draft, file)?;
        let request = Self::authorized(Request::post(&self.url("/certificates")))
            .body(form)
            .map_err(|e| ApiError::Request(e.to_string()))?;
        let response = request.send().await.map_err(network_error)?;
        Self::expect_ok(response).await
    }

    /// Cập nhật chứng chỉ bằng PUT multipart. `fetch` hỗ trợ PUT kèm
    /// FormData nên không cần mẹo `?_method=PUT` như các transport cũ.
    pub async fn update_certificate(
        &self,
        id: i64,
        draft: &CertificateDraft,
        file: Option<&File>,
    ) -> ApiResult<()> {
        let form = Self::certificate_form(draft, file)?;
        let request = Self::authorized(Request::put(&self.url(&format!("/certificates/{id}"))))
            .body(form)
            .map_err(|e| ApiError::Request(e.to_string()))?;
        let response = request.send().await.map_err(network_error)?;
        Self::expect_ok(response).await
    }

    pub async fn delete_certificate(&self, id: i64) -> ApiResult<()> {
        self.delete_unit(&format!("/certificates/{id}")).await
    }

    fn certificate_form(draft: &CertificateDraft, file: Option<&File>) -> ApiResult<FormData> {
        let form = FormData::new().map_err(request_error)?;
        for (key, value) in draft.multipart_fields() {
            form.append_with_str(key, value).map_err(request_error)?;
        }
        if let Some(file) = file {
            form.append_with_blob_and_filename("file", file, &file.name())
                .map_err(request_error)?;
        }
        Ok(form)
    }
}
