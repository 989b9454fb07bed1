//! Quản lý phiên đăng nhập
//!
//! Trạng thái phiên là một enum ba nhánh tường minh, chia sẻ qua
//! Context; router nhận hai signal dẫn xuất để làm guard mà không
//! phụ thuộc vào module này.

use leptos::prelude::*;
use leptos::task::spawn_local;

use gloo_storage::{LocalStorage as BrowserStorage, Storage};
use qlns_shared::{STORAGE_TOKEN_KEY, User};

use crate::api::{ApiError, QlnsApi};

/// Vòng đời của phiên làm việc.
///
/// - `Resolving`: vừa mở trang, đang kiểm tra token cũ trong storage.
/// - `Authenticated`: token hợp lệ, đã nạp hồ sơ người dùng.
/// - `Unauthenticated`: không có token hoặc token đã bị từ chối.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionState {
    Resolving,
    Authenticated(User),
    Unauthenticated,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    pub fn is_resolving(&self) -> bool {
        matches!(self, SessionState::Resolving)
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

/// Context phiên, chia sẻ cho mọi component qua `provide_context`.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub state: ReadSignal<SessionState>,
    set_state: WriteSignal<SessionState>,
}

impl SessionContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(SessionState::Resolving);
        Self { state, set_state }
    }

    /// Signal cho router: đã đăng nhập hay chưa.
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_authenticated())
    }

    /// Signal cho router: còn đang kiểm tra token cũ hay không.
    pub fn is_resolving_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_resolving())
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Lấy context phiên từ cây component.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext chưa được provide ở gốc ứng dụng")
}

/// Khởi tạo phiên khi ứng dụng nạp: có token cũ thì xác minh bằng
/// `GET /me`, không có thì chuyển thẳng sang chưa đăng nhập.
pub fn init_session(ctx: &SessionContext) {
    if BrowserStorage::get::<String>(STORAGE_TOKEN_KEY).is_err() {
        ctx.set_state.set(SessionState::Unauthenticated);
        return;
    }

    let set_state = ctx.set_state;
    spawn_local(async move {
        match QlnsApi::new().me().await {
            Ok(user) => {
                let _ = set_state.try_set(SessionState::Authenticated(user));
            }
            Err(_) => {
                // Token cũ không còn dùng được, dọn đi để request sau
                // không đính kèm nữa.
                BrowserStorage::delete(STORAGE_TOKEN_KEY);
                let _ = set_state.try_set(SessionState::Unauthenticated);
            }
        }
    });
}

/// Đăng nhập; thành công thì lưu token và nạp hồ sơ, thất bại giữ
/// nguyên trạng thái chưa đăng nhập và trả lỗi cho form hiển thị.
pub async fn login(ctx: &SessionContext, username: &str, password: &str) -> Result<(), ApiError> {
    let response = QlnsApi::new().login(username, password).await?;

    BrowserStorage::set(STORAGE_TOKEN_KEY, &response.token)
        .map_err(|e| ApiError::Request(e.to_string()))?;
    ctx.set_state.set(SessionState::Authenticated(response.user));
    Ok(())
}

/// Đăng xuất: xóa token khỏi storage TRƯỚC để mọi request bấm sau đó
/// không còn mang token, rồi mới gọi thu hồi phía server (best-effort,
/// thất bại chỉ ghi console).
pub fn logout(ctx: &SessionContext) {
    let token: Option<String> = BrowserStorage::get(STORAGE_TOKEN_KEY).ok();
    BrowserStorage::delete(STORAGE_TOKEN_KEY);
    ctx.set_state.set(SessionState::Unauthenticated);

    if let Some(token) = token {
        spawn_local(async move {
            if let Err(err) = QlnsApi::new().logout_with_token(&token).await {
                web_sys::console::warn_1(
                    &format!("[Session] Thu hồi token phía server thất bại: {err}").into(),
                );
            }
        });
    }
}
