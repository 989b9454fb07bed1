//! Dịch vụ router - tầng động cơ
//!
//! Bọc History API của trình duyệt; mọi thao tác với `window.history`
//! nằm gọn trong module này. Guard nhận hai signal từ phiên đăng nhập
//! (đã đăng nhập? / còn đang kiểm tra token?) qua injection nên router
//! không biết gì về module auth.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::AppRoute;

/// Đường dẫn hiện tại của trình duyệt.
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// Router điều khiển bằng signal: đổi route là đổi state, UI tự render.
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    is_authenticated: Signal<bool>,
    /// Phiên còn đang kiểm tra token cũ: chưa vội redirect, outlet
    /// hiển thị spinner chặn màn hình.
    is_resolving: Signal<bool>,
}

impl RouterService {
    fn new(is_authenticated: Signal<bool>, is_resolving: Signal<bool>) -> Self {
        let initial_route = AppRoute::from_path(&current_path());
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
            is_authenticated,
            is_resolving,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// Điều hướng có guard: kiểm tra đích trước, rồi mới ghi History
    /// và cập nhật state.
    pub fn navigate(&self, target: AppRoute) {
        self.navigate_to_route(target, true);
    }

    fn navigate_to_route(&self, target: AppRoute, use_push: bool) {
        let is_auth = self.is_authenticated.get_untracked();
        let resolving = self.is_resolving.get_untracked();

        // Đích cần đăng nhập mà phiên đã chốt là chưa đăng nhập:
        // chuyển về trang login. Đang resolve thì cho qua, spinner
        // chặn màn hình và Effect bên dưới sẽ xử lý khi phiên chốt.
        if target.requires_auth() && !is_auth && !resolving {
            web_sys::console::log_1(&"[Router] Chưa đăng nhập, chuyển về trang login.".into());
            self.apply(AppRoute::auth_failure_redirect(), use_push);
            return;
        }

        // Đã đăng nhập mà vào trang login: đưa về trang chủ.
        if target.should_redirect_when_authenticated() && is_auth {
            self.apply(AppRoute::auth_success_redirect(), use_push);
            return;
        }

        self.apply(target, use_push);
    }

    fn apply(&self, route: AppRoute, use_push: bool) {
        if use_push {
            push_history_state(&route.to_path());
        } else {
            replace_history_state(&route.to_path());
        }
        self.set_route.set(route);
    }

    /// Nghe nút back/forward của trình duyệt; guard chạy lại cả ở đây.
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;
        let is_authenticated = self.is_authenticated;
        let is_resolving = self.is_resolving;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target = AppRoute::from_path(&current_path());
            let is_auth = is_authenticated.get_untracked();
            let resolving = is_resolving.get_untracked();

            if target.requires_auth() && !is_auth && !resolving {
                let redirect = AppRoute::auth_failure_redirect();
                replace_history_state(&redirect.to_path());
                set_route.set(redirect);
            } else {
                set_route.set(target);
            }
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // Giữ closure sống cùng listener.
        closure.forget();
    }

    /// Tự động chuyển hướng khi trạng thái phiên thay đổi (đăng nhập
    /// xong, đăng xuất, hoặc token cũ vừa được xác minh xong).
    fn setup_auth_redirect(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let is_authenticated = self.is_authenticated;
        let is_resolving = self.is_resolving;

        Effect::new(move |_| {
            let resolving = is_resolving.get();
            let is_auth = is_authenticated.get();
            if resolving {
                return;
            }
            let route = current_route.get_untracked();

            if is_auth && route.should_redirect_when_authenticated() {
                let redirect = AppRoute::auth_success_redirect();
                push_history_state(&redirect.to_path());
                set_route.set(redirect);
                web_sys::console::log_1(&"[Router] Đã đăng nhập, vào trang chủ.".into());
            } else if !is_auth && route.requires_auth() {
                let redirect = AppRoute::auth_failure_redirect();
                push_history_state(&redirect.to_path());
                set_route.set(redirect);
                web_sys::console::log_1(&"[Router] Phiên kết thúc, quay về trang login.".into());
            }
        });
    }
}

fn provide_router(is_authenticated: Signal<bool>, is_resolving: Signal<bool>) -> RouterService {
    let router = RouterService::new(is_authenticated, is_resolving);

    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

/// Lấy router từ Context.
pub fn use_router() -> RouterService {
    use_context::<RouterService>().expect("RouterService chưa được provide. Bọc app trong <Router>.")
}

// ============================================================================
// Component
// ============================================================================

/// Component gốc của router, đặt ở gốc App.
#[component]
pub fn Router(
    /// Signal đã đăng nhập, inject từ phiên.
    is_authenticated: Signal<bool>,
    /// Signal phiên còn đang resolve.
    is_resolving: Signal<bool>,
    children: Children,
) -> impl IntoView {
    provide_router(is_authenticated, is_resolving);

    children()
}

/// Outlet: render view tương ứng với route hiện tại.
#[component]
pub fn RouterOutlet(
    /// Hàm ánh xạ route -> view.
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}
