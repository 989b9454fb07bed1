//! Ứng dụng web QLNS (Quản lý Nhân sự)
//!
//! SPA chạy CSR, kiến trúc Context-Driven:
//! - `web::route` / `web::router`: định nghĩa route + động cơ điều
//!   hướng kèm guard đăng nhập
//! - `auth`: trạng thái phiên (enum ba nhánh, chia sẻ qua Context)
//! - `api`: client REST, gắn bearer token cho mọi request
//! - `controller`: bộ điều khiển danh sách dùng chung (chống ghi đè
//!   bởi kết quả về muộn)
//! - `components`: tầng UI, một module cho mỗi màn hình

mod api;
mod auth;
mod controller;

mod components {
    pub mod certificates;
    pub mod contract_detail;
    pub mod contracts;
    pub mod employee_detail;
    pub mod employees;
    mod icons;
    pub mod layout;
    pub mod login;
    pub mod projects;
    pub mod search;
    pub mod ui;
}

// Bọc các API trình duyệt (History, confirm, tải file).
pub(crate) mod web {
    pub mod dom;
    pub mod route;
    pub mod router;
}

use leptos::prelude::*;

use crate::auth::{SessionContext, SessionState, init_session, use_session};
use crate::components::certificates::CertificateListPage;
use crate::components::contract_detail::ContractDetailPage;
use crate::components::contracts::ContractListPage;
use crate::components::employee_detail::EmployeeDetailPage;
use crate::components::employees::EmployeeListPage;
use crate::components::layout::Layout;
use crate::components::login::LoginPage;
use crate::components::projects::ProjectListPage;
use crate::components::search::SearchPage;
use crate::components::ui::FullScreenSpinner;
use crate::web::route::AppRoute;
use crate::web::router::{Router, RouterOutlet};

/// Ánh xạ route -> view. Trang cần đăng nhập được bọc trong
/// [`Protected`] để chặn render khi phiên chưa sẵn sàng.
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Employees => {
            view! { <Protected><EmployeeListPage /></Protected> }.into_any()
        }
        AppRoute::EmployeeDetail(id) => {
            view! { <Protected><EmployeeDetailPage id=id /></Protected> }.into_any()
        }
        AppRoute::Contracts => {
            view! { <Protected><ContractListPage /></Protected> }.into_any()
        }
        AppRoute::ContractDetail(id) => {
            view! { <Protected><ContractDetailPage id=id /></Protected> }.into_any()
        }
        AppRoute::Projects => view! { <Protected><ProjectListPage /></Protected> }.into_any(),
        AppRoute::Certificates => {
            view! { <Protected><CertificateListPage /></Protected> }.into_any()
        }
        AppRoute::Search => view! { <Protected><SearchPage /></Protected> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Không tìm thấy trang"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

/// Chốt chặn cho màn hình cần đăng nhập:
/// - phiên đang resolve -> spinner chặn toàn màn hình, chưa render
///   trang nên chưa có request dữ liệu nào được phát đi;
/// - chưa đăng nhập -> spinner tạm, router sẽ chuyển về /login;
/// - đã đăng nhập -> bọc trang trong khung Layout.
#[component]
fn Protected(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let children = StoredValue::new(children);

    move || match session.state.get() {
        SessionState::Authenticated(_) => {
            view! { <Layout>{children.with_value(|render| render())}</Layout> }.into_any()
        }
        SessionState::Resolving | SessionState::Unauthenticated => {
            view! { <FullScreenSpinner /> }.into_any()
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. Tạo context phiên và bắt đầu xác minh token cũ.
    let session = SessionContext::new();
    provide_context(session);
    init_session(&session);

    // 2. Hai signal dẫn xuất để inject vào router (giữ router tách
    //    khỏi module auth).
    let is_authenticated = session.is_authenticated_signal();
    let is_resolving = session.is_resolving_signal();

    view! {
        <Router is_authenticated=is_authenticated is_resolving=is_resolving>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
