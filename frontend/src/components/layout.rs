//! Khung trang cho các màn hình đã đăng nhập
//!
//! Sidebar điều hướng bên trái + vùng nội dung; mọi trang được bọc
//! trong khung này sau khi guard cho qua.

use leptos::prelude::*;

use crate::auth::{logout, use_session};
use crate::components::icons::*;
use crate::web::route::AppRoute;
use crate::web::router::use_router;

/// Một mục điều hướng trong sidebar; tự tô đậm khi route hiện tại
/// thuộc nhánh của nó.
#[component]
fn NavLink(route: AppRoute, #[prop(into)] label: String, children: Children) -> impl IntoView {
    let router = use_router();

    let is_active = move || router.current_route().get().nav_root() == route;
    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        router.navigate(route);
    };

    view! {
        <li>
            <a
                href=route.to_path()
                class=move || if is_active() { "active font-semibold" } else { "" }
                on:click=on_click
            >
                {children()}
                {label}
            </a>
        </li>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let session = use_session();

    let user_name = move || {
        session
            .state
            .get()
            .user()
            .map(|u| u.name.clone())
            .unwrap_or_default()
    };
    let user_handle = move || {
        session
            .state
            .get()
            .user()
            .and_then(|u| u.username.clone())
            .map(|u| format!("@{u}"))
            .unwrap_or_default()
    };

    // Đăng xuất xong router tự đưa về trang login.
    let on_logout = move |_| logout(&session);

    view! {
        <div class="flex min-h-screen bg-base-200">
            <aside class="w-64 bg-base-100 shadow-xl flex flex-col shrink-0">
                <div class="p-4 border-b border-base-200">
                    <div class="flex items-center gap-3">
                        <div class="w-10 h-10 rounded-full bg-error text-error-content flex items-center justify-center font-bold">
                            "VTK"
                        </div>
                        <div>
                            <div class="font-bold text-error leading-tight">"QLNS"</div>
                            <div class="text-xs text-base-content/60">"Quản lý Nhân sự"</div>
                        </div>
                    </div>
                    <div class="mt-3 pt-3 border-t border-base-200 text-sm">
                        <div class="font-medium">{user_name}</div>
                        <div class="text-xs text-base-content/50">{user_handle}</div>
                    </div>
                </div>

                <ul class="menu p-2 gap-1 flex-1">
                    <NavLink route=AppRoute::Contracts label="Hợp đồng">
                        <FileText attr:class="h-4 w-4" />
                    </NavLink>
                    <NavLink route=AppRoute::Projects label="Dự án">
                        <FolderKanban attr:class="h-4 w-4" />
                    </NavLink>
                    <NavLink route=AppRoute::Employees label="Danh sách Nhân sự">
                        <Users attr:class="h-4 w-4" />
                    </NavLink>
                    <NavLink route=AppRoute::Certificates label="Quản lý Chứng chỉ">
                        <Award attr:class="h-4 w-4" />
                    </NavLink>
                    <NavLink route=AppRoute::Search label="Tra cứu Thông tin">
                        <Search attr:class="h-4 w-4" />
                    </NavLink>
                </ul>

                <div class="p-4">
                    <button class="btn btn-outline btn-error w-full gap-2" on:click=on_logout>
                        <LogOut attr:class="h-4 w-4" />
                        "Đăng xuất"
                    </button>
                </div>
            </aside>

            <main class="flex-1 p-6 overflow-x-auto">{children()}</main>
        </div>
    }
}
