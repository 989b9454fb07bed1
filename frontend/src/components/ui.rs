//! Mảnh UI dùng chung: modal, banner lỗi, toast, spinner
//!
//! Gom các khối daisyUI lặp lại ở mọi màn hình về một chỗ.

use leptos::prelude::*;

/// Spinner chặn toàn màn hình (đang kiểm tra phiên đăng nhập).
#[component]
pub fn FullScreenSpinner() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <span class="loading loading-spinner loading-lg text-error"></span>
        </div>
    }
}

/// Spinner giữa vùng nội dung (đang tải dữ liệu một màn hình).
#[component]
pub fn PageSpinner() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-16">
            <span class="loading loading-spinner loading-lg text-error"></span>
        </div>
    }
}

/// Banner lỗi inline, đóng được. Nhận thẳng signal lỗi của màn hình
/// nên nút đóng chỉ việc ghi `None`.
#[component]
pub fn ErrorAlert(error: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div role="alert" class="alert alert-error mb-4 py-2 text-sm">
                <span>{move || error.get().unwrap_or_default()}</span>
                <button class="btn btn-ghost btn-xs" on:click=move |_| error.set(None)>
                    "Đóng"
                </button>
            </div>
        </Show>
    }
}

/// Toast báo thành công, tự ẩn sau 3 giây.
#[component]
pub fn SuccessToast(message: RwSignal<Option<String>>) -> impl IntoView {
    Effect::new(move |_| {
        if message.get().is_some() {
            set_timeout(
                move || {
                    let _ = message.try_set(None);
                },
                std::time::Duration::from_secs(3),
            );
        }
    });

    view! {
        <Show when=move || message.get().is_some()>
            <div class="toast toast-top toast-end z-50">
                <div class="alert alert-success shadow-lg">
                    <span>{move || message.get().unwrap_or_default()}</span>
                </div>
            </div>
        </Show>
    }
}

/// Thông báo "chưa có dữ liệu" cho bảng/tab rỗng.
#[component]
pub fn EmptyNotice(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div role="alert" class="alert alert-info text-sm">
            <span>{message}</span>
        </div>
    }
}

/// Khung modal dùng phần tử `<dialog>` native, đồng bộ với signal
/// `open` theo kiểu của hộp thoại thêm dự án bên add_project_dialog.
#[component]
pub fn ModalShell(
    open: RwSignal<bool>,
    #[prop(into)] title: Signal<String>,
    children: Children,
) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if open.get() {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| open.set(false)>
            <div class="modal-box w-11/12 max-w-3xl">
                <h3 class="font-bold text-lg mb-2">{move || title.get()}</h3>
                {children()}
            </div>
            <form method="dialog" class="modal-backdrop">
                <button>"đóng"</button>
            </form>
        </dialog>
    }
}
