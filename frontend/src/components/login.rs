//! Trang đăng nhập

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiError;
use crate::auth::{login, use_session};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if username.get().trim().is_empty() || password.get().is_empty() {
            set_error_msg.set(Some(
                "Vui lòng nhập đầy đủ tên đăng nhập và mật khẩu".to_string(),
            ));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        spawn_local(async move {
            let result = login(&session, &username.get_untracked(), &password.get_untracked()).await;
            match result {
                // Router theo dõi trạng thái phiên và tự vào trang chủ.
                Ok(()) => {}
                // Sai thông tin đăng nhập tách khỏi lỗi hạ tầng để
                // người dùng biết nên sửa gì.
                Err(ApiError::Unauthorized | ApiError::Validation(_)) => {
                    let _ = set_error_msg
                        .try_set(Some("Tên đăng nhập hoặc mật khẩu không đúng".to_string()));
                }
                Err(err) => {
                    let _ = set_error_msg.try_set(Some(err.to_string()));
                }
            }
            let _ = set_is_submitting.try_set(false);
        });
    };

    view! {
        <div class="hero min-h-screen" style="background: linear-gradient(135deg, #E60012 0%, #C00010 100%)">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="card w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <div class="text-center mb-2">
                            <div class="flex justify-center mb-3">
                                <div class="w-14 h-14 rounded-full bg-error text-error-content flex items-center justify-center text-xl font-bold">
                                    "VTK"
                                </div>
                            </div>
                            <h1 class="text-xl font-semibold">"Hệ thống Quản lý Nhân sự"</h1>
                            <p class="text-sm text-base-content/60">"Đăng nhập để tiếp tục"</p>
                        </div>

                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="username">
                                <span class="label-text">"Tên đăng nhập"</span>
                            </label>
                            <input
                                id="username"
                                type="text"
                                placeholder="Nhập tên đăng nhập"
                                class="input input-bordered"
                                on:input=move |ev| set_username.set(event_target_value(&ev))
                                prop:value=username
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Mật khẩu"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder="Nhập mật khẩu"
                                class="input input-bordered"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                required
                            />
                        </div>

                        <div class="form-control mt-4">
                            <button class="btn btn-error text-error-content" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! {
                                        <span class="loading loading-spinner"></span>
                                        "Đang đăng nhập..."
                                    }
                                    .into_any()
                                } else {
                                    "Đăng nhập".into_any()
                                }}
                            </button>
                        </div>

                        <div class="mt-4 pt-4 border-t border-base-200 text-xs text-base-content/60">
                            <p class="text-center mb-1">"Tài khoản demo:"</p>
                            <div class="leading-relaxed">
                                <div><strong>"Admin:"</strong> " admin / admin123"</div>
                                <div><strong>"User:"</strong> " user / user123"</div>
                                <div><strong>"HR:"</strong> " hrmanager / hr123"</div>
                            </div>
                        </div>
                    </form>
                </div>
                <p class="text-white/90 text-sm mt-2">"© 2026 Viettel VTK"</p>
            </div>
        </div>
    }
}
