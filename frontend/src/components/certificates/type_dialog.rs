//! Modal thêm/sửa loại chứng chỉ

use leptos::prelude::*;
use leptos::task::spawn_local;

use qlns_shared::CertificateType;

use super::form_state::TypeForm;
use crate::api::QlnsApi;
use crate::components::ui::{ErrorAlert, ModalShell};
use crate::controller::DialogState;

#[component]
pub fn TypeDialog(
    dialog: DialogState<CertificateType>,
    form: TypeForm,
    #[prop(into)] on_saved: Callback<()>,
) -> impl IntoView {
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let payload = match form.validate() {
            Ok(payload) => payload,
            Err(message) => {
                dialog.error.set(Some(message));
                return;
            }
        };

        dialog.busy.set(true);
        spawn_local(async move {
            let api = QlnsApi::new();
            let result = match dialog.editing_snapshot() {
                Some(record) => api.update_certificate_type(record.id, &payload).await,
                None => api.create_certificate_type(&payload).await,
            };
            match result {
                Ok(()) => {
                    dialog.close();
                    on_saved.run(());
                }
                Err(err) => {
                    let _ = dialog.error.try_set(Some(err.to_string()));
                    let _ = dialog.busy.try_set(false);
                }
            }
        });
    };

    let title = Signal::derive(move || {
        if dialog.editing.get().is_some() {
            "Sửa Loại Chứng chỉ".to_string()
        } else {
            "Thêm Loại Chứng chỉ".to_string()
        }
    });

    view! {
        <ModalShell open=dialog.show title=title>
            <ErrorAlert error=dialog.error />
            <form class="space-y-4" on:submit=on_submit>
                <div class="form-control">
                    <label class="label" for="tp_name">
                        <span class="label-text">"Tên loại chứng chỉ *"</span>
                    </label>
                    <input
                        id="tp_name"
                        type="text"
                        placeholder="Ví dụ: PMP, AWS, CCNA..."
                        class="input input-bordered w-full"
                        required
                        on:input=move |ev| form.name.set(event_target_value(&ev))
                        prop:value=move || form.name.get()
                    />
                </div>
                <div class="form-control">
                    <label class="label" for="tp_description">
                        <span class="label-text">"Mô tả"</span>
                    </label>
                    <textarea
                        id="tp_description"
                        class="textarea textarea-bordered w-full"
                        rows="2"
                        on:input=move |ev| form.description.set(event_target_value(&ev))
                        prop:value=move || form.description.get()
                    ></textarea>
                </div>
                <div class="form-control">
                    <label class="label" for="tp_validity">
                        <span class="label-text">"Thời hạn (tháng)"</span>
                    </label>
                    <input
                        id="tp_validity"
                        type="number"
                        min="1"
                        placeholder="Ví dụ: 24, 36..."
                        class="input input-bordered w-full"
                        on:input=move |ev| form.validity_period.set(event_target_value(&ev))
                        prop:value=move || form.validity_period.get()
                    />
                </div>

                <div class="modal-action">
                    <button type="button" class="btn btn-ghost" on:click=move |_| dialog.close()>
                        "Hủy"
                    </button>
                    <button
                        type="submit"
                        class="btn btn-error text-error-content"
                        disabled=move || dialog.busy.get()
                    >
                        {move || if dialog.busy.get() {
                            view! { <span class="loading loading-spinner"></span> "Đang lưu..." }.into_any()
                        } else if dialog.editing.get().is_some() {
                            "Cập nhật".into_any()
                        } else {
                            "Thêm mới".into_any()
                        }}
                    </button>
                </div>
            </form>
        </ModalShell>
    }
}
