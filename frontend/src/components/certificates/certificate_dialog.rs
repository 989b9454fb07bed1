//! Modal thêm/sửa chứng chỉ của nhân viên
//!
//! Form gửi dạng multipart; file đính kèm là tùy chọn và chỉ được đọc
//! từ input lúc submit. Thuộc tính `accept` chỉ là gợi ý cho trình
//! duyệt, backend vẫn tự kiểm tra file nhận được.

use leptos::prelude::*;
use leptos::task::spawn_local;

use qlns_shared::{CERTIFICATE_FILE_ACCEPT, Certificate, Employee};

use super::form_state::CertificateForm;
use crate::api::QlnsApi;
use crate::components::ui::{ErrorAlert, ModalShell};
use crate::controller::{DialogState, ListController};

#[component]
pub fn CertificateDialog(
    dialog: DialogState<Certificate>,
    form: CertificateForm,
    employees: ListController<Employee>,
    #[prop(into)] on_saved: Callback<()>,
) -> impl IntoView {
    let file_ref = NodeRef::<leptos::html::Input>::new();

    // Mở modal thì bỏ file đã chọn ở lần trước.
    Effect::new(move |_| {
        if dialog.show.get() {
            if let Some(input) = file_ref.get() {
                input.set_value("");
            }
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = match form.validate() {
            Ok(draft) => draft,
            Err(message) => {
                dialog.error.set(Some(message));
                return;
            }
        };
        let file = file_ref
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));

        dialog.busy.set(true);
        spawn_local(async move {
            let api = QlnsApi::new();
            let result = match dialog.editing_snapshot() {
                Some(record) => api.update_certificate(record.id, &draft, file.as_ref()).await,
                None => api.create_certificate(&draft, file.as_ref()).await,
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
            "Sửa Chứng chỉ".to_string()
        } else {
            "Thêm Chứng chỉ".to_string()
        }
    });

    view! {
        <ModalShell open=dialog.show title=title>
            <ErrorAlert error=dialog.error />
            <form class="space-y-4" on:submit=on_submit>
                <div class="grid grid-cols-2 gap-4">
                    <div class="form-control">
                        <label class="label" for="ce_employee">
                            <span class="label-text">"Nhân viên *"</span>
                        </label>
                        <select
                            id="ce_employee"
                            class="select select-bordered w-full"
                            required
                            on:change=move |ev| form.employee_id.set(event_target_value(&ev))
                        >
                            <option value="" selected=move || form.employee_id.get().is_empty()>
                                "Chọn nhân viên"
                            </option>
                            <For
                                each=move || employees.items.get()
                                key=|e| e.id
                                children=move |employee: Employee| {
                                    let value = employee.id.to_string();
                                    let department = employee
                                        .department
                                        .as_ref()
                                        .map(|d| d.name.clone())
                                        .unwrap_or_default();
                                    let label = if department.is_empty() {
                                        employee.full_name.clone()
                                    } else {
                                        format!("{} - {}", employee.full_name, department)
                                    };
                                    let selected = {
                                        let value = value.clone();
                                        move || form.employee_id.get() == value
                                    };
                                    view! {
                                        <option value=value.clone() selected=selected>{label}</option>
                                    }
                                }
                            />
                        </select>
                    </div>
                    <div class="form-control">
                        <label class="label" for="ce_number">
                            <span class="label-text">"Mã chứng chỉ *"</span>
                        </label>
                        <input
                            id="ce_number"
                            type="text"
                            class="input input-bordered w-full"
                            required
                            on:input=move |ev| form.certificate_number.set(event_target_value(&ev))
                            prop:value=move || form.certificate_number.get()
                        />
                    </div>
                </div>
                <div class="grid grid-cols-2 gap-4">
                    <div class="form-control">
                        <label class="label" for="ce_issued_by">
                            <span class="label-text">"Nơi cấp"</span>
                        </label>
                        <input
                            id="ce_issued_by"
                            type="text"
                            class="input input-bordered w-full"
                            on:input=move |ev| form.issued_by.set(event_target_value(&ev))
                            prop:value=move || form.issued_by.get()
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="ce_issued_date">
                            <span class="label-text">"Ngày cấp *"</span>
                        </label>
                        <input
                            id="ce_issued_date"
                            type="date"
                            class="input input-bordered w-full"
                            required
                            on:input=move |ev| form.issued_date.set(event_target_value(&ev))
                            prop:value=move || form.issued_date.get()
                        />
                    </div>
                </div>
                <div class="grid grid-cols-2 gap-4">
                    <div class="form-control">
                        <label class="label" for="ce_expiry">
                            <span class="label-text">"Ngày hết hạn"</span>
                        </label>
                        <input
                            id="ce_expiry"
                            type="date"
                            class="input input-bordered w-full"
                            on:input=move |ev| form.expiry_date.set(event_target_value(&ev))
                            prop:value=move || form.expiry_date.get()
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="ce_file">
                            <span class="label-text">"File chứng chỉ"</span>
                        </label>
                        <input
                            id="ce_file"
                            type="file"
                            class="file-input file-input-bordered w-full"
                            accept=CERTIFICATE_FILE_ACCEPT
                            node_ref=file_ref
                        />
                    </div>
                </div>
                <div class="form-control">
                    <label class="label" for="ce_notes">
                        <span class="label-text">"Ghi chú"</span>
                    </label>
                    <textarea
                        id="ce_notes"
                        class="textarea textarea-bordered w-full"
                        rows="2"
                        on:input=move |ev| form.notes.set(event_target_value(&ev))
                        prop:value=move || form.notes.get()
                    ></textarea>
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
