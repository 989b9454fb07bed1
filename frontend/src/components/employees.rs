//! Màn hình danh sách nhân sự
//!
//! Bảng + modal thêm/sửa + xóa có xác nhận. Danh sách phòng ban được
//! tải kèm để đổ vào ô chọn của form.

use leptos::prelude::*;
use leptos::task::spawn_local;

use qlns_shared::validate::{join_messages, none_if_empty, require_non_empty};
use qlns_shared::{Department, Employee, EmployeePayload};

use crate::api::QlnsApi;
use crate::components::icons::*;
use crate::components::ui::{ErrorAlert, ModalShell, PageSpinner, SuccessToast};
use crate::controller::{DialogState, ListController};
use crate::web::dom;
use crate::web::route::AppRoute;
use crate::web::router::use_router;

/// Trạng thái form nhân viên, gom signal theo kiểu FormState của hộp
/// thoại thêm dự án.
#[derive(Clone, Copy)]
struct EmployeeForm {
    full_name: RwSignal<String>,
    employee_code: RwSignal<String>,
    email: RwSignal<String>,
    phone: RwSignal<String>,
    department_id: RwSignal<String>,
    position: RwSignal<String>,
    status: RwSignal<String>,
}

impl EmployeeForm {
    fn new() -> Self {
        Self {
            full_name: RwSignal::new(String::new()),
            employee_code: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            phone: RwSignal::new(String::new()),
            department_id: RwSignal::new(String::new()),
            position: RwSignal::new(String::new()),
            status: RwSignal::new("active".to_string()),
        }
    }

    fn reset(&self) {
        self.full_name.set(String::new());
        self.employee_code.set(String::new());
        self.email.set(String::new());
        self.phone.set(String::new());
        self.department_id.set(String::new());
        self.position.set(String::new());
        self.status.set("active".to_string());
    }

    fn fill(&self, employee: &Employee) {
        self.full_name.set(employee.full_name.clone());
        self.employee_code.set(employee.employee_code.clone());
        self.email.set(employee.email.clone().unwrap_or_default());
        self.phone.set(employee.phone.clone().unwrap_or_default());
        self.department_id.set(
            employee
                .department_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
        );
        self.position.set(employee.position.clone().unwrap_or_default());
        self.status.set(employee.status.wire_value().to_string());
    }

    /// Kiểm tra trường bắt buộc rồi dựng payload; lỗi trả về chuỗi
    /// hiển thị trong modal, chưa có request nào được gửi.
    fn validate(&self) -> Result<EmployeePayload, String> {
        let full_name = self.full_name.get_untracked();
        let employee_code = self.employee_code.get_untracked();
        let email = self.email.get_untracked();
        let department_id = self.department_id.get_untracked();

        require_non_empty(&[
            ("Họ tên", &full_name),
            ("Mã NV", &employee_code),
            ("Email", &email),
            ("Phòng ban", &department_id),
        ])
        .map_err(|errors| join_messages(&errors))?;

        let department_id: i64 = department_id
            .trim()
            .parse()
            .map_err(|_| "Phòng ban không hợp lệ".to_string())?;

        Ok(EmployeePayload {
            full_name: full_name.trim().to_string(),
            employee_code: employee_code.trim().to_string(),
            email: email.trim().to_string(),
            phone: none_if_empty(&self.phone.get_untracked()),
            department_id,
            position: none_if_empty(&self.position.get_untracked()),
            status: self.status.get_untracked(),
        })
    }
}

#[component]
pub fn EmployeeListPage() -> impl IntoView {
    let router = use_router();

    let employees = ListController::<Employee>::new();
    let departments = ListController::<Department>::new();
    let dialog = DialogState::<Employee>::new();
    let form = EmployeeForm::new();
    let toast = RwSignal::new(Option::<String>::None);

    let reload = move || {
        employees.load(async move { QlnsApi::new().list_employees().await });
        departments.load(async move { QlnsApi::new().list_departments().await });
    };
    Effect::new(move |_| reload());

    let open_create = move |_| {
        form.reset();
        dialog.open_create();
    };
    let open_edit = move |employee: Employee| {
        form.fill(&employee);
        dialog.open_edit(employee);
    };

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
                Some(employee) => api.update_employee(employee.id, &payload).await,
                None => api.create_employee(&payload).await,
            };
            match result {
                Ok(()) => {
                    dialog.close();
                    let _ = toast.try_set(Some("Đã lưu thông tin nhân viên".to_string()));
                    reload();
                }
                // Modal giữ nguyên cho người dùng sửa rồi gửi lại.
                Err(err) => {
                    let _ = dialog.error.try_set(Some(err.to_string()));
                    let _ = dialog.busy.try_set(false);
                }
            }
        });
    };

    let on_delete = move |employee: Employee| {
        if !dom::confirm("Bạn có chắc muốn xóa nhân viên này?") {
            return;
        }
        spawn_local(async move {
            match QlnsApi::new().delete_employee(employee.id).await {
                Ok(()) => {
                    let _ = toast.try_set(Some("Đã xóa nhân viên".to_string()));
                    reload();
                }
                Err(err) => {
                    let _ = employees.error.try_set(Some(err.to_string()));
                }
            }
        });
    };

    let modal_title = Signal::derive(move || {
        if dialog.editing.get().is_some() {
            "Sửa Nhân viên".to_string()
        } else {
            "Thêm Nhân viên".to_string()
        }
    });

    view! {
        <SuccessToast message=toast />

        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <div class="flex items-center justify-between mb-2">
                    <h2 class="card-title">"Danh sách Nhân sự"</h2>
                    <div class="flex gap-2">
                        <button
                            class="btn btn-ghost btn-circle btn-sm"
                            disabled=move || employees.loading.get()
                            on:click=move |_| reload()
                        >
                            <RefreshCw attr:class=move || {
                                if employees.loading.get() { "h-4 w-4 animate-spin" } else { "h-4 w-4" }
                            } />
                        </button>
                        <button class="btn btn-error btn-sm text-error-content gap-1" on:click=open_create>
                            <Plus attr:class="h-4 w-4" />
                            "Thêm Nhân viên"
                        </button>
                    </div>
                </div>

                <ErrorAlert error=employees.error />

                <Show
                    when=move || !employees.loading.get() || !employees.is_empty()
                    fallback=|| view! { <PageSpinner /> }
                >
                    <div class="overflow-x-auto">
                        <table class="table table-zebra w-full">
                            <thead>
                                <tr>
                                    <th>"STT"</th>
                                    <th>"Mã NV"</th>
                                    <th>"Họ tên"</th>
                                    <th>"Email"</th>
                                    <th>"Phòng ban"</th>
                                    <th>"Chức vụ"</th>
                                    <th>"Số chứng chỉ"</th>
                                    <th>"Trạng thái"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                <Show when=move || employees.is_empty() && !employees.loading.get()>
                                    <tr>
                                        <td colspan="9" class="text-center py-8 text-base-content/50">
                                            "Chưa có nhân viên nào"
                                        </td>
                                    </tr>
                                </Show>
                                <For
                                    each={move || employees.items.get().into_iter().enumerate().collect::<Vec<_>>()}
                                    key=|(_, e)| e.id
                                    children=move |(index, employee)| {
                                        let detail_id = employee.id;
                                        let edit_target = employee.clone();
                                        let delete_target = employee.clone();
                                        let department_name = employee
                                            .department
                                            .as_ref()
                                            .map(|d| d.name.clone())
                                            .unwrap_or_else(|| "-".to_string());
                                        view! {
                                            <tr>
                                                <td>{index + 1}</td>
                                                <td class="font-mono text-sm">{employee.employee_code.clone()}</td>
                                                <td>
                                                    <a
                                                        href=AppRoute::EmployeeDetail(detail_id).to_path()
                                                        class="link link-error font-semibold no-underline"
                                                        on:click=move |ev: web_sys::MouseEvent| {
                                                            ev.prevent_default();
                                                            router.navigate(AppRoute::EmployeeDetail(detail_id));
                                                        }
                                                    >
                                                        {employee.full_name.clone()}
                                                    </a>
                                                </td>
                                                <td>{employee.email.clone().unwrap_or_else(|| "-".to_string())}</td>
                                                <td>{department_name}</td>
                                                <td>{employee.position.clone().unwrap_or_else(|| "-".to_string())}</td>
                                                <td>
                                                    <div class="badge badge-info badge-outline">
                                                        {employee.certificate_count()}
                                                    </div>
                                                </td>
                                                <td>
                                                    <div class=format!("badge {}", employee.status.badge_class())>
                                                        {employee.status.label().to_string()}
                                                    </div>
                                                </td>
                                                <td>
                                                    <div class="flex gap-1">
                                                        <button
                                                            class="btn btn-ghost btn-xs"
                                                            title="Xem chi tiết"
                                                            on:click=move |_| router.navigate(AppRoute::EmployeeDetail(detail_id))
                                                        >
                                                            <Eye attr:class="h-4 w-4" />
                                                        </button>
                                                        <button
                                                            class="btn btn-ghost btn-xs"
                                                            title="Sửa"
                                                            on:click=move |_| open_edit(edit_target.clone())
                                                        >
                                                            <Pencil attr:class="h-4 w-4" />
                                                        </button>
                                                        <button
                                                            class="btn btn-ghost btn-xs text-error"
                                                            title="Xóa"
                                                            on:click=move |_| on_delete(delete_target.clone())
                                                        >
                                                            <Trash2 attr:class="h-4 w-4" />
                                                        </button>
                                                    </div>
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </div>
                </Show>
            </div>
        </div>

        <ModalShell open=dialog.show title=modal_title>
            <ErrorAlert error=dialog.error />
            <form class="space-y-4" on:submit=on_submit>
                <div class="grid grid-cols-2 gap-4">
                    <div class="form-control">
                        <label class="label" for="emp_full_name">
                            <span class="label-text">"Họ tên *"</span>
                        </label>
                        <input
                            id="emp_full_name"
                            type="text"
                            class="input input-bordered w-full"
                            required
                            on:input=move |ev| form.full_name.set(event_target_value(&ev))
                            prop:value=move || form.full_name.get()
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="emp_code">
                            <span class="label-text">"Mã NV *"</span>
                        </label>
                        <input
                            id="emp_code"
                            type="text"
                            class="input input-bordered w-full"
                            required
                            on:input=move |ev| form.employee_code.set(event_target_value(&ev))
                            prop:value=move || form.employee_code.get()
                        />
                    </div>
                </div>
                <div class="grid grid-cols-2 gap-4">
                    <div class="form-control">
                        <label class="label" for="emp_email">
                            <span class="label-text">"Email *"</span>
                        </label>
                        <input
                            id="emp_email"
                            type="email"
                            class="input input-bordered w-full"
                            required
                            on:input=move |ev| form.email.set(event_target_value(&ev))
                            prop:value=move || form.email.get()
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="emp_phone">
                            <span class="label-text">"Số điện thoại"</span>
                        </label>
                        <input
                            id="emp_phone"
                            type="text"
                            class="input input-bordered w-full"
                            on:input=move |ev| form.phone.set(event_target_value(&ev))
                            prop:value=move || form.phone.get()
                        />
                    </div>
                </div>
                <div class="grid grid-cols-2 gap-4">
                    <div class="form-control">
                        <label class="label" for="emp_department">
                            <span class="label-text">"Phòng ban *"</span>
                        </label>
                        <select
                            id="emp_department"
                            class="select select-bordered w-full"
                            required
                            on:change=move |ev| form.department_id.set(event_target_value(&ev))
                        >
                            <option value="" selected=move || form.department_id.get().is_empty()>
                                "Chọn phòng ban"
                            </option>
                            <For
                                each=move || departments.items.get()
                                key=|d| d.id
                                children=move |department: Department| {
                                    let value = department.id.to_string();
                                    let selected = {
                                        let value = value.clone();
                                        move || form.department_id.get() == value
                                    };
                                    view! {
                                        <option value=value.clone() selected=selected>
                                            {department.name.clone()}
                                        </option>
                                    }
                                }
                            />
                        </select>
                    </div>
                    <div class="form-control">
                        <label class="label" for="emp_position">
                            <span class="label-text">"Chức vụ"</span>
                        </label>
                        <input
                            id="emp_position"
                            type="text"
                            class="input input-bordered w-full"
                            on:input=move |ev| form.position.set(event_target_value(&ev))
                            prop:value=move || form.position.get()
                        />
                    </div>
                </div>
                <div class="form-control">
                    <label class="label" for="emp_status">
                        <span class="label-text">"Trạng thái"</span>
                    </label>
                    <select
                        id="emp_status"
                        class="select select-bordered w-full"
                        on:change=move |ev| form.status.set(event_target_value(&ev))
                    >
                        <option value="active" selected=move || form.status.get() == "active">
                            "Hoạt động"
                        </option>
                        <option value="inactive" selected=move || form.status.get() == "inactive">
                            "Không hoạt động"
                        </option>
                    </select>
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
