//! Màn hình danh sách dự án
//!
//! Bảng dự án với dòng mở rộng liệt kê nhân sự tham gia (vai trò,
//! ngày tham gia), modal thêm/sửa dự án, gán nhân sự vào dự án và gỡ
//! nhân sự khỏi dự án.

use leptos::prelude::*;
use leptos::task::spawn_local;

use qlns_shared::date::display_date;
use qlns_shared::status::project_status_badge;
use qlns_shared::validate::{join_messages, none_if_empty, require_non_empty};
use qlns_shared::{AssignEmployeePayload, Employee, Project, ProjectPayload};

use crate::api::QlnsApi;
use crate::components::icons::*;
use crate::components::ui::{ErrorAlert, ModalShell, PageSpinner, SuccessToast};
use crate::controller::{DialogState, ListController};
use crate::web::dom;
use crate::web::route::AppRoute;
use crate::web::router::use_router;

const PROJECT_STATUSES: [&str; 3] = ["Đang thực hiện", "Hoàn thành", "Tạm dừng"];

#[derive(Clone, Copy)]
struct ProjectForm {
    code: RwSignal<String>,
    name: RwSignal<String>,
    client: RwSignal<String>,
    start_date: RwSignal<String>,
    end_date: RwSignal<String>,
    status: RwSignal<String>,
}

impl ProjectForm {
    fn new() -> Self {
        Self {
            code: RwSignal::new(String::new()),
            name: RwSignal::new(String::new()),
            client: RwSignal::new(String::new()),
            start_date: RwSignal::new(String::new()),
            end_date: RwSignal::new(String::new()),
            status: RwSignal::new(PROJECT_STATUSES[0].to_string()),
        }
    }

    fn reset(&self) {
        self.code.set(String::new());
        self.name.set(String::new());
        self.client.set(String::new());
        self.start_date.set(String::new());
        self.end_date.set(String::new());
        self.status.set(PROJECT_STATUSES[0].to_string());
    }

    fn fill(&self, project: &Project) {
        self.code.set(project.code.clone());
        self.name.set(project.name.clone());
        self.client.set(project.client.clone().unwrap_or_default());
        self.start_date.set(project.start_date.clone().unwrap_or_default());
        self.end_date.set(project.end_date.clone().unwrap_or_default());
        self.status.set(
            project
                .status
                .clone()
                .unwrap_or_else(|| PROJECT_STATUSES[0].to_string()),
        );
    }

    fn validate(&self) -> Result<ProjectPayload, String> {
        let code = self.code.get_untracked();
        let name = self.name.get_untracked();
        let start_date = self.start_date.get_untracked();

        require_non_empty(&[
            ("Mã dự án", &code),
            ("Tên dự án", &name),
            ("Ngày bắt đầu", &start_date),
        ])
        .map_err(|errors| join_messages(&errors))?;

        Ok(ProjectPayload {
            code: code.trim().to_string(),
            name: name.trim().to_string(),
            client: none_if_empty(&self.client.get_untracked()),
            start_date: start_date.trim().to_string(),
            end_date: none_if_empty(&self.end_date.get_untracked()),
            status: self.status.get_untracked(),
        })
    }
}

/// Form gán nhân sự vào một dự án.
#[derive(Clone, Copy)]
struct AssignForm {
    employee_id: RwSignal<String>,
    role: RwSignal<String>,
    joined_date: RwSignal<String>,
}

impl AssignForm {
    fn new() -> Self {
        Self {
            employee_id: RwSignal::new(String::new()),
            role: RwSignal::new(String::new()),
            joined_date: RwSignal::new(String::new()),
        }
    }

    fn reset(&self) {
        self.employee_id.set(String::new());
        self.role.set(String::new());
        self.joined_date.set(String::new());
    }

    fn validate(&self) -> Result<AssignEmployeePayload, String> {
        let employee_id = self.employee_id.get_untracked();
        if employee_id.trim().is_empty() {
            return Err("Vui lòng chọn nhân viên".to_string());
        }
        let employee_id: i64 = employee_id
            .trim()
            .parse()
            .map_err(|_| "Nhân viên không hợp lệ".to_string())?;

        Ok(AssignEmployeePayload {
            employee_id,
            role: none_if_empty(&self.role.get_untracked()),
            joined_date: none_if_empty(&self.joined_date.get_untracked()),
        })
    }
}

#[component]
pub fn ProjectListPage() -> impl IntoView {
    let projects = ListController::<Project>::new();
    let employees = ListController::<Employee>::new();
    let dialog = DialogState::<Project>::new();
    let assign_dialog = DialogState::<Project>::new();
    let form = ProjectForm::new();
    let assign_form = AssignForm::new();
    let toast = RwSignal::new(Option::<String>::None);
    let expanded = RwSignal::new(Option::<i64>::None);

    let reload = move || {
        projects.load(async move { QlnsApi::new().list_projects().await });
    };
    Effect::new(move |_| {
        reload();
        employees.load(async move { QlnsApi::new().list_employees().await });
    });

    let open_create = move |_| {
        form.reset();
        dialog.open_create();
    };
    let open_edit = move |project: Project| {
        form.fill(&project);
        dialog.open_edit(project);
    };
    let open_assign = move |project: Project| {
        assign_form.reset();
        assign_dialog.open_edit(project);
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
                Some(project) => api.update_project(project.id, &payload).await,
                None => api.create_project(&payload).await,
            };
            match result {
                Ok(()) => {
                    dialog.close();
                    let _ = toast.try_set(Some("Đã lưu dự án".to_string()));
                    reload();
                }
                Err(err) => {
                    let _ = dialog.error.try_set(Some(err.to_string()));
                    let _ = dialog.busy.try_set(false);
                }
            }
        });
    };

    let on_assign_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(project) = assign_dialog.editing_snapshot() else {
            return;
        };
        let payload = match assign_form.validate() {
            Ok(payload) => payload,
            Err(message) => {
                assign_dialog.error.set(Some(message));
                return;
            }
        };

        assign_dialog.busy.set(true);
        spawn_local(async move {
            match QlnsApi::new().assign_employee(project.id, &payload).await {
                Ok(()) => {
                    assign_dialog.close();
                    let _ = toast.try_set(Some("Đã thêm nhân sự vào dự án".to_string()));
                    reload();
                }
                Err(err) => {
                    let _ = assign_dialog.error.try_set(Some(err.to_string()));
                    let _ = assign_dialog.busy.try_set(false);
                }
            }
        });
    };

    let on_delete = move |project: Project| {
        if !dom::confirm("Bạn có chắc muốn xóa dự án này?") {
            return;
        }
        spawn_local(async move {
            match QlnsApi::new().delete_project(project.id).await {
                Ok(()) => {
                    let _ = toast.try_set(Some("Đã xóa dự án".to_string()));
                    reload();
                }
                Err(err) => {
                    let _ = projects.error.try_set(Some(err.to_string()));
                }
            }
        });
    };

    let on_remove_member = move |project_id: i64, employee: Employee| {
        if !dom::confirm("Gỡ nhân viên này khỏi dự án?") {
            return;
        }
        spawn_local(async move {
            match QlnsApi::new().remove_employee(project_id, employee.id).await {
                Ok(()) => {
                    let _ = toast.try_set(Some("Đã gỡ nhân sự khỏi dự án".to_string()));
                    reload();
                }
                Err(err) => {
                    let _ = projects.error.try_set(Some(err.to_string()));
                }
            }
        });
    };

    let modal_title = Signal::derive(move || {
        if dialog.editing.get().is_some() {
            "Sửa Dự án".to_string()
        } else {
            "Thêm Dự án".to_string()
        }
    });
    let assign_title = Signal::derive(move || {
        assign_dialog
            .editing
            .get()
            .map(|p| format!("Thêm nhân sự vào {}", p.name))
            .unwrap_or_else(|| "Thêm nhân sự".to_string())
    });

    view! {
        <SuccessToast message=toast />

        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <div class="flex items-center justify-between mb-2">
                    <h2 class="card-title">"Danh sách Dự án"</h2>
                    <button class="btn btn-error btn-sm text-error-content gap-1" on:click=open_create>
                        <Plus attr:class="h-4 w-4" />
                        "Thêm Dự án"
                    </button>
                </div>

                <ErrorAlert error=projects.error />

                <Show
                    when=move || !projects.loading.get() || !projects.is_empty()
                    fallback=|| view! { <PageSpinner /> }
                >
                    <div class="overflow-x-auto">
                        <table class="table table-zebra w-full">
                            <thead>
                                <tr>
                                    <th>"STT"</th>
                                    <th>"Mã dự án"</th>
                                    <th>"Tên dự án"</th>
                                    <th>"Khách hàng"</th>
                                    <th>"Ngày bắt đầu"</th>
                                    <th>"Ngày kết thúc"</th>
                                    <th>"Số nhân sự"</th>
                                    <th>"Trạng thái"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                <Show when=move || projects.is_empty() && !projects.loading.get()>
                                    <tr>
                                        <td colspan="9" class="text-center py-8 text-base-content/50">
                                            "Chưa có dự án nào"
                                        </td>
                                    </tr>
                                </Show>
                                <For
                                    each={move || projects.items.get().into_iter().enumerate().collect::<Vec<_>>()}
                                    key=|(_, p)| p.id
                                    children=move |(index, project)| {
                                        let project_id = project.id;
                                        let edit_target = project.clone();
                                        let delete_target = project.clone();
                                        let assign_target = project.clone();
                                        let members = project.employees.clone().unwrap_or_default();
                                        let status = project.status.clone().unwrap_or_default();
                                        let toggle = move |_| {
                                            expanded.update(|current| {
                                                *current = if *current == Some(project_id) {
                                                    None
                                                } else {
                                                    Some(project_id)
                                                };
                                            });
                                        };
                                        view! {
                                            <tr class="cursor-pointer hover" on:click=toggle>
                                                <td>{index + 1}</td>
                                                <td class="font-mono text-sm">{project.code.clone()}</td>
                                                <td class="font-semibold">{project.name.clone()}</td>
                                                <td>{project.client.clone().unwrap_or_else(|| "-".to_string())}</td>
                                                <td>{display_date(project.start_date.as_deref())}</td>
                                                <td>{display_date(project.end_date.as_deref())}</td>
                                                <td>
                                                    <div class="badge badge-info badge-outline">
                                                        {format!("{} nhân sự", project.member_count())}
                                                    </div>
                                                </td>
                                                <td>
                                                    <div class=format!("badge {}", project_status_badge(&status))>
                                                        {status.clone()}
                                                    </div>
                                                </td>
                                                <td>
                                                    <div class="flex gap-1">
                                                        <button
                                                            class="btn btn-ghost btn-xs"
                                                            title="Thêm nhân sự"
                                                            on:click=move |ev: web_sys::MouseEvent| {
                                                                ev.stop_propagation();
                                                                open_assign(assign_target.clone());
                                                            }
                                                        >
                                                            <Plus attr:class="h-4 w-4" />
                                                        </button>
                                                        <button
                                                            class="btn btn-ghost btn-xs"
                                                            title="Sửa"
                                                            on:click=move |ev: web_sys::MouseEvent| {
                                                                ev.stop_propagation();
                                                                open_edit(edit_target.clone());
                                                            }
                                                        >
                                                            <Pencil attr:class="h-4 w-4" />
                                                        </button>
                                                        <button
                                                            class="btn btn-ghost btn-xs text-error"
                                                            title="Xóa"
                                                            on:click=move |ev: web_sys::MouseEvent| {
                                                                ev.stop_propagation();
                                                                on_delete(delete_target.clone());
                                                            }
                                                        >
                                                            <Trash2 attr:class="h-4 w-4" />
                                                        </button>
                                                    </div>
                                                </td>
                                            </tr>
                                            <Show when=move || expanded.get() == Some(project_id)>
                                                <tr>
                                                    <td colspan="9" class="bg-base-200">
                                                        <div class="p-3">
                                                            <h4 class="font-semibold mb-2">
                                                                "Danh sách Nhân sự trong dự án:"
                                                            </h4>
                                                            <MemberTable
                                                                project_id=project_id
                                                                members=members.clone()
                                                                on_remove=on_remove_member
                                                            />
                                                        </div>
                                                    </td>
                                                </tr>
                                            </Show>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </div>
                    <p class="text-xs text-base-content/50 mt-2">
                        "Click vào dòng dự án để xem danh sách nhân sự"
                    </p>
                </Show>
            </div>
        </div>

        // Modal thêm/sửa dự án
        <ModalShell open=dialog.show title=modal_title>
            <ErrorAlert error=dialog.error />
            <form class="space-y-4" on:submit=on_submit>
                <div class="grid grid-cols-2 gap-4">
                    <div class="form-control">
                        <label class="label" for="pr_code">
                            <span class="label-text">"Mã dự án *"</span>
                        </label>
                        <input
                            id="pr_code"
                            type="text"
                            class="input input-bordered w-full"
                            required
                            on:input=move |ev| form.code.set(event_target_value(&ev))
                            prop:value=move || form.code.get()
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="pr_name">
                            <span class="label-text">"Tên dự án *"</span>
                        </label>
                        <input
                            id="pr_name"
                            type="text"
                            class="input input-bordered w-full"
                            required
                            on:input=move |ev| form.name.set(event_target_value(&ev))
                            prop:value=move || form.name.get()
                        />
                    </div>
                </div>
                <div class="form-control">
                    <label class="label" for="pr_client">
                        <span class="label-text">"Khách hàng"</span>
                    </label>
                    <input
                        id="pr_client"
                        type="text"
                        class="input input-bordered w-full"
                        on:input=move |ev| form.client.set(event_target_value(&ev))
                        prop:value=move || form.client.get()
                    />
                </div>
                <div class="grid grid-cols-3 gap-4">
                    <div class="form-control">
                        <label class="label" for="pr_start">
                            <span class="label-text">"Ngày bắt đầu *"</span>
                        </label>
                        <input
                            id="pr_start"
                            type="date"
                            class="input input-bordered w-full"
                            required
                            on:input=move |ev| form.start_date.set(event_target_value(&ev))
                            prop:value=move || form.start_date.get()
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="pr_end">
                            <span class="label-text">"Ngày kết thúc"</span>
                        </label>
                        <input
                            id="pr_end"
                            type="date"
                            class="input input-bordered w-full"
                            on:input=move |ev| form.end_date.set(event_target_value(&ev))
                            prop:value=move || form.end_date.get()
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="pr_status">
                            <span class="label-text">"Trạng thái"</span>
                        </label>
                        <select
                            id="pr_status"
                            class="select select-bordered w-full"
                            on:change=move |ev| form.status.set(event_target_value(&ev))
                        >
                            {PROJECT_STATUSES
                                .iter()
                                .map(|label| {
                                    let value = label.to_string();
                                    let selected = {
                                        let value = value.clone();
                                        move || form.status.get() == value
                                    };
                                    view! {
                                        <option value=value.clone() selected=selected>
                                            {value.clone()}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </div>
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

        // Modal gán nhân sự
        <ModalShell open=assign_dialog.show title=assign_title>
            <ErrorAlert error=assign_dialog.error />
            <form class="space-y-4" on:submit=on_assign_submit>
                <div class="form-control">
                    <label class="label" for="as_employee">
                        <span class="label-text">"Nhân viên *"</span>
                    </label>
                    <select
                        id="as_employee"
                        class="select select-bordered w-full"
                        required
                        on:change=move |ev| assign_form.employee_id.set(event_target_value(&ev))
                    >
                        <option value="" selected=move || assign_form.employee_id.get().is_empty()>
                            "Chọn nhân viên"
                        </option>
                        <For
                            each=move || employees.items.get()
                            key=|e| e.id
                            children=move |employee: Employee| {
                                let value = employee.id.to_string();
                                let label = format!(
                                    "{} - {}",
                                    employee.full_name, employee.employee_code
                                );
                                let selected = {
                                    let value = value.clone();
                                    move || assign_form.employee_id.get() == value
                                };
                                view! {
                                    <option value=value.clone() selected=selected>{label}</option>
                                }
                            }
                        />
                    </select>
                </div>
                <div class="grid grid-cols-2 gap-4">
                    <div class="form-control">
                        <label class="label" for="as_role">
                            <span class="label-text">"Vai trò"</span>
                        </label>
                        <input
                            id="as_role"
                            type="text"
                            placeholder="Kỹ sư, PM..."
                            class="input input-bordered w-full"
                            on:input=move |ev| assign_form.role.set(event_target_value(&ev))
                            prop:value=move || assign_form.role.get()
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="as_joined">
                            <span class="label-text">"Ngày tham gia"</span>
                        </label>
                        <input
                            id="as_joined"
                            type="date"
                            class="input input-bordered w-full"
                            on:input=move |ev| assign_form.joined_date.set(event_target_value(&ev))
                            prop:value=move || assign_form.joined_date.get()
                        />
                    </div>
                </div>

                <div class="modal-action">
                    <button type="button" class="btn btn-ghost" on:click=move |_| assign_dialog.close()>
                        "Hủy"
                    </button>
                    <button
                        type="submit"
                        class="btn btn-error text-error-content"
                        disabled=move || assign_dialog.busy.get()
                    >
                        {move || if assign_dialog.busy.get() {
                            view! { <span class="loading loading-spinner"></span> "Đang lưu..." }.into_any()
                        } else {
                            "Thêm vào dự án".into_any()
                        }}
                    </button>
                </div>
            </form>
        </ModalShell>
    }
}

/// Bảng nhân sự bên trong dòng dự án mở rộng.
#[component]
fn MemberTable<F>(project_id: i64, members: Vec<Employee>, on_remove: F) -> impl IntoView
where
    F: Fn(i64, Employee) + Copy + Send + Sync + 'static,
{
    let router = use_router();

    if members.is_empty() {
        return view! {
            <div role="alert" class="alert alert-info text-sm">
                <span>"Dự án này chưa có nhân sự nào"</span>
            </div>
        }
        .into_any();
    }

    view! {
        <table class="table table-sm w-full bg-base-100 rounded-box">
            <thead>
                <tr>
                    <th>"STT"</th>
                    <th>"Mã NV"</th>
                    <th>"Họ tên"</th>
                    <th>"Phòng ban"</th>
                    <th>"Vai trò"</th>
                    <th>"Ngày tham gia"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {members
                    .into_iter()
                    .enumerate()
                    .map(|(index, member)| {
                        let member_id = member.id;
                        let remove_target = member.clone();
                        let department = member
                            .department
                            .as_ref()
                            .map(|d| d.name.clone())
                            .unwrap_or_else(|| "-".to_string());
                        let role = member
                            .pivot
                            .as_ref()
                            .and_then(|p| p.role.clone())
                            .unwrap_or_else(|| "-".to_string());
                        let joined = display_date(
                            member.pivot.as_ref().and_then(|p| p.joined_date.as_deref()),
                        );
                        view! {
                            <tr>
                                <td>{index + 1}</td>
                                <td class="font-mono text-sm">{member.employee_code.clone()}</td>
                                <td>
                                    <a
                                        href=AppRoute::EmployeeDetail(member_id).to_path()
                                        class="link link-error font-semibold no-underline"
                                        on:click=move |ev: web_sys::MouseEvent| {
                                            ev.prevent_default();
                                            ev.stop_propagation();
                                            router.navigate(AppRoute::EmployeeDetail(member_id));
                                        }
                                    >
                                        {member.full_name.clone()}
                                    </a>
                                </td>
                                <td>{department}</td>
                                <td>{role}</td>
                                <td>{joined}</td>
                                <td>
                                    <button
                                        class="btn btn-ghost btn-xs text-error"
                                        title="Gỡ khỏi dự án"
                                        on:click=move |ev: web_sys::MouseEvent| {
                                            ev.stop_propagation();
                                            on_remove(project_id, remove_target.clone());
                                        }
                                    >
                                        <Trash2 attr:class="h-3 w-3" />
                                    </button>
                                </td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
    .into_any()
}
