//! Màn hình tra cứu chéo
//!
//! Ba chế độ độc lập chọn bằng tab: theo loại chứng chỉ (ai đang giữ),
//! theo nhân sự (chứng chỉ + dự án của người đó), theo dự án (nhân sự
//! tham gia). Mỗi chế độ giữ riêng trạng thái tải/lỗi/kết quả của
//! mình nên chuyển tab không xóa kết quả của tab khác; tra cứu chỉ
//! chạy khi bấm nút, không tìm kiếm tức thời.

use leptos::prelude::*;
use leptos::task::spawn_local;

use qlns_shared::date::display_date;
use qlns_shared::status::project_status_badge;
use qlns_shared::{Certificate, CertificateType, Employee, Project};

use crate::api::QlnsApi;
use crate::components::icons::*;
use crate::components::ui::EmptyNotice;
use crate::controller::ListController;

#[derive(Clone, Copy, PartialEq, Eq)]
enum SearchTab {
    Certificate,
    Employee,
    Project,
}

#[component]
pub fn SearchPage() -> impl IntoView {
    let active_tab = RwSignal::new(SearchTab::Certificate);

    // Dữ liệu cho các ô chọn, tải một lần khi vào màn hình.
    let certificate_types = ListController::<CertificateType>::new();
    let employees = ListController::<Employee>::new();
    let projects = ListController::<Project>::new();

    Effect::new(move |_| {
        certificate_types.load(async move { QlnsApi::new().list_certificate_types().await });
        employees.load(async move { QlnsApi::new().list_employees().await });
        projects.load(async move { QlnsApi::new().list_projects().await });
    });

    // --- Chế độ 1: theo loại chứng chỉ ---
    let selected_type = RwSignal::new(String::new());
    let type_results = ListController::<Certificate>::new();
    let type_searched = RwSignal::new(false);
    let type_error = RwSignal::new(Option::<String>::None);

    let on_type_search = move |_| {
        let raw = selected_type.get_untracked();
        let Ok(type_id) = raw.trim().parse::<i64>() else {
            type_error.set(Some("Vui lòng chọn loại chứng chỉ".to_string()));
            return;
        };
        type_error.set(None);
        type_searched.set(true);
        type_results.load(async move { QlnsApi::new().certificates_by_type(type_id).await });
    };

    // --- Chế độ 2: theo nhân sự ---
    let selected_employee = RwSignal::new(String::new());
    let employee_certs = ListController::<Certificate>::new();
    let employee_projects = RwSignal::new(Vec::<Project>::new());
    let employee_searched = RwSignal::new(false);
    let employee_error = RwSignal::new(Option::<String>::None);

    let on_employee_search = move |_| {
        let raw = selected_employee.get_untracked();
        let Ok(employee_id) = raw.trim().parse::<i64>() else {
            employee_error.set(Some("Vui lòng chọn nhân viên".to_string()));
            return;
        };
        employee_error.set(None);
        employee_searched.set(true);
        employee_certs
            .load(async move { QlnsApi::new().certificates_by_employee(employee_id).await });

        // Dự án lấy từ bản ghi nhân viên đã nằm sẵn trong state,
        // không gọi thêm request.
        let from_local = employees.items.with_untracked(|list| {
            list.iter()
                .find(|e| e.id == employee_id)
                .and_then(|e| e.projects.clone())
                .unwrap_or_default()
        });
        employee_projects.set(from_local);
    };

    // --- Chế độ 3: theo dự án ---
    let selected_project = RwSignal::new(String::new());
    let project_result = RwSignal::new(Option::<Project>::None);
    let project_loading = RwSignal::new(false);
    let project_error = RwSignal::new(Option::<String>::None);

    let on_project_search = move |_| {
        let raw = selected_project.get_untracked();
        let Ok(project_id) = raw.trim().parse::<i64>() else {
            project_error.set(Some("Vui lòng chọn dự án".to_string()));
            return;
        };
        project_error.set(None);
        project_loading.set(true);
        spawn_local(async move {
            match QlnsApi::new().get_project(project_id).await {
                Ok(project) => {
                    let _ = project_result.try_set(Some(project));
                }
                Err(err) => {
                    let _ = project_error.try_set(Some(err.to_string()));
                }
            }
            let _ = project_loading.try_set(false);
        });
    };

    let tab_class = move |tab: SearchTab| {
        if active_tab.get() == tab {
            "tab tab-active font-semibold"
        } else {
            "tab"
        }
    };

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <h2 class="card-title mb-2">"Tra cứu Thông tin"</h2>

                <div role="tablist" class="tabs tabs-bordered mb-4">
                    <a
                        role="tab"
                        class=move || tab_class(SearchTab::Certificate)
                        on:click=move |_| active_tab.set(SearchTab::Certificate)
                    >
                        "Tra cứu Chứng chỉ"
                    </a>
                    <a
                        role="tab"
                        class=move || tab_class(SearchTab::Employee)
                        on:click=move |_| active_tab.set(SearchTab::Employee)
                    >
                        "Tra cứu Nhân sự"
                    </a>
                    <a
                        role="tab"
                        class=move || tab_class(SearchTab::Project)
                        on:click=move |_| active_tab.set(SearchTab::Project)
                    >
                        "Tra cứu Dự án"
                    </a>
                </div>

                // Tab 1: loại chứng chỉ -> nhân sự đang giữ
                <Show when=move || active_tab.get() == SearchTab::Certificate>
                    <h3 class="text-error font-semibold mb-3">"Ai đã có chứng chỉ này?"</h3>
                    <Show when=move || type_error.get().is_some()>
                        <div role="alert" class="alert alert-error text-sm py-2 mb-3">
                            <span>{move || type_error.get().unwrap_or_default()}</span>
                        </div>
                    </Show>
                    <div class="flex gap-3 items-end mb-4">
                        <div class="form-control flex-1">
                            <label class="label" for="sc_type">
                                <span class="label-text">"Chọn loại chứng chỉ"</span>
                            </label>
                            <select
                                id="sc_type"
                                class="select select-bordered w-full"
                                on:change=move |ev| {
                                    selected_type.set(event_target_value(&ev));
                                    type_results.items.set(Vec::new());
                                    type_searched.set(false);
                                }
                            >
                                <option value="" selected=move || selected_type.get().is_empty()>
                                    "-- Chọn loại chứng chỉ --"
                                </option>
                                <For
                                    each=move || certificate_types.items.get()
                                    key=|t| t.id
                                    children=move |certificate_type: CertificateType| {
                                        let value = certificate_type.id.to_string();
                                        let label = match certificate_type.code.as_deref() {
                                            Some(code) => {
                                                format!("{} ({})", certificate_type.name, code)
                                            }
                                            None => certificate_type.name.clone(),
                                        };
                                        let selected = {
                                            let value = value.clone();
                                            move || selected_type.get() == value
                                        };
                                        view! {
                                            <option value=value.clone() selected=selected>{label}</option>
                                        }
                                    }
                                />
                            </select>
                        </div>
                        <button
                            class="btn btn-error text-error-content gap-1"
                            disabled=move || type_results.loading.get() && type_searched.get()
                            on:click=on_type_search
                        >
                            <Search attr:class="h-4 w-4" />
                            {move || if type_results.loading.get() && type_searched.get() {
                                "Đang tìm..."
                            } else {
                                "Tra cứu"
                            }}
                        </button>
                    </div>

                    <Show when=move || type_searched.get() && !type_results.loading.get()>
                        <Show
                            when=move || !type_results.is_empty()
                            fallback=|| view! {
                                <EmptyNotice message="Không có nhân viên nào sở hữu chứng chỉ này" />
                            }
                        >
                            <div class="alert alert-info text-sm mb-3">
                                <span>
                                    {move || format!(
                                        "Kết quả: có {} nhân viên sở hữu chứng chỉ này",
                                        type_results.items.with(Vec::len)
                                    )}
                                </span>
                            </div>
                            <CertificateResultTable results=type_results show_type=false />
                        </Show>
                    </Show>
                </Show>

                // Tab 2: nhân sự -> chứng chỉ + dự án
                <Show when=move || active_tab.get() == SearchTab::Employee>
                    <h3 class="text-error font-semibold mb-3">
                        "Nhân sự này có chứng chỉ gì? Tham gia dự án nào?"
                    </h3>
                    <Show when=move || employee_error.get().is_some()>
                        <div role="alert" class="alert alert-error text-sm py-2 mb-3">
                            <span>{move || employee_error.get().unwrap_or_default()}</span>
                        </div>
                    </Show>
                    <div class="flex gap-3 items-end mb-4">
                        <div class="form-control flex-1">
                            <label class="label" for="sc_employee">
                                <span class="label-text">"Chọn nhân viên"</span>
                            </label>
                            <select
                                id="sc_employee"
                                class="select select-bordered w-full"
                                on:change=move |ev| {
                                    selected_employee.set(event_target_value(&ev));
                                    employee_certs.items.set(Vec::new());
                                    employee_projects.set(Vec::new());
                                    employee_searched.set(false);
                                }
                            >
                                <option value="" selected=move || selected_employee.get().is_empty()>
                                    "-- Chọn nhân viên --"
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
                                            move || selected_employee.get() == value
                                        };
                                        view! {
                                            <option value=value.clone() selected=selected>{label}</option>
                                        }
                                    }
                                />
                            </select>
                        </div>
                        <button
                            class="btn btn-error text-error-content gap-1"
                            disabled=move || employee_certs.loading.get() && employee_searched.get()
                            on:click=on_employee_search
                        >
                            <Search attr:class="h-4 w-4" />
                            {move || if employee_certs.loading.get() && employee_searched.get() {
                                "Đang tìm..."
                            } else {
                                "Tra cứu"
                            }}
                        </button>
                    </div>

                    <Show when=move || employee_searched.get() && !employee_certs.loading.get()>
                        <div class="mb-6">
                            <h4 class="font-semibold border-b border-base-200 pb-2 mb-3">
                                {move || format!(
                                    "Danh sách Chứng chỉ ({})",
                                    employee_certs.items.with(Vec::len)
                                )}
                            </h4>
                            <Show
                                when=move || !employee_certs.is_empty()
                                fallback=|| view! {
                                    <EmptyNotice message="Nhân viên này chưa có chứng chỉ nào" />
                                }
                            >
                                <CertificateResultTable results=employee_certs show_type=true />
                            </Show>
                        </div>
                        <div>
                            <h4 class="font-semibold border-b border-base-200 pb-2 mb-3">
                                {move || format!(
                                    "Dự án tham gia ({})",
                                    employee_projects.with(Vec::len)
                                )}
                            </h4>
                            <Show
                                when=move || !employee_projects.with(Vec::is_empty)
                                fallback=|| view! {
                                    <EmptyNotice message="Nhân viên này chưa tham gia dự án nào" />
                                }
                            >
                                <table class="table table-zebra w-full">
                                    <thead>
                                        <tr>
                                            <th>"STT"</th>
                                            <th>"Mã dự án"</th>
                                            <th>"Tên dự án"</th>
                                            <th>"Vai trò"</th>
                                            <th>"Ngày tham gia"</th>
                                            <th>"Trạng thái"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        <For
                                            each={move || employee_projects
                                                .get()
                                                .into_iter()
                                                .enumerate()
                                                .collect::<Vec<_>>()}
                                            key=|(_, p)| p.id
                                            children=move |(index, project)| {
                                                let role = project
                                                    .pivot
                                                    .as_ref()
                                                    .and_then(|p| p.role.clone())
                                                    .unwrap_or_else(|| "-".to_string());
                                                let joined = display_date(
                                                    project
                                                        .pivot
                                                        .as_ref()
                                                        .and_then(|p| p.joined_date.as_deref()),
                                                );
                                                let status =
                                                    project.status.clone().unwrap_or_default();
                                                view! {
                                                    <tr>
                                                        <td>{index + 1}</td>
                                                        <td class="font-mono text-sm">{project.code.clone()}</td>
                                                        <td>{project.name.clone()}</td>
                                                        <td>{role}</td>
                                                        <td>{joined}</td>
                                                        <td>
                                                            <div class=format!(
                                                                "badge {}",
                                                                project_status_badge(&status)
                                                            )>
                                                                {status.clone()}
                                                            </div>
                                                        </td>
                                                    </tr>
                                                }
                                            }
                                        />
                                    </tbody>
                                </table>
                            </Show>
                        </div>
                    </Show>
                </Show>

                // Tab 3: dự án -> nhân sự tham gia
                <Show when=move || active_tab.get() == SearchTab::Project>
                    <h3 class="text-error font-semibold mb-3">"Dự án này có những nhân sự nào?"</h3>
                    <Show when=move || project_error.get().is_some()>
                        <div role="alert" class="alert alert-error text-sm py-2 mb-3">
                            <span>{move || project_error.get().unwrap_or_default()}</span>
                        </div>
                    </Show>
                    <div class="flex gap-3 items-end mb-4">
                        <div class="form-control flex-1">
                            <label class="label" for="sc_project">
                                <span class="label-text">"Chọn dự án"</span>
                            </label>
                            <select
                                id="sc_project"
                                class="select select-bordered w-full"
                                on:change=move |ev| {
                                    selected_project.set(event_target_value(&ev));
                                    project_result.set(None);
                                }
                            >
                                <option value="" selected=move || selected_project.get().is_empty()>
                                    "-- Chọn dự án --"
                                </option>
                                <For
                                    each=move || projects.items.get()
                                    key=|p| p.id
                                    children=move |project: Project| {
                                        let value = project.id.to_string();
                                        let label = format!("{} - {}", project.code, project.name);
                                        let selected = {
                                            let value = value.clone();
                                            move || selected_project.get() == value
                                        };
                                        view! {
                                            <option value=value.clone() selected=selected>{label}</option>
                                        }
                                    }
                                />
                            </select>
                        </div>
                        <button
                            class="btn btn-error text-error-content gap-1"
                            disabled=move || project_loading.get()
                            on:click=on_project_search
                        >
                            <Search attr:class="h-4 w-4" />
                            {move || if project_loading.get() { "Đang tìm..." } else { "Tra cứu" }}
                        </button>
                    </div>

                    <Show when=move || project_result.get().is_some()>
                        {move || {
                            // Ô chọn đổi giá trị sẽ xóa kết quả ngay trước
                            // khi khối này kịp tháo xuống.
                            let Some(project) = project_result.get() else {
                                return ().into_any();
                            };
                            let status = project.status.clone().unwrap_or_default();
                            let members = project.employees.clone().unwrap_or_default();
                            view! {
                                <div class="alert alert-info text-sm mb-3">
                                    <div>
                                        <div>
                                            <strong>"Dự án: "</strong>
                                            {format!("{} ({})", project.name, project.code)}
                                        </div>
                                        <div>
                                            <strong>"Khách hàng: "</strong>
                                            {project.client.clone().unwrap_or_else(|| "-".to_string())}
                                        </div>
                                        <div class="flex items-center gap-2">
                                            <strong>"Trạng thái: "</strong>
                                            <div class=format!("badge {}", project_status_badge(&status))>
                                                {status.clone()}
                                            </div>
                                        </div>
                                    </div>
                                </div>
                                <h4 class="font-semibold border-b border-base-200 pb-2 mb-3">
                                    {format!("Danh sách Nhân sự ({})", members.len())}
                                </h4>
                                {if members.is_empty() {
                                    view! {
                                        <EmptyNotice message="Dự án này chưa có nhân sự nào" />
                                    }
                                    .into_any()
                                } else {
                                    view! {
                                        <table class="table table-zebra w-full">
                                            <thead>
                                                <tr>
                                                    <th>"STT"</th>
                                                    <th>"Mã NV"</th>
                                                    <th>"Họ tên"</th>
                                                    <th>"Phòng ban"</th>
                                                    <th>"Vai trò"</th>
                                                    <th>"Ngày tham gia"</th>
                                                    <th>"Số chứng chỉ"</th>
                                                </tr>
                                            </thead>
                                            <tbody>
                                                {members
                                                    .iter()
                                                    .enumerate()
                                                    .map(|(index, member)| {
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
                                                            member
                                                                .pivot
                                                                .as_ref()
                                                                .and_then(|p| p.joined_date.as_deref()),
                                                        );
                                                        view! {
                                                            <tr>
                                                                <td>{index + 1}</td>
                                                                <td class="font-mono text-sm">
                                                                    {member.employee_code.clone()}
                                                                </td>
                                                                <td>{member.full_name.clone()}</td>
                                                                <td>{department}</td>
                                                                <td>{role}</td>
                                                                <td>{joined}</td>
                                                                <td>
                                                                    <div class="badge badge-info badge-outline">
                                                                        {member.certificate_count()}
                                                                    </div>
                                                                </td>
                                                            </tr>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </tbody>
                                        </table>
                                    }
                                    .into_any()
                                }}
                            }
                            .into_any()
                        }}
                    </Show>
                </Show>
            </div>
        </div>
    }
}

/// Bảng kết quả chứng chỉ dùng chung cho hai chế độ tra cứu: theo
/// loại thì hiện cột nhân viên, theo nhân sự thì hiện cột loại.
#[component]
fn CertificateResultTable(
    results: ListController<Certificate>,
    show_type: bool,
) -> impl IntoView {
    view! {
        <table class="table table-zebra w-full">
            <thead>
                <tr>
                    <th>"STT"</th>
                    {if show_type {
                        view! { <th>"Loại chứng chỉ"</th> }.into_any()
                    } else {
                        view! { <th>"Nhân viên"</th> <th>"Phòng ban"</th> }.into_any()
                    }}
                    <th>"Mã chứng chỉ"</th>
                    <th>"Nơi cấp"</th>
                    <th>"Ngày cấp"</th>
                    <th>"Ngày hết hạn"</th>
                    <th>"Trạng thái"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each={move || results.items.get().into_iter().enumerate().collect::<Vec<_>>()}
                    key=|(_, c)| c.id
                    children=move |(index, cert)| {
                        let middle = if show_type {
                            let type_name = cert
                                .certificate_type
                                .as_ref()
                                .map(|t| t.name.clone())
                                .unwrap_or_else(|| "-".to_string());
                            view! { <td>{type_name}</td> }.into_any()
                        } else {
                            let employee_name = cert
                                .employee
                                .as_ref()
                                .map(|e| e.full_name.clone())
                                .unwrap_or_else(|| "-".to_string());
                            let department = cert
                                .employee
                                .as_ref()
                                .and_then(|e| e.department.as_ref())
                                .map(|d| d.name.clone())
                                .unwrap_or_else(|| "-".to_string());
                            view! { <td>{employee_name}</td> <td>{department}</td> }.into_any()
                        };
                        view! {
                            <tr>
                                <td>{index + 1}</td>
                                {middle}
                                <td class="font-mono text-sm">{cert.certificate_number.clone()}</td>
                                <td>{cert.issued_by.clone().unwrap_or_else(|| "-".to_string())}</td>
                                <td>{display_date(cert.issued_date.as_deref())}</td>
                                <td>{display_date(cert.expiry_date.as_deref())}</td>
                                <td>
                                    <div class=format!("badge {}", cert.status.badge_class())>
                                        {cert.status.label().to_string()}
                                    </div>
                                </td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}
