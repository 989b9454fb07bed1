//! Màn hình chi tiết nhân viên
//!
//! Nạp bản ghi gộp (kèm chứng chỉ, dự án, hợp đồng lao động) theo id
//! trên route rồi hiển thị thành ba tab chỉ đọc. Ba kết cục phải phân
//! biệt rõ: đang tải, lỗi/không tìm thấy, và tải xong nhưng tab rỗng.

use leptos::prelude::*;
use leptos::task::spawn_local;

use qlns_shared::date::{display_date, display_vnd};
use qlns_shared::status::project_status_badge;
use qlns_shared::{Certificate, Employee, EmploymentContract, Project};

use crate::api::{QlnsApi, storage_file_url};
use crate::components::icons::*;
use crate::components::ui::{EmptyNotice, PageSpinner};
use crate::web::route::AppRoute;
use crate::web::router::use_router;

#[derive(Clone, Copy, PartialEq, Eq)]
enum DetailTab {
    Certificates,
    Projects,
    Contracts,
}

#[component]
pub fn EmployeeDetailPage(id: i64) -> impl IntoView {
    let router = use_router();

    let employee = RwSignal::new(Option::<Employee>::None);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(Option::<String>::None);
    let active_tab = RwSignal::new(DetailTab::Certificates);

    Effect::new(move |_| {
        spawn_local(async move {
            match QlnsApi::new().get_employee(id).await {
                Ok(record) => {
                    let _ = employee.try_set(Some(record));
                }
                Err(err) => {
                    let _ = error.try_set(Some(err.to_string()));
                }
            }
            let _ = loading.try_set(false);
        });
    });

    let certificates = move || {
        employee
            .get()
            .and_then(|e| e.certificates)
            .unwrap_or_default()
    };
    let projects = move || employee.get().and_then(|e| e.projects).unwrap_or_default();
    let contracts = move || employee.get().and_then(|e| e.contracts).unwrap_or_default();

    let tab_class = move |tab: DetailTab| {
        if active_tab.get() == tab {
            "tab tab-active font-semibold"
        } else {
            "tab"
        }
    };

    view! {
        <button
            class="btn btn-ghost btn-sm mb-4 gap-2"
            on:click=move |_| router.navigate(AppRoute::Employees)
        >
            <ArrowLeft attr:class="h-4 w-4" />
            "Quay lại"
        </button>

        <Show when=move || loading.get()>
            <PageSpinner />
        </Show>

        <Show when=move || !loading.get() && employee.get().is_none()>
            <div role="alert" class="alert alert-error">
                <span>
                    {move || error.get().unwrap_or_else(|| "Không tìm thấy nhân viên".to_string())}
                </span>
            </div>
        </Show>

        <Show when=move || employee.get().is_some()>
            {move || {
                let record = employee.get().unwrap();
                let department = record
                    .department
                    .as_ref()
                    .map(|d| d.name.clone())
                    .unwrap_or_else(|| "-".to_string());
                view! {
                    <div class="card bg-base-100 shadow-xl mb-4">
                        <div class="card-body">
                            <h2 class="card-title text-error mb-2">
                                <UserRound attr:class="h-5 w-5" />
                                "Thông tin Nhân sự"
                            </h2>
                            <div class="grid grid-cols-2 gap-x-8 gap-y-1 text-sm">
                                <InfoRow label="Họ tên" value=record.full_name.clone() />
                                <InfoRow label="Phòng ban" value=department />
                                <InfoRow label="Mã nhân viên" value=record.employee_code.clone() />
                                <InfoRow
                                    label="Chức vụ"
                                    value=record.position.clone().unwrap_or_else(|| "-".to_string())
                                />
                                <InfoRow
                                    label="Email"
                                    value=record.email.clone().unwrap_or_else(|| "-".to_string())
                                />
                                <div class="flex py-1">
                                    <div class="w-40 text-base-content/60">"Trạng thái:"</div>
                                    <div class=format!("badge {}", record.status.badge_class())>
                                        {record.status.label().to_string()}
                                    </div>
                                </div>
                                <InfoRow
                                    label="Số điện thoại"
                                    value=record.phone.clone().unwrap_or_else(|| "-".to_string())
                                />
                                <InfoRow
                                    label="Địa chỉ"
                                    value=record.address.clone().unwrap_or_else(|| "-".to_string())
                                />
                            </div>
                        </div>
                    </div>
                }
            }}

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <div role="tablist" class="tabs tabs-bordered mb-4">
                        <a
                            role="tab"
                            class=move || tab_class(DetailTab::Certificates)
                            on:click=move |_| active_tab.set(DetailTab::Certificates)
                        >
                            {move || format!("Chứng chỉ ({})", certificates().len())}
                        </a>
                        <a
                            role="tab"
                            class=move || tab_class(DetailTab::Projects)
                            on:click=move |_| active_tab.set(DetailTab::Projects)
                        >
                            {move || format!("Dự án tham gia ({})", projects().len())}
                        </a>
                        <a
                            role="tab"
                            class=move || tab_class(DetailTab::Contracts)
                            on:click=move |_| active_tab.set(DetailTab::Contracts)
                        >
                            {move || format!("Hợp đồng ({})", contracts().len())}
                        </a>
                    </div>

                    {move || match active_tab.get() {
                        DetailTab::Certificates => {
                            view! { <CertificateTab certificates=certificates() /> }.into_any()
                        }
                        DetailTab::Projects => {
                            view! { <ProjectTab projects=projects() /> }.into_any()
                        }
                        DetailTab::Contracts => {
                            view! { <ContractTab contracts=contracts() /> }.into_any()
                        }
                    }}
                </div>
            </div>
        </Show>
    }
}

#[component]
fn InfoRow(#[prop(into)] label: String, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="flex py-1">
            <div class="w-40 text-base-content/60">{format!("{label}:")}</div>
            <div class="font-medium">{value}</div>
        </div>
    }
}

#[component]
fn CertificateTab(certificates: Vec<Certificate>) -> impl IntoView {
    if certificates.is_empty() {
        return view! { <EmptyNotice message="Nhân viên này chưa có chứng chỉ nào" /> }.into_any();
    }

    view! {
        <div class="overflow-x-auto">
            <table class="table table-zebra w-full">
                <thead>
                    <tr>
                        <th>"STT"</th>
                        <th>"Loại chứng chỉ"</th>
                        <th>"Mã chứng chỉ"</th>
                        <th>"Nơi cấp"</th>
                        <th>"Ngày cấp"</th>
                        <th>"Ngày hết hạn"</th>
                        <th>"Trạng thái"</th>
                        <th>"File"</th>
                    </tr>
                </thead>
                <tbody>
                    {certificates
                        .into_iter()
                        .enumerate()
                        .map(|(index, cert)| {
                            let type_name = cert
                                .certificate_type
                                .as_ref()
                                .map(|t| t.name.clone())
                                .unwrap_or_else(|| "-".to_string());
                            view! {
                                <tr>
                                    <td>{index + 1}</td>
                                    <td>{type_name}</td>
                                    <td class="font-mono text-sm">{cert.certificate_number.clone()}</td>
                                    <td>{cert.issued_by.clone().unwrap_or_else(|| "-".to_string())}</td>
                                    <td>{display_date(cert.issued_date.as_deref())}</td>
                                    <td>{display_date(cert.expiry_date.as_deref())}</td>
                                    <td>
                                        <div class=format!("badge {}", cert.status.badge_class())>
                                            {cert.status.label().to_string()}
                                        </div>
                                    </td>
                                    <td>
                                        {match cert.file_path.as_deref() {
                                            Some(path) => view! {
                                                <a
                                                    class="btn btn-ghost btn-xs gap-1"
                                                    href=storage_file_url(path)
                                                    target="_blank"
                                                >
                                                    <Download attr:class="h-3 w-3" />
                                                    "Tải xuống"
                                                </a>
                                            }
                                            .into_any(),
                                            None => view! {
                                                <span class="text-base-content/40">"Không có file"</span>
                                            }
                                            .into_any(),
                                        }}
                                    </td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>
        </div>
    }
    .into_any()
}

#[component]
fn ProjectTab(projects: Vec<Project>) -> impl IntoView {
    if projects.is_empty() {
        return view! { <EmptyNotice message="Nhân viên này chưa tham gia dự án nào" /> }
            .into_any();
    }

    view! {
        <div class="overflow-x-auto">
            <table class="table table-zebra w-full">
                <thead>
                    <tr>
                        <th>"STT"</th>
                        <th>"Mã dự án"</th>
                        <th>"Tên dự án"</th>
                        <th>"Khách hàng"</th>
                        <th>"Vai trò"</th>
                        <th>"Ngày tham gia"</th>
                        <th>"Trạng thái"</th>
                    </tr>
                </thead>
                <tbody>
                    {projects
                        .into_iter()
                        .enumerate()
                        .map(|(index, project)| {
                            let role = project
                                .pivot
                                .as_ref()
                                .and_then(|p| p.role.clone())
                                .unwrap_or_else(|| "-".to_string());
                            let joined = display_date(
                                project.pivot.as_ref().and_then(|p| p.joined_date.as_deref()),
                            );
                            let status = project.status.clone().unwrap_or_default();
                            view! {
                                <tr>
                                    <td>{index + 1}</td>
                                    <td class="font-mono text-sm">{project.code.clone()}</td>
                                    <td>{project.name.clone()}</td>
                                    <td>{project.client.clone().unwrap_or_else(|| "-".to_string())}</td>
                                    <td>{role}</td>
                                    <td>{joined}</td>
                                    <td>
                                        <div class=format!("badge {}", project_status_badge(&status))>
                                            {status.clone()}
                                        </div>
                                    </td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>
        </div>
    }
    .into_any()
}

#[component]
fn ContractTab(contracts: Vec<EmploymentContract>) -> impl IntoView {
    if contracts.is_empty() {
        return view! { <EmptyNotice message="Nhân viên này chưa có hợp đồng nào" /> }.into_any();
    }

    view! {
        <div class="overflow-x-auto">
            <table class="table table-zebra w-full">
                <thead>
                    <tr>
                        <th>"STT"</th>
                        <th>"Số hợp đồng"</th>
                        <th>"Loại hợp đồng"</th>
                        <th>"Ngày bắt đầu"</th>
                        <th>"Ngày kết thúc"</th>
                        <th>"Lương"</th>
                        <th>"Trạng thái"</th>
                    </tr>
                </thead>
                <tbody>
                    {contracts
                        .into_iter()
                        .enumerate()
                        .map(|(index, contract)| {
                            let active = contract.status.as_deref() == Some("active");
                            view! {
                                <tr>
                                    <td>{index + 1}</td>
                                    <td class="font-mono text-sm">{contract.contract_number.clone()}</td>
                                    <td>{contract.contract_type.clone().unwrap_or_else(|| "-".to_string())}</td>
                                    <td>{display_date(contract.start_date.as_deref())}</td>
                                    <td>{display_date(contract.end_date.as_deref())}</td>
                                    <td>{display_vnd(contract.salary)}</td>
                                    <td>
                                        <div class=if active { "badge badge-success" } else { "badge badge-ghost" }>
                                            {if active { "Còn hiệu lực" } else { "Hết hiệu lực" }}
                                        </div>
                                    </td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>
        </div>
    }
    .into_any()
}
