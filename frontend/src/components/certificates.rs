//! Màn hình quản lý chứng chỉ
//!
//! Bảng loại chứng chỉ với dòng mở rộng tải lười danh sách chứng chỉ
//! của từng loại, nút lọc theo trạng thái (backend đã tính sẵn, client
//! chỉ lọc nhãn), thẻ thống kê sắp hết hạn / đã hết hạn, và hai modal
//! CRUD cho loại chứng chỉ lẫn chứng chỉ.

mod certificate_dialog;
mod form_state;
mod type_dialog;

use std::collections::HashMap;

use leptos::prelude::*;
use leptos::task::spawn_local;

use qlns_shared::date::display_date;
use qlns_shared::status::StatusFilter;
use qlns_shared::{Certificate, CertificateStatus, CertificateType, Employee};

use self::certificate_dialog::CertificateDialog;
use self::form_state::{CertificateForm, TypeForm};
use self::type_dialog::TypeDialog;

use crate::api::QlnsApi;
use crate::components::icons::*;
use crate::components::ui::{EmptyNotice, ErrorAlert, PageSpinner, SuccessToast};
use crate::controller::{DialogState, ListController};
use crate::web::dom;

#[component]
pub fn CertificateListPage() -> impl IntoView {
    let types = ListController::<CertificateType>::new();
    let employees = ListController::<Employee>::new();
    let type_dialog = DialogState::<CertificateType>::new();
    let cert_dialog = DialogState::<Certificate>::new();
    let type_form = TypeForm::new();
    let cert_form = CertificateForm::new();

    let toast = RwSignal::new(Option::<String>::None);
    let status_filter = RwSignal::new(StatusFilter::All);
    let expanded = RwSignal::new(Option::<i64>::None);
    let certs_by_type = RwSignal::new(HashMap::<i64, Vec<Certificate>>::new());
    let loading_type = RwSignal::new(Option::<i64>::None);
    let type_epoch = StoredValue::new(0u64);
    let overview = RwSignal::new(Option::<(usize, usize, usize)>::None);
    // Loại chứng chỉ mà modal chứng chỉ đang thao tác.
    let cert_dialog_type = RwSignal::new(Option::<i64>::None);

    let reload_types = move || {
        types.load(async move { QlnsApi::new().list_certificate_types().await });
    };

    let load_overview = move || {
        spawn_local(async move {
            let api = QlnsApi::new();
            let all = api.list_certificates(None).await;
            let expiring = api.expiring_certificates().await;
            let expired = api.expired_certificates().await;
            if let (Ok(all), Ok(expiring), Ok(expired)) = (all, expiring, expired) {
                let _ = overview.try_set(Some((all.len(), expiring.len(), expired.len())));
            }
        });
    };

    // Tải chứng chỉ của một loại; kết quả về muộn của lần bấm trước
    // bị bỏ qua theo số thứ tự yêu cầu.
    let load_type_certs = move |type_id: i64| {
        let issued = type_epoch.get_value() + 1;
        type_epoch.set_value(issued);
        loading_type.set(Some(type_id));
        spawn_local(async move {
            let result = QlnsApi::new().certificates_by_type(type_id).await;
            if type_epoch.try_get_value() != Some(issued) {
                return;
            }
            match result {
                Ok(list) => {
                    let _ = certs_by_type.try_update(|map| {
                        map.insert(type_id, list.into_items());
                    });
                }
                Err(err) => {
                    let _ = types.error.try_set(Some(err.to_string()));
                }
            }
            let _ = loading_type.try_set(None);
        });
    };

    Effect::new(move |_| {
        reload_types();
        employees.load(async move { QlnsApi::new().list_employees().await });
        load_overview();
    });

    let on_type_click = move |type_id: i64| {
        if expanded.get_untracked() == Some(type_id) {
            expanded.set(None);
            return;
        }
        expanded.set(Some(type_id));
        if !certs_by_type.with_untracked(|map| map.contains_key(&type_id)) {
            load_type_certs(type_id);
        }
    };

    let stats_for = move |type_id: i64| {
        certs_by_type.with(|map| {
            map.get(&type_id).map(|certs| {
                let valid = certs
                    .iter()
                    .filter(|c| c.status == CertificateStatus::Valid)
                    .count();
                let expiring = certs
                    .iter()
                    .filter(|c| c.status == CertificateStatus::ExpiringSoon)
                    .count();
                let expired = certs
                    .iter()
                    .filter(|c| c.status == CertificateStatus::Expired)
                    .count();
                (certs.len(), valid, expiring, expired)
            })
        })
    };

    let open_type_create = move |_| {
        type_form.reset();
        type_dialog.open_create();
    };
    let open_type_edit = move |record: CertificateType| {
        type_form.fill(&record);
        type_dialog.open_edit(record);
    };
    let on_type_delete = move |record: CertificateType| {
        if !dom::confirm("Bạn có chắc muốn xóa loại chứng chỉ này?") {
            return;
        }
        spawn_local(async move {
            match QlnsApi::new().delete_certificate_type(record.id).await {
                Ok(()) => {
                    let _ = toast.try_set(Some("Đã xóa loại chứng chỉ".to_string()));
                    let _ = certs_by_type.try_update(|map| {
                        map.remove(&record.id);
                    });
                    reload_types();
                    load_overview();
                }
                Err(err) => {
                    let _ = types.error.try_set(Some(err.to_string()));
                }
            }
        });
    };

    let open_cert_create = move |type_id: i64| {
        cert_form.reset_for_type(type_id);
        cert_dialog_type.set(Some(type_id));
        cert_dialog.open_create();
    };
    let open_cert_edit = move |type_id: i64, record: Certificate| {
        cert_form.fill(&record);
        cert_dialog_type.set(Some(type_id));
        cert_dialog.open_edit(record);
    };
    let on_cert_delete = move |type_id: i64, record: Certificate| {
        if !dom::confirm("Bạn có chắc muốn xóa chứng chỉ này?") {
            return;
        }
        spawn_local(async move {
            match QlnsApi::new().delete_certificate(record.id).await {
                Ok(()) => {
                    let _ = toast.try_set(Some("Đã xóa chứng chỉ".to_string()));
                    load_type_certs(type_id);
                    load_overview();
                }
                Err(err) => {
                    let _ = types.error.try_set(Some(err.to_string()));
                }
            }
        });
    };

    let on_type_saved = Callback::new(move |_| {
        let _ = toast.try_set(Some("Đã lưu loại chứng chỉ".to_string()));
        reload_types();
    });
    let on_cert_saved = Callback::new(move |_| {
        let _ = toast.try_set(Some("Đã lưu chứng chỉ".to_string()));
        if let Some(type_id) = cert_dialog_type.get_untracked() {
            load_type_certs(type_id);
        }
        load_overview();
    });

    let filter_btn_class = move |choice: StatusFilter, active: &'static str| {
        move || {
            if status_filter.get() == choice {
                format!("btn btn-sm {active}")
            } else {
                "btn btn-sm btn-outline".to_string()
            }
        }
    };

    view! {
        <SuccessToast message=toast />

        // Thẻ thống kê nhanh toàn hệ thống
        <Show when=move || overview.get().is_some()>
            <div class="stats shadow w-full bg-base-100 mb-4">
                <div class="stat">
                    <div class="stat-title">"Tổng chứng chỉ"</div>
                    <div class="stat-value text-primary">
                        {move || overview.get().map(|(total, _, _)| total).unwrap_or(0)}
                    </div>
                </div>
                <div class="stat">
                    <div class="stat-title">"Sắp hết hạn"</div>
                    <div class="stat-value text-warning">
                        {move || overview.get().map(|(_, expiring, _)| expiring).unwrap_or(0)}
                    </div>
                </div>
                <div class="stat">
                    <div class="stat-title">"Đã hết hạn"</div>
                    <div class="stat-value text-error">
                        {move || overview.get().map(|(_, _, expired)| expired).unwrap_or(0)}
                    </div>
                </div>
            </div>
        </Show>

        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <div class="flex items-center justify-between mb-2">
                    <h2 class="card-title">"Quản lý Chứng chỉ"</h2>
                    <button class="btn btn-error btn-sm text-error-content gap-1" on:click=open_type_create>
                        <Plus attr:class="h-4 w-4" />
                        "Thêm Loại Chứng chỉ"
                    </button>
                </div>

                <ErrorAlert error=types.error />

                // Lọc theo trạng thái (áp lên các bảng con đã tải)
                <div class="flex gap-2 mb-3">
                    <button
                        class=filter_btn_class(StatusFilter::All, "btn-error text-error-content")
                        on:click=move |_| status_filter.set(StatusFilter::All)
                    >
                        "Tất cả"
                    </button>
                    <button
                        class=filter_btn_class(StatusFilter::Valid, "btn-success")
                        on:click=move |_| status_filter.set(StatusFilter::Valid)
                    >
                        "Còn hạn"
                    </button>
                    <button
                        class=filter_btn_class(StatusFilter::Expiring, "btn-warning")
                        on:click=move |_| status_filter.set(StatusFilter::Expiring)
                    >
                        "Sắp hết hạn"
                    </button>
                    <button
                        class=filter_btn_class(StatusFilter::Expired, "btn-error text-error-content")
                        on:click=move |_| status_filter.set(StatusFilter::Expired)
                    >
                        "Hết hạn"
                    </button>
                </div>

                <Show
                    when=move || !types.loading.get() || !types.is_empty()
                    fallback=|| view! { <PageSpinner /> }
                >
                    <div class="overflow-x-auto">
                        <table class="table w-full">
                            <thead>
                                <tr>
                                    <th>"STT"</th>
                                    <th>"Loại Chứng chỉ"</th>
                                    <th>"Mô tả"</th>
                                    <th>"Thời hạn"</th>
                                    <th>"Thống kê"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                <Show when=move || types.is_empty() && !types.loading.get()>
                                    <tr>
                                        <td colspan="6" class="text-center py-8 text-base-content/50">
                                            "Chưa có loại chứng chỉ nào"
                                        </td>
                                    </tr>
                                </Show>
                                <For
                                    each={move || types.items.get().into_iter().enumerate().collect::<Vec<_>>()}
                                    key=|(_, t)| t.id
                                    children=move |(index, certificate_type)| {
                                        let type_id = certificate_type.id;
                                        let edit_target = certificate_type.clone();
                                        let delete_target = certificate_type.clone();
                                        let is_expanded = move || expanded.get() == Some(type_id);
                                        view! {
                                            <tr
                                                class="cursor-pointer hover"
                                                on:click=move |_| on_type_click(type_id)
                                            >
                                                <td>{index + 1}</td>
                                                <td>
                                                    <div class="flex items-center gap-2 font-semibold text-error">
                                                        {move || if is_expanded() {
                                                            view! { <ChevronUp attr:class="h-4 w-4" /> }.into_any()
                                                        } else {
                                                            view! { <ChevronDown attr:class="h-4 w-4" /> }.into_any()
                                                        }}
                                                        {certificate_type.name.clone()}
                                                    </div>
                                                </td>
                                                <td class="text-sm text-base-content/60">
                                                    {certificate_type
                                                        .description
                                                        .clone()
                                                        .unwrap_or_else(|| "-".to_string())}
                                                </td>
                                                <td>
                                                    {certificate_type
                                                        .validity_period
                                                        .map(|months| format!("{months} tháng"))
                                                        .unwrap_or_else(|| "-".to_string())}
                                                </td>
                                                <td>
                                                    {move || match stats_for(type_id) {
                                                        Some((total, valid, expiring, expired)) => view! {
                                                            <div class="flex gap-1 flex-wrap">
                                                                <div class="badge badge-primary">{format!("{total} tổng")}</div>
                                                                <div class="badge badge-success">{format!("{valid} còn hạn")}</div>
                                                                <div class="badge badge-warning">{format!("{expiring} sắp hết")}</div>
                                                                <div class="badge badge-error">{format!("{expired} hết hạn")}</div>
                                                            </div>
                                                        }
                                                        .into_any(),
                                                        None => view! {
                                                            <span class="text-base-content/40 text-sm">
                                                                "Bấm để xem"
                                                            </span>
                                                        }
                                                        .into_any(),
                                                    }}
                                                </td>
                                                <td>
                                                    <div class="flex gap-1">
                                                        <button
                                                            class="btn btn-ghost btn-xs"
                                                            title="Thêm chứng chỉ"
                                                            on:click=move |ev: web_sys::MouseEvent| {
                                                                ev.stop_propagation();
                                                                open_cert_create(type_id);
                                                            }
                                                        >
                                                            <Plus attr:class="h-4 w-4" />
                                                        </button>
                                                        <button
                                                            class="btn btn-ghost btn-xs"
                                                            title="Sửa loại chứng chỉ"
                                                            on:click=move |ev: web_sys::MouseEvent| {
                                                                ev.stop_propagation();
                                                                open_type_edit(edit_target.clone());
                                                            }
                                                        >
                                                            <Pencil attr:class="h-4 w-4" />
                                                        </button>
                                                        <button
                                                            class="btn btn-ghost btn-xs text-error"
                                                            title="Xóa loại chứng chỉ"
                                                            on:click=move |ev: web_sys::MouseEvent| {
                                                                ev.stop_propagation();
                                                                on_type_delete(delete_target.clone());
                                                            }
                                                        >
                                                            <Trash2 attr:class="h-4 w-4" />
                                                        </button>
                                                    </div>
                                                </td>
                                            </tr>
                                            <Show when=is_expanded>
                                                <tr>
                                                    <td colspan="6" class="bg-base-200 p-4">
                                                        <TypeCertificates
                                                            type_id=type_id
                                                            certs_by_type=certs_by_type
                                                            loading_type=loading_type
                                                            status_filter=status_filter
                                                            on_edit=open_cert_edit
                                                            on_delete=on_cert_delete
                                                        />
                                                    </td>
                                                </tr>
                                            </Show>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </div>
                </Show>
            </div>
        </div>

        <TypeDialog dialog=type_dialog form=type_form on_saved=on_type_saved />
        <CertificateDialog
            dialog=cert_dialog
            form=cert_form
            employees=employees
            on_saved=on_cert_saved
        />
    }
}

/// Bảng chứng chỉ của một loại trong dòng mở rộng.
#[component]
fn TypeCertificates<E, D>(
    type_id: i64,
    certs_by_type: RwSignal<HashMap<i64, Vec<Certificate>>>,
    loading_type: RwSignal<Option<i64>>,
    status_filter: RwSignal<StatusFilter>,
    on_edit: E,
    on_delete: D,
) -> impl IntoView
where
    E: Fn(i64, Certificate) + Copy + Send + Sync + 'static,
    D: Fn(i64, Certificate) + Copy + Send + Sync + 'static,
{
    let filtered = Memo::new(move |_| {
        let filter = status_filter.get();
        certs_by_type.with(|map| {
            map.get(&type_id)
                .map(|certs| {
                    certs
                        .iter()
                        .filter(|c| filter.keeps(&c.status))
                        .cloned()
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default()
        })
    });

    let empty_message = move || match status_filter.get() {
        StatusFilter::All => "Chưa có nhân viên nào có chứng chỉ này".to_string(),
        StatusFilter::Valid => "Không có chứng chỉ còn hạn".to_string(),
        StatusFilter::Expiring => "Không có chứng chỉ sắp hết hạn".to_string(),
        StatusFilter::Expired => "Không có chứng chỉ hết hạn".to_string(),
    };

    view! {
        <Show
            when=move || loading_type.get() != Some(type_id)
            fallback=|| view! {
                <div class="text-center py-4">
                    <span class="loading loading-spinner loading-sm text-error"></span>
                </div>
            }
        >
            <Show
                when=move || !filtered.get().is_empty()
                fallback=move || view! { <EmptyNotice message=empty_message() /> }
            >
                <table class="table table-sm w-full bg-base-100 rounded-box">
                    <thead>
                        <tr>
                            <th>"STT"</th>
                            <th>"Nhân viên"</th>
                            <th>"Phòng ban"</th>
                            <th>"Số chứng chỉ"</th>
                            <th>"Nơi cấp"</th>
                            <th>"Ngày cấp"</th>
                            <th>"Ngày hết hạn"</th>
                            <th>"Trạng thái"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each={move || filtered.get().into_iter().enumerate().collect::<Vec<_>>()}
                            key=|(_, c)| c.id
                            children=move |(index, cert)| {
                                let edit_target = cert.clone();
                                let delete_target = cert.clone();
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
                                view! {
                                    <tr>
                                        <td>{index + 1}</td>
                                        <td>{employee_name}</td>
                                        <td>{department}</td>
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
                                            <div class="flex gap-1">
                                                <button
                                                    class="btn btn-ghost btn-xs"
                                                    on:click=move |_| on_edit(type_id, edit_target.clone())
                                                >
                                                    <Pencil attr:class="h-3 w-3" />
                                                </button>
                                                <button
                                                    class="btn btn-ghost btn-xs text-error"
                                                    on:click=move |_| on_delete(type_id, delete_target.clone())
                                                >
                                                    <Trash2 attr:class="h-3 w-3" />
                                                </button>
                                            </div>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </Show>
    }
}
