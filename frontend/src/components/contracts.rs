//! Màn hình danh sách hợp đồng đối tác
//!
//! Phân trang do server điều khiển (tham số `page`, số thứ tự tuyệt
//! đối theo trang), bộ lọc chạy phía client trên trang đã tải, cộng
//! xuất/nhập Excel và modal thêm/sửa.

use leptos::prelude::*;
use leptos::task::spawn_local;

use qlns_shared::absolute_index;
use qlns_shared::date::{display_date, display_vnd, parse_date};
use qlns_shared::filter::ContractFilter;
use qlns_shared::status::{condition_status_badge, contract_status_badge};
use qlns_shared::validate::{join_messages, none_if_empty, require_non_empty};
use qlns_shared::{ContractPayload, PartnerContract};

use crate::api::QlnsApi;
use crate::components::icons::*;
use crate::components::ui::{ErrorAlert, ModalShell, PageSpinner, SuccessToast};
use crate::controller::{DialogState, ListController};
use crate::web::dom;
use crate::web::route::AppRoute;
use crate::web::router::use_router;

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

#[derive(Clone, Copy)]
struct ContractForm {
    contract_number: RwSignal<String>,
    classification: RwSignal<String>,
    industry: RwSignal<String>,
    project_name: RwSignal<String>,
    signing_date: RwSignal<String>,
    start_date: RwSignal<String>,
    end_date: RwSignal<String>,
    contract_value: RwSignal<String>,
    adjusted_value: RwSignal<String>,
    investor: RwSignal<String>,
    contract_status: RwSignal<String>,
    condition_status: RwSignal<String>,
    notes: RwSignal<String>,
}

impl ContractForm {
    fn new() -> Self {
        Self {
            contract_number: RwSignal::new(String::new()),
            classification: RwSignal::new(String::new()),
            industry: RwSignal::new(String::new()),
            project_name: RwSignal::new(String::new()),
            signing_date: RwSignal::new(String::new()),
            start_date: RwSignal::new(String::new()),
            end_date: RwSignal::new(String::new()),
            contract_value: RwSignal::new(String::new()),
            adjusted_value: RwSignal::new(String::new()),
            investor: RwSignal::new(String::new()),
            contract_status: RwSignal::new(String::new()),
            condition_status: RwSignal::new(String::new()),
            notes: RwSignal::new(String::new()),
        }
    }

    fn reset(&self) {
        self.fill(&PartnerContract::default());
    }

    fn fill(&self, contract: &PartnerContract) {
        self.contract_number.set(contract.contract_number.clone());
        self.classification
            .set(contract.classification.clone().unwrap_or_default());
        self.industry.set(contract.industry.clone().unwrap_or_default());
        self.project_name
            .set(contract.project_name.clone().unwrap_or_default());
        self.signing_date
            .set(contract.signing_date.clone().unwrap_or_default());
        self.start_date.set(contract.start_date.clone().unwrap_or_default());
        self.end_date.set(contract.end_date.clone().unwrap_or_default());
        self.contract_value.set(
            contract
                .contract_value
                .map(|v| v.to_string())
                .unwrap_or_default(),
        );
        self.adjusted_value.set(
            contract
                .adjusted_value
                .map(|v| v.to_string())
                .unwrap_or_default(),
        );
        self.investor.set(contract.investor.clone().unwrap_or_default());
        self.contract_status
            .set(contract.contract_status.clone().unwrap_or_default());
        self.condition_status
            .set(contract.condition_status.clone().unwrap_or_default());
        self.notes.set(contract.notes.clone().unwrap_or_default());
    }

    fn validate(&self) -> Result<ContractPayload, String> {
        let contract_number = self.contract_number.get_untracked();
        let start_date = self.start_date.get_untracked();

        require_non_empty(&[
            ("Số hợp đồng", &contract_number),
            ("Ngày hiệu lực", &start_date),
        ])
        .map_err(|errors| join_messages(&errors))?;

        let contract_value = parse_money(&self.contract_value.get_untracked(), "Giá trị hợp đồng")?;
        let adjusted_value =
            parse_money(&self.adjusted_value.get_untracked(), "Giá trị sau thuế")?;

        Ok(ContractPayload {
            contract_number: contract_number.trim().to_string(),
            classification: none_if_empty(&self.classification.get_untracked()),
            industry: none_if_empty(&self.industry.get_untracked()),
            project_name: none_if_empty(&self.project_name.get_untracked()),
            signing_date: none_if_empty(&self.signing_date.get_untracked()),
            start_date: start_date.trim().to_string(),
            end_date: none_if_empty(&self.end_date.get_untracked()),
            contract_value,
            adjusted_value,
            investor: none_if_empty(&self.investor.get_untracked()),
            contract_status: none_if_empty(&self.contract_status.get_untracked()),
            condition_status: none_if_empty(&self.condition_status.get_untracked()),
            notes: none_if_empty(&self.notes.get_untracked()),
        })
    }
}

fn parse_money(raw: &str, label: &str) -> Result<Option<f64>, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(|_| format!("{label} không hợp lệ"))
}

#[component]
pub fn ContractListPage() -> impl IntoView {
    let router = use_router();

    let contracts = ListController::<PartnerContract>::new();
    let dialog = DialogState::<PartnerContract>::new();
    let form = ContractForm::new();
    let toast = RwSignal::new(Option::<String>::None);
    let exporting = RwSignal::new(false);
    let import_ref = NodeRef::<leptos::html::Input>::new();

    let page = RwSignal::new(1u32);
    let load_page = move |target: u32| {
        page.set(target);
        contracts.load(async move { QlnsApi::new().list_contracts(target).await });
    };
    Effect::new(move |_| load_page(1));
    let reload = move || load_page(page.get_untracked());

    // Bộ lọc phía client, áp lên trang hiện tại.
    let f_number = RwSignal::new(String::new());
    let f_industry = RwSignal::new(String::new());
    let f_project = RwSignal::new(String::new());
    let f_start_from = RwSignal::new(String::new());
    let f_start_to = RwSignal::new(String::new());
    let f_end_from = RwSignal::new(String::new());
    let f_end_to = RwSignal::new(String::new());

    let filter = Memo::new(move |_| ContractFilter {
        contract_number: f_number.get(),
        industry: f_industry.get(),
        project_name: f_project.get(),
        start_from: parse_date(&f_start_from.get()),
        start_to: parse_date(&f_start_to.get()),
        end_from: parse_date(&f_end_from.get()),
        end_to: parse_date(&f_end_to.get()),
    });

    let filtered = Memo::new(move |_| {
        let filter = filter.get();
        contracts
            .items
            .get()
            .into_iter()
            .enumerate()
            .filter(|(_, c)| filter.matches(c))
            .collect::<Vec<_>>()
    });

    let open_create = move |_| {
        form.reset();
        dialog.open_create();
    };
    let open_edit = move |contract: PartnerContract| {
        form.fill(&contract);
        dialog.open_edit(contract);
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
                Some(contract) => api.update_contract(contract.id, &payload).await,
                None => api.create_contract(&payload).await,
            };
            match result {
                Ok(()) => {
                    dialog.close();
                    let _ = toast.try_set(Some("Đã lưu hợp đồng".to_string()));
                    reload();
                }
                Err(err) => {
                    let _ = dialog.error.try_set(Some(err.to_string()));
                    let _ = dialog.busy.try_set(false);
                }
            }
        });
    };

    let on_delete = move |contract: PartnerContract| {
        if !dom::confirm("Bạn có chắc muốn xóa hợp đồng này?") {
            return;
        }
        spawn_local(async move {
            match QlnsApi::new().delete_contract(contract.id).await {
                Ok(()) => {
                    let _ = toast.try_set(Some("Đã xóa hợp đồng".to_string()));
                    reload();
                }
                Err(err) => {
                    let _ = contracts.error.try_set(Some(err.to_string()));
                }
            }
        });
    };

    let on_export = move |_| {
        exporting.set(true);
        spawn_local(async move {
            match QlnsApi::new().export_contracts().await {
                Ok(bytes) => {
                    let filename = format!("hop_dong_{}.xlsx", dom::today_stamp());
                    match dom::trigger_download(&bytes, &filename, XLSX_MIME) {
                        Ok(()) => {
                            let _ = toast.try_set(Some("Xuất file Excel thành công!".to_string()));
                        }
                        Err(_) => {
                            let _ = contracts
                                .error
                                .try_set(Some("Không tạo được file tải về".to_string()));
                        }
                    }
                }
                Err(err) => {
                    let _ = contracts.error.try_set(Some(err.to_string()));
                }
            }
            let _ = exporting.try_set(false);
        });
    };

    let on_import = move |_ev: web_sys::Event| {
        let Some(input) = import_ref.get_untracked() else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        spawn_local(async move {
            match QlnsApi::new().import_contracts(&file).await {
                Ok(()) => {
                    let _ = toast.try_set(Some("Import file Excel thành công!".to_string()));
                    reload();
                }
                Err(err) => {
                    let _ = contracts.error.try_set(Some(err.to_string()));
                }
            }
            // Cho phép chọn lại đúng file đó lần sau.
            input.set_value("");
        });
    };

    let modal_title = Signal::derive(move || {
        if dialog.editing.get().is_some() {
            "Sửa Hợp đồng".to_string()
        } else {
            "Thêm Hợp đồng".to_string()
        }
    });

    view! {
        <SuccessToast message=toast />

        <div class="flex items-center justify-between mb-4">
            <h2 class="text-xl font-bold text-error">"Danh sách Hợp đồng"</h2>
            <div class="flex gap-2">
                <button
                    class="btn btn-error btn-sm text-error-content gap-1"
                    disabled=move || exporting.get()
                    on:click=on_export
                >
                    <FileSpreadsheet attr:class="h-4 w-4" />
                    {move || if exporting.get() { "Đang xuất..." } else { "Xuất file" }}
                </button>
                <input
                    type="file"
                    class="hidden"
                    accept=".xlsx,.xls,.csv"
                    node_ref=import_ref
                    on:change=on_import
                />
                <button
                    class="btn btn-success btn-sm gap-1"
                    on:click=move |_| {
                        if let Some(input) = import_ref.get_untracked() {
                            input.click();
                        }
                    }
                >
                    <Upload attr:class="h-4 w-4" />
                    "Import Excel"
                </button>
                <button class="btn btn-error btn-sm text-error-content gap-1" on:click=open_create>
                    <Plus attr:class="h-4 w-4" />
                    "Thêm mới"
                </button>
            </div>
        </div>

        <ErrorAlert error=contracts.error />

        // Thanh lọc
        <div class="bg-base-100 rounded-box shadow p-4 mb-4">
            <div class="grid grid-cols-4 gap-3">
                <div class="form-control">
                    <label class="label py-1">
                        <span class="label-text text-xs font-bold">"Số hợp đồng"</span>
                    </label>
                    <input
                        type="text"
                        placeholder="Tìm kiếm..."
                        class="input input-bordered input-sm"
                        on:input=move |ev| f_number.set(event_target_value(&ev))
                        prop:value=f_number
                    />
                </div>
                <div class="form-control">
                    <label class="label py-1">
                        <span class="label-text text-xs font-bold">"Ngành nghề"</span>
                    </label>
                    <input
                        type="text"
                        placeholder="Tìm kiếm..."
                        class="input input-bordered input-sm"
                        on:input=move |ev| f_industry.set(event_target_value(&ev))
                        prop:value=f_industry
                    />
                </div>
                <div class="form-control">
                    <label class="label py-1">
                        <span class="label-text text-xs font-bold">"Tên dự án"</span>
                    </label>
                    <input
                        type="text"
                        placeholder="Tìm kiếm..."
                        class="input input-bordered input-sm"
                        on:input=move |ev| f_project.set(event_target_value(&ev))
                        prop:value=f_project
                    />
                </div>
                <div class="form-control">
                    <label class="label py-1">
                        <span class="label-text text-xs font-bold">"Ngày hiệu lực (Từ - Đến)"</span>
                    </label>
                    <div class="flex gap-1">
                        <input
                            type="date"
                            class="input input-bordered input-sm w-full"
                            on:input=move |ev| f_start_from.set(event_target_value(&ev))
                            prop:value=f_start_from
                        />
                        <input
                            type="date"
                            class="input input-bordered input-sm w-full"
                            on:input=move |ev| f_start_to.set(event_target_value(&ev))
                            prop:value=f_start_to
                        />
                    </div>
                </div>
                <div class="form-control col-start-4">
                    <label class="label py-1">
                        <span class="label-text text-xs font-bold">"Ngày kết thúc (Từ - Đến)"</span>
                    </label>
                    <div class="flex gap-1">
                        <input
                            type="date"
                            class="input input-bordered input-sm w-full"
                            on:input=move |ev| f_end_from.set(event_target_value(&ev))
                            prop:value=f_end_from
                        />
                        <input
                            type="date"
                            class="input input-bordered input-sm w-full"
                            on:input=move |ev| f_end_to.set(event_target_value(&ev))
                            prop:value=f_end_to
                        />
                    </div>
                </div>
            </div>
        </div>

        <Show
            when=move || !contracts.loading.get() || !contracts.is_empty()
            fallback=|| view! { <PageSpinner /> }
        >
            <div class="overflow-x-auto bg-base-100 rounded-box shadow">
                <table class="table table-zebra table-sm w-full min-w-[2000px]">
                    <thead>
                        <tr>
                            <th>"STT"</th>
                            <th>"Phân loại"</th>
                            <th>"Số hợp đồng"</th>
                            <th>"Ngành nghề"</th>
                            <th>"Tên dự án"</th>
                            <th>"Ngày ký"</th>
                            <th>"Ngày hiệu lực"</th>
                            <th>"Ngày kết thúc"</th>
                            <th>"Thời gian"</th>
                            <th>"Giá trị hợp đồng"</th>
                            <th>"Giá trị sau thuế"</th>
                            <th>"Phê duyệt"</th>
                            <th>"Chủ đầu tư"</th>
                            <th>"Trạng thái"</th>
                            <th>"Tình trạng"</th>
                            <th>"Tạm ứng"</th>
                            <th>"Ghi chú"</th>
                            <th>"Ngày tạo"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show when=move || filtered.get().is_empty() && !contracts.loading.get()>
                            <tr>
                                <td colspan="19" class="text-center py-8 text-base-content/50">
                                    "Không có dữ liệu"
                                </td>
                            </tr>
                        </Show>
                        <For
                            each=move || filtered.get()
                            key=|(_, c)| c.id
                            children=move |(local_index, contract)| {
                                let detail_id = contract.id;
                                let edit_target = contract.clone();
                                let delete_target = contract.clone();
                                let row_number = move || {
                                    let meta = contracts.meta.get();
                                    absolute_index(meta.current_page, meta.per_page, local_index)
                                };
                                let contract_status =
                                    contract.contract_status.clone().unwrap_or_default();
                                let condition_status =
                                    contract.condition_status.clone().unwrap_or_default();
                                let advance = contract
                                    .advance_payment
                                    .clone()
                                    .unwrap_or_else(|| "Không".to_string());
                                let advance_badge = if advance == "Có" {
                                    "badge badge-success"
                                } else {
                                    "badge badge-ghost"
                                };
                                view! {
                                    <tr>
                                        <td>{row_number}</td>
                                        <td>{contract.classification.clone().unwrap_or_else(|| "-".to_string())}</td>
                                        <td>
                                            <a
                                                href=AppRoute::ContractDetail(detail_id).to_path()
                                                class="link link-primary font-semibold no-underline"
                                                on:click=move |ev: web_sys::MouseEvent| {
                                                    ev.prevent_default();
                                                    router.navigate(AppRoute::ContractDetail(detail_id));
                                                }
                                            >
                                                {contract.contract_number.clone()}
                                            </a>
                                        </td>
                                        <td>{contract.industry.clone().unwrap_or_else(|| "-".to_string())}</td>
                                        <td>{contract.project_name.clone().unwrap_or_else(|| "-".to_string())}</td>
                                        <td>{display_date(contract.signing_date.as_deref())}</td>
                                        <td>{display_date(contract.start_date.as_deref())}</td>
                                        <td>{display_date(contract.end_date.as_deref())}</td>
                                        <td class="text-center">
                                            {contract
                                                .duration_days
                                                .map(|d| format!("{d} ngày"))
                                                .unwrap_or_else(|| "-".to_string())}
                                        </td>
                                        <td class="text-right">{display_vnd(contract.contract_value)}</td>
                                        <td class="text-right">{display_vnd(contract.adjusted_value)}</td>
                                        <td>{contract.approval_status.clone().unwrap_or_else(|| "-".to_string())}</td>
                                        <td>{contract.investor.clone().unwrap_or_else(|| "-".to_string())}</td>
                                        <td>
                                            <div class=format!("badge {}", contract_status_badge(&contract_status))>
                                                {if contract_status.is_empty() { "-".to_string() } else { contract_status.clone() }}
                                            </div>
                                        </td>
                                        <td>
                                            <div class=format!("badge {}", condition_status_badge(&condition_status))>
                                                {if condition_status.is_empty() { "-".to_string() } else { condition_status.clone() }}
                                            </div>
                                        </td>
                                        <td class="text-center">
                                            <div class=advance_badge>{advance.clone()}</div>
                                        </td>
                                        <td class="max-w-xs truncate" title=contract.notes.clone().unwrap_or_default()>
                                            {contract.notes.clone().unwrap_or_else(|| "-".to_string())}
                                        </td>
                                        <td>{display_date(contract.created_at.as_deref())}</td>
                                        <td>
                                            <div class="flex gap-1">
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

            <div class="flex items-center justify-between mt-3 text-sm text-base-content/60">
                <span>
                    {move || {
                        let total = contracts.items.with(Vec::len);
                        format!("Hiển thị {} / {} hợp đồng", filtered.get().len(), total)
                    }}
                </span>
                <Show when={move || contracts.meta.get().last_page > 1}>
                    <div class="join">
                        <button
                            class="join-item btn btn-sm"
                            disabled=move || page.get() <= 1
                            on:click=move |_| {
                                let current = page.get_untracked();
                                if current > 1 {
                                    load_page(current - 1);
                                }
                            }
                        >
                            "«"
                        </button>
                        <button class="join-item btn btn-sm pointer-events-none">
                            {move || {
                                let meta = contracts.meta.get();
                                format!("Trang {} / {}", meta.current_page, meta.last_page)
                            }}
                        </button>
                        <button
                            class="join-item btn btn-sm"
                            disabled=move || page.get() >= contracts.meta.get().last_page
                            on:click=move |_| {
                                let current = page.get_untracked();
                                if current < contracts.meta.get_untracked().last_page {
                                    load_page(current + 1);
                                }
                            }
                        >
                            "»"
                        </button>
                    </div>
                </Show>
            </div>
        </Show>

        <ModalShell open=dialog.show title=modal_title>
            <ErrorAlert error=dialog.error />
            <form class="space-y-4" on:submit=on_submit>
                <div class="grid grid-cols-2 gap-4">
                    <div class="form-control">
                        <label class="label" for="ct_number">
                            <span class="label-text">"Số hợp đồng *"</span>
                        </label>
                        <input
                            id="ct_number"
                            type="text"
                            class="input input-bordered w-full"
                            required
                            on:input=move |ev| form.contract_number.set(event_target_value(&ev))
                            prop:value=move || form.contract_number.get()
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="ct_classification">
                            <span class="label-text">"Phân loại"</span>
                        </label>
                        <input
                            id="ct_classification"
                            type="text"
                            class="input input-bordered w-full"
                            on:input=move |ev| form.classification.set(event_target_value(&ev))
                            prop:value=move || form.classification.get()
                        />
                    </div>
                </div>
                <div class="grid grid-cols-2 gap-4">
                    <div class="form-control">
                        <label class="label" for="ct_industry">
                            <span class="label-text">"Ngành nghề"</span>
                        </label>
                        <input
                            id="ct_industry"
                            type="text"
                            class="input input-bordered w-full"
                            on:input=move |ev| form.industry.set(event_target_value(&ev))
                            prop:value=move || form.industry.get()
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="ct_project">
                            <span class="label-text">"Tên dự án"</span>
                        </label>
                        <input
                            id="ct_project"
                            type="text"
                            class="input input-bordered w-full"
                            on:input=move |ev| form.project_name.set(event_target_value(&ev))
                            prop:value=move || form.project_name.get()
                        />
                    </div>
                </div>
                <div class="grid grid-cols-3 gap-4">
                    <div class="form-control">
                        <label class="label" for="ct_signing">
                            <span class="label-text">"Ngày ký"</span>
                        </label>
                        <input
                            id="ct_signing"
                            type="date"
                            class="input input-bordered w-full"
                            on:input=move |ev| form.signing_date.set(event_target_value(&ev))
                            prop:value=move || form.signing_date.get()
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="ct_start">
                            <span class="label-text">"Ngày hiệu lực *"</span>
                        </label>
                        <input
                            id="ct_start"
                            type="date"
                            class="input input-bordered w-full"
                            required
                            on:input=move |ev| form.start_date.set(event_target_value(&ev))
                            prop:value=move || form.start_date.get()
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="ct_end">
                            <span class="label-text">"Ngày kết thúc"</span>
                        </label>
                        <input
                            id="ct_end"
                            type="date"
                            class="input input-bordered w-full"
                            on:input=move |ev| form.end_date.set(event_target_value(&ev))
                            prop:value=move || form.end_date.get()
                        />
                    </div>
                </div>
                <div class="grid grid-cols-2 gap-4">
                    <div class="form-control">
                        <label class="label" for="ct_value">
                            <span class="label-text">"Giá trị hợp đồng (VNĐ)"</span>
                        </label>
                        <input
                            id="ct_value"
                            type="number"
                            min="0"
                            class="input input-bordered w-full"
                            on:input=move |ev| form.contract_value.set(event_target_value(&ev))
                            prop:value=move || form.contract_value.get()
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="ct_adjusted">
                            <span class="label-text">"Giá trị sau thuế (VNĐ)"</span>
                        </label>
                        <input
                            id="ct_adjusted"
                            type="number"
                            min="0"
                            class="input input-bordered w-full"
                            on:input=move |ev| form.adjusted_value.set(event_target_value(&ev))
                            prop:value=move || form.adjusted_value.get()
                        />
                    </div>
                </div>
                <div class="grid grid-cols-3 gap-4">
                    <div class="form-control">
                        <label class="label" for="ct_investor">
                            <span class="label-text">"Chủ đầu tư"</span>
                        </label>
                        <input
                            id="ct_investor"
                            type="text"
                            class="input input-bordered w-full"
                            on:input=move |ev| form.investor.set(event_target_value(&ev))
                            prop:value=move || form.investor.get()
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="ct_status">
                            <span class="label-text">"Trạng thái"</span>
                        </label>
                        <select
                            id="ct_status"
                            class="select select-bordered w-full"
                            on:change=move |ev| form.contract_status.set(event_target_value(&ev))
                        >
                            <option value="" selected=move || form.contract_status.get().is_empty()>
                                "-- Chọn --"
                            </option>
                            <option
                                value="Chờ tiếp nhận"
                                selected=move || form.contract_status.get() == "Chờ tiếp nhận"
                            >
                                "Chờ tiếp nhận"
                            </option>
                            <option
                                value="Đã duyệt"
                                selected=move || form.contract_status.get() == "Đã duyệt"
                            >
                                "Đã duyệt"
                            </option>
                        </select>
                    </div>
                    <div class="form-control">
                        <label class="label" for="ct_condition">
                            <span class="label-text">"Tình trạng"</span>
                        </label>
                        <select
                            id="ct_condition"
                            class="select select-bordered w-full"
                            on:change=move |ev| form.condition_status.set(event_target_value(&ev))
                        >
                            <option value="" selected=move || form.condition_status.get().is_empty()>
                                "-- Chọn --"
                            </option>
                            <option
                                value="Đúng tiến độ"
                                selected=move || form.condition_status.get() == "Đúng tiến độ"
                            >
                                "Đúng tiến độ"
                            </option>
                            <option
                                value="Trễ tiến độ"
                                selected=move || form.condition_status.get() == "Trễ tiến độ"
                            >
                                "Trễ tiến độ"
                            </option>
                        </select>
                    </div>
                </div>
                <div class="form-control">
                    <label class="label" for="ct_notes">
                        <span class="label-text">"Ghi chú"</span>
                    </label>
                    <textarea
                        id="ct_notes"
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
