//! Màn hình chi tiết hợp đồng đối tác
//!
//! Một bản ghi, ba tab chỉ đọc: thông tin chung, thanh toán và lịch
//! sử cập nhật.

use leptos::prelude::*;
use leptos::task::spawn_local;

use qlns_shared::PartnerContract;
use qlns_shared::date::{display_date, display_vnd, format_vn_datetime};
use qlns_shared::status::{condition_status_badge, contract_status_badge};

use crate::api::QlnsApi;
use crate::components::icons::*;
use crate::components::ui::PageSpinner;
use crate::web::route::AppRoute;
use crate::web::router::use_router;

#[derive(Clone, Copy, PartialEq, Eq)]
enum ContractTab {
    Info,
    Payments,
    History,
}

#[component]
pub fn ContractDetailPage(id: i64) -> impl IntoView {
    let router = use_router();

    let contract = RwSignal::new(Option::<PartnerContract>::None);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(Option::<String>::None);
    let active_tab = RwSignal::new(ContractTab::Info);

    Effect::new(move |_| {
        spawn_local(async move {
            match QlnsApi::new().get_contract(id).await {
                Ok(record) => {
                    let _ = contract.try_set(Some(record));
                }
                Err(err) => {
                    let _ = error.try_set(Some(err.to_string()));
                }
            }
            let _ = loading.try_set(false);
        });
    });

    let tab_class = move |tab: ContractTab| {
        if active_tab.get() == tab {
            "tab tab-active font-semibold"
        } else {
            "tab"
        }
    };

    view! {
        <div class="flex items-center gap-3 mb-4">
            <button
                class="btn btn-ghost btn-sm gap-2"
                on:click=move |_| router.navigate(AppRoute::Contracts)
            >
                <ArrowLeft attr:class="h-4 w-4" />
                "Quay lại"
            </button>
            <h2 class="text-xl font-bold">"Chi tiết hợp đồng đối tác"</h2>
        </div>

        <Show when=move || loading.get()>
            <PageSpinner />
        </Show>

        <Show when=move || !loading.get() && contract.get().is_none()>
            <div role="alert" class="alert alert-error">
                <span>
                    {move || error.get().unwrap_or_else(|| "Không tìm thấy hợp đồng".to_string())}
                </span>
            </div>
        </Show>

        <Show when=move || contract.get().is_some()>
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <div role="tablist" class="tabs tabs-bordered mb-4">
                        <a
                            role="tab"
                            class=move || tab_class(ContractTab::Info)
                            on:click=move |_| active_tab.set(ContractTab::Info)
                        >
                            "Hợp đồng"
                        </a>
                        <a
                            role="tab"
                            class=move || tab_class(ContractTab::Payments)
                            on:click=move |_| active_tab.set(ContractTab::Payments)
                        >
                            "Thanh toán"
                        </a>
                        <a
                            role="tab"
                            class=move || tab_class(ContractTab::History)
                            on:click=move |_| active_tab.set(ContractTab::History)
                        >
                            "Lịch sử cập nhật"
                        </a>
                    </div>

                    {move || {
                        let record = contract.get().unwrap();
                        match active_tab.get() {
                            ContractTab::Info => view! { <InfoTab contract=record /> }.into_any(),
                            ContractTab::Payments => {
                                view! { <PaymentsTab contract=record /> }.into_any()
                            }
                            ContractTab::History => {
                                view! { <HistoryTab contract=record /> }.into_any()
                            }
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
        <div class="flex py-1 text-sm">
            <div class="w-48 text-base-content/60">{label}</div>
            <div class="font-medium">{value}</div>
        </div>
    }
}

fn text_or_dash(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_string())
}

#[component]
fn InfoTab(contract: PartnerContract) -> impl IntoView {
    let contract_status = contract.contract_status.clone().unwrap_or_default();
    let condition_status = contract.condition_status.clone().unwrap_or_default();

    view! {
        <h3 class="text-error font-semibold mb-2">"Thông tin chung"</h3>
        <div class="grid grid-cols-2 gap-x-8">
            <div>
                <InfoRow label="Số HĐ" value=contract.contract_number.clone() />
                <InfoRow label="Tên dự án" value=text_or_dash(&contract.project_name) />
                <InfoRow label="Ngày hiệu lực" value=display_date(contract.start_date.as_deref()) />
                <InfoRow label="Giá trị" value=display_vnd(contract.contract_value) />
                <InfoRow label="Đối tác" value=text_or_dash(&contract.investor) />
                <InfoRow label="Bộ phận" value=text_or_dash(&contract.department) />
            </div>
            <div>
                <InfoRow label="Ngành nghề" value=text_or_dash(&contract.industry) />
                <InfoRow label="Ngày ký" value=display_date(contract.signing_date.as_deref()) />
                <InfoRow
                    label="Thời gian hiệu lực (ngày)"
                    value=contract
                        .duration_days
                        .map(|d| d.to_string())
                        .unwrap_or_else(|| "-".to_string())
                />
                <InfoRow label="Ngày kết thúc" value=display_date(contract.end_date.as_deref()) />
                <InfoRow label="Giá trị sau thuế" value=display_vnd(contract.adjusted_value) />
                <InfoRow label="Địa chỉ" value=text_or_dash(&contract.address) />
            </div>
        </div>

        <div class="divider"></div>

        <div class="grid grid-cols-2 gap-x-8">
            <div>
                <InfoRow label="Người đại diện" value=text_or_dash(&contract.representative) />
                <InfoRow label="Chức danh" value=text_or_dash(&contract.representative_title) />
                <InfoRow label="Ngày tạo" value=display_date(contract.created_at.as_deref()) />
            </div>
            <div>
                <InfoRow label="STK" value=text_or_dash(&contract.bank_account) />
                <InfoRow label="Ngân hàng" value=text_or_dash(&contract.bank_name) />
                <InfoRow label="Chủ tài khoản" value=text_or_dash(&contract.account_holder) />
            </div>
        </div>

        <div class="divider"></div>

        <div class="flex gap-6 text-sm items-center">
            <div class="flex items-center gap-2">
                <span class="text-base-content/60">"Trạng thái:"</span>
                <div class=format!("badge {}", contract_status_badge(&contract_status))>
                    {if contract_status.is_empty() { "Đang xử lý".to_string() } else { contract_status.clone() }}
                </div>
            </div>
            <div class="flex items-center gap-2">
                <span class="text-base-content/60">"Tình trạng:"</span>
                <div class=format!("badge {}", condition_status_badge(&condition_status))>
                    {if condition_status.is_empty() { "-".to_string() } else { condition_status.clone() }}
                </div>
            </div>
        </div>
    }
}

#[component]
fn PaymentsTab(contract: PartnerContract) -> impl IntoView {
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
        <h3 class="font-semibold mb-2">"Thông tin thanh toán"</h3>
        <div class="grid grid-cols-2 gap-x-8">
            <div>
                <div class="flex py-1 text-sm items-center">
                    <div class="w-48 text-base-content/60">"Tạm ứng"</div>
                    <div class=advance_badge>{advance.clone()}</div>
                </div>
                <InfoRow label="Giá trị hợp đồng" value=display_vnd(contract.contract_value) />
                <InfoRow label="VAT" value=text_or_dash(&contract.vat_rate) />
            </div>
            <div>
                <InfoRow label="Giá trị sau thuế" value=display_vnd(contract.adjusted_value) />
                <InfoRow label="Chênh lệch" value=display_vnd(contract.value_difference) />
                <InfoRow label="Trạng thái phê duyệt" value=text_or_dash(&contract.approval_status) />
            </div>
        </div>
    }
}

#[component]
fn HistoryTab(contract: PartnerContract) -> impl IntoView {
    let created_at = contract
        .created_at
        .as_deref()
        .and_then(format_vn_datetime)
        .unwrap_or_else(|| "-".to_string());
    let created_by = contract
        .created_by
        .clone()
        .unwrap_or_else(|| "Admin".to_string());
    // Chỉ hiện dòng cập nhật khi bản ghi thực sự từng được sửa.
    let updated = contract
        .updated_at
        .clone()
        .filter(|updated| Some(updated) != contract.created_at.as_ref());
    let updated_by = contract
        .updated_by
        .clone()
        .unwrap_or_else(|| "Admin".to_string());

    view! {
        <table class="table table-zebra w-full">
            <thead>
                <tr>
                    <th>"STT"</th>
                    <th>"Thời gian"</th>
                    <th>"Người thực hiện"</th>
                    <th>"Hành động"</th>
                    <th>"Nội dung"</th>
                </tr>
            </thead>
            <tbody>
                <tr>
                    <td>"1"</td>
                    <td>{created_at}</td>
                    <td>{created_by}</td>
                    <td><div class="badge badge-success">"Tạo mới"</div></td>
                    <td>{format!("Tạo hợp đồng {}", contract.contract_number)}</td>
                </tr>
                {updated
                    .map(|updated_at| {
                        let stamp = format_vn_datetime(&updated_at)
                            .unwrap_or_else(|| updated_at.clone());
                        view! {
                            <tr>
                                <td>"2"</td>
                                <td>{stamp}</td>
                                <td>{updated_by.clone()}</td>
                                <td><div class="badge badge-info">"Cập nhật"</div></td>
                                <td>"Cập nhật thông tin hợp đồng"</td>
                            </tr>
                        }
                    })}
            </tbody>
        </table>
    }
}
