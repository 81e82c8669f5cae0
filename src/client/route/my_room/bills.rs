use dioxus::prelude::*;

use crate::{
    client::{
        component::{format_baht, status_badge, ImageInput, Modal},
        model::cache::Cache,
    },
    model::{
        api::PaginatedDto,
        bill::{BillDto, BillStatus},
    },
};

#[cfg(feature = "web")]
use crate::client::api::bill::{get_bills, submit_proof};

#[component]
pub fn RoomBills() -> Element {
    let mut bills = use_signal(|| Cache::<PaginatedDto<BillDto>>::NotFetched);
    let refetch_trigger = use_signal(|| 0u32);
    let mut paying = use_signal(|| None::<BillDto>);
    let mut show_pay_modal = use_signal(|| false);

    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move {
            let _ = refetch_trigger();
            get_bills(None, None, 0, 12).await
        });
        use_effect(move || {
            if let Some(result) = &*future.read_unchecked() {
                bills.set(result.clone().into());
            }
        });
    }

    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body",
                h2 { class: "card-title", "บิลค่าเช่า" }
                match bills() {
                    Cache::Fetched(page) if page.items.is_empty() => rsx! {
                        p { class: "opacity-50", "ยังไม่มีบิล" }
                    },
                    Cache::Fetched(page) => rsx! {
                        div {
                            class: "overflow-x-auto",
                            table {
                                class: "table table-zebra w-full",
                                thead {
                                    tr {
                                        th { "เดือน" }
                                        th { "ค่าเช่า" }
                                        th { "ค่าน้ำ" }
                                        th { "ค่าไฟ" }
                                        th { "อื่นๆ" }
                                        th { "รวม" }
                                        th { "ครบกำหนด" }
                                        th { "สถานะ" }
                                        th {}
                                    }
                                }
                                tbody {
                                    for bill in page.items {
                                        tr {
                                            key: "{bill.id}",
                                            td { "{bill.billing_month}" }
                                            td { "{format_baht(bill.rent as i64)}" }
                                            td { "{format_baht(bill.water as i64)}" }
                                            td { "{format_baht(bill.electricity as i64)}" }
                                            td { "{format_baht(bill.other as i64)}" }
                                            td { class: "font-semibold", "{format_baht(bill.total as i64)}" }
                                            td { "{bill.due_date}" }
                                            td { {status_badge(&bill.status)} }
                                            td {
                                                if bill.status != BillStatus::Paid {
                                                    button {
                                                        class: "btn btn-sm btn-primary",
                                                        onclick: {
                                                            let bill = bill.clone();
                                                            move |_| {
                                                                paying.set(Some(bill.clone()));
                                                                show_pay_modal.set(true);
                                                            }
                                                        },
                                                        if bill.status == BillStatus::PendingReview { "ส่งสลิปใหม่" } else { "แนบสลิป" }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    },
                    Cache::Error(err) => rsx! { p { class: "text-error", "{err}" } },
                    Cache::NotFetched => rsx! { span { class: "loading loading-spinner" } },
                }
            }
        }
        if let Some(bill) = paying() {
            PayBillModal { show: show_pay_modal, bill, refetch_trigger }
        }
    }
}

#[component]
fn PayBillModal(show: Signal<bool>, bill: BillDto, mut refetch_trigger: Signal<u32>) -> Element {
    let image = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let bill_id = bill.id;

    let on_submit = move |_| {
        let Some(data_url) = image() else {
            error.set(Some("กรุณาเลือกรูปสลิป".to_string()));
            return;
        };
        submitting.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            match submit_proof(bill_id, data_url).await {
                Ok(_) => {
                    show.set(false);
                    refetch_trigger.set(refetch_trigger() + 1);
                }
                Err(err) => error.set(Some(err.message)),
            }
            submitting.set(false);
        });
        #[cfg(not(feature = "web"))]
        let _ = data_url;
    };

    rsx! {
        Modal {
            show,
            title: format!("ชำระบิลเดือน {}", bill.billing_month),
            prevent_close: submitting(),
            p { class: "mb-3", "ยอดชำระ {format_baht(bill.total as i64)}" }
            ImageInput { label: "สลิปโอนเงิน".to_string(), value: image }
            if let Some(err) = error() {
                p { class: "text-error text-sm mt-2", "{err}" }
            }
            div {
                class: "modal-action",
                button {
                    class: "btn btn-primary",
                    disabled: submitting(),
                    onclick: on_submit,
                    "ส่งสลิป"
                }
            }
        }
    }
}
