use chrono::NaiveDate;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{
            format_baht, status_badge, ErrorPage, LoadingPage, Modal, Pagination, PaginationData,
        },
        constant::{DEFAULT_PER_PAGE, SITE_NAME},
        model::cache::Cache,
        route::admin::{AdminPage, AdminTab},
    },
    model::{
        api::PaginatedDto,
        bill::{BillDto, BillStatus, CreateBillDto},
        room::RoomDto,
    },
};

#[cfg(feature = "web")]
use crate::client::api::{
    bill::{create_bill, delete_bill, get_bills, update_status},
    room::get_rooms,
};

const STATUS_FILTERS: [BillStatus; 3] = [
    BillStatus::Unpaid,
    BillStatus::PendingReview,
    BillStatus::Paid,
];

#[component]
pub fn AdminBills() -> Element {
    let mut bills = use_signal(|| Cache::<PaginatedDto<BillDto>>::NotFetched);
    let mut status = use_signal(|| None::<BillStatus>);
    let mut month = use_signal(String::new);
    let mut page = use_signal(|| 0u64);
    let per_page = use_signal(|| DEFAULT_PER_PAGE);
    let mut refetch_trigger = use_signal(|| 0u32);
    let mut show_create = use_signal(|| false);
    let mut action_error = use_signal(|| None::<String>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move {
            let _ = refetch_trigger();
            get_bills(status(), Some(month()), page(), per_page()).await
        });
        use_effect(move || {
            if let Some(result) = &*future.read_unchecked() {
                if let Err(err) = result {
                    tracing::error!("Failed to fetch bills: {}", err);
                }
                bills.set(result.clone().into());
            }
        });
    }

    let set_status = move |id: i32, target: BillStatus| {
        #[cfg(feature = "web")]
        spawn(async move {
            match update_status(id, target).await {
                Ok(_) => refetch_trigger.set(refetch_trigger() + 1),
                Err(err) => action_error.set(Some(err.message)),
            }
        });
        #[cfg(not(feature = "web"))]
        let _ = (id, target);
    };

    let remove = move |id: i32| {
        #[cfg(feature = "web")]
        spawn(async move {
            match delete_bill(id).await {
                Ok(()) => refetch_trigger.set(refetch_trigger() + 1),
                Err(err) => action_error.set(Some(err.message)),
            }
        });
        #[cfg(not(feature = "web"))]
        let _ = id;
    };

    rsx! {
        Title { "บิล | {SITE_NAME}" }
        match bills() {
            Cache::Fetched(data) => rsx! {
                AdminPage {
                    active_tab: AdminTab::Bills,
                    div {
                        class: "flex flex-wrap items-center justify-between gap-4 mb-4",
                        div {
                            class: "flex gap-2",
                            select {
                                class: "select select-bordered select-sm",
                                onchange: move |evt| {
                                    status.set(evt.value().parse().ok());
                                    page.set(0);
                                },
                                option { value: "", selected: status().is_none(), "ทุกสถานะ" }
                                for s in STATUS_FILTERS {
                                    option { value: s.as_str(), selected: status() == Some(s), {s.label()} }
                                }
                            }
                            input {
                                r#type: "month",
                                class: "input input-bordered input-sm",
                                value: "{month}",
                                onchange: move |evt| {
                                    month.set(evt.value());
                                    page.set(0);
                                },
                            }
                        }
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| show_create.set(true),
                            "ออกบิล"
                        }
                    }
                    if let Some(err) = action_error() {
                        div { class: "alert alert-error mb-4", "{err}" }
                    }
                    div {
                        class: "card bg-base-200",
                        div {
                            class: "card-body overflow-x-auto",
                            if data.items.is_empty() {
                                div { class: "text-center py-8 opacity-50", "ไม่มีบิล" }
                            } else {
                                table {
                                    class: "table table-zebra w-full",
                                    thead {
                                        tr {
                                            th { "ห้อง" }
                                            th { "เดือน" }
                                            th { "ยอดรวม" }
                                            th { "ครบกำหนด" }
                                            th { "สถานะ" }
                                            th { "สลิป" }
                                            th { class: "text-right", "จัดการ" }
                                        }
                                    }
                                    tbody {
                                        for bill in data.items.iter().cloned() {
                                            tr {
                                                key: "{bill.id}",
                                                td { "{bill.room_number}" }
                                                td { "{bill.billing_month}" }
                                                td {
                                                    title: "ค่าเช่า {bill.rent} · น้ำ {bill.water} · ไฟ {bill.electricity} · อื่นๆ {bill.other}",
                                                    "{format_baht(bill.total as i64)}"
                                                }
                                                td { "{bill.due_date}" }
                                                td { {status_badge(&bill.status)} }
                                                td {
                                                    if let Some(url) = &bill.proof_image_url {
                                                        a { class: "link", href: "{url}", target: "_blank", "ดูสลิป" }
                                                    }
                                                }
                                                td {
                                                    div {
                                                        class: "flex gap-2 justify-end",
                                                        if bill.status != BillStatus::Paid {
                                                            button {
                                                                class: "btn btn-xs btn-success",
                                                                onclick: move |_| set_status(bill.id, BillStatus::Paid),
                                                                "ชำระแล้ว"
                                                            }
                                                        }
                                                        if bill.status != BillStatus::Unpaid {
                                                            button {
                                                                class: "btn btn-xs btn-warning",
                                                                onclick: move |_| set_status(bill.id, BillStatus::Unpaid),
                                                                "ตีกลับ"
                                                            }
                                                        }
                                                        button {
                                                            class: "btn btn-xs btn-error",
                                                            onclick: move |_| remove(bill.id),
                                                            "ลบ"
                                                        }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                            Pagination { page, per_page, data: PaginationData::from(&data) }
                        }
                    }
                }
            },
            Cache::Error(err) => rsx! { ErrorPage { status: err.status, message: err.message } },
            Cache::NotFetched => rsx! { LoadingPage {} },
        }
        if show_create() {
            CreateBillModal { show: show_create, refetch_trigger }
        }
    }
}

#[derive(Clone, Default, PartialEq)]
struct BillForm {
    room_id: Option<i32>,
    billing_month: String,
    rent: String,
    water: String,
    electricity: String,
    other: String,
    due_date: String,
}

fn amount(field: &str, value: &str) -> Result<i32, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(0);
    }
    value
        .parse::<i32>()
        .ok()
        .filter(|v| *v >= 0)
        .ok_or_else(|| format!("{} ต้องเป็นจำนวนเต็มไม่ติดลบ", field))
}

impl BillForm {
    fn to_dto(&self) -> Result<CreateBillDto, String> {
        Ok(CreateBillDto {
            room_id: self.room_id.ok_or("กรุณาเลือกห้อง")?,
            billing_month: self.billing_month.clone(),
            rent: amount("ค่าเช่า", &self.rent)?,
            water: amount("ค่าน้ำ", &self.water)?,
            electricity: amount("ค่าไฟ", &self.electricity)?,
            other: amount("ค่าอื่นๆ", &self.other)?,
            due_date: NaiveDate::parse_from_str(&self.due_date, "%Y-%m-%d")
                .map_err(|_| "กรุณาระบุวันครบกำหนด")?,
        })
    }
}

#[component]
fn CreateBillModal(mut show: Signal<bool>, mut refetch_trigger: Signal<u32>) -> Element {
    let mut rooms = use_signal(Vec::<RoomDto>::new);
    let mut form = use_signal(BillForm::default);
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(|| get_rooms(None, None, None));
        use_effect(move || {
            if let Some(Ok(list)) = &*future.read_unchecked() {
                rooms.set(list.iter().filter(|r| r.renter.is_some()).cloned().collect());
            }
        });
    }

    let on_pick_room = move |evt: FormEvent| {
        let room_id = evt.value().parse::<i32>().ok();
        let price = room_id.and_then(|id| rooms.read().iter().find(|r| r.id == id).map(|r| r.price));
        let mut form = form.write();
        form.room_id = room_id;
        if let Some(price) = price {
            form.rent = price.to_string();
        }
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let payload = match form.read().to_dto() {
            Ok(payload) => payload,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        submitting.set(true);
        error.set(None);

        #[cfg(feature = "web")]
        spawn(async move {
            match create_bill(payload).await {
                Ok(_) => {
                    show.set(false);
                    refetch_trigger.set(refetch_trigger() + 1);
                }
                Err(err) => error.set(Some(err.message)),
            }
            submitting.set(false);
        });
        #[cfg(not(feature = "web"))]
        let _ = payload;
    };

    rsx! {
        Modal {
            show,
            title: "ออกบิล".to_string(),
            prevent_close: submitting(),
            wide: true,
            form {
                class: "grid grid-cols-2 gap-3",
                onsubmit: on_submit,
                select {
                    class: "select select-bordered col-span-2",
                    required: true,
                    onchange: on_pick_room,
                    option { value: "", disabled: true, selected: form().room_id.is_none(), "เลือกห้องที่มีผู้เช่า" }
                    for room in rooms() {
                        option { key: "{room.id}", value: "{room.id}", "{room.room_number}" }
                    }
                }
                label {
                    class: "form-control",
                    span { class: "label-text", "เดือน" }
                    input {
                        r#type: "month",
                        class: "input input-bordered",
                        required: true,
                        value: "{form().billing_month}",
                        oninput: move |evt| form.write().billing_month = evt.value(),
                    }
                }
                label {
                    class: "form-control",
                    span { class: "label-text", "ครบกำหนด" }
                    input {
                        r#type: "date",
                        class: "input input-bordered",
                        required: true,
                        value: "{form().due_date}",
                        oninput: move |evt| form.write().due_date = evt.value(),
                    }
                }
                input {
                    r#type: "number",
                    class: "input input-bordered",
                    min: "0",
                    placeholder: "ค่าเช่า",
                    value: "{form().rent}",
                    oninput: move |evt| form.write().rent = evt.value(),
                }
                input {
                    r#type: "number",
                    class: "input input-bordered",
                    min: "0",
                    placeholder: "ค่าน้ำ",
                    value: "{form().water}",
                    oninput: move |evt| form.write().water = evt.value(),
                }
                input {
                    r#type: "number",
                    class: "input input-bordered",
                    min: "0",
                    placeholder: "ค่าไฟ",
                    value: "{form().electricity}",
                    oninput: move |evt| form.write().electricity = evt.value(),
                }
                input {
                    r#type: "number",
                    class: "input input-bordered",
                    min: "0",
                    placeholder: "ค่าอื่นๆ",
                    value: "{form().other}",
                    oninput: move |evt| form.write().other = evt.value(),
                }
                if let Some(err) = error() {
                    p { class: "text-error text-sm col-span-2", "{err}" }
                }
                div {
                    class: "modal-action col-span-2",
                    button { r#type: "submit", class: "btn btn-primary", disabled: submitting(), "ออกบิล" }
                }
            }
        }
    }
}
