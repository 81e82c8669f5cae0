use chrono::NaiveDate;
use dioxus::prelude::*;

use crate::{
    client::component::format_baht,
    model::queue::{AvailabilityDto, BookQueueDto},
};

#[cfg(feature = "web")]
use crate::client::api::queue::book;

#[derive(Clone, Default, PartialEq)]
struct BookingFormData {
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    room_type_id: Option<i32>,
    appointment_date: String,
    note: String,
}

impl BookingFormData {
    fn to_dto(&self) -> Result<BookQueueDto, String> {
        let room_type_id = self.room_type_id.ok_or("กรุณาเลือกประเภทห้อง")?;
        let appointment_date = NaiveDate::parse_from_str(&self.appointment_date, "%Y-%m-%d")
            .map_err(|_| "กรุณาเลือกวันที่นัดดูห้อง")?;
        let note = self.note.trim();

        Ok(BookQueueDto {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            room_type_id,
            appointment_date,
            note: (!note.is_empty()).then(|| note.to_string()),
        })
    }
}

/// Public viewing-appointment form.
#[component]
pub fn BookingForm(availability: Vec<AvailabilityDto>, mut refetch_trigger: Signal<u32>) -> Element {
    let mut form = use_signal(BookingFormData::default);
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut booked = use_signal(|| None::<String>);

    let open: Vec<AvailabilityDto> = availability
        .into_iter()
        .filter(|a| a.remaining > 0)
        .collect();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let dto = match form.read().to_dto() {
            Ok(dto) => dto,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        submitting.set(true);
        error.set(None);

        #[cfg(feature = "web")]
        spawn(async move {
            match book(dto).await {
                Ok(entry) => {
                    booked.set(Some(format!(
                        "จองคิวดูห้อง {} วันที่ {} เรียบร้อยแล้ว",
                        entry.room_type_name, entry.appointment_date
                    )));
                    form.set(BookingFormData::default());
                    refetch_trigger.set(refetch_trigger() + 1);
                }
                Err(err) => error.set(Some(err.message)),
            }
            submitting.set(false);
        });

        #[cfg(not(feature = "web"))]
        let _ = dto;
    };

    rsx! {
        if let Some(message) = booked() {
            div { class: "alert alert-success mb-4", "{message}" }
        }
        if open.is_empty() {
            p { class: "opacity-60", "ขณะนี้ห้องพักเต็มทุกประเภท" }
        } else {
            form {
                class: "card bg-base-200",
                onsubmit: on_submit,
                div {
                    class: "card-body grid grid-cols-1 sm:grid-cols-2 gap-3",
                    input {
                        class: "input input-bordered",
                        placeholder: "ชื่อ",
                        required: true,
                        value: "{form().first_name}",
                        oninput: move |evt| form.write().first_name = evt.value(),
                    }
                    input {
                        class: "input input-bordered",
                        placeholder: "นามสกุล",
                        required: true,
                        value: "{form().last_name}",
                        oninput: move |evt| form.write().last_name = evt.value(),
                    }
                    input {
                        r#type: "email",
                        class: "input input-bordered",
                        placeholder: "อีเมล",
                        required: true,
                        value: "{form().email}",
                        oninput: move |evt| form.write().email = evt.value(),
                    }
                    input {
                        r#type: "tel",
                        class: "input input-bordered",
                        placeholder: "เบอร์โทรศัพท์",
                        required: true,
                        value: "{form().phone}",
                        oninput: move |evt| form.write().phone = evt.value(),
                    }
                    select {
                        class: "select select-bordered",
                        required: true,
                        onchange: move |evt| form.write().room_type_id = evt.value().parse().ok(),
                        option { value: "", disabled: true, selected: form().room_type_id.is_none(), "เลือกประเภทห้อง" }
                        for a in open.iter() {
                            option {
                                key: "{a.room_type_id}",
                                value: "{a.room_type_id}",
                                selected: form().room_type_id == Some(a.room_type_id),
                                "{a.room_type_name} ({format_baht(a.price as i64)}) ว่าง {a.remaining}"
                            }
                        }
                    }
                    input {
                        r#type: "date",
                        class: "input input-bordered",
                        required: true,
                        value: "{form().appointment_date}",
                        oninput: move |evt| form.write().appointment_date = evt.value(),
                    }
                    textarea {
                        class: "textarea textarea-bordered sm:col-span-2",
                        placeholder: "หมายเหตุ (ถ้ามี)",
                        value: "{form().note}",
                        oninput: move |evt| form.write().note = evt.value(),
                    }
                    if let Some(err) = error() {
                        p { class: "text-error sm:col-span-2", "{err}" }
                    }
                    div {
                        class: "sm:col-span-2 flex justify-end",
                        button {
                            r#type: "submit",
                            class: "btn btn-primary",
                            disabled: submitting(),
                            if submitting() {
                                span { class: "loading loading-spinner loading-sm" }
                            }
                            "จองคิว"
                        }
                    }
                }
            }
        }
    }
}
