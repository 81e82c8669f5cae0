use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{ErrorPage, ImageInput, LoadingPage},
        constant::SITE_NAME,
        model::cache::Cache,
        route::{
            admin::{AdminPage, AdminTab},
            home::render_markdown,
        },
    },
    model::landing_page::{LandingPageDto, UpdateLandingPageDto},
};

#[cfg(feature = "web")]
use crate::client::api::landing_page::{get_landing_page, update_landing_page};

#[derive(Clone, Default, PartialEq)]
struct LandingPageForm {
    title: String,
    subtitle: String,
    description: String,
    contact_phone: String,
    contact_email: String,
    address: String,
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl LandingPageForm {
    fn from_dto(dto: &LandingPageDto) -> Self {
        Self {
            title: dto.title.clone(),
            subtitle: dto.subtitle.clone(),
            description: dto.description.clone(),
            contact_phone: dto.contact_phone.clone().unwrap_or_default(),
            contact_email: dto.contact_email.clone().unwrap_or_default(),
            address: dto.address.clone().unwrap_or_default(),
        }
    }

    fn to_dto(&self, hero_image: Option<String>) -> UpdateLandingPageDto {
        UpdateLandingPageDto {
            title: self.title.trim().to_string(),
            subtitle: self.subtitle.trim().to_string(),
            description: self.description.clone(),
            hero_image,
            contact_phone: optional(&self.contact_phone),
            contact_email: optional(&self.contact_email),
            address: optional(&self.address),
        }
    }
}

#[component]
pub fn AdminLandingPage() -> Element {
    let mut page = use_signal(|| Cache::<LandingPageDto>::NotFetched);

    #[cfg(feature = "web")]
    {
        let future = use_resource(get_landing_page);
        use_effect(move || {
            if let Some(result) = &*future.read_unchecked() {
                if let Err(err) = result {
                    tracing::error!("Failed to fetch landing page: {}", err);
                }
                page.set(result.clone().into());
            }
        });
    }

    rsx! {
        Title { "หน้าแรก | {SITE_NAME}" }
        match page() {
            Cache::Fetched(dto) => rsx! {
                AdminPage {
                    active_tab: AdminTab::LandingPage,
                    LandingPageEditor { initial: dto, page }
                }
            },
            Cache::Error(err) => rsx! { ErrorPage { status: err.status, message: err.message } },
            Cache::NotFetched => rsx! { LoadingPage {} },
        }
    }
}

#[component]
fn LandingPageEditor(initial: LandingPageDto, mut page: Signal<Cache<LandingPageDto>>) -> Element {
    let mut form = use_signal(|| LandingPageForm::from_dto(&initial));
    let hero_image = use_signal(|| initial.hero_image_url.clone());
    let mut submitting = use_signal(|| false);
    let mut message = use_signal(|| None::<Result<String, String>>);

    let preview = render_markdown(&form.read().description);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let payload = form.read().to_dto(hero_image());
        submitting.set(true);
        message.set(None);

        #[cfg(feature = "web")]
        spawn(async move {
            match update_landing_page(payload).await {
                Ok(updated) => {
                    page.set(Cache::Fetched(updated));
                    message.set(Some(Ok("บันทึกแล้ว".to_string())));
                }
                Err(err) => message.set(Some(Err(err.message))),
            }
            submitting.set(false);
        });
        #[cfg(not(feature = "web"))]
        let _ = payload;
    };

    rsx! {
        form {
            class: "grid grid-cols-1 lg:grid-cols-2 gap-6",
            onsubmit: on_submit,
            div {
                class: "flex flex-col gap-3",
                label {
                    class: "form-control",
                    span { class: "label-text", "หัวข้อ" }
                    input {
                        class: "input input-bordered",
                        required: true,
                        value: "{form.read().title}",
                        oninput: move |evt| form.write().title = evt.value(),
                    }
                }
                label {
                    class: "form-control",
                    span { class: "label-text", "คำโปรย" }
                    input {
                        class: "input input-bordered",
                        value: "{form.read().subtitle}",
                        oninput: move |evt| form.write().subtitle = evt.value(),
                    }
                }
                ImageInput { label: "ภาพหน้าปก".to_string(), value: hero_image }
                label {
                    class: "form-control",
                    span { class: "label-text", "รายละเอียด (Markdown)" }
                    textarea {
                        class: "textarea textarea-bordered h-64 font-mono",
                        value: "{form.read().description}",
                        oninput: move |evt| form.write().description = evt.value(),
                    }
                }
                label {
                    class: "form-control",
                    span { class: "label-text", "โทรศัพท์" }
                    input {
                        class: "input input-bordered",
                        value: "{form.read().contact_phone}",
                        oninput: move |evt| form.write().contact_phone = evt.value(),
                    }
                }
                label {
                    class: "form-control",
                    span { class: "label-text", "อีเมล" }
                    input {
                        r#type: "email",
                        class: "input input-bordered",
                        value: "{form.read().contact_email}",
                        oninput: move |evt| form.write().contact_email = evt.value(),
                    }
                }
                label {
                    class: "form-control",
                    span { class: "label-text", "ที่อยู่" }
                    textarea {
                        class: "textarea textarea-bordered",
                        value: "{form.read().address}",
                        oninput: move |evt| form.write().address = evt.value(),
                    }
                }
                match message() {
                    Some(Ok(text)) => rsx! { div { class: "alert alert-success", "{text}" } },
                    Some(Err(text)) => rsx! { div { class: "alert alert-error", "{text}" } },
                    None => rsx! {},
                }
                button {
                    r#type: "submit",
                    class: "btn btn-primary self-start",
                    disabled: submitting(),
                    if submitting() { "กำลังบันทึก..." } else { "บันทึก" }
                }
            }
            div {
                class: "card bg-base-200",
                div {
                    class: "card-body prose max-w-none",
                    h2 { class: "card-title", "ตัวอย่าง" }
                    div { dangerous_inner_html: preview }
                }
            }
        }
    }
}
