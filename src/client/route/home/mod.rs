mod booking;

use dioxus::prelude::*;
use dioxus_logger::tracing;
use pulldown_cmark::{html, Options, Parser};

use crate::{
    client::{
        component::{format_baht, Page},
        constant::SITE_NAME,
        model::cache::Cache,
    },
    model::{landing_page::LandingPageDto, queue::AvailabilityDto, room_type::RoomTypeDto},
};

use booking::BookingForm;

#[cfg(feature = "web")]
use crate::client::api::{
    landing_page::get_landing_page, queue::get_availability, room_type::get_room_types,
};

pub(crate) fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    let parser = Parser::new_ext(markdown, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

#[component]
pub fn Home() -> Element {
    let mut landing = use_signal(|| Cache::<LandingPageDto>::NotFetched);
    let mut room_types = use_signal(|| Cache::<Vec<RoomTypeDto>>::NotFetched);
    let mut availability = use_signal(|| Cache::<Vec<AvailabilityDto>>::NotFetched);
    let refetch_trigger = use_signal(|| 0u32);

    #[cfg(feature = "web")]
    {
        let landing_future = use_resource(get_landing_page);
        let types_future = use_resource(get_room_types);
        let availability_future = use_resource(move || async move {
            let _ = refetch_trigger();
            get_availability().await
        });

        use_effect(move || {
            if let Some(result) = &*landing_future.read_unchecked() {
                if let Err(err) = result {
                    tracing::error!("Failed to fetch landing page: {}", err);
                }
                landing.set(result.clone().into());
            }
        });
        use_effect(move || {
            if let Some(result) = &*types_future.read_unchecked() {
                room_types.set(result.clone().into());
            }
        });
        use_effect(move || {
            if let Some(result) = &*availability_future.read_unchecked() {
                availability.set(result.clone().into());
            }
        });
    }

    let remaining_for = move |room_type_id: i32| -> Option<i64> {
        availability()
            .data()
            .and_then(|list| list.iter().find(|a| a.room_type_id == room_type_id))
            .map(|a| a.remaining)
    };

    rsx! {
        Title { "{SITE_NAME}" }
        Page {
            class: "flex flex-col items-center gap-10 w-full",
            if let Cache::Fetched(page) = landing() {
                section {
                    class: "hero min-h-[320px] rounded-box bg-base-200 w-full max-w-6xl",
                    style: page.hero_image_url.as_ref().map(|url| format!("background-image: url({}); background-size: cover;", url)).unwrap_or_default(),
                    div {
                        class: "hero-content text-center bg-base-100/80 rounded-box",
                        div {
                            h1 { class: "text-3xl sm:text-5xl font-bold", "{page.title}" }
                            p { class: "py-4 text-lg", "{page.subtitle}" }
                        }
                    }
                }
                section {
                    class: "prose max-w-4xl w-full",
                    div { dangerous_inner_html: render_markdown(&page.description) }
                }
                if page.contact_phone.is_some() || page.contact_email.is_some() || page.address.is_some() {
                    section {
                        class: "card bg-base-200 w-full max-w-4xl",
                        div {
                            class: "card-body",
                            h2 { class: "card-title", "ติดต่อเรา" }
                            if let Some(phone) = &page.contact_phone {
                                p { "โทร: {phone}" }
                            }
                            if let Some(email) = &page.contact_email {
                                p { "อีเมล: {email}" }
                            }
                            if let Some(address) = &page.address {
                                p { class: "whitespace-pre-line", "{address}" }
                            }
                        }
                    }
                }
            } else if landing().error().is_some() {
                p { class: "opacity-50", "โหลดข้อมูลหอพักไม่สำเร็จ" }
            } else {
                span { class: "loading loading-spinner loading-lg" }
            }

            section {
                class: "w-full max-w-6xl",
                h2 { class: "text-2xl font-semibold mb-4", "ประเภทห้องพัก" }
                if let Cache::Fetched(types) = room_types() {
                    div {
                        class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4",
                        for room_type in types.iter() {
                            {
                                let remaining = remaining_for(room_type.id);
                                rsx! {
                                    div {
                                        key: "{room_type.id}",
                                        class: "card bg-base-200",
                                        if let Some(url) = &room_type.image_url {
                                            figure { img { class: "h-48 w-full object-cover", src: "{url}", alt: "{room_type.name}" } }
                                        }
                                        div {
                                            class: "card-body",
                                            h3 { class: "card-title", "{room_type.name}" }
                                            p { class: "font-semibold", "{format_baht(room_type.price as i64)} / เดือน" }
                                            p { class: "opacity-80 whitespace-pre-line", "{room_type.description}" }
                                            match remaining {
                                                Some(n) if n > 0 => rsx! { span { class: "badge badge-success", "ว่าง {n} ห้อง" } },
                                                Some(_) => rsx! { span { class: "badge badge-ghost", "เต็ม" } },
                                                None => rsx! {},
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                } else if let Cache::Error(err) = room_types() {
                    p { class: "text-error", "{err}" }
                }
            }

            section {
                class: "w-full max-w-2xl",
                h2 { class: "text-2xl font-semibold mb-4", "จองคิวดูห้อง" }
                if let Cache::Fetched(list) = availability() {
                    BookingForm { availability: list, refetch_trigger }
                }
            }
        }
    }
}
