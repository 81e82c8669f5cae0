use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{ConfirmationModal, ErrorPage, LoadingPage, Pagination, PaginationData},
        constant::{DEFAULT_PER_PAGE, SITE_NAME},
        model::{auth::AuthContext, cache::Cache},
        route::admin::{AdminPage, AdminTab},
    },
    model::{api::PaginatedDto, user::UserDto},
};

#[cfg(feature = "web")]
use crate::client::api::user::{delete_user, get_users};

#[component]
pub fn AdminUsers() -> Element {
    let auth = use_context::<AuthContext>();
    let current_user_id = auth.read().user_id();

    let mut users = use_signal(|| Cache::<PaginatedDto<UserDto>>::NotFetched);
    let page = use_signal(|| 0u64);
    let per_page = use_signal(|| DEFAULT_PER_PAGE);
    let refetch_trigger = use_signal(|| 0u32);
    let mut deleting = use_signal(|| None::<UserDto>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move {
            let _ = refetch_trigger();
            get_users(page(), per_page()).await
        });
        use_effect(move || {
            if let Some(result) = &*future.read_unchecked() {
                if let Err(err) = result {
                    tracing::error!("Failed to fetch users: {}", err);
                }
                users.set(result.clone().into());
            }
        });
    }

    rsx! {
        Title { "ผู้ใช้ | {SITE_NAME}" }
        match users() {
            Cache::Fetched(data) => rsx! {
                AdminPage {
                    active_tab: AdminTab::Users,
                    div {
                        class: "card bg-base-200",
                        div {
                            class: "card-body overflow-x-auto",
                            table {
                                class: "table table-zebra w-full",
                                thead {
                                    tr {
                                        th { "ชื่อผู้ใช้" }
                                        th { "ชื่อ" }
                                        th { "อีเมล" }
                                        th { "โทรศัพท์" }
                                        th { "บทบาท" }
                                        th {}
                                    }
                                }
                                tbody {
                                    for user in data.items.iter().cloned() {
                                        tr {
                                            key: "{user.id}",
                                            td { class: "font-mono", "{user.username}" }
                                            td { "{user.first_name} {user.last_name}" }
                                            td { {user.email.clone().unwrap_or_default()} }
                                            td { {user.phone.clone().unwrap_or_default()} }
                                            td {
                                                if user.admin {
                                                    span { class: "badge badge-primary", "ผู้ดูแล" }
                                                } else if user.room_id.is_some() {
                                                    span { class: "badge badge-info", "ผู้เช่า" }
                                                } else {
                                                    span { class: "badge badge-ghost", "ผู้ใช้ทั่วไป" }
                                                }
                                            }
                                            td {
                                                class: "text-right",
                                                if !user.admin && Some(user.id) != current_user_id {
                                                    button {
                                                        class: "btn btn-xs btn-error",
                                                        onclick: {
                                                            let user = user.clone();
                                                            move |_| deleting.set(Some(user.clone()))
                                                        },
                                                        "ลบ"
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
        if let Some(user) = deleting() {
            DeleteUserModal { user, deleting, refetch_trigger }
        }
    }
}

#[component]
fn DeleteUserModal(
    user: UserDto,
    mut deleting: Signal<Option<UserDto>>,
    mut refetch_trigger: Signal<u32>,
) -> Element {
    let mut show = use_signal(|| true);
    let mut processing = use_signal(|| false);
    let user_id = user.id;

    use_effect(move || {
        if !show() {
            deleting.set(None);
        }
    });

    rsx! {
        ConfirmationModal {
            show,
            title: format!("ลบผู้ใช้ {}", user.username),
            message: rsx! {
                p { "บัญชีนี้และข้อความแชททั้งหมดจะถูกลบถาวร" }
            },
            confirm_text: "ลบ".to_string(),
            confirm_class: "btn-error".to_string(),
            is_processing: processing(),
            on_confirm: move |_| {
                processing.set(true);
                #[cfg(feature = "web")]
                spawn(async move {
                    match delete_user(user_id).await {
                        Ok(()) => refetch_trigger.set(refetch_trigger() + 1),
                        Err(err) => tracing::error!("Failed to delete user: {}", err),
                    }
                    processing.set(false);
                    show.set(false);
                });
            },
        }
    }
}
