use dioxus::prelude::*;

use crate::{
    client::{
        component::{LoadingPage, Page},
        constant::SITE_NAME,
        model::auth::{AuthContext, AuthState},
        router::Route,
    },
    model::user::UserDto,
};

#[cfg(feature = "web")]
use crate::{client::api::auth::login, model::auth::LoginDto};

const LOGO: Asset = asset!(
    "/assets/logo.svg",
    AssetOptions::image().with_size(ImageSize::Manual {
        width: 128,
        height: 128
    })
);

/// Where a user lands after logging in.
pub fn home_route(user: &UserDto) -> Route {
    if user.admin {
        Route::AdminDashboard {}
    } else if user.room_id.is_some() {
        Route::MyRoom {}
    } else {
        Route::Home {}
    }
}

#[component]
pub fn Login() -> Element {
    #[allow(unused_mut)]
    let mut auth = use_context::<AuthContext>();
    let nav = navigator();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    // Already logged in
    use_effect(move || {
        if let Some(user) = auth.read().user() {
            nav.replace(home_route(user));
        }
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        submitting.set(true);
        error.set(None);

        #[cfg(feature = "web")]
        spawn(async move {
            let payload = LoginDto {
                username: username().trim().to_string(),
                password: password(),
            };
            match login(payload).await {
                Ok(user) => {
                    let target = home_route(&user);
                    auth.set_user(user);
                    nav.push(target);
                }
                Err(err) => error.set(Some(err.message)),
            }
            submitting.set(false);
        });
    };

    let state = auth.read();

    rsx! {
        Title { "เข้าสู่ระบบ | {SITE_NAME}" }
        match &*state {
            AuthState::Initializing | AuthState::Authenticated(_) => rsx! {
                LoadingPage {}
            },
            AuthState::NotLoggedIn | AuthState::Error(_) => rsx! {
                Page {
                    class: "flex flex-col gap-6 items-center justify-center w-full h-full",
                    div {
                        class: "flex flex-col items-center gap-4",
                        img { width: 128, height: 128, src: LOGO }
                        p { class: "text-2xl", {SITE_NAME} }
                    }
                    form {
                        class: "card bg-base-200 w-full max-w-sm",
                        onsubmit: on_submit,
                        div {
                            class: "card-body flex flex-col gap-3",
                            input {
                                class: "input input-bordered",
                                placeholder: "ชื่อผู้ใช้ หรือ เลขห้อง",
                                autocomplete: "username",
                                required: true,
                                value: "{username}",
                                oninput: move |evt| username.set(evt.value()),
                            }
                            input {
                                r#type: "password",
                                class: "input input-bordered",
                                placeholder: "รหัสผ่าน",
                                autocomplete: "current-password",
                                required: true,
                                value: "{password}",
                                oninput: move |evt| password.set(evt.value()),
                            }
                            if let Some(err) = error() {
                                p { class: "text-error text-sm", "{err}" }
                            }
                            button {
                                r#type: "submit",
                                class: "btn btn-primary",
                                disabled: submitting(),
                                if submitting() {
                                    span { class: "loading loading-spinner loading-sm" }
                                }
                                "เข้าสู่ระบบ"
                            }
                            Link {
                                to: Route::Register {},
                                class: "link text-sm text-center",
                                "ยังไม่มีบัญชี? สมัครสมาชิก"
                            }
                        }
                    }
                }
            }
        }
    }
}
