use dioxus::prelude::*;

use crate::{
    client::{component::Page, constant::SITE_NAME, router::Route},
    model::auth::RegisterDto,
};

#[cfg(feature = "web")]
use crate::{
    client::{api::auth::{login, register}, model::auth::AuthContext},
    model::auth::LoginDto,
};

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[component]
pub fn Register() -> Element {
    #[cfg(feature = "web")]
    let mut auth = use_context::<AuthContext>();
    let nav = navigator();

    let mut form = use_signal(|| RegisterDto {
        username: String::new(),
        password: String::new(),
        first_name: String::new(),
        last_name: String::new(),
        email: None,
        phone: None,
    });
    let mut confirm = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if form().password != confirm() {
            error.set(Some("รหัสผ่านไม่ตรงกัน".to_string()));
            return;
        }
        submitting.set(true);
        error.set(None);

        #[cfg(feature = "web")]
        spawn(async move {
            let payload = form();
            let credentials = LoginDto {
                username: payload.username.clone(),
                password: payload.password.clone(),
            };
            let result = match register(payload).await {
                Ok(_) => login(credentials).await,
                Err(err) => Err(err),
            };
            match result {
                Ok(user) => {
                    auth.set_user(user);
                    nav.push(Route::Home {});
                }
                Err(err) => error.set(Some(err.message)),
            }
            submitting.set(false);
        });
        #[cfg(not(feature = "web"))]
        let _ = nav;
    };

    rsx! {
        Title { "สมัครสมาชิก | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center justify-center w-full",
            form {
                class: "card bg-base-200 w-full max-w-md",
                onsubmit: on_submit,
                div {
                    class: "card-body flex flex-col gap-3",
                    h1 { class: "card-title", "สมัครสมาชิก" }
                    input {
                        class: "input input-bordered",
                        placeholder: "ชื่อผู้ใช้ (3-32 ตัวอักษร)",
                        autocomplete: "username",
                        required: true,
                        value: "{form().username}",
                        oninput: move |evt| form.write().username = evt.value().trim().to_string(),
                    }
                    div {
                        class: "grid grid-cols-2 gap-3",
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
                    }
                    input {
                        r#type: "email",
                        class: "input input-bordered",
                        placeholder: "อีเมล (ไม่บังคับ)",
                        value: "{form().email.clone().unwrap_or_default()}",
                        oninput: move |evt| form.write().email = optional(&evt.value()),
                    }
                    input {
                        r#type: "tel",
                        class: "input input-bordered",
                        placeholder: "เบอร์โทรศัพท์ (ไม่บังคับ)",
                        value: "{form().phone.clone().unwrap_or_default()}",
                        oninput: move |evt| form.write().phone = optional(&evt.value()),
                    }
                    input {
                        r#type: "password",
                        class: "input input-bordered",
                        placeholder: "รหัสผ่าน (อย่างน้อย 6 ตัวอักษร)",
                        autocomplete: "new-password",
                        required: true,
                        value: "{form().password}",
                        oninput: move |evt| form.write().password = evt.value(),
                    }
                    input {
                        r#type: "password",
                        class: "input input-bordered",
                        placeholder: "ยืนยันรหัสผ่าน",
                        autocomplete: "new-password",
                        required: true,
                        value: "{confirm}",
                        oninput: move |evt| confirm.set(evt.value()),
                    }
                    if let Some(err) = error() {
                        p { class: "text-error text-sm", "{err}" }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: submitting(),
                        "สมัครสมาชิก"
                    }
                    Link {
                        to: Route::Login {},
                        class: "link text-sm text-center",
                        "มีบัญชีอยู่แล้ว? เข้าสู่ระบบ"
                    }
                }
            }
        }
    }
}
