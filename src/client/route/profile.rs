use dioxus::prelude::*;

use crate::{
    client::{component::Page, constant::SITE_NAME, model::auth::AuthContext},
    model::{auth::ChangePasswordDto, user::UpdateProfileDto},
};

#[cfg(feature = "web")]
use crate::client::api::{auth::change_password, user::update_me};

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[component]
pub fn Profile() -> Element {
    let auth = use_context::<AuthContext>();
    let Some(user) = auth.read().user().cloned() else {
        return rsx! {};
    };

    rsx! {
        Title { "ข้อมูลส่วนตัว | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center gap-6 w-full",
            div {
                class: "w-full max-w-md flex flex-col gap-6",
                h1 { class: "text-2xl", "ข้อมูลส่วนตัว" }
                p { class: "opacity-70", "ชื่อผู้ใช้: {user.username}" }
                ProfileForm {
                    initial: UpdateProfileDto {
                        first_name: user.first_name.clone(),
                        last_name: user.last_name.clone(),
                        email: user.email.clone(),
                        phone: user.phone.clone(),
                    }
                }
                PasswordForm {}
            }
        }
    }
}

#[component]
fn ProfileForm(initial: UpdateProfileDto) -> Element {
    #[allow(unused_mut)]
    let mut auth = use_context::<AuthContext>();
    let mut form = use_signal(|| initial);
    let mut saving = use_signal(|| false);
    let mut message = use_signal(|| None::<Result<String, String>>);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        saving.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            match update_me(form()).await {
                Ok(user) => {
                    auth.set_user(user);
                    message.set(Some(Ok("บันทึกข้อมูลแล้ว".to_string())));
                }
                Err(err) => message.set(Some(Err(err.message))),
            }
            saving.set(false);
        });
    };

    rsx! {
        form {
            class: "card bg-base-200",
            onsubmit: on_submit,
            div {
                class: "card-body flex flex-col gap-3",
                h2 { class: "card-title", "แก้ไขข้อมูล" }
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
                    value: "{form().email.clone().unwrap_or_default()}",
                    oninput: move |evt| form.write().email = optional(&evt.value()),
                }
                input {
                    r#type: "tel",
                    class: "input input-bordered",
                    placeholder: "เบอร์โทรศัพท์",
                    value: "{form().phone.clone().unwrap_or_default()}",
                    oninput: move |evt| form.write().phone = optional(&evt.value()),
                }
                match message() {
                    Some(Ok(text)) => rsx! { p { class: "text-success text-sm", "{text}" } },
                    Some(Err(text)) => rsx! { p { class: "text-error text-sm", "{text}" } },
                    None => rsx! {},
                }
                button {
                    r#type: "submit",
                    class: "btn btn-primary",
                    disabled: saving(),
                    "บันทึก"
                }
            }
        }
    }
}

#[component]
fn PasswordForm() -> Element {
    let mut current = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut saving = use_signal(|| false);
    let mut message = use_signal(|| None::<Result<String, String>>);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let payload = ChangePasswordDto {
            current_password: current(),
            new_password: new_password(),
        };
        saving.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            match change_password(payload).await {
                Ok(()) => {
                    current.set(String::new());
                    new_password.set(String::new());
                    message.set(Some(Ok("เปลี่ยนรหัสผ่านแล้ว".to_string())));
                }
                Err(err) => message.set(Some(Err(err.message))),
            }
            saving.set(false);
        });
        #[cfg(not(feature = "web"))]
        let _ = payload;
    };

    rsx! {
        form {
            class: "card bg-base-200",
            onsubmit: on_submit,
            div {
                class: "card-body flex flex-col gap-3",
                h2 { class: "card-title", "เปลี่ยนรหัสผ่าน" }
                input {
                    r#type: "password",
                    class: "input input-bordered",
                    placeholder: "รหัสผ่านปัจจุบัน",
                    autocomplete: "current-password",
                    required: true,
                    value: "{current}",
                    oninput: move |evt| current.set(evt.value()),
                }
                input {
                    r#type: "password",
                    class: "input input-bordered",
                    placeholder: "รหัสผ่านใหม่ (อย่างน้อย 6 ตัวอักษร)",
                    autocomplete: "new-password",
                    required: true,
                    value: "{new_password}",
                    oninput: move |evt| new_password.set(evt.value()),
                }
                match message() {
                    Some(Ok(text)) => rsx! { p { class: "text-success text-sm", "{text}" } },
                    Some(Err(text)) => rsx! { p { class: "text-error text-sm", "{text}" } },
                    None => rsx! {},
                }
                button {
                    r#type: "submit",
                    class: "btn",
                    disabled: saving(),
                    "เปลี่ยนรหัสผ่าน"
                }
            }
        }
    }
}
