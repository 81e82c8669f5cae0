use base64::Engine;
use dioxus::prelude::*;

/// Extension -> MIME type for the image formats the server stores.
fn image_mime(file_name: &str) -> Option<&'static str> {
    let ext = file_name.rsplit_once('.')?.1.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

/// Image field holding either a pasted URL or a picked file encoded as a data URL.
#[component]
pub fn ImageInput(label: String, value: Signal<Option<String>>) -> Element {
    let mut error = use_signal(|| None::<String>);

    let url_text = value()
        .filter(|v| !v.starts_with("data:"))
        .unwrap_or_default();

    rsx!(
        div {
            class: "form-control w-full flex flex-col gap-2",
            label { class: "label", span { class: "label-text", "{label}" } }
            input {
                r#type: "file",
                class: "file-input file-input-bordered w-full",
                accept: ".png,.jpg,.jpeg,.webp",
                onchange: move |evt: FormEvent| async move {
                    let Some(file) = evt.files().into_iter().next() else {
                        return;
                    };
                    let name = file.name();
                    let Some(mime) = image_mime(&name) else {
                        error.set(Some("รองรับเฉพาะไฟล์ png, jpg, jpeg หรือ webp".to_string()));
                        return;
                    };
                    match file.read_bytes().await {
                        Ok(bytes) => {
                            let encoded = base64::engine::general_purpose::STANDARD.encode(&bytes);
                            value.set(Some(format!("data:{};base64,{}", mime, encoded)));
                            error.set(None);
                        }
                        Err(err) => error.set(Some(format!("อ่านไฟล์ไม่สำเร็จ: {}", err))),
                    }
                },
            }
            input {
                r#type: "url",
                class: "input input-bordered w-full",
                placeholder: "หรือวางลิงก์รูปภาพ https://...",
                value: "{url_text}",
                oninput: move |evt| {
                    let text = evt.value();
                    value.set((!text.trim().is_empty()).then(|| text.trim().to_string()));
                },
            }
            if let Some(err) = error() {
                p { class: "text-error text-sm", "{err}" }
            }
            if let Some(src) = value() {
                div {
                    class: "flex items-end gap-2",
                    img { class: "max-h-40 rounded", src: "{src}" }
                    button {
                        r#type: "button",
                        class: "btn btn-xs btn-ghost",
                        onclick: move |_| value.set(None),
                        "ล้าง"
                    }
                }
            }
        }
    )
}
