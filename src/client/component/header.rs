use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaComments, FaDoorOpen, FaRightFromBracket, FaUserShield},
    Icon,
};

use crate::client::{constant::SITE_NAME, model::auth::AuthContext, router::Route};

#[cfg(feature = "web")]
use crate::client::api::auth::logout;

const LOGO: Asset = asset!(
    "/assets/logo.svg",
    AssetOptions::image().with_size(ImageSize::Manual {
        width: 48,
        height: 48
    })
);

#[component]
pub fn Header() -> Element {
    let mut auth = use_context::<AuthContext>();
    let nav = navigator();

    let resolved = auth.read().is_resolved();
    let logged_in = auth.read().is_authenticated();
    let is_admin = auth.read().is_admin();
    let has_room = auth.read().room_id().is_some();

    let on_logout = move |_| {
        #[cfg(feature = "web")]
        spawn(async move {
            if let Err(err) = logout().await {
                dioxus_logger::tracing::error!("Failed to log out: {}", err);
            }
            auth.clear();
            nav.push(Route::Home {});
        });
    };

    rsx!(div {
        class: "fixed flex justify-between gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
        div {
            class: "flex items-center",
            Link {
                to: Route::Home {},
                div {
                    class: "flex items-center gap-3",
                    img { src: LOGO }
                    p {
                        class: "md:text-xl text-wrap",
                        {SITE_NAME}
                    }
                }
            }
        }
        div {
            class: "flex items-center gap-2",
            if resolved && logged_in {
                if is_admin {
                    Link {
                        to: Route::AdminDashboard {},
                        class: "btn btn-outline flex gap-2 items-center",
                        Icon { width: 18, height: 18, icon: FaUserShield }
                        p { class: "hidden sm:block", "ผู้ดูแล" }
                    }
                } else {
                    if has_room {
                        Link {
                            to: Route::MyRoom {},
                            class: "btn btn-outline flex gap-2 items-center",
                            Icon { width: 18, height: 18, icon: FaDoorOpen }
                            p { class: "hidden sm:block", "ห้องของฉัน" }
                        }
                    }
                    Link {
                        to: Route::Chat {},
                        class: "btn btn-outline flex gap-2 items-center",
                        Icon { width: 18, height: 18, icon: FaComments }
                        p { class: "hidden sm:block", "ติดต่อเจ้าหน้าที่" }
                    }
                }
                Link {
                    to: Route::Profile {},
                    class: "btn btn-ghost",
                    {auth.read().user().map(|u| u.display_name()).unwrap_or_default()}
                }
                button {
                    class: "btn btn-outline",
                    onclick: on_logout,
                    Icon { width: 18, height: 18, icon: FaRightFromBracket }
                }
            } else if resolved {
                Link {
                    to: Route::Login {},
                    class: "btn btn-outline",
                    "เข้าสู่ระบบ"
                }
                Link {
                    to: Route::Register {},
                    class: "btn btn-primary",
                    "สมัครสมาชิก"
                }
            }
        }
    })
}
