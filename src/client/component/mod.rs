pub mod chat_thread;
pub mod header;
pub mod image_input;
pub mod layout;
pub mod modal;
pub mod page;
pub mod pagination;
pub mod protected_layout;
pub mod status_badge;

pub use chat_thread::ChatThread;
pub use header::Header;
pub use image_input::ImageInput;
pub use layout::Layout;
pub use modal::{ConfirmationModal, Modal};
pub use page::{ErrorPage, LoadingPage, Page};
pub use pagination::{Pagination, PaginationData};
pub use protected_layout::{ProtectedLayout, RequiresAdmin, RequiresLoggedIn};
pub use status_badge::{status_badge, StatusBadge};

/// `3500` -> `"3,500 บาท"`.
pub fn format_baht(amount: i64) -> String {
    let digits = amount.abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let sign = if amount < 0 { "-" } else { "" };
    format!("{}{} บาท", sign, grouped)
}
