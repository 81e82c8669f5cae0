use dioxus::prelude::*;

use crate::model::{bill::BillStatus, queue::QueueStatus, task::TaskStatus};

/// Anything shown as a coloured status pill.
pub trait BadgeStatus {
    fn label(&self) -> &'static str;
    fn badge_class(&self) -> &'static str;
}

impl BadgeStatus for BillStatus {
    fn label(&self) -> &'static str {
        BillStatus::label(self)
    }

    fn badge_class(&self) -> &'static str {
        match self {
            BillStatus::Unpaid => "badge-error",
            BillStatus::PendingReview => "badge-warning",
            BillStatus::Paid => "badge-success",
        }
    }
}

impl BadgeStatus for QueueStatus {
    fn label(&self) -> &'static str {
        QueueStatus::label(self)
    }

    fn badge_class(&self) -> &'static str {
        match self {
            QueueStatus::Pending => "badge-warning",
            QueueStatus::Confirmed => "badge-info",
            QueueStatus::Cancelled => "badge-ghost",
            QueueStatus::Assigned => "badge-success",
        }
    }
}

impl BadgeStatus for TaskStatus {
    fn label(&self) -> &'static str {
        TaskStatus::label(self)
    }

    fn badge_class(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "badge-warning",
            TaskStatus::InProgress => "badge-info",
            TaskStatus::Completed => "badge-success",
        }
    }
}

#[component]
pub fn StatusBadge(label: &'static str, class: &'static str) -> Element {
    rsx!(
        span {
            class: "badge badge-sm whitespace-nowrap {class}",
            "{label}"
        }
    )
}

/// Shorthand for `StatusBadge { label: status.label(), class: status.badge_class() }`.
pub fn status_badge(status: &impl BadgeStatus) -> Element {
    rsx!(StatusBadge {
        label: status.label(),
        class: status.badge_class()
    })
}
