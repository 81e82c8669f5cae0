pub mod bill_reminder;
