//! Thai notification emails.

use chrono::NaiveDate;

use crate::server::{
    mail::MailMessage,
    model::{bill::Bill, parcel::Parcel},
    util::date::format_billing_month,
};

fn thai_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

pub fn bill_created(to: &str, room_number: &str, bill: &Bill, app_url: &str) -> MailMessage {
    let month = format_billing_month(bill.billing_month);
    MailMessage {
        to: to.to_string(),
        subject: format!("ใบแจ้งค่าเช่าห้อง {} ประจำเดือน {}", room_number, month),
        body: format!(
            "ใบแจ้งค่าเช่าห้อง {room} ประจำเดือน {month}\n\n\
             ค่าเช่า: {rent} บาท\n\
             ค่าน้ำ: {water} บาท\n\
             ค่าไฟ: {electricity} บาท\n\
             อื่น ๆ: {other} บาท\n\
             รวมทั้งสิ้น: {total} บาท\n\n\
             กรุณาชำระภายในวันที่ {due}\n\
             ดูรายละเอียดและแนบหลักฐานการชำระเงินได้ที่ {url}/my-room",
            room = room_number,
            month = month,
            rent = bill.rent,
            water = bill.water,
            electricity = bill.electricity,
            other = bill.other,
            total = bill.total,
            due = thai_date(bill.due_date),
            url = app_url,
        ),
    }
}

pub fn bill_overdue(to: &str, room_number: &str, bill: &Bill, app_url: &str) -> MailMessage {
    let month = format_billing_month(bill.billing_month);
    MailMessage {
        to: to.to_string(),
        subject: format!("แจ้งเตือนค่าเช่าค้างชำระ ห้อง {} เดือน {}", room_number, month),
        body: format!(
            "ค่าเช่าห้อง {room} ประจำเดือน {month} จำนวน {total} บาท \
             เลยกำหนดชำระวันที่ {due} แล้ว\n\n\
             กรุณาชำระและแนบหลักฐานที่ {url}/my-room",
            room = room_number,
            month = month,
            total = bill.total,
            due = thai_date(bill.due_date),
            url = app_url,
        ),
    }
}

pub fn parcel_arrived(to: &str, room_number: &str, parcel: &Parcel) -> MailMessage {
    let carrier = parcel
        .carrier
        .as_deref()
        .map(|c| format!(" ({})", c))
        .unwrap_or_default();
    MailMessage {
        to: to.to_string(),
        subject: format!("มีพัสดุถึงห้อง {}", room_number),
        body: format!(
            "มีพัสดุสำหรับคุณ {recipient}{carrier} มาถึงสำนักงานหอพักแล้ว\n\
             กรุณามารับที่สำนักงาน",
            recipient = parcel.recipient_name,
            carrier = carrier,
        ),
    }
}
