pub const SITE_NAME: &str = "หอพักของเรา";

pub const SITE_DESCRIPTION: &str = "จองคิวดูห้อง ชำระค่าเช่า แจ้งซ่อม และติดต่อเจ้าหน้าที่หอพักออนไลน์";

/// Rows per page on admin tables.
pub const DEFAULT_PER_PAGE: u64 = 20;
