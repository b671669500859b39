use chrono::Utc;
use rand::Rng;

/// Generates an administrator employee ID such as `ADM-20250301-0427`.
pub fn generate_admin_employee_id() -> String {
    let suffix: u16 = rand::rng().random_range(0..10_000);

    format!("ADM-{}-{:04}", Utc::now().format("%Y%m%d"), suffix)
}
