//! Page components.

mod dashboard;
mod login;

pub use dashboard::DashboardPage;
pub use login::LoginPage;
