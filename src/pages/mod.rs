//! Routed pages. Each is mounted behind the navigation guard.

mod login;
mod nav;
mod register;
mod reports;
mod tracking;

pub use login::LoginPage;
pub use register::RegisterPage;
pub use reports::ReportsPage;
pub use tracking::TrackingPage;
