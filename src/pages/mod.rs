//! Pages
//!
//! Top-level page components for each route.

pub mod home;
pub mod login;
pub mod register;
pub mod statistics;

pub use home::Home;
pub use login::Login;
pub use register::Register;
pub use statistics::Statistics;
