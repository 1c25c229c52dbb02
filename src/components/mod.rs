//! UI Components
//!
//! Reusable Leptos components for the app.

pub mod chart;
pub mod guard;
pub mod history;
pub mod imc_form;
pub mod loading;
pub mod nav;

pub use chart::{BarChart, LineChart, Series};
pub use guard::{ProtectedGate, PublicGate};
pub use history::History;
pub use imc_form::ImcForm;
pub use loading::Loading;
pub use nav::Nav;
