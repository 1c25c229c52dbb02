//! Backend API
//!
//! Typed client for the IMC REST backend: request functions, wire types
//! and tagged errors.

pub mod client;
pub mod dto;
pub mod error;

pub use client::{calculate_bmi, fetch_history, fetch_summary, login, register};
pub use dto::{BmiResult, CategoryCount, HistoryEntry, StatsSummary, Strategy, TokenResponse};
pub use error::{ApiError, ApiResult};
