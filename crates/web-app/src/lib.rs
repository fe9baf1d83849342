#![warn(clippy::pedantic)]
#![allow(clippy::too_many_lines)]

pub mod chart;
pub mod log;
mod service;
mod session;
mod settings;

pub use service::Service;
pub use session::{SessionState, Tab};
pub use settings::{Settings, SettingsRepository, SettingsService, Theme};
