pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use app::session::Session;
pub use config::{cli::LocalStorage, CliConfig};
pub use domain::model::{Street, Territory};
pub use utils::error::{Result, TerritoryError};
