pub mod export;
pub mod field;
pub mod grid;

pub use crate::domain::model::{Street, Territory};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
