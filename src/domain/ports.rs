use crate::utils::error::Result;

/// Where export artifacts end up. The session is single-threaded, so writes
/// are plain blocking calls.
pub trait Storage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn output_path(&self) -> &str;
    fn territory_name(&self) -> Option<&str>;
}
