pub mod csv;
pub mod download;
pub mod money;
pub mod time;

/// Check if we're running in development mode
pub fn is_dev_mode() -> bool {
    cfg!(debug_assertions)
}
