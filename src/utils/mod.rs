pub mod api;
pub mod fs;
pub mod logger;
pub mod signature;
pub mod spinner;
pub mod version;
