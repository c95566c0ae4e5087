pub mod remote;
pub mod version;
