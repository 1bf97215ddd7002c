pub mod version_check;
pub mod version_guard;
