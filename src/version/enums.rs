pub mod version_status;
