pub mod cache_decision;
pub mod render_context;
pub mod render_result;
pub mod render_step;
pub mod request_cache_state;
pub mod request_info;
