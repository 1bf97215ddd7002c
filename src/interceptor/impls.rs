pub mod cache_middleware;
pub mod render_interceptor;
