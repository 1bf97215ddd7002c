use crate::config::enums::intercept_mode::InterceptMode;
use std::fmt;

impl fmt::Display for InterceptMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterceptMode::precomputed => write!(f, "precomputed"),
            InterceptMode::render_time => write!(f, "render_time"),
        }
    }
}
