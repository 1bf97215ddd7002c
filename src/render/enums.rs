pub mod render_step;
