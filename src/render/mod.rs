mod render;

pub use render::render_to_buffer;
