//! Drawing the game: shared screen layout, the windowed renderer and the terminal renderer

pub mod layout;
pub mod renderer;
pub mod window;

pub use layout::ScreenLayout;
pub use renderer::Renderer;
pub use window::WindowRenderer;
