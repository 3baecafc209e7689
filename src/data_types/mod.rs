pub mod binding;
pub mod color;
pub mod scene;
pub mod stops;

// Re-export everything for convenience
pub use binding::*;
pub use color::*;
pub use scene::*;
pub use stops::*;
