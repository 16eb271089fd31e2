pub mod fallback;
pub mod model;
