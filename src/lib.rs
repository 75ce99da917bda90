pub mod api;
pub mod config;
pub mod error;
pub mod frequency;
pub mod nl;
pub mod pipeline;
pub mod render;
pub mod sessions;
pub mod sources;
pub mod theme;
