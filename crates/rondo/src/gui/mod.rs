pub mod app;
pub mod dial;
pub mod pages;
pub mod theme;
