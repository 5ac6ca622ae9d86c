// Public API exports
pub mod domain;
pub mod shared;
pub mod config;

// Dioxus components and pages
pub mod app;
