// Domain layer: chat models and the controllers that map them to the view
pub mod models;
pub mod services;
