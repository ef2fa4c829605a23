pub mod components;
pub mod design_system;
pub mod explorer_app;

pub use explorer_app::ExplorerApp;
