pub mod nav_model;
pub mod sidebar;

pub use sidebar::Sidebar;
