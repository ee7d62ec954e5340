//! New Client dialog UI module
//!
//! Simplified MVVM pattern implementation:
//! - model.rs: API functions (register, patch)
//! - view_model.rs: form state, variant selection and the submit flow
//! - view.rs: Leptos component (pure UI)

mod model;
mod view;
mod view_model;

pub use view::NewClientDialog;
pub use view_model::NewClientViewModel;
