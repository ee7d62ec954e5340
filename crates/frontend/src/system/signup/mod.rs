pub mod flow;
pub mod mark_selection;
pub mod signup_page;

pub use mark_selection::MarkSelectionPage;
pub use signup_page::SignupPage;
