pub mod dashboard;
pub mod landing;
pub mod login;

pub use dashboard::{DashboardPage, NotFoundPage, SectionPage};
pub use landing::LandingPage;
pub use login::LoginPage;
