mod home;
pub use home::{Home, LandingPage};
