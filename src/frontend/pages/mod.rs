//! Page components for the Refract site

mod landing;
mod not_found;

pub use landing::LandingPage;
pub use not_found::NotFound;
