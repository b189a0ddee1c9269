//! Page components for the landing site
//!
//! The site is a single page; there is no router.

pub mod landing;

pub use landing::Landing;
