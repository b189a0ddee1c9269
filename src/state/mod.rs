//! Client-side state for the landing site
//!
//! The only stateful piece of the site is the evidence panel's rotation; the
//! rest of the page is static markup. Keeping the rotation logic here, away
//! from the component tree, lets it be tested without a browser.

pub mod rotation;

pub use rotation::EvidenceRotation;
