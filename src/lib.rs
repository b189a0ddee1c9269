//! Leptos 0.7 CSR landing site for an agentic requirements traceability framework
//!
//! This crate renders the single-page marketing site for a multi-agent
//! RAG-based system that maps software requirements to code artifacts.
//!
//! ## Architecture
//! - Pure CSR (Client-Side Rendering) with Leptos 0.7
//! - WASM compilation target (wasm32-unknown-unknown)
//! - One interactive component: the rotating evidence inspection panel
//! - Everything else is static markup
//!
//! ## Module Structure
//! - `app`: Root application component
//! - `pages`: The landing page and its sections
//! - `components`: Evidence panel, traceability matrix, and shared widgets
//! - `models`: Trace records and the sample catalog
//! - `state`: Rotation state machine for the evidence panel
//! - `error`: Error types and handling

#![forbid(unsafe_code)]

pub mod app;
pub mod components;
pub mod error;
pub mod models;
pub mod pages;
pub mod state;

// Re-export main App component for convenience - Trunk will auto-mount it
pub use app::App;

#[cfg(test)]
mod tests;
