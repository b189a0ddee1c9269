//! Demonstration of the rotating evidence panel
//!
//! Shows the EvidencePanel with a custom two-record catalog and a faster
//! rotation so the staged reveal is easy to watch.
//! To run in browser (requires trunk): `trunk serve demos/panel_demo.rs`

use leptos::prelude::*;
use tracelens_site::components::EvidencePanel;
use tracelens_site::models::{ImplementationStatus, TraceRecord};

fn demo_records() -> Vec<TraceRecord> {
    vec![
        TraceRecord::new("REQ-DEMO-001", "Passwords are hashed before storage")
            .with_evidence_span("src/auth/hashing.py:10-42")
            .with_reasoning(
                "The hashing module applies bcrypt with a per-user salt before any \
                 credential is written, satisfying the storage requirement.",
            )
            .with_confidence(0.92)
            .with_status(ImplementationStatus::FullyImplemented),
        TraceRecord::new("REQ-DEMO-002", "Failed logins are rate limited per account")
            .with_reasoning(
                "No throttling or lockout logic was found near the login handler; \
                 the requirement appears unimplemented.",
            )
            .with_confidence(0.81)
            .with_status(ImplementationStatus::Missing),
    ]
}

/// Demo app showcasing the evidence panel in isolation
#[component]
pub fn App() -> impl IntoView {
    view! {
        <div style="max-width: 560px; margin: 0 auto; padding: 40px 20px;">
            <EvidencePanel records=demo_records() period_ms=2500 />
        </div>
    }
}

/// WASM entry point
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}

fn main() {
    // This is just a placeholder for cargo to compile
    // The actual app runs in WASM via trunk
    #[cfg(not(target_arch = "wasm32"))]
    {
        println!("This example should be run with trunk serve");
        println!("Install trunk: cargo install trunk");
        println!("Run: trunk serve demos/panel_demo.rs");
    }
}
