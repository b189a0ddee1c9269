//! Status badge component for trace classifications

use crate::models::ImplementationStatus;
use leptos::prelude::*;

/// Inline badge pairing a classification's icon with its label
///
/// The badge color follows the status: green for fully implemented, amber
/// for partially implemented, red for missing.
#[component]
pub fn StatusBadge(status: ImplementationStatus) -> impl IntoView {
    view! {
        <span
            class=format!("status-badge {}", status.css_class())
            style=format!("color: {};", status.color())
        >
            <span class="status-badge-icon">{status.icon()}</span>
            <span class="status-badge-label">{status.label()}</span>
        </span>
    }
}
