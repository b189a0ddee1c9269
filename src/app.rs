//! Main application component
//!
//! The site is a single page with no routing; the root component simply
//! renders the landing page.

use leptos::prelude::*;

use crate::pages::Landing;

/// Root component of the landing site
#[component]
pub fn App() -> impl IntoView {
    view! { <Landing /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_component_exists() {
        // Compile-time test - if this compiles, the component is valid
        let _component = App;
    }
}
