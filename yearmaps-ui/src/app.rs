//! App Root Component

use leptos::*;

use crate::pages::Gallery;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="app">
            <Gallery />
        </div>
    }
}
