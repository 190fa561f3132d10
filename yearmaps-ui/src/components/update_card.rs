//! Update Card Component

use leptos::*;

/// Trailing card with the last update time
#[component]
pub fn UpdateCard(
    #[prop(into)]
    text: String,
) -> impl IntoView {
    view! {
        <div class="card card-updated">
            <div class="card-body">
                <p>{text}</p>
            </div>
        </div>
    }
}
