//! Image Card Component

use leptos::*;

/// Card showing one heat-map image
#[component]
pub fn ImageCard(
    /// Image source URL
    #[prop(into)]
    src: String,
) -> impl IntoView {
    view! {
        <div class="card">
            <div class="card-body">
                <img class="card-image" src=src />
            </div>
        </div>
    }
}
