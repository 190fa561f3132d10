//! Gallery Page
//!
//! Shows every published heat-map as a card, followed by the update time.

use leptos::*;

use crate::api;
use crate::components::{ImageCard, UpdateCard};
use crate::config::Endpoints;
use crate::state::gallery::{Card, GalleryState};

/// Gallery page component
#[component]
pub fn Gallery(
    /// Backend URIs, resolved from the build mode when omitted
    #[prop(optional)]
    endpoints: Option<Endpoints>,
) -> impl IntoView {
    let endpoints = endpoints.unwrap_or_else(Endpoints::current);
    let state = GalleryState::new();

    // Fetch both slots once on mount. The two requests run independently and
    // each one only ever writes its own signal.
    let api_uri = endpoints.api_uri.clone();
    let time_uri = endpoints.time_uri.clone();
    create_effect(move |_| {
        let api_uri = api_uri.clone();
        spawn_local(async move {
            if let Err(e) = state.apply_providers(api::fetch_providers(&api_uri).await) {
                web_sys::console::warn_1(&format!("Failed to fetch image list: {}", e).into());
            }
        });

        let time_uri = time_uri.clone();
        spawn_local(async move {
            if let Err(e) = state.apply_update_time(api::fetch_update_time(&time_uri).await) {
                web_sys::console::warn_1(&format!("Failed to fetch update time: {}", e).into());
            }
        });
    });

    let base_uri = endpoints.base_uri;

    view! {
        <main class="gallery">
            {move || {
                state.cards(&base_uri).into_iter().map(|card| match card {
                    Card::Image { src } => view! { <ImageCard src=src /> }.into_view(),
                    Card::Updated { text } => view! { <UpdateCard text=text /> }.into_view(),
                }).collect_view()
            }}
        </main>
    }
}
