//! Gallery State
//!
//! The two result slots filled by the gallery fetches, and the card model
//! rendered from them.

use leptos::*;

/// Label of the trailing card, "updated at"
pub const UPDATED_LABEL: &str = "更新于";

/// One heat-map entry from the image list, field 2 is the image path
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(transparent)]
pub struct ProviderRecord(pub Vec<String>);

impl ProviderRecord {
    pub fn image_path(&self) -> Option<&str> {
        self.0.get(2).map(String::as_str)
    }
}

/// View state owned by a single gallery
#[derive(Clone, Copy)]
pub struct GalleryState {
    /// Records in server response order
    pub providers: RwSignal<Vec<ProviderRecord>>,
    /// Update time exactly as served
    pub update_time: RwSignal<String>,
}

impl GalleryState {
    /// Both slots start empty
    pub fn new() -> Self {
        Self {
            providers: create_rw_signal(Vec::new()),
            update_time: create_rw_signal(String::new()),
        }
    }

    /// Store a finished image list fetch.
    ///
    /// An error leaves the slot untouched and is handed back to the caller.
    pub fn apply_providers(&self, result: Result<Vec<ProviderRecord>, String>) -> Result<(), String> {
        let providers = result?;
        self.providers.set(providers);
        Ok(())
    }

    /// Store a finished update time fetch, same contract as [`Self::apply_providers`]
    pub fn apply_update_time(&self, result: Result<String, String>) -> Result<(), String> {
        let update_time = result?;
        self.update_time.set(update_time);
        Ok(())
    }

    /// Cards for the current contents of both slots
    pub fn cards(&self, base_uri: &str) -> Vec<Card> {
        self.providers
            .with(|providers| self.update_time.with(|time| cards(base_uri, providers, time)))
    }
}

/// A rendered gallery card
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Card {
    /// Heat-map image
    Image { src: String },
    /// Trailing update time card
    Updated { text: String },
}

/// Source URL of a record's image.
///
/// A record without an image path still yields a URL, which renders as a
/// broken image.
pub fn image_src(base_uri: &str, record: &ProviderRecord) -> String {
    format!("{}/{}", base_uri, record.image_path().unwrap_or_default())
}

pub fn updated_text(update_time: &str) -> String {
    format!("{} {}", UPDATED_LABEL, update_time)
}

/// One image card per record in order, then the update time card
pub fn cards(base_uri: &str, providers: &[ProviderRecord], update_time: &str) -> Vec<Card> {
    providers
        .iter()
        .map(|record| Card::Image {
            src: image_src(base_uri, record),
        })
        .chain(std::iter::once(Card::Updated {
            text: updated_text(update_time),
        }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::{parse_providers, parse_update_time};
    use crate::config::{BuildMode, Endpoints};

    fn record(fields: &[&str]) -> ProviderRecord {
        ProviderRecord(fields.iter().map(|f| f.to_string()).collect())
    }

    fn image_count(cards: &[Card]) -> usize {
        cards.iter().filter(|c| matches!(c, Card::Image { .. })).count()
    }

    #[test]
    fn test_two_images_and_update_time() {
        let base = Endpoints::resolve(BuildMode::Development).base_uri;
        let providers =
            parse_providers(r#"[["a","b","imgs/1.png"],["a","b","imgs/2.png"]]"#).unwrap();
        let update = parse_update_time(r#""2024-01-01""#).unwrap();

        assert_eq!(
            cards(&base, &providers, &update),
            vec![
                Card::Image { src: "http://localhost:5000/imgs/1.png".to_string() },
                Card::Image { src: "http://localhost:5000/imgs/2.png".to_string() },
                Card::Updated { text: "更新于 2024-01-01".to_string() },
            ]
        );
    }

    #[test]
    fn test_empty_list_and_blank_time() {
        let providers = parse_providers("[]").unwrap();
        let update = parse_update_time(r#""""#).unwrap();

        assert_eq!(
            cards("", &providers, &update),
            vec![Card::Updated { text: "更新于 ".to_string() }]
        );
    }

    #[test]
    fn test_failed_list_keeps_initial_state() {
        let runtime = create_runtime();
        let state = GalleryState::new();

        let err = state.apply_providers(Err("Network error: connection refused".to_string()));
        assert!(err.is_err());
        state.apply_update_time(parse_update_time(r#""x""#)).unwrap();

        assert!(state.providers.get_untracked().is_empty());
        assert_eq!(state.update_time.get_untracked(), "x");

        let cards = state.cards("");
        assert_eq!(image_count(&cards), 0);
        assert_eq!(cards, vec![Card::Updated { text: "更新于 x".to_string() }]);

        runtime.dispose();
    }

    #[test]
    fn test_failed_time_keeps_list() {
        let runtime = create_runtime();
        let state = GalleryState::new();

        // Completion order does not matter, each result only touches its own slot
        state.apply_update_time(parse_update_time("not json")).unwrap_err();
        state
            .apply_providers(parse_providers(r#"[["a","b","imgs/1.png"]]"#))
            .unwrap();

        assert_eq!(
            state.cards(""),
            vec![
                Card::Image { src: "/imgs/1.png".to_string() },
                Card::Updated { text: "更新于 ".to_string() },
            ]
        );

        runtime.dispose();
    }

    #[test]
    fn test_initial_state_renders_blank_time_only() {
        let runtime = create_runtime();
        let state = GalleryState::new();

        assert_eq!(state.cards("http://localhost:5000"), vec![Card::Updated { text: "更新于 ".to_string() }]);

        runtime.dispose();
    }

    #[test]
    fn test_image_count_matches_records() {
        for n in 0..5 {
            let providers: Vec<_> = (0..n)
                .map(|i| {
                    let path = format!("images/{}.png", i);
                    record(&["id", "name", path.as_str()])
                })
                .collect();
            let cards = cards("", &providers, "t");
            assert_eq!(image_count(&cards), n);
            assert_eq!(cards.len(), n + 1);
        }
    }

    #[test]
    fn test_image_src_is_base_slash_path() {
        let providers = vec![
            record(&["github", "GITHUB", "images/github.png"]),
            record(&["x", "y", "a b/ü.svg", "extra"]),
        ];
        let cards = cards("https://maps.example", &providers, "");

        assert_eq!(cards[0], Card::Image { src: "https://maps.example/images/github.png".to_string() });
        assert_eq!(cards[1], Card::Image { src: "https://maps.example/a b/ü.svg".to_string() });
    }

    #[test]
    fn test_update_text_is_verbatim() {
        let update = "2024年1月1日 08:00";
        assert_eq!(updated_text(update), format!("更新于 {}", update));
    }

    #[test]
    fn test_short_record_renders_broken_image() {
        let providers = vec![record(&["only", "two"])];
        let cards = cards("", &providers, "");
        assert_eq!(cards[0], Card::Image { src: "/".to_string() });
        assert_eq!(image_count(&cards), 1);
    }

    #[test]
    fn test_rerender_is_identical() {
        let providers = vec![record(&["a", "b", "imgs/1.png"])];
        let first = cards("", &providers, "2024-01-01");
        let second = cards("", &providers, "2024-01-01");
        assert_eq!(first, second);
        assert_eq!(providers, vec![record(&["a", "b", "imgs/1.png"])]);
    }
}
