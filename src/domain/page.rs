//! Page state and its transition function.
//!
//! Every user action, timer tick and fetch result is a [`PageMsg`]. The
//! [`update`] function maps the current [`PageState`] and one message to the
//! next state plus an [`Effect`] the runtime has to carry out. It performs no
//! IO and reads no clocks, so any sequence of messages can be replayed in a
//! test.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local};
use serde::Deserialize;

use crate::domain::carousel::Carousel;
use crate::domain::content::{self, GalleryImage};
use crate::domain::happiness::Happiness;

/// The three incremental versions of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageVariant {
    /// One hero image, a like button and the info tabs.
    Classic,
    /// Auto-advancing gallery and a decaying happiness meter.
    Gallery,
    /// Remote fact and image, manual gallery navigation.
    #[default]
    Live,
}

impl PageVariant {
    pub fn shows_happiness(self) -> bool {
        !matches!(self, PageVariant::Classic)
    }

    pub fn decays(self) -> bool {
        self.shows_happiness()
    }

    pub fn auto_advances(self) -> bool {
        matches!(self, PageVariant::Gallery)
    }

    pub fn fetches_remote(self) -> bool {
        matches!(self, PageVariant::Live)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PageVariant::Classic => "classic",
            PageVariant::Gallery => "gallery",
            PageVariant::Live => "live",
        }
    }
}

impl fmt::Display for PageVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "classic" => Ok(PageVariant::Classic),
            "gallery" => Ok(PageVariant::Gallery),
            "live" => Ok(PageVariant::Live),
            other => Err(format!(
                "Unknown page variant: {} (expected classic, gallery or live)",
                other
            )),
        }
    }
}

/// What to do with a failed fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchErrorPolicy {
    /// Keep the previous value and show nothing.
    #[default]
    Silent,
    /// Keep the previous value and show the error in the status bar.
    Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Characteristics,
    Breeds,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Characteristics, Tab::Breeds];

    pub fn next(self) -> Self {
        match self {
            Tab::Characteristics => Tab::Breeds,
            Tab::Breeds => Tab::Characteristics,
        }
    }

    pub fn prev(self) -> Self {
        // Two tabs, so both directions land on the other one.
        self.next()
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Characteristics => 0,
            Tab::Breeds => 1,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Tab::Characteristics => "Characteristics",
            Tab::Breeds => "Popular Breeds",
        }
    }
}

/// Tunables that shape transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSettings {
    pub pet_step: u8,
    pub decay_step: u8,
    pub fetch_errors: FetchErrorPolicy,
    pub placeholder_image: String,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            pet_step: 10,
            decay_step: 5,
            fetch_errors: FetchErrorPolicy::Silent,
            placeholder_image: content::hero_image().url.to_string(),
        }
    }
}

/// A value obtained from a remote source, stamped with when it arrived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Remote {
    pub value: String,
    pub fetched_at: DateTime<Local>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageMsg {
    Pet,
    RequestFact,
    RequestImage,
    FactLoaded {
        fact: String,
        at: DateTime<Local>,
    },
    FactFailed(String),
    ImageLoaded {
        url: String,
        at: DateTime<Local>,
    },
    ImageFailed(String),
    DecayTick,
    CarouselTick,
    CarouselNext,
    CarouselPrev,
    NextTab,
    PrevTab,
    OpenImage,
}

/// Side effects requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    FetchFact,
    FetchImage,
    OpenUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    pub variant: PageVariant,
    pub settings: PageSettings,
    pub likes: u64,
    pub happiness: Happiness,
    pub carousel: Carousel,
    pub fact: Option<Remote>,
    pub image: Option<Remote>,
    pub tab: Tab,
    pub fact_error: Option<String>,
    pub image_error: Option<String>,
}

impl PageState {
    pub fn new(variant: PageVariant, settings: PageSettings, happiness: Happiness) -> Self {
        let gallery_len = match variant {
            PageVariant::Classic => 1,
            PageVariant::Gallery | PageVariant::Live => content::GALLERY.len(),
        };

        Self {
            variant,
            settings,
            likes: 0,
            happiness,
            carousel: Carousel::new(gallery_len),
            fact: None,
            image: None,
            tab: Tab::Characteristics,
            fact_error: None,
            image_error: None,
        }
    }

    /// The gallery picture currently under the carousel.
    pub fn gallery_image(&self) -> &'static GalleryImage {
        &content::GALLERY[self.carousel.index() % content::GALLERY.len()]
    }

    /// The remote image, or the placeholder while none has arrived.
    pub fn remote_image_url(&self) -> &str {
        self.image
            .as_ref()
            .map(|image| image.value.as_str())
            .unwrap_or(&self.settings.placeholder_image)
    }

    /// The URL the "open image" action targets.
    pub fn current_image_url(&self) -> &str {
        if self.variant.fetches_remote() {
            self.remote_image_url()
        } else {
            self.gallery_image().url
        }
    }

    /// The error to surface, if the policy allows surfacing one.
    pub fn visible_error(&self) -> Option<&str> {
        if self.settings.fetch_errors == FetchErrorPolicy::Silent {
            return None;
        }
        self.fact_error
            .as_deref()
            .or(self.image_error.as_deref())
    }
}

/// Apply one message to the page.
pub fn update(state: &PageState, msg: PageMsg) -> (PageState, Effect) {
    let mut next = state.clone();

    let effect = match msg {
        PageMsg::Pet => {
            next.likes = next.likes.saturating_add(1);
            next.happiness = next.happiness.raise(next.settings.pet_step);
            Effect::None
        }
        PageMsg::RequestFact if state.variant.fetches_remote() => Effect::FetchFact,
        PageMsg::RequestImage if state.variant.fetches_remote() => Effect::FetchImage,
        PageMsg::RequestFact | PageMsg::RequestImage => Effect::None,
        PageMsg::FactLoaded { fact, at } => {
            next.fact = Some(Remote {
                value: fact,
                fetched_at: at,
            });
            next.fact_error = None;
            Effect::None
        }
        PageMsg::FactFailed(error) => {
            if next.settings.fetch_errors == FetchErrorPolicy::Status {
                next.fact_error = Some(format!("Could not fetch a fact: {}", error));
            }
            Effect::None
        }
        PageMsg::ImageLoaded { url, at } => {
            next.image = Some(Remote {
                value: url,
                fetched_at: at,
            });
            next.image_error = None;
            Effect::None
        }
        PageMsg::ImageFailed(error) => {
            if next.settings.fetch_errors == FetchErrorPolicy::Status {
                next.image_error = Some(format!("Could not fetch an image: {}", error));
            }
            Effect::None
        }
        PageMsg::DecayTick => {
            next.happiness = next.happiness.lower(next.settings.decay_step);
            Effect::None
        }
        PageMsg::CarouselTick | PageMsg::CarouselNext => {
            next.carousel = next.carousel.advance();
            Effect::None
        }
        PageMsg::CarouselPrev => {
            next.carousel = next.carousel.back();
            Effect::None
        }
        PageMsg::NextTab => {
            next.tab = next.tab.next();
            Effect::None
        }
        PageMsg::PrevTab => {
            next.tab = next.tab.prev();
            Effect::None
        }
        PageMsg::OpenImage => Effect::OpenUrl(state.current_image_url().to_string()),
    };

    (next, effect)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn live_page(happiness: u8) -> PageState {
        PageState::new(
            PageVariant::Live,
            PageSettings::default(),
            Happiness::new(happiness),
        )
    }

    fn apply(state: PageState, msgs: impl IntoIterator<Item = PageMsg>) -> PageState {
        msgs.into_iter().fold(state, |s, msg| update(&s, msg).0)
    }

    fn fact_loaded(text: &str) -> PageMsg {
        PageMsg::FactLoaded {
            fact: text.to_string(),
            at: Local::now(),
        }
    }

    #[test]
    fn test_pet_increments_likes_and_happiness() {
        let (state, effect) = update(&live_page(50), PageMsg::Pet);
        assert_eq!(state.likes, 1);
        assert_eq!(state.happiness.level(), 60);
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn test_pet_sequences_stay_in_bounds() {
        for start in [0, 37, 95, 100] {
            let mut state = live_page(start);
            for n in 1..=25u64 {
                state = update(&state, PageMsg::Pet).0;
                assert_eq!(state.likes, n);
                assert!(state.happiness.level() <= 100);
            }
            assert_eq!(state.happiness.level(), 100);
        }
    }

    #[test]
    fn test_decay_reaches_zero_and_stays() {
        let state = update(&live_page(5), PageMsg::DecayTick).0;
        assert_eq!(state.happiness.level(), 0);
        let state = update(&state, PageMsg::DecayTick).0;
        assert_eq!(state.happiness.level(), 0);
    }

    #[test]
    fn test_decay_is_monotonic() {
        let mut state = live_page(100);
        let mut previous = state.happiness.level();
        for _ in 0..30 {
            state = update(&state, PageMsg::DecayTick).0;
            let level = state.happiness.level();
            assert_eq!(level, previous.saturating_sub(5));
            previous = level;
        }
        assert_eq!(previous, 0);
    }

    #[test]
    fn test_carousel_ticks_cycle() {
        let mut state = PageState::new(
            PageVariant::Gallery,
            PageSettings::default(),
            Happiness::default(),
        );
        let mut indices = Vec::new();
        for _ in 0..3 {
            state = update(&state, PageMsg::CarouselTick).0;
            indices.push(state.carousel.index());
        }
        assert_eq!(indices, vec![1, 2, 0]);
    }

    #[test]
    fn test_manual_carousel_navigation() {
        let state = apply(live_page(50), [PageMsg::CarouselPrev]);
        assert_eq!(state.carousel.index(), content::GALLERY.len() - 1);
        let state = apply(state, [PageMsg::CarouselNext]);
        assert_eq!(state.carousel.index(), 0);
    }

    #[test]
    fn test_request_emits_fetch_effects_only_when_live() {
        assert_eq!(update(&live_page(50), PageMsg::RequestFact).1, Effect::FetchFact);
        assert_eq!(update(&live_page(50), PageMsg::RequestImage).1, Effect::FetchImage);

        let classic = PageState::new(
            PageVariant::Classic,
            PageSettings::default(),
            Happiness::default(),
        );
        assert_eq!(update(&classic, PageMsg::RequestFact).1, Effect::None);
        assert_eq!(update(&classic, PageMsg::RequestImage).1, Effect::None);
    }

    #[test]
    fn test_request_does_not_touch_state() {
        let before = apply(live_page(50), [fact_loaded("old")]);
        let (after, _) = update(&before, PageMsg::RequestFact);
        assert_eq!(before, after);
    }

    #[test]
    fn test_fact_success_then_failure_keeps_text() {
        let state = apply(live_page(50), [fact_loaded("Cats sleep 70% of their lives")]);
        assert_eq!(
            state.fact.as_ref().map(|f| f.value.as_str()),
            Some("Cats sleep 70% of their lives")
        );

        let state = apply(state, [PageMsg::FactFailed("timeout".into())]);
        assert_eq!(
            state.fact.as_ref().map(|f| f.value.as_str()),
            Some("Cats sleep 70% of their lives")
        );
        assert_eq!(state.visible_error(), None);
    }

    #[test]
    fn test_each_success_replaces_value() {
        let state = apply(live_page(50), [fact_loaded("first"), fact_loaded("second")]);
        assert_eq!(state.fact.map(|f| f.value), Some("second".to_string()));
    }

    #[test]
    fn test_failure_before_any_success_leaves_field_absent() {
        let state = apply(
            live_page(50),
            [
                PageMsg::FactFailed("dns".into()),
                PageMsg::ImageFailed("dns".into()),
            ],
        );
        assert!(state.fact.is_none());
        assert!(state.image.is_none());
        assert_eq!(state.remote_image_url(), state.settings.placeholder_image);
    }

    #[test]
    fn test_status_policy_surfaces_and_clears_errors() {
        let settings = PageSettings {
            fetch_errors: FetchErrorPolicy::Status,
            ..PageSettings::default()
        };
        let state = PageState::new(PageVariant::Live, settings, Happiness::default());

        let state = apply(state, [PageMsg::ImageFailed("503".into())]);
        assert_eq!(state.visible_error(), Some("Could not fetch an image: 503"));

        let state = apply(
            state,
            [PageMsg::ImageLoaded {
                url: "https://cdn2.thecatapi.com/images/x.jpg".into(),
                at: Local::now(),
            }],
        );
        assert_eq!(state.visible_error(), None);
        assert_eq!(state.remote_image_url(), "https://cdn2.thecatapi.com/images/x.jpg");
    }

    #[test]
    fn test_open_image_targets_displayed_image() {
        let gallery = PageState::new(
            PageVariant::Gallery,
            PageSettings::default(),
            Happiness::default(),
        );
        let gallery = apply(gallery, [PageMsg::CarouselTick]);
        assert_eq!(
            update(&gallery, PageMsg::OpenImage).1,
            Effect::OpenUrl(content::GALLERY[1].url.to_string())
        );

        let live = live_page(50);
        assert_eq!(
            update(&live, PageMsg::OpenImage).1,
            Effect::OpenUrl(live.settings.placeholder_image.clone())
        );
    }

    #[test]
    fn test_tabs_wrap() {
        let state = apply(live_page(50), [PageMsg::NextTab]);
        assert_eq!(state.tab, Tab::Breeds);
        let state = apply(state, [PageMsg::NextTab]);
        assert_eq!(state.tab, Tab::Characteristics);
        let state = apply(state, [PageMsg::PrevTab]);
        assert_eq!(state.tab, Tab::Breeds);
    }

    #[test]
    fn test_variant_from_str() {
        assert_eq!("Gallery".parse::<PageVariant>(), Ok(PageVariant::Gallery));
        assert_eq!("live".parse::<PageVariant>(), Ok(PageVariant::Live));
        assert!("mobile".parse::<PageVariant>().is_err());
    }

    #[test]
    fn test_classic_has_single_image() {
        let classic = PageState::new(
            PageVariant::Classic,
            PageSettings::default(),
            Happiness::default(),
        );
        let classic = apply(classic, [PageMsg::CarouselTick, PageMsg::CarouselTick]);
        assert_eq!(classic.carousel.index(), 0);
        assert_eq!(classic.gallery_image(), content::hero_image());
    }
}
