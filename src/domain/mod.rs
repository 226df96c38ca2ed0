pub mod carousel;
pub mod content;
pub mod happiness;
pub mod page;

pub use carousel::Carousel;
pub use happiness::Happiness;
pub use page::{
    update, Effect, FetchErrorPolicy, PageMsg, PageSettings, PageState, PageVariant, Remote, Tab,
};
