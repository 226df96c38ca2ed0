//! # Purrfect
//!
//! Purrfect Cat World as a terminal page: a hero picture or a rotating
//! gallery, a like button, a happiness meter that slowly decays, random cat
//! facts and pictures from two public APIs, and two tabs of cat trivia.
//!
//! ## Architecture
//!
//! ```text
//! input / timers / fetches → PageMsg → update() → PageState → render
//! ```
//!
//! Keys are mapped to messages by the [`tui`] loop. Timers and fetches run as
//! tokio tasks from [`scheduler`] and report back over a channel. Every
//! message goes through the pure [`domain::update`] function, and the
//! renderer draws whatever state comes out.
//!
//! ## Quick Start
//!
//! ```bash
//! # Open the page
//! purrfect tui
//!
//! # The first version: one picture and a like button
//! purrfect tui --variant classic
//!
//! # One fact, no UI
//! purrfect fact
//! ```

/// Application context and error handling.
pub mod app;

/// Command-line interface using clap.
///
/// - `tui [--variant]` - Open the page
/// - `fact` - Print one cat fact
/// - `image` - Print one cat picture URL
/// - `list [--breeds]` - Print the trivia lists
pub mod cli;

/// Configuration management.
///
/// Loads from `~/.config/purrfect/config.toml`: page behaviour, colors and
/// keybindings.
pub mod config;

/// Page state, messages and the transition function.
pub mod domain;

/// Remote fact and image sources.
///
/// - [`CatSource`](fetcher::CatSource): async trait for both reads
/// - [`HttpCatSource`](fetcher::http_fetcher::HttpCatSource): reqwest implementation
pub mod fetcher;

/// Cancellable timers and fetch tasks owned by a running page.
pub mod scheduler;

/// Terminal user interface built with ratatui.
pub mod tui;
