//! trendcolors - scrape the colors GitHub paints trending languages with.
//!
//! Walks the trending page for language names, finds a project per language
//! through search, and collects the language color swatches from each
//! project page into one mapping.

pub mod colors;
pub mod config;
pub mod errors;
pub mod extract;
pub mod fetch;
pub mod scrape;
pub mod throttle;
