//! HTML extraction for the three GitHub pages the scraper walks.
//!
//! Each function takes a raw document and returns owned data, so the parsed
//! tree never outlives the call.

use crate::colors::LanguageColors;
use crate::errors::{Result, ScrapeError};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info};

/// Language links inside the trending page's filterable language menu.
pub const LANGUAGE_MENU_SELECTOR: &str =
    ".select-menu-list [data-filterable-for] .select-menu-item a";

/// Repository name links on a search results page.
pub const PROJECT_LINK_SELECTOR: &str = ".repolist-name a";

/// Language color swatches on a project page.
pub const LANGUAGE_COLOR_SELECTOR: &str = "span.language-color";

/// Everything between `background-color:` and the first `"` or `;`.
static BACKGROUND_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"background-color:(.*?)[";]"#).expect("valid regex"));

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| ScrapeError::InvalidSelector(format!("{}: {}", css, e)).into())
}

/// First text node under the element, in document order, untrimmed.
fn first_text(element: &ElementRef<'_>) -> Option<String> {
    element.text().next().map(str::to_string)
}

/// Pull the color value out of an inline style declaration.
///
/// Returns `None` when there is no terminated `background-color:` entry.
pub fn background_color(style: &str) -> Option<&str> {
    BACKGROUND_COLOR
        .captures(style)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Language names listed on the trending page, in document order.
pub fn parse_languages(html: &str) -> Result<Vec<String>> {
    let document = Html::parse_document(html);
    let menu_item = selector(LANGUAGE_MENU_SELECTOR)?;

    Ok(document
        .select(&menu_item)
        .filter_map(|element| first_text(&element))
        .collect())
}

/// The first project listed on a search results page.
///
/// # Errors
///
/// [`ScrapeError::ProjectNotFound`] when no repository link is present, or
/// the first one carries no text.
pub fn parse_first_project(html: &str, language: &str) -> Result<String> {
    let document = Html::parse_document(html);
    let project_link = selector(PROJECT_LINK_SELECTOR)?;

    let found = document
        .select(&project_link)
        .next()
        .and_then(|element| first_text(&element));

    found.ok_or_else(|| ScrapeError::ProjectNotFound(language.to_string()).into())
}

/// Language to color pairs painted on a project page.
pub fn parse_language_colors(html: &str) -> Result<LanguageColors> {
    let document = Html::parse_document(html);
    let swatch = selector(LANGUAGE_COLOR_SELECTOR)?;

    let mut colors = LanguageColors::new();
    for element in document.select(&swatch) {
        let Some(language) = first_text(&element) else {
            continue;
        };
        let Some(color) = element.value().attr("style").and_then(background_color) else {
            debug!("No background color for {}", language);
            continue;
        };
        info!("Found color for {}: {}", language, color);
        colors.insert(language, color.to_string());
    }

    Ok(colors)
}
