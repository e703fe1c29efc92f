//! The scraping pipeline: trending languages, a project per language, and
//! the colors painted on each project's page.

use crate::colors::LanguageColors;
use crate::config::Config;
use crate::errors::Result;
use crate::extract;
use crate::fetch::PageFetcher;
use tracing::{error, info, instrument};

/// Drives the three scraping stages over a [`PageFetcher`].
pub struct ColorScraper<F> {
    config: Config,
    fetcher: F,
}

impl<F: PageFetcher> ColorScraper<F> {
    pub fn new(config: Config, fetcher: F) -> Self {
        Self { config, fetcher }
    }

    /// The underlying page source
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Languages listed on the trending page, duplicates included.
    #[instrument(skip(self))]
    pub async fn languages(&self) -> Result<Vec<String>> {
        let html = self.fetcher.fetch(&self.config.trending_url).await?;
        let languages = extract::parse_languages(&html)?;
        info!("Found {} languages", languages.len());
        Ok(languages)
    }

    /// First project the search page lists for `language`.
    #[instrument(skip(self))]
    pub async fn find_project(&self, language: &str) -> Result<String> {
        let url = self.config.search_url_for(language)?;
        let html = self.fetcher.fetch(&url).await?;
        extract::parse_first_project(&html, language)
    }

    /// Language colors shown on the page of `project` (`owner/repo`).
    #[instrument(skip(self))]
    pub async fn project_colors(&self, project: &str) -> Result<LanguageColors> {
        let url = self.config.project_url_for(project);
        let html = self.fetcher.fetch(&url).await?;
        extract::parse_language_colors(&html)
    }

    /// Resolve a color for every trending language.
    ///
    /// Languages that already have a non-empty color are skipped without any
    /// request. The first failure aborts the whole run.
    pub async fn run(&self) -> Result<LanguageColors> {
        let languages = self
            .languages()
            .await
            .inspect_err(|e| error!("Could not fetch languages, {}", e))?;

        let mut colors = LanguageColors::new();
        for language in &languages {
            if colors.is_resolved(language) {
                info!("Color already found for {}, skipping", language);
                continue;
            }

            info!("Finding project for {}", language);
            let project = self
                .find_project(language)
                .await
                .inspect_err(|e| error!("Could not find project for {}, {}", language, e))?;
            info!("Found project for {}: {}", language, project);

            let project_colors = self
                .project_colors(&project)
                .await
                .inspect_err(|e| error!("Could not find colors for project {}, {}", project, e))?;
            colors.merge(project_colors);
        }

        info!("Resolved colors for {} languages", colors.len());
        Ok(colors)
    }
}
