use crate::binder::TemplateBinder;
use crate::cache::AssetCache;
use crate::fetcher::Fetcher;
use crate::parser::{PayloadParser, PAYLOAD_CACHE_NAME};
use crate::permutations;
use crate::resolver::SpeakerResolver;
use crate::traits::AssetSource;
use crate::types::{CardError, FetchConfig, Layout, Result, RunOptions};
use std::path::PathBuf;
use tracing::info;

/// One generator run: payload, speaker selection, permutations, cards.
pub struct LineupPipeline<S: AssetSource> {
    source: S,
    binder: TemplateBinder,
}

impl LineupPipeline<AssetCache> {
    pub fn new(layout: Layout, fetch_config: FetchConfig) -> Result<Self> {
        let fetcher = Fetcher::new(fetch_config)?;
        let cache = AssetCache::new(fetcher, layout.cache_dir);
        let binder = TemplateBinder::new(layout.template_dir, layout.output_dir);
        Ok(Self::with_source(cache, binder))
    }
}

impl<S: AssetSource> LineupPipeline<S> {
    pub fn with_source(source: S, binder: TemplateBinder) -> Self {
        Self { source, binder }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Run the whole generation and return the written files in
    /// permutation order. Any failure aborts the run; files written before
    /// the failure are left in place.
    pub async fn run(&self, options: &RunOptions) -> Result<Vec<PathBuf>> {
        let raw = self
            .source
            .fetch(PAYLOAD_CACHE_NAME, &options.sessionize_url, options.force_refresh)
            .await?;
        let payload = PayloadParser::parse(&raw)?;

        let selection = SpeakerResolver::resolve(&payload, &options.session_ids)?;
        if selection.is_empty() {
            return Err(CardError::NoSpeakers {
                session_ids: options.session_ids.clone(),
            });
        }
        info!(
            "Found {} speakers for {} sessions",
            selection.len(),
            options.session_ids.len()
        );

        let permutations = permutations::generate(selection.len(), options.permutations);
        info!(
            "Generating {} cards with the {} template",
            permutations.len(),
            options.style
        );

        self.binder
            .bind(
                &options.name,
                &selection,
                &permutations,
                options.style,
                &self.source,
                options.force_refresh,
            )
            .await
    }
}
