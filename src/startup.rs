//! src/startup.rs
use crate::configuration::Settings;
use crate::fetcher::TextFetcher;
use crate::pipeline::WordCountPipeline;
use crate::report::top_words;
use std::time::Duration;

/// Wires fetch, the map/shuffle/reduce pipeline, and top-K selection.
/// Returns `None` when the fetch failed; the pipeline never runs on absent
/// text, and the failure has already been logged at ERROR level.
#[tracing::instrument(name = "Run word frequency", skip_all, fields(url = %settings.source.url))]
pub async fn run_word_frequency(
    settings: &Settings,
) -> Result<Option<Vec<(String, u64)>>, anyhow::Error> {
    let fetcher = TextFetcher::new(Duration::from_secs(settings.source.timeout_seconds))?;
    let Some(text) = fetcher.fetch_or_none(&settings.source.url).await else {
        return Ok(None);
    };

    let pipeline = WordCountPipeline::new(settings.pool.workers)?;
    let counts = pipeline.run(&text);
    tracing::info!(distinct_words = counts.len(), "Word count pipeline finished");

    Ok(Some(top_words(&counts, settings.report.top_words)))
}
