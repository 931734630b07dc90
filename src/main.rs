use anyhow::Result;
use profiler::{
    config::{Config, PipelineConfig},
    fetcher::HttpFetcher,
    llm::GeminiClient,
    pipeline::{self, PipelineContext},
    relevance::Keywords,
    sites::{STATIC_OUTPUT, STATIC_SITES},
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    profiler::init_tracing();

    // Fatal before any site is touched.
    let config = Config::from_env()?;
    let pipeline_config = PipelineConfig::static_defaults();

    let fetcher = HttpFetcher::new(pipeline_config.request_timeout)?;
    let completion = GeminiClient::new(&config, pipeline_config.completion_timeout)?;
    let keywords = Keywords::static_set();

    let ctx = PipelineContext {
        fetcher: &fetcher,
        completion: &completion,
        keywords: &keywords,
        config: &pipeline_config,
    };

    let dataset = pipeline::run(STATIC_SITES, &ctx).await;

    let output = config
        .output_path()
        .cloned()
        .unwrap_or_else(|| STATIC_OUTPUT.into());
    dataset.save(&output, pipeline_config.merge_mode)?;

    info!("Extraction complete. Data saved in '{}'.", output.display());
    Ok(())
}
