use anyhow::Result;
use profiler::{
    config::{Config, PipelineConfig},
    fetcher::BrowserFetcher,
    llm::GeminiClient,
    pipeline::{self, PipelineContext},
    relevance::Keywords,
    sites::{DYNAMIC_OUTPUT, DYNAMIC_SITES},
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    profiler::init_tracing();

    let config = Config::from_env()?;
    let pipeline_config = PipelineConfig::dynamic_defaults();

    let completion = GeminiClient::new(&config, pipeline_config.completion_timeout)?;
    let keywords = Keywords::dynamic_set();

    // One browser for the whole run, shut down when it goes out of scope.
    let fetcher = BrowserFetcher::launch(&pipeline_config)?;

    let ctx = PipelineContext {
        fetcher: &fetcher,
        completion: &completion,
        keywords: &keywords,
        config: &pipeline_config,
    };

    let dataset = pipeline::run(DYNAMIC_SITES, &ctx).await;
    drop(fetcher);

    let output = config
        .output_path()
        .cloned()
        .unwrap_or_else(|| DYNAMIC_OUTPUT.into());
    let total = dataset.save(&output, pipeline_config.merge_mode)?;

    info!("Scraping process completed. {} rows in '{}'.", total, output.display());
    Ok(())
}
