mod common;

use common::{FakeCompletion, FakeFetcher, html_page};
use profiler::config::{FailureStyle, MergeMode, PipelineConfig};
use profiler::dataset::{Dataset, NOT_AVAILABLE, PROFILE_FIELDS, Record, SiteOutcome};
use profiler::pipeline::{PipelineContext, process_site, run};
use profiler::relevance::Keywords;
use tempfile::tempdir;

const PROFILE_REPLY: &str = r#"{"company_name": "Maison", "founded": "1856", "headquarters": "Paris"}"#;

fn maison() -> FakeFetcher {
    FakeFetcher::new()
        .page(
            "https://maison.example/",
            200,
            &html_page("Maison", r#"<a href="/about">Our house</a><a href="/shop">Shop</a>"#),
        )
        .page(
            "https://maison.example/about",
            200,
            &html_page("About", "<p>Founded in 1856 in Paris</p>"),
        )
}

fn context<'a>(
    fetcher: &'a FakeFetcher,
    completion: &'a FakeCompletion,
    keywords: &'a Keywords,
    config: &'a PipelineConfig,
) -> PipelineContext<'a> {
    PipelineContext {
        fetcher,
        completion,
        keywords,
        config,
    }
}

#[tokio::test]
async fn test_site_profile_extracted_from_about_page() {
    let fetcher = maison();
    let completion = FakeCompletion::replying(PROFILE_REPLY);
    let keywords = Keywords::static_set();
    let config = PipelineConfig::immediate();
    let ctx = context(&fetcher, &completion, &keywords, &config);

    let dataset = run(&["https://maison.example/"], &ctx).await;

    assert_eq!(dataset.len(), 1);
    let record = &dataset.records()[0];
    assert_eq!(record.website(), "https://maison.example/");
    assert_eq!(record.get("founded"), Some("1856"));
    assert_eq!(record.get("headquarters"), Some("Paris"));
    assert_eq!(record.get("company_name"), Some("Maison"));

    let prompts = completion.prompts.lock().unwrap();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("about https://maison.example/."));
    assert!(prompts[0].contains("--- Content from https://maison.example/about ---"));
    assert!(prompts[0].contains("Founded in 1856 in Paris"));
    assert!(!prompts[0].contains("/shop"));
}

#[tokio::test]
async fn test_blocked_site_gets_sentinel_row() {
    let fetcher = FakeFetcher::new().page(
        "https://guarded.example/",
        200,
        &html_page("Attention Required! | Cloudflare", "Sorry, you have been blocked"),
    );
    let completion = FakeCompletion::replying(PROFILE_REPLY);
    let keywords = Keywords::static_set();
    let config = PipelineConfig::immediate();
    let ctx = context(&fetcher, &completion, &keywords, &config);

    let outcome = process_site("https://guarded.example/", &ctx).await;
    assert_eq!(outcome, SiteOutcome::Unavailable);

    let dataset = run(&["https://guarded.example/"], &ctx).await;
    let record = &dataset.records()[0];
    assert_eq!(record.website(), "https://guarded.example/");
    for field in PROFILE_FIELDS {
        assert_eq!(record.get(field), Some(NOT_AVAILABLE));
    }
    assert_eq!(completion.calls(), 0);
}

#[tokio::test]
async fn test_forbidden_seed_row_is_exactly_the_sentinel() {
    let fetcher = FakeFetcher::new().page(
        "https://example.com",
        403,
        &html_page("403 Forbidden", "<h1>Access Denied</h1>"),
    );
    let completion = FakeCompletion::replying(PROFILE_REPLY);
    let keywords = Keywords::static_set();
    let config = PipelineConfig::immediate();
    let ctx = context(&fetcher, &completion, &keywords, &config);

    let dataset = run(&["https://example.com"], &ctx).await;

    assert_eq!(dataset.len(), 1);
    assert_eq!(dataset.records()[0], Record::sentinel("https://example.com"));
    assert_eq!(dataset.records()[0].keys().count(), 7);
    assert_eq!(fetcher.requested().len(), 1);
    assert_eq!(completion.calls(), 0);
}

#[tokio::test]
async fn test_rows_follow_input_order_despite_failures() {
    let fetcher = maison().page(
        "https://plain.example/",
        200,
        &html_page("Plain", r#"<a href="/company">Company</a>"#),
    );
    let completion = FakeCompletion::replying(PROFILE_REPLY);
    let keywords = Keywords::static_set();
    let config = PipelineConfig::immediate();
    let ctx = context(&fetcher, &completion, &keywords, &config);

    let sites = [
        "https://maison.example/",
        "https://unreachable.example/",
        "https://plain.example/",
    ];
    let dataset = run(&sites, &ctx).await;

    let websites: Vec<&str> = dataset.records().iter().map(|r| r.website()).collect();
    assert_eq!(websites, sites);
    assert_eq!(dataset.records()[1].get("founded"), Some(NOT_AVAILABLE));
    // plain.example's only link is unreachable, so its corpus is empty
    assert_eq!(dataset.records()[2].keys().count(), 1);
    assert_eq!(completion.calls(), 1);
}

#[tokio::test]
async fn test_empty_corpus_failure_styles() {
    let fetcher = FakeFetcher::new().page(
        "https://bare.example/",
        200,
        &html_page("Bare", r#"<a href="/shop">Shop</a>"#),
    );
    let completion = FakeCompletion::replying(PROFILE_REPLY);
    let keywords = Keywords::static_set();

    let quiet = PipelineConfig::immediate();
    let ctx = context(&fetcher, &completion, &keywords, &quiet);
    let dataset = run(&["https://bare.example/"], &ctx).await;
    assert_eq!(dataset.records()[0].keys().collect::<Vec<_>>(), vec!["Website"]);

    let loud = PipelineConfig::immediate().with_failure_style(FailureStyle::ErrorField);
    let ctx = context(&fetcher, &completion, &keywords, &loud);
    let dataset = run(&["https://bare.example/"], &ctx).await;
    assert_eq!(dataset.records()[0].get("error"), Some("No content available"));

    assert_eq!(completion.calls(), 0);
}

#[tokio::test]
async fn test_model_failure_recorded_as_error_field() {
    let fetcher = maison();
    let completion = FakeCompletion::failing();
    let keywords = Keywords::static_set();
    let config = PipelineConfig::immediate().with_failure_style(FailureStyle::ErrorField);
    let ctx = context(&fetcher, &completion, &keywords, &config);

    let dataset = run(&["https://maison.example/"], &ctx).await;

    let record = &dataset.records()[0];
    assert_eq!(record.get("error"), Some("Gemini AI request failed"));
    assert_eq!(record.get("founded"), None);
}

#[tokio::test]
async fn test_unparseable_reply_recorded_as_error_field() {
    let fetcher = maison();
    let completion = FakeCompletion::replying("Here you go: founded 1856, Paris.");
    let keywords = Keywords::static_set();
    let config = PipelineConfig::immediate().with_failure_style(FailureStyle::ErrorField);
    let ctx = context(&fetcher, &completion, &keywords, &config);

    let dataset = run(&["https://maison.example/"], &ctx).await;

    assert_eq!(dataset.records()[0].get("error"), Some("Invalid response from AI"));
}

#[tokio::test]
async fn test_repeated_runs_append_then_resolve_by_key() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dynamic_websites_data.csv");

    let fetcher = maison();
    let completion = FakeCompletion::replying(PROFILE_REPLY);
    let keywords = Keywords::dynamic_set();
    let config = PipelineConfig::immediate();
    let ctx = context(&fetcher, &completion, &keywords, &config);

    for _ in 0..2 {
        run(&["https://maison.example/"], &ctx)
            .await
            .save(&path, MergeMode::Append)
            .unwrap();
    }
    assert_eq!(Dataset::load(&path).unwrap().len(), 2);

    let total = run(&["https://maison.example/"], &ctx)
        .await
        .save(&path, MergeMode::ReplaceByKey)
        .unwrap();
    assert_eq!(total, 1);

    let loaded = Dataset::load(&path).unwrap();
    assert_eq!(loaded.records()[0].get("headquarters"), Some("Paris"));
}
