//! Browser-rendered fetching for JavaScript-heavy sites.
//!
//! One headless Chrome process and one tab serve the whole run, so cookies
//! and storage carry over from site to site. headless_chrome is blocking;
//! every navigation runs on the blocking pool.
//!
//! The evasion steps (user agent override, hiding `navigator.webdriver`,
//! disabling the automation-controlled blink feature) live here and only
//! here. The rest of the pipeline sees a plain [`Fetcher`].

use crate::config::PipelineConfig;
use crate::fetcher::{
    Fetcher,
    client::DESKTOP_USER_AGENT,
    errors::FetchError,
    types::{PageKind, PageResponse},
};
use async_trait::async_trait;
use headless_chrome::protocol::cdp::Page;
use headless_chrome::{Browser, LaunchOptions, Tab};
use reqwest::StatusCode;
use std::ffi::OsStr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::{debug, info, instrument};

const HIDE_WEBDRIVER_SCRIPT: &str =
    "Object.defineProperty(navigator, 'webdriver', { get: () => undefined })";

const RESPONSE_HANDLER_NAME: &str = "profiler_document_status";

/// Timing knobs copied out of [`PipelineConfig`] so they can move into the
/// blocking task.
#[derive(Debug, Clone)]
struct RenderTiming {
    seed_settle: Duration,
    page_settle: Duration,
    scroll_count: u32,
    scroll_settle: Duration,
}

pub struct BrowserFetcher {
    // Dropping the browser kills the Chrome process.
    _browser: Browser,
    tab: Arc<Tab>,
    document_status: Arc<Mutex<Option<u16>>>,
    timing: RenderTiming,
}

impl BrowserFetcher {
    /// Launch Chrome and open the shared tab.
    ///
    /// The sandbox is disabled inside containers (detected via `/.dockerenv`
    /// or `PROFILER_CONTAINER`). `CHROME_PATH` selects a specific binary.
    pub fn launch(config: &PipelineConfig) -> Result<Self, FetchError> {
        let is_container = std::env::var("PROFILER_CONTAINER").is_ok()
            || std::path::Path::new("/.dockerenv").exists();
        let chrome_path = std::env::var("CHROME_PATH").ok().map(std::path::PathBuf::from);

        let options = LaunchOptions::default_builder()
            .headless(true)
            .sandbox(!is_container)
            .path(chrome_path)
            .window_size(Some((1366, 900)))
            .idle_browser_timeout(config.browser_idle_timeout)
            .args(vec![
                OsStr::new("--disable-blink-features=AutomationControlled"),
                OsStr::new("--disable-http2"),
                OsStr::new("--disable-dev-shm-usage"),
                OsStr::new("--disable-gpu"),
            ])
            .build()
            .map_err(|e| FetchError::Browser(format!("Failed to build Chrome launch options: {}", e)))?;

        let browser = Browser::new(options)
            .map_err(|e| FetchError::Browser(format!("Failed to launch headless Chrome: {}", e)))?;

        let tab = browser
            .new_tab()
            .map_err(|e| FetchError::Browser(format!("Failed to create browser tab: {}", e)))?;

        tab.set_default_timeout(config.navigation_timeout);
        tab.set_user_agent(DESKTOP_USER_AGENT, Some("en-US,en;q=0.9"), None)
            .map_err(|e| FetchError::Browser(format!("Failed to override user agent: {}", e)))?;

        // Must be in place before the first navigation so page scripts never
        // see the real flag.
        tab.call_method(Page::AddScriptToEvaluateOnNewDocument {
            source: HIDE_WEBDRIVER_SCRIPT.to_string(),
            world_name: None,
            include_command_line_api: None,
            run_immediately: None,
        })
        .map_err(|e| FetchError::Browser(format!("Failed to install webdriver override: {}", e)))?;

        // The first HTML response after a navigation starts is the document
        // itself; later ones are frames.
        let document_status = Arc::new(Mutex::new(None));
        let status_slot = document_status.clone();
        tab.register_response_handling(
            RESPONSE_HANDLER_NAME,
            Box::new(move |event_params, _fetch_body| {
                let resp = &event_params.response;
                if !resp.mime_type.contains("html") {
                    return;
                }
                if let Ok(mut slot) = status_slot.lock()
                    && slot.is_none()
                {
                    *slot = Some(resp.status as u16);
                }
            }),
        )
        .map_err(|e| FetchError::Browser(format!("Failed to register response handler: {}", e)))?;

        info!(container = is_container, "headless browser ready");

        Ok(Self {
            _browser: browser,
            tab,
            document_status,
            timing: RenderTiming {
                seed_settle: config.seed_settle,
                page_settle: config.page_settle,
                scroll_count: config.scroll_count,
                scroll_settle: config.scroll_settle,
            },
        })
    }
}

#[async_trait]
impl Fetcher for BrowserFetcher {
    #[instrument(skip_all, fields(url = %url, kind = ?kind))]
    async fn fetch(&self, url: &str, kind: PageKind) -> Result<PageResponse, FetchError> {
        let parsed_url = url::Url::parse(url)?;

        if let Ok(mut slot) = self.document_status.lock() {
            *slot = None;
        }

        let tab = self.tab.clone();
        let timing = self.timing.clone();
        let target = parsed_url.to_string();

        let (html, final_url) = tokio::task::spawn_blocking(move || render(&tab, &target, kind, &timing))
            .await
            .map_err(|e| FetchError::Browser(format!("render task panicked: {}", e)))??;

        let status = self
            .document_status
            .lock()
            .ok()
            .and_then(|slot| *slot)
            .and_then(|code| StatusCode::from_u16(code).ok())
            // No network event seen (served from cache, or about:blank).
            .unwrap_or(StatusCode::OK);

        let url_final = url::Url::parse(&final_url).unwrap_or(parsed_url);
        debug!(status = %status, chars = html.len(), "rendered");

        Ok(PageResponse::new(url_final, status, html))
    }
}

fn render(
    tab: &Tab,
    url: &str,
    kind: PageKind,
    timing: &RenderTiming,
) -> Result<(String, String), FetchError> {
    tab.navigate_to(url)
        .map_err(|e| FetchError::Browser(format!("Failed to navigate to {}: {}", url, e)))?;

    tab.wait_until_navigated().map_err(|e| {
        if e.to_string().to_lowercase().contains("timeout") {
            FetchError::RequestTimeout
        } else {
            FetchError::Browser(format!("Page failed to load: {}", e))
        }
    })?;

    match kind {
        PageKind::Seed => std::thread::sleep(timing.seed_settle),
        PageKind::Content => std::thread::sleep(timing.page_settle),
    }

    if kind == PageKind::Content {
        for _ in 0..timing.scroll_count {
            if let Err(e) = tab.press_key("End") {
                debug!("scroll failed: {}", e);
                break;
            }
            std::thread::sleep(timing.scroll_settle);
        }
    }

    let html = tab
        .get_content()
        .map_err(|e| FetchError::Browser(format!("Failed to get page content: {}", e)))?;

    Ok((html, tab.get_url()))
}
