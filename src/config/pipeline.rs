use std::time::Duration;

/// How the dataset is written at the end of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeMode {
    /// Replace any existing file with this run's rows.
    #[default]
    Overwrite,
    /// Read the existing file, append this run's rows, rewrite it.
    /// Re-processing a site produces a second row for it.
    Append,
    /// Like `Append`, but a row whose `Website` already exists replaces the
    /// older row in place.
    ReplaceByKey,
}

/// How an extraction failure is represented in the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailureStyle {
    /// No fields at all; the row only carries `Website`.
    #[default]
    Empty,
    /// A single `error` field describing what went wrong.
    ErrorField,
}

/// Pacing, timeouts and persistence policy for one run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Upper bound for a single static HTTP request.
    pub request_timeout: Duration,
    /// Upper bound for a single browser navigation.
    pub navigation_timeout: Duration,
    /// Upper bound for one completion call; large corpora are slow.
    pub completion_timeout: Duration,
    /// Chrome is shut down after this long without any browser activity.
    /// Must outlast a full site: aggregation plus the completion call.
    pub browser_idle_timeout: Duration,
    /// Wait after the seed page has navigated.
    pub seed_settle: Duration,
    /// Wait after each content page has navigated.
    pub page_settle: Duration,
    /// Number of "End" key presses on each content page.
    pub scroll_count: u32,
    /// Wait after each scroll.
    pub scroll_settle: Duration,
    /// Blocking pause after every site.
    pub inter_site_delay: Duration,
    pub merge_mode: MergeMode,
    pub failure_style: FailureStyle,
}

impl PipelineConfig {
    /// Values used by the plain HTTP strategy.
    pub fn static_defaults() -> Self {
        Self {
            request_timeout: Duration::from_secs(10),
            navigation_timeout: Duration::from_secs(30),
            completion_timeout: Duration::from_secs(120),
            browser_idle_timeout: Duration::from_secs(600),
            seed_settle: Duration::ZERO,
            page_settle: Duration::ZERO,
            scroll_count: 0,
            scroll_settle: Duration::ZERO,
            inter_site_delay: Duration::from_secs(2),
            merge_mode: MergeMode::Overwrite,
            failure_style: FailureStyle::Empty,
        }
    }

    /// Values used by the browser-render strategy.
    pub fn dynamic_defaults() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            navigation_timeout: Duration::from_secs(30),
            completion_timeout: Duration::from_secs(120),
            browser_idle_timeout: Duration::from_secs(600),
            seed_settle: Duration::from_secs(3),
            page_settle: Duration::from_secs(3),
            scroll_count: 2,
            scroll_settle: Duration::from_secs(2),
            inter_site_delay: Duration::from_secs(2),
            merge_mode: MergeMode::Append,
            failure_style: FailureStyle::ErrorField,
        }
    }

    /// No waiting anywhere. Timeouts stay bounded so a broken test server
    /// cannot hang a test.
    pub fn immediate() -> Self {
        Self {
            request_timeout: Duration::from_secs(5),
            navigation_timeout: Duration::from_secs(5),
            completion_timeout: Duration::from_secs(5),
            browser_idle_timeout: Duration::from_secs(60),
            seed_settle: Duration::ZERO,
            page_settle: Duration::ZERO,
            scroll_count: 0,
            scroll_settle: Duration::ZERO,
            inter_site_delay: Duration::ZERO,
            merge_mode: MergeMode::Overwrite,
            failure_style: FailureStyle::Empty,
        }
    }

    pub fn with_merge_mode(mut self, mode: MergeMode) -> Self {
        self.merge_mode = mode;
        self
    }

    pub fn with_failure_style(mut self, style: FailureStyle) -> Self {
        self.failure_style = style;
        self
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::static_defaults()
    }
}
