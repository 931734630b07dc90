#![allow(dead_code)]

use async_trait::async_trait;
use profiler::fetcher::{FetchError, Fetcher, PageKind, PageResponse};
use profiler::llm::{Completion, CompletionError};
use reqwest::StatusCode;
use std::collections::HashMap;
use std::sync::Mutex;
use url::Url;

/// Serves canned pages by URL; unknown URLs fail like a dead host.
#[derive(Default)]
pub struct FakeFetcher {
    pages: HashMap<String, (u16, String)>,
    pub requests: Mutex<Vec<(String, PageKind)>>,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, status: u16, body: &str) -> Self {
        self.pages.insert(url.to_string(), (status, body.to_string()));
        self
    }

    pub fn requested(&self) -> Vec<(String, PageKind)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Fetcher for FakeFetcher {
    async fn fetch(&self, url: &str, kind: PageKind) -> Result<PageResponse, FetchError> {
        self.requests.lock().unwrap().push((url.to_string(), kind));
        let parsed = Url::parse(url)?;
        match self.pages.get(url) {
            Some((status, body)) => Ok(PageResponse::new(
                parsed,
                StatusCode::from_u16(*status).unwrap(),
                body.clone(),
            )),
            None => Err(FetchError::Connect(format!("no route to {}", url))),
        }
    }
}

/// Returns a fixed reply and remembers every prompt.
pub struct FakeCompletion {
    reply: Option<String>,
    pub prompts: Mutex<Vec<String>>,
}

impl FakeCompletion {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Some(text.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl Completion for FakeCompletion {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply.clone().ok_or(CompletionError::EmptyResponse)
    }
}

pub fn html_page(title: &str, body: &str) -> String {
    format!("<!DOCTYPE html><html><head><title>{title}</title></head><body>{body}</body></html>")
}
