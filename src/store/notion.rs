//! Notion database used as the remote row store.
//!
//! Every column is a `rich_text` property named after the CSV column.

use crate::config::NotionSettings;
use crate::errors::{AppError, AppResult};
use crate::models::stored_row::StoredRow;
use crate::models::work_entry::WorkEntry;
use crate::store::RowStore;
use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

// ---------------------------
// Outgoing payloads
// ---------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextContent {
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RichTextItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<TextContent>,
    #[serde(default, skip_serializing)]
    pub plain_text: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RichTextProperty {
    pub rich_text: Vec<RichTextItem>,
}

impl RichTextProperty {
    fn of(value: &str) -> Self {
        Self {
            rich_text: vec![RichTextItem {
                text: Some(TextContent {
                    content: value.to_string(),
                }),
                plain_text: None,
            }],
        }
    }
}

/// Properties of a new page, one field per database column.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PageProperties {
    pub date: RichTextProperty,
    pub start_time: RichTextProperty,
    pub end_time: RichTextProperty,
    pub rest: RichTextProperty,
    pub work_time: RichTextProperty,
    pub content: RichTextProperty,
}

impl PageProperties {
    pub fn from_entry(entry: &WorkEntry) -> Self {
        let rec = entry.to_record();
        Self {
            date: RichTextProperty::of(&rec.date),
            start_time: RichTextProperty::of(&rec.start_time),
            end_time: RichTextProperty::of(&rec.end_time),
            rest: RichTextProperty::of(&rec.rest),
            work_time: RichTextProperty::of(&rec.work_time),
            content: RichTextProperty::of(&rec.content),
        }
    }
}

#[derive(Debug, Serialize)]
struct Parent<'a> {
    database_id: &'a str,
}

#[derive(Debug, Serialize)]
struct CreatePage<'a> {
    parent: Parent<'a>,
    properties: PageProperties,
}

#[derive(Debug, Serialize)]
struct QueryRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    start_cursor: Option<&'a str>,
    page_size: u32,
}

// ---------------------------
// Incoming payloads
// ---------------------------

#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub results: Vec<Page>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub properties: HashMap<String, PropertyValue>,
}

/// Only `rich_text` is read; other property types deserialize to `None`.
#[derive(Debug, Deserialize)]
pub struct PropertyValue {
    #[serde(default)]
    pub rich_text: Option<Vec<RichTextItem>>,
}

impl PropertyValue {
    fn first_text(&self) -> Option<String> {
        let item = self.rich_text.as_ref()?.first()?;
        item.text
            .as_ref()
            .map(|t| t.content.clone())
            .or_else(|| item.plain_text.clone())
            .filter(|v| !v.trim().is_empty())
    }
}

impl Page {
    fn text(&self, key: &str) -> Option<String> {
        self.properties.get(key).and_then(PropertyValue::first_text)
    }

    pub fn to_row(&self) -> StoredRow {
        StoredRow {
            date: self.text("date"),
            start_time: self.text("start_time"),
            end_time: self.text("end_time"),
            rest: self.text("rest"),
            work_time: self.text("work_time"),
            content: self.text("content"),
        }
    }
}

// ---------------------------
// Client
// ---------------------------

pub struct NotionClient {
    settings: NotionSettings,
    client: Client,
}

impl NotionClient {
    pub fn new(settings: NotionSettings) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self { settings, client })
    }

    fn post<B: Serialize>(&self, url: &str, body: &B) -> AppResult<reqwest::blocking::Response> {
        let resp = self
            .client
            .post(url)
            .header(AUTHORIZATION, format!("Bearer {}", self.settings.token))
            .header("Notion-Version", &self.settings.version)
            .header(CONTENT_TYPE, "application/json")
            .json(body)
            .send()?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().unwrap_or_default();
            return Err(AppError::RemoteStore(format!(
                "Notion API error ({}): {}",
                status, body
            )));
        }
        Ok(resp)
    }
}

impl RowStore for NotionClient {
    fn query_all(&mut self) -> AppResult<Vec<StoredRow>> {
        let url = format!(
            "{}/databases/{}/query",
            self.settings.api_url, self.settings.database_id
        );

        let mut rows = Vec::new();
        let mut cursor: Option<String> = None;
        loop {
            let req = QueryRequest {
                start_cursor: cursor.as_deref(),
                page_size: 100,
            };
            let page: QueryResponse = self.post(&url, &req)?.json()?;
            rows.extend(page.results.iter().map(Page::to_row));

            match (page.has_more, page.next_cursor) {
                (true, Some(next)) => cursor = Some(next),
                _ => break,
            }
        }

        Ok(rows)
    }

    fn create_row(&mut self, entry: &WorkEntry) -> AppResult<()> {
        let url = format!("{}/pages", self.settings.api_url);
        let body = CreatePage {
            parent: Parent {
                database_id: &self.settings.database_id,
            },
            properties: PageProperties::from_entry(entry),
        };
        self.post(&url, &body)?;
        Ok(())
    }
}
