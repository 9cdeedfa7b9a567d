// src/web/page.rs

use anyhow::{Context, Result};
use askama::Template;

use crate::tables::SportsTablesResponse;

#[derive(Template)]
#[template(path = "index.html")]
struct IndexPage<'a> {
    data: &'a SportsTablesResponse,
}

/// Server-rendered landing page showing the three tables. Output is
/// HTML-escaped by the template engine.
pub fn render_index(data: &SportsTablesResponse) -> Result<String> {
    IndexPage { data }.render().context("rendering index page")
}
