//! # Quote-of-the-Day Web Server
//!
//! A small HTTP front-end that renders the deterministic daily quote.
//! Quotes are cached in memory and re-read when the quote file's mtime
//! changes, so edits show up without a restart.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    fs,
    path::PathBuf,
    sync::{Arc, Mutex, PoisonError},
    time::SystemTime,
};

use anyhow::{Context, Result};
use axum::{extract::State, http::header, response::IntoResponse, routing::get, Router};
use chrono::Local;

use crate::{
    config::Settings,
    quote::{pick, Quote},
    store,
};

/// Shared server state: the quote file path and the mtime-keyed cache.
pub struct AppState {
    quote_file: PathBuf,
    cache: Mutex<QuoteCache>,
}

#[derive(Default)]
struct QuoteCache {
    quotes: Option<Arc<Vec<Quote>>>,
    mtime: Option<SystemTime>,
}

/// Starts the web server and blocks until it exits.
///
/// The listen address and port come from the settings file. The quote file
/// is loaded lazily on the first request.
pub fn run_server(settings: &Settings, quote_file: PathBuf) -> Result<()> {
    let addr = format!("{}:{}", settings.web_ip, settings.web_port);

    let state = Arc::new(AppState {
        quote_file,
        cache: Mutex::new(QuoteCache::default()),
    });

    let app = Router::new()
        .route("/", get(root_page))
        .route("/tags", get(tags_page))
        .with_state(state);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    runtime.block_on(async {
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;

        log::info!("quotedeck listening on http://{addr}");

        axum::serve(listener, app).await.context("Server error")
    })
}

async fn root_page(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    render(&state, false)
}

async fn tags_page(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    render(&state, true)
}

fn render(state: &AppState, show_tags: bool) -> impl IntoResponse {
    let date = Local::now().format("%A, %B %d, %Y").to_string();

    let html = cached_quotes(state).map_or_else(
        || unavailable_page(&date),
        |quotes| quote_page(&quotes, &date, show_tags),
    );

    ([(header::CONTENT_TYPE, "text/html; charset=utf-8")], html)
}

/// Returns the cached quote list, re-reading the file when its mtime has
/// changed since the last read. Read failures are logged and reported as
/// `None` so the handlers can render the unavailable page.
fn cached_quotes(state: &AppState) -> Option<Arc<Vec<Quote>>> {
    let mtime = fs::metadata(&state.quote_file)
        .and_then(|meta| meta.modified())
        .ok();

    let mut cache = state
        .cache
        .lock()
        .unwrap_or_else(PoisonError::into_inner);

    if cache.quotes.is_none() || cache.mtime != mtime {
        match store::read_quotes(&state.quote_file) {
            Ok(quotes) => {
                cache.quotes = Some(Arc::new(quotes));
                cache.mtime = mtime;
            }
            Err(err) => {
                log::error!(
                    "unable to read quote file '{}': {err}",
                    state.quote_file.display()
                );
                cache.quotes = None;
                cache.mtime = None;
                return None;
            }
        }
    }

    cache.quotes.clone()
}

fn quote_page(quotes: &[Quote], date: &str, show_tags: bool) -> String {
    let Some(index) = pick::daily_index(quotes.len()) else {
        return unavailable_page(date);
    };
    let quote = &quotes[index];

    let attribution = if quote.author().is_empty() {
        String::new()
    } else if quote.publication().is_empty() {
        format!(
            r#"<p class="author">&mdash; {}</p>"#,
            escape_html(quote.author())
        )
    } else {
        format!(
            r#"<p class="author">&mdash; {}, <span class="publication">{}</span></p>"#,
            escape_html(quote.author()),
            escape_html(quote.publication())
        )
    };

    let tags_section = if show_tags {
        let tags = if quote.tags().is_empty() {
            "(none)".to_string()
        } else {
            escape_html(&quote.tags().join(", "))
        };
        format!(
            r#"<div class="tags">
    <p>tags: {tags}</p>
    <p class="mono">qd settags -s {hash} &lt;tags&gt;</p>
  </div>"#,
            tags = tags,
            hash = quote.hash(),
        )
    } else {
        String::new()
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Quote of the Day</title>
<style>
  * {{ margin: 0; padding: 0; box-sizing: border-box; }}
  body {{ font-family: Georgia, 'Times New Roman', serif; background: #0f1117; color: #e0e0e0; display: flex; min-height: 100vh; align-items: center; justify-content: center; padding: 20px; }}
  .card {{ max-width: 640px; }}
  .date {{ color: #8b949e; font-size: 0.85em; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin-bottom: 24px; }}
  blockquote {{ font-size: 1.6em; line-height: 1.4; margin-bottom: 16px; }}
  .author {{ color: #c9d1d9; font-size: 1.1em; }}
  .publication {{ font-style: italic; color: #8b949e; }}
  .meta {{ margin-top: 32px; color: #8b949e; font-size: 0.8em; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; }}
  .tags {{ margin-top: 16px; color: #8b949e; font-size: 0.85em; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; }}
  .mono {{ font-family: 'SF Mono', 'Consolas', monospace; margin-top: 4px; }}
</style>
</head>
<body>
  <div class="card">
    <p class="date">{date}</p>
    <blockquote>{text}</blockquote>
    {attribution}
    {tags_section}
    <p class="meta">quote {number} of {total}</p>
  </div>
</body>
</html>"#,
        date = escape_html(date),
        text = escape_html(quote.text()),
        attribution = attribution,
        tags_section = tags_section,
        number = index + 1,
        total = quotes.len(),
    )
}

fn unavailable_page(date: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Quote of the Day</title>
<style>
  body {{ font-family: Georgia, serif; background: #0f1117; color: #e0e0e0; display: flex; min-height: 100vh; align-items: center; justify-content: center; }}
  .card {{ text-align: center; }}
  .date {{ color: #8b949e; font-size: 0.85em; margin-bottom: 16px; }}
</style>
</head>
<body>
  <div class="card">
    <p class="date">{date}</p>
    <p>The quotes are not available right now.</p>
  </div>
</body>
</html>"#,
        date = escape_html(date),
    )
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<b>\"a & b\"</b>"),
            "&lt;b&gt;&quot;a &amp; b&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_quote_page_contains_quote_and_position() {
        let quotes = vec![
            Quote::new("Less is more.", "Mies van der Rohe", "", vec![]).unwrap(),
        ];
        let html = quote_page(&quotes, "Friday, August 07, 2026", false);
        assert!(html.contains("Less is more."));
        assert!(html.contains("Mies van der Rohe"));
        assert!(html.contains("quote 1 of 1"));
        assert!(!html.contains("settags"));
    }

    #[test]
    fn test_tags_page_shows_hash_hint() {
        let quotes =
            vec![Quote::new("Less is more.", "", "", vec!["design".into()]).unwrap()];
        let html = quote_page(&quotes, "Friday, August 07, 2026", true);
        assert!(html.contains("design"));
        assert!(html.contains(&quotes[0].hash()));
        assert!(html.contains("settags"));
    }

    #[test]
    fn test_empty_collection_renders_unavailable() {
        let html = quote_page(&[], "Friday, August 07, 2026", false);
        assert!(html.contains("not available"));
    }

    #[test]
    fn test_quote_text_is_escaped() {
        let quotes = vec![Quote::new("1 < 2 & 2 > 1", "", "", vec![]).unwrap()];
        let html = quote_page(&quotes, "date", false);
        assert!(html.contains("1 &lt; 2 &amp; 2 &gt; 1"));
    }
}
