//! Local web preview: the rendered calendar with a date picker and a reset
//! link, re-rendered from scratch on every request.

use std::fmt::Write;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use chrono::NaiveDate;
use memento_core::{
    Config, Layout, RenderSnapshot, SimulationClock, Summary, SvgSurface, parse_date, render,
};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

/// Raw query parameters. Empty values mean "not set" so that a cleared
/// date picker falls back to today.
#[derive(Debug, Default, Deserialize)]
pub struct PreviewQuery {
    date: Option<String>,
    layout: Option<String>,
}

/// Parsed request: the simulated date (if any) and the layout to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Selection {
    date: Option<NaiveDate>,
    layout: Layout,
}

impl PreviewQuery {
    fn selection(&self, config: &Config) -> std::result::Result<Selection, String> {
        let date = match non_empty(&self.date) {
            Some(text) => Some(parse_date(text).map_err(|e| e.to_string())?),
            None => None,
        };
        let layout = match non_empty(&self.layout) {
            Some(text) => text.parse::<Layout>().map_err(|e| e.to_string())?,
            None => config.layout,
        };
        Ok(Selection { date, layout })
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

struct PreviewState {
    config: Config,
}

struct Frame {
    svg: String,
    summary: Summary,
}

fn render_frame(config: &Config, selection: Selection) -> std::result::Result<Frame, String> {
    let clock = selection
        .date
        .map(SimulationClock::at_date)
        .unwrap_or_else(SimulationClock::now);
    let snapshot = RenderSnapshot::new(config, clock).with_layout(selection.layout);
    let mut surface = SvgSurface::default();
    let outcome = render(&mut surface, &snapshot).map_err(|e| e.to_string())?;
    Ok(Frame {
        svg: surface.finish(),
        summary: outcome.summary,
    })
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn page_html(frame: &Frame, selection: Selection) -> String {
    let date_value = frame.summary.simulated_date.format("%Y-%m-%d");
    let mut html = String::new();
    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>Memento Mori</title></head>
<body style="font-family: sans-serif; background: #f4f4f4;">
<form method="get" action="/">
<label>Date <input type="date" name="date" value="{date_value}"></label>
<select name="layout">
"#
    );
    for layout in Layout::ALL {
        let selected = if layout == selection.layout { " selected" } else { "" };
        let _ = writeln!(
            html,
            r#"<option value="{name}"{selected}>{name}</option>"#,
            name = layout.name()
        );
    }
    let _ = write!(
        html,
        r#"</select>
<button type="submit">Show</button>
<a href="/?layout={layout}">Reset to today</a>
</form>
<div style="background: white; width: 800px;">
{svg}</div>
<p>
"#,
        layout = selection.layout.name(),
        svg = frame.svg,
    );
    for line in frame.summary.lines() {
        let _ = writeln!(html, "{}<br>", escape_html(&line));
    }
    html.push_str("</p>\n</body>\n</html>\n");
    html
}

async fn index(
    State(state): State<Arc<PreviewState>>,
    Query(query): Query<PreviewQuery>,
) -> Response {
    let result = query
        .selection(&state.config)
        .map_err(|e| (StatusCode::BAD_REQUEST, e))
        .and_then(|selection| {
            render_frame(&state.config, selection)
                .map(|frame| page_html(&frame, selection))
                .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e))
        });
    match result {
        Ok(html) => Html(html).into_response(),
        Err(rejection) => rejection.into_response(),
    }
}

async fn calendar_svg(
    State(state): State<Arc<PreviewState>>,
    Query(query): Query<PreviewQuery>,
) -> Response {
    let result = query
        .selection(&state.config)
        .map_err(|e| (StatusCode::BAD_REQUEST, e))
        .and_then(|selection| {
            render_frame(&state.config, selection)
                .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e))
        });
    match result {
        Ok(frame) => ([(header::CONTENT_TYPE, "image/svg+xml")], frame.svg).into_response(),
        Err(rejection) => rejection.into_response(),
    }
}

pub fn router(config: Config) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/calendar.svg", get(calendar_svg))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(PreviewState { config }))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down preview");
}

pub async fn serve(config: Config, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    let local = listener.local_addr().context("failed to read bound address")?;
    tracing::info!("preview listening on http://{local}");
    println!("preview at http://{local}");

    axum::serve(listener, router(config))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("preview server failed")?;
    Ok(())
}
