use crate::core::{parse_track_names, MAX_TRACKS};
use anyhow::Context;
use gloo_net::http::Request;

/// GET the top-tracks endpoint and return up to `MAX_TRACKS` names.
///
/// One attempt only; the caller aborts scene setup on error.
pub async fn fetch_top_tracks(url: &str) -> anyhow::Result<Vec<String>> {
    log::info!("[tracks] GET {}", url);
    let resp = Request::get(url)
        .send()
        .await
        .with_context(|| format!("request to {url} failed"))?;
    if !resp.ok() {
        anyhow::bail!("{} responded {} {}", url, resp.status(), resp.status_text());
    }
    let body = resp.text().await.context("reading response body")?;
    let names = parse_track_names(&body, MAX_TRACKS)?;
    log::info!("[tracks] received {} names", names.len());
    Ok(names)
}
