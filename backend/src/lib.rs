use std::sync::{Arc, OnceLock};
use axum::{routing::get, Router};
use sitewriter::Url;
use tower_http::{services::{ServeDir, ServeFile}, trace::TraceLayer};

pub mod config;
mod robots;

pub use config::{Config, ConfigError};

pub struct Site {
	url: Url,
	sitemap: OnceLock<String>,
}

/// Everything the site serves. Nothing here is dynamic besides robots.txt and the sitemap; the
/// page and its booking form are all client-side.
pub fn app(config: &Config) -> Router {
	let site = Arc::new(Site {
		url: config.site_url.clone(),
		sitemap: OnceLock::new(),
	});

	// Any path the router doesn't know about gets the page itself, and yew_router sorts it out
	let frontend = ServeDir::new(&config.dist_dir)
		.fallback(ServeFile::new(config.dist_dir.join("index.html")));

	Router::new()
		.route("/robots.txt", get(robots::get_robots_txt))
		.route("/sitemap.xml", get(robots::get_sitemap_xml))
		.nest_service("/assets", ServeDir::new(&config.asset_dir))
		.fallback_service(frontend)
		.layer(TraceLayer::new_for_http())
		.with_state(site)
}
