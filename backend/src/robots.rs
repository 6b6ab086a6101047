use std::sync::Arc;
use axum::extract::State;
use sitewriter::{ChangeFreq, UrlEntry, Url};
use crate::Site;

pub async fn get_robots_txt(State(site): State<Arc<Site>>) -> String {
	format!("User-agent: *\nAllow: /\n\nSitemap: {}sitemap.xml\n", site.url)
}

fn generate_sitemap(url: &Url) -> String {
	sitewriter::generate_str(&[UrlEntry {
		loc: url.clone(),
		lastmod: None,
		changefreq: Some(ChangeFreq::Monthly),
		priority: Some(1.0)
	}])
}

pub async fn get_sitemap_xml(State(site): State<Arc<Site>>) -> String {
	// It's one page. It only changes when we redeploy, at which point this is rebuilt anyways.
	site.sitemap.get_or_init(|| {
		tracing::debug!("Generating sitemap.xml for {}", site.url);
		generate_sitemap(&site.url)
	}).clone()
}
