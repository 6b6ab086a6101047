use axum::{
	body::{to_bytes, Body},
	http::{Request, StatusCode},
	Router,
};
use backend::{app, Config, ConfigError};
use tower::ServiceExt;

fn config_for(site_url: &str) -> Result<Config, ConfigError> {
	let fixtures = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");
	Config::from_lookup(|key| match key {
		"DIST_DIR" => Some(format!("{fixtures}/dist")),
		"ASSET_DIR" => Some(format!("{fixtures}/assets")),
		"SITE_URL" => Some(site_url.into()),
		_ => None,
	})
}

fn test_app() -> Router {
	app(&config_for("https://example.com/").unwrap())
}

async fn get(uri: &str) -> (StatusCode, String) {
	let res = test_app()
		.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
		.await
		.unwrap();

	let status = res.status();
	let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
	(status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn serves_the_page_at_root() {
	let (status, body) = get("/").await;
	assert_eq!(status, StatusCode::OK);
	assert!(body.contains("Velvet Handlebear"));
}

#[tokio::test]
async fn unknown_paths_fall_back_to_the_page() {
	let (status, body) = get("/some/old/link").await;
	assert_eq!(status, StatusCode::OK);
	assert!(body.contains("<title>Velvet Handlebear"));
}

#[tokio::test]
async fn serves_assets() {
	let (status, body) = get("/assets/favicon.svg").await;
	assert_eq!(status, StatusCode::OK);
	assert!(body.starts_with("<svg"));

	let (status, _) = get("/assets/gallery11.webp").await;
	assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn robots_points_at_sitemap() {
	let (status, body) = get("/robots.txt").await;
	assert_eq!(status, StatusCode::OK);
	assert!(body.contains("Allow: /"));
	assert!(body.contains("Sitemap: https://example.com/sitemap.xml"));
}

#[tokio::test]
async fn sitemap_lists_the_page() {
	let (status, body) = get("/sitemap.xml").await;
	assert_eq!(status, StatusCode::OK);
	assert!(body.contains("<loc>https://example.com/</loc>"));
	assert!(body.contains("monthly"));
}

#[tokio::test]
async fn unusable_site_url_never_reaches_the_sitemap() {
	assert_eq!(
		config_for("https://exa mple.com").unwrap_err(),
		ConfigError::BadSiteUrl("https://exa mple.com".into())
	);

	let res = app(&config_for("https://example.com/shop").unwrap())
		.oneshot(Request::builder().uri("/sitemap.xml").body(Body::empty()).unwrap())
		.await
		.unwrap();
	assert_eq!(res.status(), StatusCode::OK);
	let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
	assert!(String::from_utf8(body.to_vec()).unwrap().contains("<loc>https://example.com/shop/</loc>"));
}
