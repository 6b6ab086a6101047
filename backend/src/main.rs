use backend::Config;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,tower_http=debug".into()))
		.init();

	let config = match Config::from_env() {
		Ok(c) => c,
		Err(e) => {
			tracing::error!("Can't start with the current configuration: {e}");
			return Err(e.into());
		}
	};

	tracing::info!(
		"Serving the page from {:?} and assets from {:?} for {}",
		config.dist_dir, config.asset_dir, config.site_url
	);

	let addr = config.addr();
	let listener = tokio::net::TcpListener::bind(addr).await?;

	tracing::info!("Listening on {addr}");

	axum::serve(listener, backend::app(&config)).await?;

	Ok(())
}
