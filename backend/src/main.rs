use std::net::SocketAddr;

use backend::config::Config;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"))
		)
		.init();

	let config = match Config::from_env() {
		Ok(config) => config,
		Err(e) => {
			tracing::error!("{e}");
			return Err(e.into());
		}
	};

	tracing::info!("Serving frontend bundle from {:?}", config.dist_dir);

	let addr = SocketAddr::new(config.host, config.port);
	let listener = tokio::net::TcpListener::bind(addr).await?;

	tracing::info!("Listening on {addr}...");

	axum::serve(listener, backend::router(&config)).await?;

	Ok(())
}
