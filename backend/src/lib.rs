pub mod config;
pub mod confirmation;

use axum::{routing::get, Router};
use tower_http::{services::{ServeDir, ServeFile}, trace::TraceLayer};

use config::Config;

/// Where the checkout function sends people once Stripe is happy with them
pub const CONFIRMATION_PATH: &str = "/registered";

/// Everything the server answers. The page itself is the trunk-built bundle in `DIST_DIR`; any
/// path that isn't a real file there gets `index.html`, so the page works from any url.
pub fn router(config: &Config) -> Router {
	let bundle = ServeDir::new(&config.dist_dir)
		.fallback(ServeFile::new(config.dist_dir.join("index.html")));

	Router::new()
		.route(CONFIRMATION_PATH, get(confirmation::registered_page))
		.fallback_service(bundle)
		.layer(TraceLayer::new_for_http())
}
