use simpay_server::config::Config;
use simpay_types::error::SpResult;

#[tokio::main]
async fn main() -> SpResult<()> {
	tracing_subscriber::fmt()
		.with_env_filter(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
		)
		.with_target(false)
		.init();

	let config = Config::from_env()?;
	simpay_server::run(config).await
}

// vim: ts=4
