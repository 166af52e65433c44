use std::time::Duration;

use autoquiz::api::ApiClient;
use clap::Parser;
use warp::Filter;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Quiz platform API base URL.
    #[arg(long, env, default_value = "http://localhost:5000")]
    api_url: String,

    /// Per-request timeout for platform API calls, in seconds.
    #[arg(long, env, default_value_t = 30)]
    api_timeout: u64,

    /// The address to bind to.
    #[arg(short, long, env, default_value = "127.0.0.1:1414")]
    address: String,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "tracing=info,warp=debug,autoquiz=debug".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();

    let api = ApiClient::new(args.api_url, Duration::from_secs(args.api_timeout))?;
    let routes = autoquiz::routes(api);
    let static_files = warp::path("static").and(autoquiz::statics::routes());
    let routes = static_files
        .or(routes)
        .recover(autoquiz::rejections::handle_rejection);

    let address = args.address.parse::<std::net::SocketAddr>()?;
    warp::serve(routes).run(address).await;

    Ok(())
}
