use tranxporter::config::Config;
use tranxporter::engine::Engine;
use tranxporter::error::Error;
use tranxporter::server::serve;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    let addr = config.addr;

    let engine = Engine::new(config)?;

    serve(engine, addr).await
}
