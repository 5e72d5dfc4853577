use std::io;

use dotenvy::dotenv;
use order_summary::{build_server, Config, FileJsonLineSource, JsonlOrderRepository, OrderService};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let repo = JsonlOrderRepository::new(FileJsonLineSource::new(), config.orders_file);
    match repo.record_count() {
        Ok(count) => log::info!(
            "Serving {} order records from {}",
            count,
            repo.path().display()
        ),
        Err(e) => log::warn!("{}: {}", repo.path().display(), e),
    }

    log::info!("Starting server at http://{}:{}", config.host, config.port);

    build_server(OrderService::new(repo), &config.host, config.port)?.await
}
