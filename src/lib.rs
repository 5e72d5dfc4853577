pub mod application;
pub mod config;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;

use actix_web::{middleware::Logger, web, App, HttpServer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use application::order_service::OrderService;
pub use config::Config;
pub use handlers::orders::AppOrderService;
pub use infrastructure::json_lines::FileJsonLineSource;
pub use infrastructure::order_repo::JsonlOrderRepository;

#[derive(OpenApi)]
#[openapi(
    paths(handlers::orders::list_orders, handlers::orders::get_order),
    components(schemas(
        handlers::orders::OrderSummaryResponse,
        errors::ErrorPayload,
        errors::ErrorDetail
    )),
    tags((name = "orders", description = "Read-only order queries"))
)]
pub struct ApiDoc;

/// Register the order routes. Expects `web::Data<AppOrderService>` in app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/orders", web::get().to(handlers::orders::list_orders))
        .service(
            web::resource("/order/{id}")
                .route(web::get().to(handlers::orders::get_order))
                .route(web::head().to(handlers::orders::get_order)),
        );
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    service: AppOrderService,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    let service = web::Data::new(service);
    Ok(HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .wrap(Logger::default())
            .configure(configure)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}
