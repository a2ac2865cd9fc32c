use crate::application::blog_service::BlogService;
use crate::application::user_service::UserService;
use crate::data::blog_repository::BlogRepository;
use crate::data::user_repository::UserRepository;
use crate::infrastructure::config::AppConfig;
use crate::presentation::middleware::RequestTracing;
use crate::presentation::routes;
use actix_cors::Cors;
use actix_web::middleware::DefaultHeaders;
use actix_web::{App, HttpServer};
use tracing::info;

pub async fn start_rest_server<B, U>(
    config: AppConfig,
    blog_service: BlogService<B>,
    user_service: UserService<U>,
) -> anyhow::Result<()>
where
    B: BlogRepository + 'static,
    U: UserRepository + 'static,
{
    let bind_address = (config.host.clone(), config.port);
    info!(host = %bind_address.0, port = bind_address.1, "HTTP server starting");

    HttpServer::new(move || {
        App::new()
            .wrap(RequestTracing)
            .wrap(
                DefaultHeaders::new()
                    .add(("X-Content-Type-Options", "nosniff"))
                    .add(("Referrer-Policy", "no-referrer")),
            )
            .wrap(build_cors(&config))
            .configure(routes::configure(blog_service.clone(), user_service.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
    .map_err(anyhow::Error::new)?;

    info!("HTTP server stopped");
    Ok(())
}

fn build_cors(config: &AppConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
        .allowed_header(actix_web::http::header::CONTENT_TYPE)
        .max_age(3600);

    for origin in &config.cors_origins {
        cors = if origin == "*" {
            cors.allow_any_origin()
        } else {
            cors.allowed_origin(origin)
        };
    }

    cors
}
