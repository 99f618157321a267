//! HTTP handlers and route configuration.

mod health;
mod posts;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/posts")
                    // Reads are open
                    .route("", web::get().to(posts::list))
                    .route("/{identifier}", web::get().to(posts::lookup))
                    // Writes require a valid token
                    .route("", web::post().to(posts::create))
                    .route("/{slug}", web::put().to(posts::update))
                    .route("/{slug}", web::delete().to(posts::delete)),
            ),
    );
}
