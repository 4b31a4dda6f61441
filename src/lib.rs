use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};
use tera::Tera;

use crate::models::config::ServerConfig;
use crate::repository::stay::InMemoryStayRepository;
use crate::routes::api::{api_v1_stay, api_v1_stays};
use crate::routes::main::{show_index, show_stay, show_stays};

pub mod domain;
pub mod dto;
pub mod forms;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod routes;
pub mod services;

/// Page size used when the caller does not request one.
pub const DEFAULT_PAGE_SIZE: usize = 12;
/// Upper bound silently applied to requested page sizes.
pub const MAX_PAGE_SIZE: usize = 50;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Load the stay catalog once; it is shared read-only between workers.
    let repo = InMemoryStayRepository::from_json_file(&server_config.dataset_path)
        .map_err(|e| std::io::Error::other(format!("Failed to load stay catalog: {e}")))?;

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", server_config.assets_dir.clone()))
            .service(
                web::scope("/api")
                    .service(api_v1_stays)
                    .service(api_v1_stay),
            )
            .service(show_index)
            .service(show_stays)
            .service(show_stay)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
