use actix_web::HttpResponse;
use actix_web::http::header::ContentType;
use log::error;
use tera::{Context, Tera};

pub mod api;
pub mod main;

/// Renders a template to an HTML response, logging failures as a 500.
pub fn render_template(tera: &Tera, name: &str, context: &Context) -> HttpResponse {
    match tera.render(name, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(body),
        Err(e) => {
            error!("Failed to render template {name}: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
