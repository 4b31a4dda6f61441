use actix_web::http::header::ContentType;
use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use log::error;
use tera::{Context, Tera};

use crate::domain::types::StayId;
use crate::dto::main::{amenity_options, popular_locations, property_type_options};
use crate::forms::stays::StaysQueryParams;
use crate::repository::stay::InMemoryStayRepository;
use crate::routes::render_template;
use crate::services::ServiceError;
use crate::services::main::{load_index_page, load_stay_page, load_stays_page};

#[get("/")]
pub async fn show_index(
    repo: web::Data<InMemoryStayRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let page_data = match load_index_page(repo.get_ref()) {
        Ok(page_data) => page_data,
        Err(e) => {
            error!("Failed to load index page: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = Context::new();
    context.insert("current_page", "index");
    context.insert("featured_stays", &page_data.featured_stays);
    context.insert("popular_locations", &popular_locations());

    render_template(&tera, "main/index.html", &context)
}

#[get("/stays")]
pub async fn show_stays(
    req: HttpRequest,
    repo: web::Data<InMemoryStayRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let params = StaysQueryParams::from_query_string(req.query_string());

    let page_data = match load_stays_page(repo.get_ref(), params.into()) {
        Ok(page_data) => page_data,
        Err(e) => {
            error!("Failed to load stays page: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = Context::new();
    context.insert("current_page", "stays");
    context.insert("stays", &page_data.stays);
    context.insert("filters", &page_data.filters);
    context.insert("filter_query", &page_data.filter_query);
    context.insert("amenity_options", &amenity_options());
    context.insert("property_type_options", &property_type_options());

    render_template(&tera, "stays/index.html", &context)
}

#[get("/stays/{id}")]
pub async fn show_stay(
    path: web::Path<String>,
    repo: web::Data<InMemoryStayRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    // A blank path segment can never name a stay.
    let stay = match StayId::new(path.into_inner()) {
        Ok(id) => load_stay_page(repo.get_ref(), &id),
        Err(_) => Err(ServiceError::NotFound),
    };

    match stay {
        Ok(stay) => {
            let mut context = Context::new();
            context.insert("current_page", "stays");
            context.insert("stay", &stay);
            render_template(&tera, "stays/show.html", &context)
        }
        Err(ServiceError::NotFound) => {
            let mut context = Context::new();
            context.insert("current_page", "stays");
            match tera.render("main/not_found.html", &context) {
                Ok(body) => HttpResponse::NotFound()
                    .content_type(ContentType::html())
                    .body(body),
                Err(e) => {
                    error!("Failed to render template main/not_found.html: {e}");
                    HttpResponse::InternalServerError().finish()
                }
            }
        }
        Err(e) => {
            error!("Failed to load stay page: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
