use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use log::error;
use serde_json::json;

use crate::domain::types::StayId;
use crate::forms::stays::StaysQueryParams;
use crate::repository::stay::InMemoryStayRepository;
use crate::services::ServiceError;
use crate::services::api::{get_stay, search_stays};

#[get("/v1/stays")]
pub async fn api_v1_stays(
    req: HttpRequest,
    repo: web::Data<InMemoryStayRepository>,
) -> impl Responder {
    let params = StaysQueryParams::from_query_string(req.query_string());

    match search_stays(repo.get_ref(), params.into()) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => {
            error!("Failed to list stays: {e}");
            HttpResponse::InternalServerError().json(json!({"error": "Failed to fetch stays"}))
        }
    }
}

#[get("/v1/stays/{id}")]
pub async fn api_v1_stay(
    path: web::Path<String>,
    repo: web::Data<InMemoryStayRepository>,
) -> impl Responder {
    let id = match StayId::new(path.into_inner()) {
        Ok(id) => id,
        Err(_) => return stay_not_found(),
    };

    match get_stay(repo.get_ref(), &id) {
        Ok(stay) => HttpResponse::Ok().json(stay),
        Err(ServiceError::NotFound) => stay_not_found(),
        Err(e) => {
            error!("Failed to fetch stay {id}: {e}");
            HttpResponse::InternalServerError().json(json!({"error": "Failed to fetch stay"}))
        }
    }
}

fn stay_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({"error": "Stay not found"}))
}
