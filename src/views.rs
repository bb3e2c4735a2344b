use crate::crd::kfservice::{KFService, KFServiceList};
use crate::Controller;
use actix_web::{http::StatusCode, web, HttpRequest, HttpResponse};

// Simple health check endpoint
pub async fn health(_req: HttpRequest) -> HttpResponse {
    HttpResponse::new(StatusCode::OK)
}

// List working copies of the current kfservices
pub async fn kfservices(data: web::Data<Controller>, _req: HttpRequest) -> web::Json<KFServiceList> {
    web::Json(data.kfservice_state())
}

// Working copy of a single kfservice, `null` if it isn't cached
pub async fn get_kfservice(data: web::Data<Controller>, name: web::Path<String>) -> web::Json<Option<KFService>> {
    web::Json(data.kfservice(&name))
}
