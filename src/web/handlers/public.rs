use actix_web::http::StatusCode;
use actix_web::{get, web, HttpResponse, Responder};

use refract_site::frontend;

use crate::web::helpers::{render, STYLESHEET_HREF};
use crate::web::state::AppState;

#[get("/")]
pub async fn landing(state: web::Data<AppState>) -> impl Responder {
    render(
        StatusCode::OK,
        frontend::render_landing_page(&state.config, STYLESHEET_HREF),
    )
}

/// Features section as a bare fragment for embedding.
#[get("/features")]
pub async fn features() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(frontend::render_features())
}

pub async fn not_found(state: web::Data<AppState>) -> HttpResponse {
    render(
        StatusCode::NOT_FOUND,
        frontend::render_not_found(&state.config, STYLESHEET_HREF),
    )
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(landing).service(features);
}
