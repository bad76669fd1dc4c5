use actix_web::{get, web, HttpResponse};
use serde::Serialize;

use crate::services::activity_store::ActivityStore;

#[derive(Debug, Serialize)]
struct HealthReport {
    status: &'static str,
    activities: usize,
}

/// Liveness probe. Registered as a plain service: an empty-prefix scope
/// would shadow every route registered after it.
#[get("/health")]
pub async fn health_check(store: web::Data<ActivityStore>) -> HttpResponse {
    HttpResponse::Ok().json(HealthReport {
        status: "ok",
        activities: store.len(),
    })
}
