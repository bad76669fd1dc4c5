// src/routes/activities.rs

use actix_web::{delete, get, post, web, HttpResponse, Responder, ResponseError, Scope};
use serde::Deserialize;

use crate::{services::activity_store::ActivityStore, utils::types::MessageResponse};

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

/// GET /activities
#[get("")]
pub async fn list_activities(store: web::Data<ActivityStore>) -> impl Responder {
    HttpResponse::Ok().json(store.list_activities())
}

/// POST /activities/{activity_name}/signup?email=...
#[post("/{activity_name}/signup")]
pub async fn signup(
    path: web::Path<String>,
    query: web::Query<EmailQuery>,
    store: web::Data<ActivityStore>,
) -> HttpResponse {
    let activity_name = path.into_inner();
    let email = &query.email;

    match store.signup(&activity_name, email) {
        Ok(()) => {
            log::info!("signed up {email} for {activity_name}");
            HttpResponse::Ok().json(MessageResponse::new(format!(
                "Signed up {email} for {activity_name}"
            )))
        }
        Err(e) => {
            log::warn!("signup of {email} for {activity_name} rejected: {e}");
            e.error_response()
        }
    }
}

/// DELETE /activities/{activity_name}/signup?email=...
#[delete("/{activity_name}/signup")]
pub async fn unregister(
    path: web::Path<String>,
    query: web::Query<EmailQuery>,
    store: web::Data<ActivityStore>,
) -> HttpResponse {
    let activity_name = path.into_inner();
    let email = &query.email;

    match store.unregister(&activity_name, email) {
        Ok(()) => {
            log::info!("unregistered {email} from {activity_name}");
            HttpResponse::Ok().json(MessageResponse::new(format!(
                "Unregistered {email} from {activity_name}"
            )))
        }
        Err(e) => {
            log::warn!("unregister of {email} from {activity_name} rejected: {e}");
            e.error_response()
        }
    }
}

pub fn activities_scope() -> Scope {
    web::scope("/activities")
        .service(list_activities)
        .service(signup)
        .service(unregister)
}
