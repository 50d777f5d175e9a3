use actix_web::{web, HttpResponse, Responder};

use crate::error::MatchError;
use crate::models::{ProfileDraft, ProfileKind, ProfilesResponse};
use crate::routes::{error_response, AppState};
use crate::services::parse_profiles;

/// Configure profile routes
///
/// `{kind}` is `mentors` or `mentees`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .service(
            web::resource("/profiles/{kind}")
                .route(web::get().to(list_profiles))
                .route(web::post().to(add_profile)),
        )
        .service(web::resource("/profiles/{kind}/import").route(web::post().to(import_profiles)))
        .service(
            web::resource("/profiles/{kind}/{id}")
                .route(web::get().to(get_profile))
                .route(web::delete().to(remove_profile)),
        );
}

/// GET /api/v1/profiles/{kind}
async fn list_profiles(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let kind: ProfileKind = match path.parse() {
        Ok(kind) => kind,
        Err(e) => return error_response(&e),
    };

    let profiles = state.store.read().await.list(kind);

    HttpResponse::Ok().json(ProfilesResponse {
        count: profiles.len(),
        profiles,
    })
}

/// POST /api/v1/profiles/{kind}
async fn add_profile(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<ProfileDraft>,
) -> impl Responder {
    let kind: ProfileKind = match path.parse() {
        Ok(kind) => kind,
        Err(e) => return error_response(&e),
    };

    match state.store.write().await.add(kind, req.into_inner()) {
        Ok(profile) => HttpResponse::Created().json(profile),
        Err(e) => {
            tracing::info!("Rejected {} profile: {}", kind, e);
            error_response(&e)
        }
    }
}

/// POST /api/v1/profiles/{kind}/import
///
/// Body is a JSON array of profiles; the import is all-or-nothing.
async fn import_profiles(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Bytes,
) -> impl Responder {
    let kind: ProfileKind = match path.parse() {
        Ok(kind) => kind,
        Err(e) => return error_response(&e),
    };

    let drafts = match std::str::from_utf8(&body)
        .map_err(|e| MatchError::Validation(format!("payload is not UTF-8: {}", e)))
        .and_then(parse_profiles)
    {
        Ok(drafts) => drafts,
        Err(e) => {
            tracing::info!("Rejected {} import: {}", kind, e);
            return error_response(&e);
        }
    };

    match state.store.write().await.extend(kind, drafts) {
        Ok(profiles) => HttpResponse::Created().json(ProfilesResponse {
            count: profiles.len(),
            profiles,
        }),
        Err(e) => error_response(&e),
    }
}

/// GET /api/v1/profiles/{kind}/{id}
async fn get_profile(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> impl Responder {
    let (kind, id) = path.into_inner();
    let kind: ProfileKind = match kind.parse() {
        Ok(kind) => kind,
        Err(e) => return error_response(&e),
    };

    match state.store.read().await.get(kind, &id) {
        Some(profile) => HttpResponse::Ok().json(profile),
        None => error_response(&MatchError::ProfileNotFound { kind, id }),
    }
}

/// DELETE /api/v1/profiles/{kind}/{id}
async fn remove_profile(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> impl Responder {
    let (kind, id) = path.into_inner();
    let kind: ProfileKind = match kind.parse() {
        Ok(kind) => kind,
        Err(e) => return error_response(&e),
    };

    match state.store.write().await.remove(kind, &id) {
        Some(_) => HttpResponse::NoContent().finish(),
        None => error_response(&MatchError::ProfileNotFound { kind, id }),
    }
}
