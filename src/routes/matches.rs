use actix_web::{web, HttpResponse, Responder};

use crate::models::{ErrorResponse, MatchQuery};
use crate::routes::AppState;

/// Configure match computation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/matches", web::post().to(compute_all_matches))
        .route("/matches/{id}", web::get().to(get_matches_for_profile));
}

/// Compute room groups for the whole pool (admin view)
///
/// POST /api/matches
async fn compute_all_matches(state: web::Data<AppState>) -> impl Responder {
    let profiles = match state.storage.get_all_profiles().await {
        Ok(profiles) => profiles,
        Err(e) => {
            tracing::error!("Failed to load profiles for matching: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to load profiles".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    tracing::info!("Computing matches over {} profiles", profiles.len());

    let mut rng = rand::thread_rng();
    let results = state.matcher.compute_all_matches(&profiles, &mut rng);

    tracing::info!("Returning {} group matches", results.len());
    HttpResponse::Ok().json(results)
}

/// Ranked candidate groups for one person
///
/// GET /api/matches/{id}?limit=N
async fn get_matches_for_profile(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<MatchQuery>,
) -> impl Responder {
    let profile_id = path.into_inner();
    let limit = query.limit.min(state.matching.max_limit);

    // The engine treats an unknown id as an empty answer; the API surfaces
    // a 404 so clients can tell "no such person" from "no matches".
    let target = match state.storage.get_profile(&profile_id).await {
        Ok(Some(profile)) => profile,
        Ok(None) => {
            return HttpResponse::NotFound().json(ErrorResponse {
                error: "Profile not found".to_string(),
                message: format!("No profile with id {}", profile_id),
                status_code: 404,
            });
        }
        Err(e) => {
            tracing::error!("Failed to fetch profile {}: {}", profile_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch profile".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let profiles = match state.storage.get_all_profiles().await {
        Ok(profiles) => profiles,
        Err(e) => {
            tracing::error!("Failed to load profiles for matching: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to load profiles".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    tracing::debug!(
        "Computing up to {} matches for {} over {} profiles",
        limit,
        target.profile_id,
        profiles.len()
    );

    let mut rng = rand::thread_rng();
    let results = state
        .matcher
        .compute_matches_for(&target.profile_id, &profiles, limit, &mut rng);

    tracing::info!(
        "Returning {} matches for profile {}",
        results.len(),
        target.profile_id
    );
    HttpResponse::Ok().json(results)
}
