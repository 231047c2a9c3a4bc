use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{
    CreateProfileRequest, CreateProfileResponse, DeleteProfileResponse, ErrorResponse, Gender,
    HealthResponse, StatsResponse,
};
use crate::routes::AppState;
use crate::services::StorageError;

/// Configure profile management routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/profiles", web::post().to(create_profile))
        .route("/profiles", web::get().to(get_all_profiles))
        .route("/profiles/{id}", web::get().to(get_profile))
        .route("/profiles/{id}", web::delete().to(delete_profile))
        .route("/stats", web::get().to(get_stats));
}

/// Health check endpoint
///
/// GET /health
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let db_healthy = state.storage.health_check().await.unwrap_or(false);
    let status = if db_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Create profile endpoint
///
/// POST /api/profiles
async fn create_profile(
    state: web::Data<AppState>,
    req: web::Json<CreateProfileRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for create_profile request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let profile = req.into_inner().into_profile();
    tracing::info!("Creating profile: {} ({})", profile.name, profile.profile_id);

    match state.storage.create_profile(&profile).await {
        Ok(()) => HttpResponse::Ok().json(CreateProfileResponse {
            message: "Profile created successfully".to_string(),
            profile_id: profile.profile_id,
            name: profile.name,
        }),
        Err(StorageError::AlreadyExists(id)) => HttpResponse::BadRequest().json(ErrorResponse {
            error: "Duplicate profile".to_string(),
            message: format!("Profile {} already exists", id),
            status_code: 400,
        }),
        Err(e) => {
            tracing::error!("Failed to create profile: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to create profile".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// List all profiles
///
/// GET /api/profiles
async fn get_all_profiles(state: web::Data<AppState>) -> impl Responder {
    match state.storage.get_all_profiles().await {
        Ok(profiles) => {
            tracing::debug!("Retrieved {} profiles", profiles.len());
            HttpResponse::Ok().json(profiles)
        }
        Err(e) => {
            tracing::error!("Failed to list profiles: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to list profiles".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Fetch one profile
///
/// GET /api/profiles/{id}
async fn get_profile(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let profile_id = path.into_inner();

    match state.storage.get_profile(&profile_id).await {
        Ok(Some(profile)) => HttpResponse::Ok().json(profile),
        Ok(None) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Profile not found".to_string(),
            message: format!("No profile with id {}", profile_id),
            status_code: 404,
        }),
        Err(e) => {
            tracing::error!("Failed to fetch profile {}: {}", profile_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch profile".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Delete a profile
///
/// DELETE /api/profiles/{id}
async fn delete_profile(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let profile_id = path.into_inner();

    match state.storage.delete_profile(&profile_id).await {
        Ok(true) => {
            tracing::info!("Deleted profile {}", profile_id);
            HttpResponse::Ok().json(DeleteProfileResponse {
                message: "Profile deleted successfully".to_string(),
            })
        }
        Ok(false) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Profile not found".to_string(),
            message: format!("No profile with id {}", profile_id),
            status_code: 404,
        }),
        Err(e) => {
            tracing::error!("Failed to delete profile {}: {}", profile_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to delete profile".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Pool statistics for the admin dashboard
///
/// GET /api/stats
async fn get_stats(state: web::Data<AppState>) -> impl Responder {
    match state.storage.get_all_profiles().await {
        Ok(profiles) => {
            let male = profiles.iter().filter(|p| p.gender == Gender::Male).count();
            let female = profiles.iter().filter(|p| p.gender == Gender::Female).count();
            let ac = profiles.iter().filter(|p| p.prefers_ac).count();

            HttpResponse::Ok().json(StatsResponse {
                total_profiles: profiles.len(),
                male_profiles: male,
                female_profiles: female,
                ac_preference: ac,
                non_ac_preference: profiles.len() - ac,
                last_updated: chrono::Utc::now(),
            })
        }
        Err(e) => {
            tracing::error!("Failed to compute stats: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to compute stats".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}
