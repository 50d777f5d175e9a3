use actix_web::{web, HttpResponse, Responder};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::core::aggregate;
use crate::models::{ErrorResponse, HealthResponse, MatchesResponse, ProfileKind, RunMatchingQuery, RunMatchingResponse, RunStamp};
use crate::routes::{error_response, AppState};

/// Configure matching and stats routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matching/run", web::post().to(run_matching))
        .route("/matches", web::get().to(get_matches))
        .route("/stats", web::get().to(get_stats));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Run matching endpoint
///
/// POST /api/v1/matching/run?seed=42
///
/// Matches every current mentee against a snapshot of the current mentors.
/// The optional `seed` fixes the fallback random draws for this run.
async fn run_matching(
    state: web::Data<AppState>,
    query: web::Query<RunMatchingQuery>,
) -> impl Responder {
    let (mentees, mentors) = {
        let store = state.store.read().await;
        (store.list(ProfileKind::Mentee), store.list(ProfileKind::Mentor))
    };

    let sequence = state.next_run_sequence();
    let seed = query.seed.or(state.fallback_seed);
    let matcher = state.matcher.clone();

    tracing::info!(
        "Starting run {}: {} mentees, {} mentors, seed {:?}",
        sequence,
        mentees.len(),
        mentors.len(),
        seed
    );

    // Scoring is CPU-bound; keep it off the async workers
    let result = web::block(move || {
        let mut rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        matcher.run(&mentees, &mentors, &mut rng, RunStamp::now(sequence))
    })
    .await;

    let matches = match result {
        Ok(Ok(matches)) => matches,
        Ok(Err(e)) => {
            tracing::warn!("Run {} rejected: {}", sequence, e);
            return error_response(&e);
        }
        Err(e) => {
            tracing::error!("Run {} did not complete: {}", sequence, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "run_failed".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let fallback_count = matches.iter().filter(|m| m.fallback).count();
    let summary = format!(
        "Created {} matches{}",
        matches.len(),
        if fallback_count > 0 { " (including random fallbacks)" } else { "" }
    );

    state.board.write().await.publish(sequence, matches.clone());

    HttpResponse::Ok().json(RunMatchingResponse {
        matches,
        fallback_count,
        summary,
    })
}

/// Latest match set
///
/// GET /api/v1/matches
async fn get_matches(state: web::Data<AppState>) -> impl Responder {
    let board = state.board.read().await;

    HttpResponse::Ok().json(MatchesResponse {
        matches: board.latest().to_vec(),
        run_sequence: board.sequence(),
    })
}

/// Stats over the latest match set and the current profiles
///
/// GET /api/v1/stats
async fn get_stats(state: web::Data<AppState>) -> impl Responder {
    let (mentors, mentees) = {
        let store = state.store.read().await;
        (store.list(ProfileKind::Mentor), store.list(ProfileKind::Mentee))
    };
    let board = state.board.read().await;

    HttpResponse::Ok().json(aggregate(board.latest(), &mentors, &mentees))
}
