//! Stateless JSON adapter over the scoring and bracket engine.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.
//! The caller owns persistence: every request carries the match data it needs.

use actix_web::{
    get, post,
    web::Json,
    App, HttpResponse, HttpServer, Responder,
};
use padel_bracket_engine::{
    advance_round, generate_knockout_round, record_score, standings_by_pool, submit_score,
    GameMatch, KnockoutEntry, MatchFormat, RoundOrder, RoundType,
};
use serde::Deserialize;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct SubmitScoreBody {
    score: String,
    format: MatchFormat,
}

#[derive(Deserialize)]
struct RecordScoreBody {
    #[serde(rename = "match")]
    game: GameMatch,
    score: String,
    format: MatchFormat,
}

#[derive(Deserialize)]
struct MatchesBody {
    matches: Vec<GameMatch>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum KnockoutPlanBody {
    FromPools { pool_count: usize },
    Qualified { qualified: usize },
    Existing { matches: Vec<GameMatch> },
}

#[derive(Deserialize)]
struct AdvanceRoundBody {
    round: RoundType,
    matches: Vec<GameMatch>,
}

fn error_response(kind: &str, message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": message, "kind": kind }))
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "padel-bracket-engine",
    })
}

/// Validate a score string for a format and report the winning side.
#[post("/api/scores")]
async fn api_submit_score(body: Json<SubmitScoreBody>) -> HttpResponse {
    match submit_score(&body.score, body.format) {
        Ok(outcome) => HttpResponse::Ok().json(outcome),
        Err(e) => {
            log::debug!("rejected score '{}' ({}): {}", body.score, body.format, e);
            error_response(e.kind(), e.to_string())
        }
    }
}

/// Score one match and return it completed.
#[post("/api/matches/score")]
async fn api_record_score(body: Json<RecordScoreBody>) -> HttpResponse {
    let RecordScoreBody {
        mut game,
        score,
        format,
    } = body.into_inner();
    match record_score(&mut game, &score, format) {
        Ok(_) => HttpResponse::Ok().json(game),
        Err(e) => error_response(e.kind(), e.to_string()),
    }
}

/// Standings for every pool present in the match list.
#[post("/api/pools/standings")]
async fn api_pool_standings(body: Json<MatchesBody>) -> HttpResponse {
    HttpResponse::Ok().json(standings_by_pool(&body.matches))
}

/// Opening knockout round for a pool count, a qualified count, or existing rounds.
#[post("/api/knockout/plan")]
async fn api_knockout_plan(body: Json<KnockoutPlanBody>) -> HttpResponse {
    let order = RoundOrder::default();
    let start = match &*body {
        KnockoutPlanBody::FromPools { pool_count } => generate_knockout_round(
            &order,
            KnockoutEntry::FromPools {
                pool_count: *pool_count,
            },
        ),
        KnockoutPlanBody::Qualified { qualified } => {
            generate_knockout_round(&order, KnockoutEntry::Qualified(*qualified))
        }
        KnockoutPlanBody::Existing { matches } => {
            generate_knockout_round(&order, KnockoutEntry::ExistingRounds(matches))
        }
    };
    HttpResponse::Ok().json(start)
}

/// Next round's matches from a completed knockout round.
#[post("/api/rounds/advance")]
async fn api_advance_round(body: Json<AdvanceRoundBody>) -> HttpResponse {
    match advance_round(&RoundOrder::default(), body.round, &body.matches) {
        Ok(next) => HttpResponse::Ok().json(next),
        Err(e) => {
            log::info!("advancement from {} refused: {}", body.round, e);
            error_response(e.kind(), e.to_string())
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    HttpServer::new(|| {
        App::new()
            .service(api_health)
            .service(api_submit_score)
            .service(api_record_score)
            .service(api_pool_standings)
            .service(api_knockout_plan)
            .service(api_advance_round)
    })
    .bind(bind)?
    .run()
    .await
}
