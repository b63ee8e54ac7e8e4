//! Single binary web server: polls the data host and serves the rendered leaderboards.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. See `capture_scoreboard_web::config` for the
//! environment variables (HOST, PORT, DATA_BASE_URL, ...).

use actix_files::Files;
use actix_web::{get, web::Data, App, HttpResponse, HttpServer, Responder};
use capture_scoreboard_web::{
    build_leaderboards, discover, points_csv, reload_all, Client, Config, HttpTransport,
    PublishedPage, Tracker, PAGE_TEMPLATE,
};
use std::sync::RwLock;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

/// Everything the timers write and the handlers read.
struct Shared {
    tracker: RwLock<Tracker>,
    page: RwLock<PublishedPage>,
}

type AppState = Data<Shared>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "capture-scoreboard",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Last rendered page.
#[get("/")]
async fn index(state: AppState) -> HttpResponse {
    let page = match state.page.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(page.html().to_string())
}

/// The three rankings behind the current page, as JSON.
#[get("/api/leaderboards")]
async fn api_leaderboards(state: AppState) -> HttpResponse {
    let page = match state.page.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(page.boards())
}

/// Points ranking with all stats, as CSV.
#[get("/api/leaderboards.csv")]
async fn api_leaderboards_csv(state: AppState) -> HttpResponse {
    let page = match state.page.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match points_csv(page.boards()) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .insert_header(("Content-Disposition", "attachment; filename=\"leaderboard.csv\""))
            .body(body),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Recompute the boards from the tracker and swap in the new page.
fn publish_scoreboard(state: &Shared) {
    let boards = match state.tracker.read() {
        Ok(t) => build_leaderboards(&t),
        Err(_) => {
            log::error!("Tracker lock poisoned, scoreboard not updated");
            return;
        }
    };
    let mut page = match state.page.write() {
        Ok(guard) => guard,
        Err(_) => {
            log::error!("Page lock poisoned, scoreboard not updated");
            return;
        }
    };
    match page.publish(boards) {
        Ok(()) => log::debug!("Scoreboard updated ({} players)", page.boards().players.len()),
        Err(e) => log::error!("Scoreboard update aborted: {}", e),
    }
}

fn ticker(period: Duration) -> tokio::time::Interval {
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval
}

/// Start the three independent timers: discovery, full reload, scoreboard.
fn spawn_timers(state: AppState, client: Client<HttpTransport>, period: Duration) {
    let (s, c) = (state.clone(), client.clone());
    actix_web::rt::spawn(async move {
        let mut interval = ticker(period);
        loop {
            interval.tick().await;
            log::debug!("Checking for new players...");
            if let Err(e) = discover(&s.tracker, &c).await {
                log::error!("Player discovery failed: {}", e);
            }
        }
    });

    let (s, c) = (state.clone(), client);
    actix_web::rt::spawn(async move {
        let mut interval = ticker(period);
        loop {
            interval.tick().await;
            match reload_all(&s.tracker, &c).await {
                Ok(n) => log::debug!("Reloaded {} player(s)", n),
                Err(e) => log::error!("Reload failed: {}", e),
            }
            publish_scoreboard(&s);
        }
    });

    actix_web::rt::spawn(async move {
        let mut interval = ticker(period);
        loop {
            interval.tick().await;
            publish_scoreboard(&state);
        }
    });
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    let transport = HttpTransport::new(config.request_timeout).map_err(std::io::Error::other)?;
    let client = Client::new(transport, config.endpoints.clone(), config.retry);

    log::info!(
        "Polling {} every {:?} ({} attempts, {:?} apart)",
        config.endpoints.discovery_url(),
        config.refresh_interval,
        config.retry.attempts(),
        config.retry.delay
    );

    let state = Data::new(Shared {
        tracker: RwLock::new(Tracker::new()),
        page: RwLock::new(PublishedPage::new(PAGE_TEMPLATE)),
    });

    spawn_timers(state.clone(), client, config.refresh_interval);

    let bind = (config.host.as_str(), config.port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(index)
            .service(api_health)
            .service(favicon)
            .service(api_leaderboards)
            .service(api_leaderboards_csv)
            .service(Files::new("/static", "static"))
    })
    .bind(bind)?
    .run()
    .await
}
