//! Capture scoreboard web app: library with models, remote access and scoreboard logic.

pub mod config;
pub mod logic;
pub mod models;
pub mod remote;

pub use config::{Config, ConfigError};
pub use logic::{
    adjusted_points, build_leaderboards, discover, points_csv, refresh_player, reload_all,
    render_page, resolve_name, score_players, AdjustedPoints, Leaderboards, PublishedPage,
    RefreshError, RenderError, Standing, PAGE_TEMPLATE,
};
pub use models::{PlayerData, PlayerId, PlayerRecord, PlayerStats, Tracker};
pub use remote::{AttemptError, Client, Endpoints, FetchError, HttpTransport, RetryPolicy, Transport};
