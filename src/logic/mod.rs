//! Scoreboard logic: refresh, scoring, ranking, rendering and export.

mod export;
mod ranking;
mod refresh;
mod render;
mod scoring;

pub use export::points_csv;
pub use ranking::{build_leaderboards, standings, Leaderboards, Medal, Standing};
pub use refresh::{
    discover, refresh_logged, refresh_player, reload_all, resolve_name, RefreshError,
    MISSING_USERNAME,
};
pub use render::{
    escape_html, render_details, render_page, render_section, PublishedPage, RenderError,
    CAPTURES_REGION, DETAILS_REGION, PAGE_TEMPLATE, POINTS_REGION, UPDATED_AT_MARKER,
    WIN_LOSS_REGION,
};
pub use scoring::{adjusted_points, score_player, score_players, AdjustedPoints};
