//! HTML rendering of the leaderboards into the page template.

use crate::logic::ranking::{Leaderboards, Medal, Standing};
use std::fmt;

/// Page shipped with the binary.
pub const PAGE_TEMPLATE: &str = include_str!("../../templates/index.html");

pub const CAPTURES_REGION: &str = "scoreboard-captures";
pub const WIN_LOSS_REGION: &str = "scoreboard-winnings-losses";
pub const POINTS_REGION: &str = "scoreboard-points";
pub const DETAILS_REGION: &str = "data-container";
pub const UPDATED_AT_MARKER: &str = "updated-at";

const REGIONS: [&str; 4] = [CAPTURES_REGION, WIN_LOSS_REGION, POINTS_REGION, DETAILS_REGION];

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RenderError {
    /// The template lacks the marker for a display region.
    MissingRegion(&'static str),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::MissingRegion(name) => write!(f, "Scoreboard region `{}` not found in page", name),
        }
    }
}

impl std::error::Error for RenderError {}

fn marker(name: &str) -> String {
    format!("{{{{{}}}}}", name)
}

/// Escape text that came from a remote service before it lands in HTML.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// One scoreboard region: a title then a numbered, medal-colored entry per player.
pub fn render_section(title: &str, players: &[Standing], entry: impl Fn(&Standing) -> String) -> String {
    let mut html = format!("<h2>{}</h2>\n", title);
    for (index, player) in players.iter().enumerate() {
        let style = Medal::for_index(index)
            .map(|m| format!(" style=\"color: {};\"", m.color()))
            .unwrap_or_default();
        html.push_str(&format!(
            "<div class=\"scoreboard-entry\"{}><p>{}. {}</p></div>\n",
            style,
            index + 1,
            entry(player)
        ));
    }
    html
}

fn captures_entry(p: &Standing) -> String {
    format!(
        "{} <span style=\"color: black;\">/</span> {} captures",
        escape_html(&p.name),
        p.capture_count
    )
}

fn win_loss_entry(p: &Standing) -> String {
    format!(
        "{} <span style=\"color: black;\">/</span> <span style=\"color: green;\">{} W</span>, <span style=\"color: red;\">{} L</span>",
        escape_html(&p.name),
        p.winnings,
        p.losses
    )
}

fn points_entry(p: &Standing) -> String {
    format!(
        "{} <span style=\"color: black;\">/</span> {} PoL",
        escape_html(&p.name),
        p.score
    )
}

/// Hidden per-player blocks, in creation order.
pub fn render_details(players: &[Standing]) -> String {
    let mut html = String::new();
    for p in players {
        let id = escape_html(p.id.as_str());
        html.push_str(&format!(
            "<div class=\"container\" style=\"display: none;\">\n  \
             <h2>UUID : {id}</h2>\n  \
             <h3 id=\"capture-{id}\">Total Capture Count : {}</h3>\n  \
             <p id=\"username-{id}\">Username : {}</p>\n  \
             <p id=\"winnings-{id}\">Win : {}</p>\n  \
             <p id=\"losses-{id}\">Losses : {}</p>\n\
             </div>\n",
            p.capture_count,
            escape_html(&p.name),
            p.winnings,
            p.losses,
        ));
    }
    html
}

/// Fill every region of `template`. Fails without output if any region marker is missing.
pub fn render_page(template: &str, boards: &Leaderboards) -> Result<String, RenderError> {
    for region in REGIONS {
        if !template.contains(&marker(region)) {
            return Err(RenderError::MissingRegion(region));
        }
    }
    let captures = render_section("Captures Ranking", &boards.captures, captures_entry);
    let win_loss = render_section("Win / Loss Ranking", &boards.win_loss, win_loss_entry);
    let points = render_section("PokeLeague Points Ranking", &boards.points, points_entry);
    let details = render_details(&boards.players);
    let updated_at = boards.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string();

    Ok(fill_markers(
        template,
        &[
            (CAPTURES_REGION, captures.as_str()),
            (WIN_LOSS_REGION, win_loss.as_str()),
            (POINTS_REGION, points.as_str()),
            (DETAILS_REGION, details.as_str()),
            (UPDATED_AT_MARKER, updated_at.as_str()),
        ],
    ))
}

/// Substitute `{{name}}` markers in one scan of the template.
/// Inserted values are never rescanned; unknown markers are left as they are.
fn fill_markers(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            break;
        };
        match values.iter().find(|(name, _)| *name == &after[..end]) {
            Some((_, value)) => {
                out.push_str(&rest[..start]);
                out.push_str(value);
                rest = &after[end + 2..];
            }
            None => {
                out.push_str(&rest[..start + 2]);
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Last successfully rendered page and the boards it was rendered from.
#[derive(Clone, Debug)]
pub struct PublishedPage {
    template: String,
    html: String,
    boards: Leaderboards,
}

impl PublishedPage {
    /// Start from empty boards. An unusable template is reported but leaves the page blank.
    pub fn new(template: impl Into<String>) -> Self {
        let mut page = Self {
            template: template.into(),
            html: String::new(),
            boards: Leaderboards::empty(),
        };
        let boards = page.boards.clone();
        if let Err(e) = page.publish(boards) {
            log::error!("{}", e);
        }
        page
    }

    /// Render and swap in new boards. On error the previous page stays in place.
    pub fn publish(&mut self, boards: Leaderboards) -> Result<(), RenderError> {
        let html = render_page(&self.template, &boards)?;
        self.html = html;
        self.boards = boards;
        Ok(())
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn boards(&self) -> &Leaderboards {
        &self.boards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlayerId;
    use chrono::Utc;

    fn standing(id: &str, name: &str, captures: u32) -> Standing {
        Standing {
            id: PlayerId::new(id),
            name: name.to_string(),
            capture_count: captures,
            winnings: 2,
            losses: 1,
            score: 12,
        }
    }

    #[test]
    fn shipped_template_has_every_region() {
        assert!(render_page(PAGE_TEMPLATE, &Leaderboards::empty()).is_ok());
    }

    #[test]
    fn top_three_get_medal_colors() {
        let players: Vec<_> = (0..4).map(|i| standing(&format!("p{i}"), "x", i)).collect();
        let html = render_section("T", &players, captures_entry);
        assert!(html.contains("style=\"color: gold;\"><p>1. "));
        assert!(html.contains("style=\"color: gray;\"><p>2. "));
        assert!(html.contains("style=\"color: #cd7f32;\"><p>3. "));
        assert!(html.contains("<div class=\"scoreboard-entry\"><p>4. "));
    }

    #[test]
    fn entry_templates() {
        let p = standing("a", "Ash", 10);
        assert!(captures_entry(&p).ends_with("10 captures"));
        assert!(win_loss_entry(&p).contains("2 W</span>, <span style=\"color: red;\">1 L"));
        assert!(points_entry(&p).ends_with("12 PoL"));
    }

    #[test]
    fn names_are_escaped() {
        let p = standing("a", "<b>&", 1);
        assert!(captures_entry(&p).starts_with("&lt;b&gt;&amp;"));
    }

    #[test]
    fn marker_text_in_player_data_is_not_expanded() {
        let mut p = standing("{{data-container}}", "{{scoreboard-points}}", 5);
        p.score = 1;
        let boards = Leaderboards::rank(vec![p], Utc::now());
        let html = render_page(PAGE_TEMPLATE, &boards).unwrap();
        assert_eq!(html.matches("PokeLeague Points Ranking").count(), 1);
        assert_eq!(html.matches("UUID : ").count(), 1);
        assert!(html.contains("UUID : {{data-container}}</h2>"));
        assert!(html.contains("{{scoreboard-points}} <span style=\"color: black;\">/</span> 5 captures"));
    }

    #[test]
    fn fill_markers_leaves_unknown_markers() {
        let out = fill_markers("a {{x}} b {{y}} c {{", &[("y", "{{x}}")]);
        assert_eq!(out, "a {{x}} b {{x}} c {{");
    }

    #[test]
    fn missing_region_keeps_previous_page() {
        let mut page = PublishedPage::new(PAGE_TEMPLATE);
        let before = page.html().to_string();
        page.template = "<div>{{scoreboard-captures}}</div>".to_string();
        let boards = Leaderboards::rank(vec![standing("a", "Ash", 3)], Utc::now());
        assert_eq!(
            page.publish(boards),
            Err(RenderError::MissingRegion(WIN_LOSS_REGION))
        );
        assert_eq!(page.html(), before);
        assert!(page.boards().players.is_empty());
    }
}
