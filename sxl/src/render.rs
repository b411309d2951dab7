//! Text rendering of an enriched launch.

use std::fmt::Write as _;
use std::io::IsTerminal;

use crossterm::style::{Color, Stylize};
use sxl_core::{EnrichedLaunch, Resource, UNKNOWN, UNKNOWN_SUMMARY};

const BANNER_TITLE: &str = "SpaceX  -  Rocket  Launch  Information";

/// Whether rendered output may carry terminal escape codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    /// No escape codes.
    #[default]
    Plain,
    /// Underlined, colored block labels.
    Color,
}

impl Style {
    /// `Color` when stdout is a terminal and `NO_COLOR` is unset, else `Plain`.
    #[must_use]
    pub fn detect() -> Self {
        Self::choose(
            std::io::stdout().is_terminal(),
            std::env::var_os("NO_COLOR").is_some(),
        )
    }

    const fn choose(is_terminal: bool, no_color: bool) -> Self {
        if is_terminal && !no_color {
            Self::Color
        } else {
            Self::Plain
        }
    }
}

/// Banner printed once before the first block, with a macron rule as wide as
/// the title.
#[must_use]
pub fn banner() -> String {
    let rule = "¯".repeat(BANNER_TITLE.chars().count());
    format!("\n{BANNER_TITLE}\n{rule}\n")
}

/// Render one enriched launch as a text block under the label of `resource`.
///
/// The precision suffix on the launch date is only shown for the next
/// scheduled launch.
#[must_use]
pub fn render(record: &EnrichedLaunch, resource: Resource, style: Style) -> String {
    let launch = &record.launch;
    let mut out = String::new();

    let title = format!("{} SpaceX Launch 🚀", resource.label());
    let _ = writeln!(out, "{}", heading(&title, resource, style));
    out.push('\n');

    let flight_number = launch
        .flight_number
        .map_or_else(|| UNKNOWN.to_string(), |n| n.to_string());
    let _ = writeln!(out, "Flight Number     : {flight_number}");
    let _ = writeln!(
        out,
        "Flight Name       : {}",
        launch.flight_name.as_deref().unwrap_or(UNKNOWN)
    );
    let _ = writeln!(out, "Launchpad         : {}", record.launchpad_summary);

    let _ = write!(out, "Launch Date       : {}", record.display_date);
    if resource == Resource::Next {
        let precision = launch
            .date_precision
            .as_deref()
            .map_or_else(|| UNKNOWN.to_string(), str::to_uppercase);
        let _ = write!(out, " [Precision: {precision}]");
    }
    out.push('\n');

    let succeeded = launch
        .succeeded
        .map_or_else(|| "Awaiting launch".to_string(), |b| b.to_string());
    let _ = writeln!(out, "Flight Successful : {succeeded}");

    let payload = if record.payload_summary.is_empty() {
        UNKNOWN_SUMMARY
    } else {
        record.payload_summary.as_str()
    };
    let _ = writeln!(out, "\nPayload Details:\n{payload}");
    let _ = writeln!(
        out,
        "\nFlight Details:\n{}",
        launch.details.as_deref().unwrap_or("None available")
    );
    out
}

fn heading(title: &str, resource: Resource, style: Style) -> String {
    match style {
        Style::Plain => title.to_string(),
        Style::Color => {
            let color = match resource {
                Resource::Latest => Color::Green,
                Resource::Next => Color::Yellow,
            };
            title.with(color).underlined().to_string()
        }
    }
}
