//! CLI commands: replay runner and formatters
//!
//! Drives a mounted header from scripted host steps and renders the results
//! as tables (human) or JSON.

use comfy_table::{Cell, Color, ContentArrangement, Row, Table};
use navhead_core::{HeaderConfig, HeaderCoordinator, HostStep, RouteSource, ScrollSurface};
use navhead_types::{
    AccentTheme, AccentTone, Background, CtaStyle, HeaderPhase, LinkView, RouteId, TextTone,
    VisualTheme,
};
use serde::Serialize;
use tracing::debug;

// ============================================================================
// Replay
// ============================================================================

/// Replay behaviour knobs
#[derive(Debug, Clone, Copy, Default)]
pub struct ReplayOptions {
    /// Only deliver host events on explicit `pump` steps
    pub queued: bool,
    /// Simulate a host without a scroll surface
    pub no_scroll_surface: bool,
}

/// Header snapshot after one script step
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayRow {
    pub step: usize,
    pub action: String,
    pub phase: HeaderPhase,
    pub scrolled: bool,
    pub menu_open: bool,
    pub route: RouteId,
    pub theme: VisualTheme,
    pub revision: u64,
    pub mounted: bool,
}

/// Run `steps` against a freshly mounted header.
pub fn replay(config: HeaderConfig, steps: &[HostStep], options: ReplayOptions) -> Vec<ReplayRow> {
    let surface = ScrollSurface::new(config.event_capacity);
    let mut routes = RouteSource::new(config.event_capacity);
    let scroll_host = if options.no_scroll_surface {
        None
    } else {
        Some(&surface)
    };
    let mut header = HeaderCoordinator::mount(config, scroll_host, &routes);

    let mut rows = Vec::with_capacity(steps.len());
    for (index, step) in steps.iter().enumerate() {
        match step {
            HostStep::Scroll(offset) => {
                surface.publish(*offset);
            }
            HostStep::Route(route) => {
                routes.publish(route.clone());
            }
            HostStep::Toggle => header.on_toggle_menu(),
            HostStep::Close => header.close_menu(),
            HostStep::Follow(path) => header.follow(path, &mut routes),
            HostStep::Pump => {
                header.pump();
            }
            HostStep::Unmount => {
                header.unmount();
            }
        }

        if !options.queued {
            header.pump();
        }

        debug!(step = index + 1, action = %step, revision = header.revision(), "replayed step");
        rows.push(snapshot(index + 1, step, &header));
    }

    rows
}

fn snapshot(step: usize, action: &HostStep, header: &HeaderCoordinator) -> ReplayRow {
    let state = header.state();
    ReplayRow {
        step,
        action: action.to_string(),
        phase: state.phase(),
        scrolled: state.scrolled,
        menu_open: state.menu_open,
        theme: header.theme(),
        route: state.route,
        revision: header.revision(),
        mounted: header.is_mounted(),
    }
}

// ============================================================================
// Formatters
// ============================================================================

fn header_row(labels: &[&str], no_color: bool) -> Vec<Cell> {
    labels
        .iter()
        .map(|label| {
            let cell = Cell::new(label);
            if no_color {
                cell
            } else {
                cell.fg(Color::Cyan)
            }
        })
        .collect()
}

fn tone_cell(text: &str, tone: TextTone, no_color: bool) -> Cell {
    let cell = Cell::new(text);
    if no_color {
        return cell;
    }
    match tone {
        TextTone::Dark => cell.fg(Color::DarkGrey),
        TextTone::Light => cell.fg(Color::White),
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

fn background_name(background: Background) -> &'static str {
    match background {
        Background::Solid => "solid",
        Background::Transparent => "transparent",
    }
}

fn tone_name(tone: TextTone) -> &'static str {
    match tone {
        TextTone::Dark => "dark",
        TextTone::Light => "light",
    }
}

/// Format replay rows as table (human) or JSON
pub fn format_replay(rows: &[ReplayRow], json: bool, no_color: bool) -> String {
    if json {
        return serde_json::to_string_pretty(rows).unwrap_or_else(|_| "[]".to_string());
    }

    if rows.is_empty() {
        return "Script has no steps.".to_string();
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header_row(
        &[
            "#", "Action", "Phase", "Route", "Background", "Text", "Overlay", "Rev",
        ],
        no_color,
    ));

    for row in rows {
        let action = if row.mounted {
            row.action.clone()
        } else {
            format!("{} (unmounted)", row.action)
        };
        table.add_row(Row::from(vec![
            Cell::new(row.step),
            Cell::new(action),
            Cell::new(row.phase.name()),
            Cell::new(row.route.as_str()),
            Cell::new(background_name(row.theme.background)),
            tone_cell(tone_name(row.theme.text_tone), row.theme.text_tone, no_color),
            Cell::new(yes_no(row.theme.show_overlay)),
            Cell::new(row.revision),
        ]));
    }

    table.to_string()
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResolvedOutput<'a> {
    scrolled: bool,
    menu_open: bool,
    phase: HeaderPhase,
    theme: &'a VisualTheme,
    accents: &'a AccentTheme,
}

/// Format a single theme resolution
pub fn format_resolution(
    scrolled: bool,
    menu_open: bool,
    theme: &VisualTheme,
    accents: &AccentTheme,
    json: bool,
    no_color: bool,
) -> String {
    let phase = navhead_types::HeaderState {
        scrolled,
        menu_open,
        route: RouteId::root(),
    }
    .phase();

    if json {
        let output = ResolvedOutput {
            scrolled,
            menu_open,
            phase,
            theme,
            accents,
        };
        return serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header_row(&["Property", "Value"], no_color));

    let tagline = match accents.tagline_tone {
        AccentTone::Muted => "muted",
        AccentTone::Light => "light",
    };
    let cta = match accents.cta_style {
        CtaStyle::Filled => "filled",
        CtaStyle::Inverted => "inverted",
    };

    table.add_row(vec!["phase", phase.name()]);
    table.add_row(vec!["background", background_name(theme.background)]);
    table.add_row(Row::from(vec![
        Cell::new("text"),
        tone_cell(tone_name(theme.text_tone), theme.text_tone, no_color),
    ]));
    table.add_row(vec!["overlay", yes_no(theme.show_overlay)]);
    table.add_row(vec!["tagline", tagline]);
    table.add_row(vec!["call-to-action", cta]);
    table.add_row(vec!["elevated", yes_no(accents.elevated)]);
    table.add_row(vec!["compact", yes_no(accents.compact)]);

    table.to_string()
}

/// Format link list with active markers
pub fn format_links(views: &[LinkView], route: &RouteId, json: bool, no_color: bool) -> String {
    if json {
        return serde_json::to_string_pretty(views).unwrap_or_else(|_| "[]".to_string());
    }

    if views.is_empty() {
        return "No links configured.".to_string();
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header_row(&["Label", "Path", "Active"], no_color));

    for view in views {
        let marker = if view.active { "●" } else { "" };
        let mut marker_cell = Cell::new(marker);
        if view.active && !no_color {
            marker_cell = marker_cell.fg(Color::Green);
        }
        table.add_row(Row::from(vec![
            Cell::new(&view.link.label),
            Cell::new(&view.link.path),
            marker_cell,
        ]));
    }

    format!("Route: {}\n{}", route, table)
}
