//! Top-level rendering coordinator.
//!
//! Picks the layout for the current screen, computes view models where the
//! screen has one, and joins the component output into a single string for
//! the CLI to print.

use crate::app::{AppState, Screen};
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{HeaderInfo, ListingView, MapView};
use chrono::Datelike;

/// Default output width in columns.
pub const DEFAULT_COLS: usize = 80;

/// Renders the current screen.
#[must_use]
pub fn render(state: &AppState, cols: usize) -> String {
    let lines = match state.screen {
        Screen::Home => render_home(state, cols),
        Screen::Register => render_register(state, cols),
        Screen::List => render_listing(&ListingView::compute(state), &state.theme, cols),
        Screen::Map => render_map(&MapView::compute(state), &state.theme, cols),
        Screen::About => render_about(&state.theme, cols, chrono::Local::now().year()),
    };

    lines.join("\n")
}

fn chrome(title: &str, theme: &Theme, cols: usize) -> Vec<String> {
    let header = HeaderInfo {
        title: title.to_owned(),
    };
    vec![
        components::render_header(&header, theme, cols),
        components::render_border(theme, cols),
    ]
}

fn render_home(state: &AppState, cols: usize) -> Vec<String> {
    let theme = &state.theme;
    let mut lines = chrome("Radar Motu", theme, cols);

    lines.push(theme.paint(
        &theme.colors.text_normal,
        "Motorcycle yard companion: register, list and locate motorcycles.",
    ));
    lines.push(String::new());

    for screen in Screen::ALL.iter().filter(|s| **s != Screen::Home) {
        let command = match screen {
            Screen::Register => "register",
            Screen::List => "list",
            Screen::Map => "map",
            _ => "about",
        };
        lines.push(format!(
            "  {} {}",
            theme.paint_bold(&theme.colors.accent, &components::fit(command, 10)),
            theme.paint(&theme.colors.text_dim, screen.title()),
        ));
    }

    lines
}

fn render_register(state: &AppState, cols: usize) -> Vec<String> {
    let mut lines = chrome(Screen::Register.title(), &state.theme, cols);
    lines.extend(components::render_form(&state.form, &state.theme));
    lines
}

fn render_listing(view: &ListingView, theme: &Theme, cols: usize) -> Vec<String> {
    let mut lines = chrome(&view.header.title, theme, cols);

    if let Some(status) = &view.status {
        lines.push(theme.paint(&theme.colors.text_dim, status));
    }

    match &view.empty_state {
        Some(empty) => lines.extend(components::render_empty_state(empty, theme, cols)),
        None => lines.extend(components::render_vehicle_entries(&view.rows, theme)),
    }

    lines
}

fn render_map(view: &MapView, theme: &Theme, cols: usize) -> Vec<String> {
    let mut lines = chrome(&view.header.title, theme, cols);
    lines.push(theme.paint(&theme.colors.text_dim, &view.summary));

    match &view.empty_state {
        Some(empty) => lines.extend(components::render_empty_state(empty, theme, cols)),
        None => lines.extend(components::render_map_rows(&view.rows, theme)),
    }

    lines
}

fn render_about(theme: &Theme, cols: usize, year: i32) -> Vec<String> {
    let mut lines = chrome(Screen::About.title(), theme, cols);

    lines.push(format!(
        "{} {}",
        theme.paint_bold(&theme.colors.accent, "Radar Motu"),
        theme.paint(&theme.colors.text_dim, env!("CARGO_PKG_VERSION")),
    ));
    lines.push(theme.paint(&theme.colors.text_normal, env!("CARGO_PKG_DESCRIPTION")));
    lines.push(String::new());
    lines.push(theme.paint(
        &theme.colors.text_dim,
        &format!("© {year} Metamind Solution. All rights reserved."),
    ));

    lines
}
