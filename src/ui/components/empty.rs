//! Empty state component renderer.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Two centered lines: the message and a dimmed hint.
#[must_use]
pub fn render_empty_state(empty: &EmptyState, theme: &Theme, cols: usize) -> Vec<String> {
    let center = |text: &str| {
        let padding = cols.saturating_sub(text.chars().count()) / 2;
        format!("{}{text}", " ".repeat(padding))
    };

    vec![
        String::new(),
        theme.paint(&theme.colors.text_normal, &center(&empty.message)),
        theme.paint(&theme.colors.text_dim, &center(&empty.subtitle)),
    ]
}
