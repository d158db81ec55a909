//! Registration form summary renderer.

use super::fit;
use crate::domain::{Field, VehicleDraft};
use crate::ui::theme::Theme;

const LABEL_WIDTH: usize = 18;

/// One `label: value` line per field; empty fields show a dimmed dash.
#[must_use]
pub fn render_form(form: &VehicleDraft, theme: &Theme) -> Vec<String> {
    Field::ALL
        .iter()
        .map(|&field| {
            let value = form.get(field);
            let shown = if value.is_empty() {
                theme.paint(&theme.colors.text_dim, "-")
            } else {
                theme.paint(&theme.colors.text_normal, value)
            };
            format!(
                "{}{shown}",
                theme.paint(&theme.colors.text_dim, &fit(field.label(), LABEL_WIDTH))
            )
        })
        .collect()
}
