//! Yard map element list renderer.

use super::fit;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::MapRow;

/// One line per visible element with its screen position.
///
/// Motorcycles show the zone they stand in, and those whose plate is in the
/// registry get a `registered` marker.
#[must_use]
pub fn render_map_rows(rows: &[MapRow], theme: &Theme) -> Vec<String> {
    rows.iter()
        .map(|row| {
            let color = match row.kind {
                "zone" => &theme.colors.zone_fg,
                "box" => &theme.colors.box_fg,
                _ => &theme.colors.motorcycle_fg,
            };
            let position = format!("({:>6.1}, {:>6.1})", row.x, row.y);
            let zone = row
                .zone
                .map(|zone| format!("  {}", theme.paint(&theme.colors.zone_fg, &format!("in {zone}"))))
                .unwrap_or_default();
            let marker = if row.registered {
                format!("  {}", theme.paint_bold(&theme.colors.accent, "● registered"))
            } else {
                String::new()
            };

            format!(
                "{} {} {} {}{zone}{marker}",
                theme.paint(color, &fit(row.kind, 5)),
                fit(row.id, 8),
                fit(row.label, 18),
                theme.paint(&theme.colors.text_dim, &position),
            )
        })
        .collect()
}
