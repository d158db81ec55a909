//! Vehicle listing entries.
//!
//! Each record renders as a titled block: `PLATE - MODEL` on the entry
//! background, then brand, color, years and chassis, one per line.

use super::fit;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::VehicleRow;

const LABEL_WIDTH: usize = 9;
const INDENT: &str = "  ";

/// One block per row, separated by blank lines.
#[must_use]
pub fn render_vehicle_entries(rows: &[VehicleRow], theme: &Theme) -> Vec<String> {
    let mut lines = Vec::with_capacity(rows.len() * 6);

    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }

        lines.push(theme.paint_on(
            &theme.colors.item_bg,
            &theme.colors.accent,
            &format!(" {} ", row.title),
        ));

        for (label, value) in [
            ("Brand:", &row.brand),
            ("Color:", &row.color),
            ("Year:", &row.years),
            ("Chassis:", &row.chassis),
        ] {
            lines.push(format!(
                "{INDENT}{}{}",
                theme.paint(&theme.colors.text_dim, &fit(label, LABEL_WIDTH)),
                theme.paint(&theme.colors.text_normal, value),
            ));
        }
    }

    lines
}
