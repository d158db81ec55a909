//! Header component renderer.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Title centered over `cols` columns on the header bar.
///
/// The bar spans the full width when colored; plain output drops the trailing
/// padding.
#[must_use]
pub fn render_header(header: &HeaderInfo, theme: &Theme, cols: usize) -> String {
    let title_len = header.title.chars().count();
    let left = cols.saturating_sub(title_len) / 2;
    let right = cols.saturating_sub(title_len + left);

    if theme.plain {
        return format!("{}{}", " ".repeat(left), header.title);
    }

    let bar = format!("{}{}{}", " ".repeat(left), header.title, " ".repeat(right));
    theme.paint_on(&theme.colors.background, &theme.colors.accent, &bar)
}

/// Horizontal separator line.
#[must_use]
pub fn render_border(theme: &Theme, cols: usize) -> String {
    theme.paint(&theme.colors.border, &"─".repeat(cols))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(title: &str) -> HeaderInfo {
        HeaderInfo {
            title: title.to_owned(),
        }
    }

    #[test]
    fn plain_header_is_centered_without_trailing_space() {
        let theme = Theme::default().into_plain();
        assert_eq!(render_header(&header("Map"), &theme, 11), "    Map");
    }

    #[test]
    fn colored_header_fills_the_bar() {
        let theme = Theme::default();
        let line = render_header(&header("Map"), &theme, 11);
        assert!(line.starts_with(&Theme::bg(&theme.colors.background)));
        assert!(line.contains("    Map    "));
    }
}
