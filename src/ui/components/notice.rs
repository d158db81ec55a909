//! Notice renderer.

use crate::app::{Notice, NoticeLevel};
use crate::ui::theme::Theme;

/// `[ok]` or `[error]` tag, bold title, then the message.
#[must_use]
pub fn render_notice(notice: &Notice, theme: &Theme) -> String {
    let (tag, color) = match notice.level {
        NoticeLevel::Success => ("[ok]", &theme.colors.accent),
        NoticeLevel::Error => ("[error]", &theme.colors.error_fg),
    };

    format!(
        "{} {}: {}",
        theme.paint_bold(color, tag),
        theme.paint_bold(&theme.colors.text_normal, &notice.title),
        notice.message
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_notice() {
        let theme = Theme::default().into_plain();
        let notice = Notice::error("Error", "all fields are required");
        assert_eq!(render_notice(&notice, &theme), "[error] Error: all fields are required");
    }
}
