use anyhow::Error;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Produce a rectangle centered within `area` that spans the requested percent
/// of the width and height.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(area);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(horizontal[1]);

    vertical[1]
}

/// Short user-facing message: the outermost context followed by its direct
/// cause. Deeper layers (such as SQLite's numeric result codes under a
/// `rusqlite::Error`) are left to the log.
pub(crate) fn surface_error(err: &Error) -> String {
    let top = err.to_string();
    match err.chain().nth(1).map(|cause| cause.to_string()) {
        Some(cause) if cause != top => format!("{top} ({cause})"),
        _ => top,
    }
}

/// Clamp a measured width into a terminal column length.
pub(crate) fn to_cells(width: u32) -> u16 {
    u16::try_from(width).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_error_appends_root_cause() {
        let err = Error::msg("disk full").context("write failed");
        assert_eq!(surface_error(&err), "write failed (disk full)");
    }

    #[test]
    fn surface_error_keeps_the_sqlite_message() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        let sql_err = conn.prepare("SELECT id FROM words").err().unwrap();
        let err = Error::from(sql_err).context("read failed");

        let message = surface_error(&err);
        assert!(message.starts_with("read failed ("), "{message}");
        assert!(message.contains("no such table: words"), "{message}");
    }

    #[test]
    fn surface_error_without_chain_is_plain() {
        assert_eq!(surface_error(&Error::msg("boom")), "boom");
    }

    #[test]
    fn centered_rect_stays_inside_area() {
        let area = Rect::new(0, 0, 100, 50);
        let rect = centered_rect(60, 40, area);
        assert_eq!(rect.width, 60);
        assert_eq!(rect.height, 20);
        assert!(rect.x >= area.x && rect.y >= area.y);
    }

    #[test]
    fn oversized_widths_saturate() {
        assert_eq!(to_cells(12), 12);
        assert_eq!(to_cells(1_000_000), u16::MAX);
    }
}
