//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main screen layout areas
pub struct MainLayout {
    pub tabs: Rect,
    pub body: Rect,
    pub status: Rect,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = (area.width.saturating_sub(width)) / 2;
    let popup_y = (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Calculate main screen layout: tab bar, screen body, status line, help bar
pub fn calculate_main_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    MainLayout {
        tabs: chunks[0],
        body: chunks[1],
        status: chunks[2],
        help: chunks[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_popup_fits_inside_area() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_popup(area, 40, 10);
        assert_eq!(popup.width, 40);
        assert_eq!(popup.height, 10);
        assert_eq!(popup.x, 30);
        assert_eq!(popup.y, 15);
    }

    #[test]
    fn test_centered_popup_clamps_to_small_area() {
        let area = Rect::new(0, 0, 20, 5);
        let popup = centered_popup(area, 40, 10);
        assert_eq!(popup.width, 20);
        assert_eq!(popup.height, 5);
    }

    #[test]
    fn test_main_layout_rows() {
        let layout = calculate_main_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.tabs.height, 3);
        assert_eq!(layout.body.height, 19);
        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.help.height, 1);
    }
}
