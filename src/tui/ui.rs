use crate::core::config::Theme;
use crate::core::state::{App, Viewport};
use crate::tui::component::Component;
use crate::tui::components::BoardView;

use ratatui::Frame;
use ratatui::layout::Rect;

/// Draw the board centered in the viewport.
pub fn draw_ui(frame: &mut Frame, app: &App, theme: &Theme) {
    let area = viewport_area(frame.area(), app.viewport);
    BoardView::new(&app.board, theme).render(frame, area);
}

/// The area the board is centered in: the last reported terminal size,
/// clipped to the frame. Before any resize arrives the frame area is used.
fn viewport_area(frame_area: Rect, viewport: Option<Viewport>) -> Rect {
    match viewport {
        Some(v) => Rect::new(frame_area.x, frame_area.y, v.width, v.height).intersection(frame_area),
        None => frame_area,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::board::Direction;
    use crate::test_support::test_app;
    use crate::tui::components::board_view::{BOARD_HEIGHT, BOARD_WIDTH};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_viewport_area_defaults_to_frame() {
        let frame = Rect::new(0, 0, 100, 50);
        assert_eq!(viewport_area(frame, None), frame);
    }

    #[test]
    fn test_viewport_area_clipped_to_frame() {
        let frame = Rect::new(0, 0, 100, 50);
        let viewport = Viewport {
            width: 200,
            height: 20,
        };
        assert_eq!(viewport_area(frame, Some(viewport)), Rect::new(0, 0, 100, 20));
    }

    #[test]
    fn test_draw_ui_centers_board() {
        let backend = TestBackend::new(80, 60);
        let mut terminal = Terminal::new(backend).unwrap();
        let app = test_app();
        terminal
            .draw(|f| draw_ui(f, &app, &Theme::default()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(9, 4)].symbol(), "╔");
        assert_eq!(buffer[(9 + BOARD_WIDTH - 1, 4 + BOARD_HEIGHT - 1)].symbol(), "╝");
        assert_eq!(buffer[(0, 0)].symbol(), " ");
    }

    #[test]
    fn test_draw_ui_uses_stored_viewport() {
        let backend = TestBackend::new(80, 60);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = test_app();
        app.viewport = Some(Viewport {
            width: 70,
            height: 56,
        });
        terminal
            .draw(|f| draw_ui(f, &app, &Theme::default()))
            .unwrap();

        assert_eq!(terminal.backend().buffer()[(4, 2)].symbol(), "╔");
    }

    #[test]
    fn test_draw_ui_tiny_terminal() {
        let backend = TestBackend::new(12, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        let app = test_app();
        terminal
            .draw(|f| draw_ui(f, &app, &Theme::default()))
            .unwrap();
    }

    #[test]
    fn test_small_terminal_shows_centered_window() {
        // Window onto board x 11..51, y 16..36: grid rows 3-6, frame off screen
        let backend = TestBackend::new(40, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = test_app();
        app.board.try_move(Direction::Up);
        app.board.try_move(Direction::Up);
        terminal
            .draw(|f| draw_ui(f, &app, &Theme::default()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        for y in 0..20 {
            for x in 0..40 {
                let symbol = buffer[(x, y)].symbol();
                assert!(
                    !"╔╗╚╝═║".contains(symbol),
                    "frame glyph {symbol:?} at ({x}, {y})"
                );
            }
        }

        // Row 3, col 1 starts at board (11, 16)
        assert_eq!(buffer[(0, 0)].symbol(), "┌");
        // Active piece at row 6, col 2: board (21, 31)
        assert_eq!(buffer[(10, 15)].symbol(), "╭");
        // Col 4's right edge is the last visible column; col 5 is cut off
        assert_eq!(buffer[(39, 0)].symbol(), "┐");
    }

    #[test]
    fn test_cut_off_cell_is_not_redrawn_closed() {
        // Window starts at board y 15, the bottom edge of grid row 2
        let backend = TestBackend::new(40, 22);
        let mut terminal = Terminal::new(backend).unwrap();
        let app = test_app();
        terminal
            .draw(|f| draw_ui(f, &app, &Theme::default()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(0, 0)].symbol(), "└");
        assert_eq!(buffer[(0, 1)].symbol(), "┌");
    }
}
