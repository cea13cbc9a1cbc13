use blockfall::core::GameState;
use blockfall::term::{FrameBuffer, GameView, PanelStatus, Viewport};
use blockfall::types::{GameAction, PieceKind, Rgb, Rotation};

fn has_text(fb: &FrameBuffer, text: &str) -> bool {
    (0..fb.height()).any(|y| fb.row_text(y).contains(text))
}

#[test]
fn term_view_renders_border_corners() {
    let state = GameState::with_seed(1);
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // grid pixels = 10*2 by 20*1 => 20x20
    // plus border => 22x22
    let fb = view.render(&state.snapshot(), PanelStatus::default(), Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = GameState::with_seed(1).snapshot();
    snap.board[19][0] = PieceKind::Z.value();

    let fb = GameView::default().render(&snap, PanelStatus::default(), Viewport::new(22, 22));

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    let (x0, y0) = (1, 1 + 19);
    assert_eq!(fb.get(x0, y0).unwrap().ch, '█');
    assert_eq!(fb.get(x0 + 1, y0).unwrap().ch, '█');
    assert_eq!(fb.get(x0, y0).unwrap().style.fg, Rgb::new(0xec, 0x1c, 0x24));
    assert_eq!(fb.get(x0 + 2, y0).unwrap().ch, '·');
}

#[test]
fn term_view_side_panel_shows_stats_and_autoplay() {
    let mut state = GameState::with_seed(1);
    state.spawn_piece_of(PieceKind::T, Rotation::North);
    let view = GameView::default();

    let fb = view.render(&state.snapshot(), PanelStatus { autoplay: true }, Viewport::new(60, 24));
    for label in ["SCORE", "LEVEL", "LINES", "SPEED", "AUTO"] {
        assert!(has_text(&fb, label), "missing {label}");
    }
    assert!(has_text(&fb, "2000ms"));
    assert!(has_text(&fb, "ON"));

    let fb = view.render(&state.snapshot(), PanelStatus { autoplay: false }, Viewport::new(60, 24));
    assert!(has_text(&fb, "OFF"));
}

#[test]
fn term_view_paused_overlay() {
    let mut state = GameState::with_seed(1);
    state.start();
    assert!(state.apply_action(GameAction::Pause));

    let fb = GameView::default().render(&state.snapshot(), PanelStatus::default(), Viewport::new(22, 22));
    assert!(has_text(&fb, "PAUSED"));
}

#[test]
fn term_view_tolerates_tiny_viewport() {
    let state = GameState::with_seed(1);
    let fb = GameView::default().render(&state.snapshot(), PanelStatus::default(), Viewport::new(5, 3));
    assert_eq!(fb.width(), 5);
    assert_eq!(fb.height(), 3);
}
