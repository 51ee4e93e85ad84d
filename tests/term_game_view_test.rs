use tui_bowling::core::{GameConfig, LaneGame, PinGame, PlayPhase, Scorecard};
use tui_bowling::term::{FrameBuffer, LaneView, Layout, PinView, Viewport};

fn row_text(fb: &FrameBuffer, y: u16) -> String {
    (0..fb.width())
        .map(|x| fb.get(x, y).map(|c| c.ch).unwrap_or(' '))
        .collect()
}

fn screen_text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| row_text(fb, y))
        .collect::<Vec<_>>()
        .join("\n")
}

fn world() -> glam::Vec2 {
    let cfg = GameConfig::default();
    glam::Vec2::new(cfg.arena.width, cfg.arena.height)
}

#[test]
fn lane_view_draws_table_border() {
    let game = LaneGame::new(GameConfig::default(), 1);
    let vp = Viewport::new(100, 30);
    let fb = LaneView::default().render(&game.snapshot(), vp);
    let f = Layout::compute(vp, world()).frame;

    assert_eq!(fb.get(f.x, f.y).unwrap().ch, '┌');
    assert_eq!(fb.get(f.x + f.w - 1, f.y).unwrap().ch, '┐');
    assert_eq!(fb.get(f.x, f.y + f.h - 1).unwrap().ch, '└');
    assert_eq!(fb.get(f.x + f.w - 1, f.y + f.h - 1).unwrap().ch, '┘');
}

#[test]
fn lane_view_draws_ball_and_pins() {
    let game = LaneGame::new(GameConfig::default(), 1);
    let vp = Viewport::new(100, 30);
    let fb = LaneView::default().render(&game.snapshot(), vp);
    let t = Layout::compute(vp, world()).table;
    let mut ball = 0;
    let mut pins = 0;
    for y in t.y..t.y + t.h {
        for x in t.x..t.x + t.w {
            match fb.get(x, y).unwrap().ch {
                '●' => ball += 1,
                'o' => pins += 1,
                _ => {}
            }
        }
    }
    assert!(ball > 0);
    assert!(pins >= 10, "expected every pin drawn, got {pins} cells");
}

#[test]
fn lane_view_panel_shows_frame_and_score() {
    let game = LaneGame::new(GameConfig::default(), 1);
    let fb = LaneView::default().render(&game.snapshot(), Viewport::new(100, 30));
    let text = screen_text(&fb);
    assert!(text.contains("FRAME 1"));
    assert!(text.contains("SCORE 0"));
    assert!(text.contains("POWER"));
}

#[test]
fn lane_view_narrow_terminal_has_no_panel() {
    let game = LaneGame::new(GameConfig::default(), 1);
    let fb = LaneView::default().render(&game.snapshot(), Viewport::new(40, 20));
    assert!(!screen_text(&fb).contains("SCORE"));
}

#[test]
fn lane_view_game_over_overlay() {
    let game = LaneGame::new(GameConfig::default(), 1);
    let mut snap = game.snapshot();
    let card = Scorecard::from_throws(&[10; 12]).unwrap();
    snap.card = (&card).into();
    snap.phase = PlayPhase::GameOver;

    let fb = LaneView::default().render(&snap, Viewport::new(100, 30));
    let text = screen_text(&fb);
    assert!(text.contains("GAME OVER"));
    assert!(text.contains("Final Score: 300"));
}

#[test]
fn pin_view_panel_shows_counters() {
    let game = PinGame::new(GameConfig::default(), 1);
    let mut snap = game.snapshot();
    snap.score = 42;
    snap.throws = 7;

    let fb = PinView::default().render(&snap, Viewport::new(100, 30));
    let text = screen_text(&fb);
    assert!(text.contains("PIN GAME"));
    assert!(text.contains("SCORE  42"));
    assert!(text.contains("THROWS 7"));
    assert!(text.contains("PINS   10"));
}

#[test]
fn pin_view_announces_cleared_rack() {
    let game = PinGame::new(GameConfig::default(), 1);
    let mut snap = game.snapshot();
    snap.phase = PlayPhase::Settling { remaining_ticks: 10 };

    let fb = PinView::default().render(&snap, Viewport::new(100, 30));
    assert!(screen_text(&fb).contains("ALL PINS DOWN!"));
}

#[test]
fn tiny_viewport_renders_without_panicking() {
    let game = LaneGame::new(GameConfig::default(), 1);
    for (w, h) in [(0, 0), (1, 1), (3, 2), (10, 4)] {
        let fb = LaneView::default().render(&game.snapshot(), Viewport::new(w, h));
        assert_eq!(fb.width(), w);
        assert_eq!(fb.height(), h);
    }
}
