//! Views: map game snapshots into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Both visual games share the same layout: the table (lane, pins, ball and aim
//! line) on the left, scaled to fit, and a text panel on the right.

use glam::Vec2;

use crate::core::{
    BallSnapshot, CardSnapshot, LaneSnapshot, PinGameSnapshot, PlayPhase, TableSnapshot,
};
use crate::fb::{Canvas, CellRect, CellStyle, FrameBuffer, Rgb};
use crate::types::{BallPhase, AIM_STRAIGHT, FRAME_COUNT};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const PANEL_W: u16 = 28;
/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: f32 = 2.0;
/// Aim line length in world units per point of power.
const AIM_LINE_PER_POWER: f32 = 2.0;

const LANE: CellStyle = CellStyle::fg(Rgb::new(120, 100, 70)).on(Rgb::new(222, 190, 140));
const BORDER: CellStyle = CellStyle::fg(Rgb::new(139, 90, 43));
const PIN: CellStyle = CellStyle::fg(Rgb::new(255, 255, 255))
    .on(Rgb::new(222, 190, 140))
    .bold();
const FLYING_PIN: CellStyle = CellStyle::fg(Rgb::new(160, 160, 160))
    .on(Rgb::new(222, 190, 140))
    .dim();
const BALL: CellStyle = CellStyle::fg(Rgb::new(40, 90, 220))
    .on(Rgb::new(222, 190, 140))
    .bold();
const AIM: CellStyle = CellStyle::fg(Rgb::new(220, 40, 40)).on(Rgb::new(222, 190, 140));
const LABEL: CellStyle = CellStyle::fg(Rgb::new(220, 220, 220)).bold();
const VALUE: CellStyle = CellStyle::fg(Rgb::new(200, 200, 200));
const HINT: CellStyle = CellStyle::fg(Rgb::new(150, 150, 150)).dim();
const CALLOUT: CellStyle = CellStyle::fg(Rgb::new(255, 210, 60)).bold();
const OVERLAY: CellStyle = CellStyle::fg(Rgb::new(255, 255, 255)).bold();

/// Where the table and the panel go for a given viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Table including its border.
    pub frame: CellRect,
    /// Table interior, the canvas area.
    pub table: CellRect,
    pub panel: Option<CellRect>,
}

impl Layout {
    pub fn compute(viewport: Viewport, world: Vec2) -> Self {
        let panel_fits = viewport.width >= PANEL_W * 2 + 4;
        let panel_w = if panel_fits { PANEL_W + 1 } else { 0 };

        let avail_w = viewport.width.saturating_sub(panel_w + 2) as f32;
        let avail_h = viewport.height.saturating_sub(2) as f32;
        let ratio = world.x / world.y.max(1.0) * CELL_ASPECT;
        let mut rows = avail_h;
        let mut cols = rows * ratio;
        if cols > avail_w {
            cols = avail_w;
            rows = cols / ratio;
        }
        let cols = cols.floor().max(0.0) as u16;
        let rows = rows.floor().max(0.0) as u16;

        let frame_w = cols + 2;
        let frame_h = rows + 2;
        let used_w = frame_w + panel_w;
        let x = viewport.width.saturating_sub(used_w) / 2;
        let y = viewport.height.saturating_sub(frame_h) / 2;

        let frame = CellRect::new(x, y, frame_w, frame_h);
        let table = CellRect::new(x + 1, y + 1, cols, rows);
        let panel = panel_fits.then(|| {
            CellRect::new(
                x + frame_w + 1,
                y,
                PANEL_W,
                viewport.height.saturating_sub(y),
            )
        });
        Self {
            frame,
            table,
            panel,
        }
    }
}

/// Draw the lane, pins and ball. Returns the layout used.
fn draw_table(
    fb: &mut FrameBuffer,
    table: &TableSnapshot,
    viewport: Viewport,
    show_knocked: bool,
) -> Layout {
    let world = Vec2::new(table.width, table.height);
    let layout = Layout::compute(viewport, world);
    let f = layout.frame;
    fb.draw_border(f.x, f.y, f.w, f.h, BORDER);
    if layout.table.is_empty() {
        return layout;
    }

    let mut canvas = Canvas::new(fb, layout.table, world);
    canvas.fill(' ', LANE);

    for pin in &table.pins {
        if !pin.knocked {
            canvas.circle(pin.pos, pin.radius, 'o', PIN);
        } else if show_knocked {
            canvas.plot(pin.pos, '·', FLYING_PIN);
        }
    }

    draw_ball(&mut canvas, &table.ball);
    layout
}

fn draw_ball(canvas: &mut Canvas<'_>, ball: &BallSnapshot) {
    if ball.phase == BallPhase::Aiming {
        let tip = ball.pos + ball.aim_direction() * (ball.power as f32 * AIM_LINE_PER_POWER);
        canvas.line(ball.pos, tip, '·', AIM);
    }
    canvas.circle(ball.pos, ball.radius, '●', BALL);
}

fn overlay(fb: &mut FrameBuffer, layout: &Layout, dy: i16, text: &str, style: CellStyle) {
    let f = layout.frame;
    let mid_y = (f.y + f.h / 2) as i16 + dy;
    if mid_y < 0 {
        return;
    }
    let text_w = text.chars().count() as u16;
    let x = f.x.saturating_add(f.w.saturating_sub(text_w) / 2);
    fb.put_str(x, mid_y as u16, text, style);
}

/// Power meter: `[#####.....] 25`.
fn power_bar(fb: &mut FrameBuffer, x: u16, y: u16, power: u8, max: u8) {
    const BAR: u16 = 10;
    let filled = (power as u32 * BAR as u32).div_ceil(max.max(1) as u32) as u16;
    let mut cx = fb.put_str(x, y, "[", VALUE);
    for i in 0..BAR {
        let ch = if i < filled { '#' } else { '.' };
        fb.put_char(cx, y, ch, if i < filled { CALLOUT } else { HINT });
        cx += 1;
    }
    cx = fb.put_str(cx, y, "] ", VALUE);
    fb.put_u32(cx, y, power as u32, VALUE);
}

/// Aim in whole degrees off straight, positive to the right.
fn aim_degrees(angle: f32) -> i32 {
    (angle - AIM_STRAIGHT).to_degrees().round() as i32
}

fn put_aim(fb: &mut FrameBuffer, x: u16, y: u16, angle: f32) {
    match aim_degrees(angle) {
        0 => {
            fb.put_str(x, y, "straight", VALUE);
        }
        d => {
            let cx = fb.put_u32(x, y, d.unsigned_abs(), VALUE);
            fb.put_str(cx, y, if d < 0 { "° left" } else { "° right" }, VALUE);
        }
    }
}

/// Renders the ten-frame lane game.
#[derive(Debug, Clone, Copy)]
pub struct LaneView {
    power_max: u8,
}

impl Default for LaneView {
    fn default() -> Self {
        Self::new(crate::types::POWER_MAX)
    }
}

impl LaneView {
    pub fn new(power_max: u8) -> Self {
        Self { power_max }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &LaneSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let layout = draw_table(fb, &snap.table, viewport, false);
        if let Some(panel) = layout.panel {
            self.draw_panel(fb, snap, panel);
        }

        match snap.phase {
            PlayPhase::GameOver => {
                overlay(fb, &layout, -1, " GAME OVER ", OVERLAY);
                let mut line = [0u8; 32];
                let text = format_into(&mut line, "Final Score: ", snap.card.total);
                overlay(fb, &layout, 0, text, OVERLAY);
                overlay(fb, &layout, 1, " R: restart  Q: quit ", VALUE);
            }
            PlayPhase::Settling { .. } => {
                if let Some(callout) = snap.last.and_then(|t| t.mark.callout()) {
                    overlay(fb, &layout, 0, callout, CALLOUT);
                }
            }
            PlayPhase::Playing => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &LaneSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, snap: &LaneSnapshot, panel: CellRect) {
        let x = panel.x;
        let bottom = panel.y + panel.h;
        let mut y = panel.y;

        fb.put_str(x, y, "FRAME MARK  TOTAL", LABEL);
        y += 1;
        y = draw_card_rows(fb, x, y, &snap.card, bottom);
        y += 1;
        if y >= bottom {
            return;
        }

        match snap.card.frame {
            Some(frame) => {
                let cx = fb.put_str(x, y, "FRAME ", LABEL);
                let cx = fb.put_u32(cx, y, frame as u32 + 1, VALUE);
                let cx = fb.put_str(cx + 2, y, "BALL ", LABEL);
                fb.put_u32(cx, y, snap.card.ball_in_frame as u32, VALUE);
            }
            None => {
                fb.put_str(x, y, "GAME COMPLETE", LABEL);
            }
        }
        y += 2;

        let cx = fb.put_str(x, y, "SCORE ", LABEL);
        fb.put_u32(cx, y, snap.card.total, VALUE);
        y += 2;

        let ball = &snap.table.ball;
        fb.put_str(x, y, "POWER", LABEL);
        power_bar(fb, x + 6, y, ball.power, self.power_max);
        y += 1;
        fb.put_str(x, y, "AIM", LABEL);
        put_aim(fb, x + 6, y, ball.angle);
        y += 2;

        if let Some(last) = snap.last {
            let cx = fb.put_str(x, y, "LAST ", LABEL);
            let cx = fb.put_u32(cx, y, last.pins as u32, VALUE);
            let cx = fb.put_str(cx, y, if last.pins == 1 { " pin " } else { " pins " }, VALUE);
            if let Some(callout) = last.mark.callout() {
                fb.put_str(cx, y, callout, CALLOUT);
            }
        }

        let hints: &[&str] = if snap.game_over() {
            &["R new game", "Q quit"]
        } else {
            &["↑↓ power  ←→ aim", "SPACE throw  Q quit"]
        };
        let mut hy = bottom.saturating_sub(hints.len() as u16 + 1);
        for hint in hints {
            fb.put_str(x, hy, hint, HINT);
            hy += 1;
        }
    }
}

fn draw_card_rows(
    fb: &mut FrameBuffer,
    x: u16,
    mut y: u16,
    card: &CardSnapshot,
    bottom: u16,
) -> u16 {
    for frame in 0..FRAME_COUNT {
        if y >= bottom {
            break;
        }
        let style = if card.frame == Some(frame) { CALLOUT } else { VALUE };
        fb.put_u32(x + 1, y, frame as u32 + 1, style);
        fb.put_str(x + 6, y, card.marks[frame].as_str(), VALUE);
        if let Some(total) = card.running[frame] {
            fb.put_u32(x + 12, y, total, VALUE);
        }
        y += 1;
    }
    y
}

/// `prefix` followed by a number, written into a stack buffer.
fn format_into<'a>(buf: &'a mut [u8; 32], prefix: &str, value: u32) -> &'a str {
    use std::io::Write as _;
    let mut cursor = std::io::Cursor::new(&mut buf[..]);
    let _ = write!(cursor, "{prefix}{value}");
    let len = cursor.position() as usize;
    std::str::from_utf8(&buf[..len]).unwrap_or("")
}

/// Renders the free-play pin game.
#[derive(Debug, Clone, Copy)]
pub struct PinView {
    power_max: u8,
}

impl Default for PinView {
    fn default() -> Self {
        Self::new(crate::types::POWER_MAX)
    }
}

impl PinView {
    pub fn new(power_max: u8) -> Self {
        Self { power_max }
    }

    pub fn render_into(&self, snap: &PinGameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let layout = draw_table(fb, &snap.table, viewport, true);
        if let Some(panel) = layout.panel {
            let x = panel.x;
            let mut y = panel.y;
            fb.put_str(x, y, "PIN GAME", LABEL);
            y += 2;

            let cx = fb.put_str(x, y, "SCORE  ", LABEL);
            fb.put_u32(cx, y, snap.score, VALUE);
            y += 1;
            let cx = fb.put_str(x, y, "THROWS ", LABEL);
            fb.put_u32(cx, y, snap.throws, VALUE);
            y += 1;
            let cx = fb.put_str(x, y, "PINS   ", LABEL);
            fb.put_u32(cx, y, snap.table.standing() as u32, VALUE);
            y += 2;

            fb.put_str(x, y, "POWER", LABEL);
            power_bar(fb, x + 6, y, snap.table.ball.power, self.power_max);
            y += 1;
            fb.put_str(x, y, "AIM", LABEL);
            put_aim(fb, x + 6, y, snap.table.ball.angle);

            let bottom = panel.y + panel.h;
            let mut hy = bottom.saturating_sub(4);
            for hint in ["↑↓ power  ←→ aim", "SPACE throw", "R reset rack  Q quit"] {
                fb.put_str(x, hy, hint, HINT);
                hy += 1;
            }
        }

        if let PlayPhase::Settling { .. } = snap.phase {
            overlay(fb, &layout, 0, "ALL PINS DOWN!", CALLOUT);
        }
    }

    pub fn render(&self, snap: &PinGameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }
}
