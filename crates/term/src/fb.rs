//! Cell grid the views draw into, plus the world-to-cell canvas.

use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn grey(level: u8) -> Self {
        Self::new(level, level, level)
    }
}

/// Colours and attributes of one cell. Built with `const` chaining, e.g.
/// `CellStyle::fg(red).on(white).bold()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    pub const PLAIN: CellStyle = CellStyle::fg(Rgb::grey(220));

    pub const fn fg(fg: Rgb) -> Self {
        Self {
            fg,
            bg: Rgb::BLACK,
            bold: false,
            dim: false,
        }
    }

    pub const fn on(self, bg: Rgb) -> Self {
        Self { bg, ..self }
    }

    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    pub const fn dim(self) -> Self {
        Self { dim: true, ..self }
    }

    pub const fn into_cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::PLAIN
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Cell {
    pub const BLANK: Cell = CellStyle::PLAIN.into_cell(' ');
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

/// Row-major grid of cells. Writes outside the grid are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

fn area(width: u16, height: u16) -> usize {
    usize::from(width) * usize::from(height)
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::BLANK; area(width, height)],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Change the grid size, reusing the cell allocation. Cell contents are
    /// unspecified afterwards; callers clear before drawing.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.cells.resize(area(width, height), Cell::BLANK);
        self.width = width;
        self.height = height;
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    fn offset(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| usize::from(y) * usize::from(self.width) + usize::from(x))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.offset(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.offset(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, style.into_cell(ch));
    }

    /// Write a string; returns the column after the last character.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) -> u16 {
        let mut end = x;
        for (cx, ch) in (x..self.width).zip(s.chars()) {
            self.put_char(cx, y, ch, style);
            end = cx + 1;
        }
        end
    }

    /// Write a number in decimal without allocating.
    pub fn put_u32(&mut self, x: u16, y: u16, value: u32, style: CellStyle) -> u16 {
        let mut digits = [0u8; 10];
        let mut n = value;
        let mut len = 0;
        loop {
            digits[len] = b'0' + (n % 10) as u8;
            len += 1;
            n /= 10;
            if n == 0 {
                break;
            }
        }
        let mut cx = x;
        for &d in digits[..len].iter().rev() {
            self.put_char(cx, y, d as char, style);
            cx = cx.saturating_add(1);
        }
        cx
    }

    /// Fill a rectangle, clipped to the grid one row slice at a time.
    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        let x_end = x.saturating_add(w).min(self.width);
        let y_end = y.saturating_add(h).min(self.height);
        if x >= x_end {
            return;
        }
        let cell = style.into_cell(ch);
        let stride = usize::from(self.width);
        for row in y..y_end {
            let base = usize::from(row) * stride;
            self.cells[base + usize::from(x)..base + usize::from(x_end)].fill(cell);
        }
    }

    pub fn draw_border(&mut self, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        self.put_char(x, y, '┌', style);
        self.put_char(x + w - 1, y, '┐', style);
        self.put_char(x, y + h - 1, '└', style);
        self.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            self.put_char(x + dx, y, '─', style);
            self.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            self.put_char(x, y + dy, '│', style);
            self.put_char(x + w - 1, y + dy, '│', style);
        }
    }
}

/// A rectangle of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl CellRect {
    pub fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }
}

/// Draws world-space shapes (arena units, y down) into a cell rectangle.
///
/// The x and y axes are scaled separately so the whole world always fits the
/// rectangle; a cell is covered by a shape when the cell's centre is.
pub struct Canvas<'a> {
    fb: &'a mut FrameBuffer,
    area: CellRect,
    /// Cells per world unit on each axis.
    scale: Vec2,
}

impl<'a> Canvas<'a> {
    pub fn new(fb: &'a mut FrameBuffer, area: CellRect, world: Vec2) -> Self {
        let scale = Vec2::new(
            area.w as f32 / world.x.max(1.0),
            area.h as f32 / world.y.max(1.0),
        );
        Self { fb, area, scale }
    }

    /// Cell containing a world point, `None` outside the canvas.
    pub fn to_cell(&self, p: Vec2) -> Option<(u16, u16)> {
        let c = (p * self.scale).floor();
        if c.x < 0.0 || c.y < 0.0 || c.x >= self.area.w as f32 || c.y >= self.area.h as f32 {
            return None;
        }
        Some((self.area.x + c.x as u16, self.area.y + c.y as u16))
    }

    fn cell_centre(&self, cx: u16, cy: u16) -> Vec2 {
        Vec2::new(cx as f32 + 0.5, cy as f32 + 0.5) / self.scale
    }

    pub fn plot(&mut self, p: Vec2, ch: char, style: CellStyle) {
        if let Some((x, y)) = self.to_cell(p) {
            self.fb.put_char(x, y, ch, style);
        }
    }

    pub fn fill(&mut self, ch: char, style: CellStyle) {
        let a = self.area;
        self.fb.fill_rect(a.x, a.y, a.w, a.h, ch, style);
    }

    /// Filled circle. Circles smaller than a cell still mark the cell under the centre.
    pub fn circle(&mut self, centre: Vec2, radius: f32, ch: char, style: CellStyle) {
        let lo = ((centre - radius) * self.scale).floor().max(Vec2::ZERO);
        let hi = ((centre + radius) * self.scale)
            .ceil()
            .min(Vec2::new(self.area.w as f32, self.area.h as f32));

        let mut drawn = false;
        for cy in lo.y as u16..hi.y.max(lo.y) as u16 {
            for cx in lo.x as u16..hi.x.max(lo.x) as u16 {
                if self.cell_centre(cx, cy).distance(centre) <= radius {
                    self.fb
                        .put_char(self.area.x + cx, self.area.y + cy, ch, style);
                    drawn = true;
                }
            }
        }
        if !drawn {
            self.plot(centre, ch, style);
        }
    }

    /// Straight line sampled once per cell along its longer axis.
    pub fn line(&mut self, a: Vec2, b: Vec2, ch: char, style: CellStyle) {
        let span = ((b - a) * self.scale).abs();
        let steps = span.x.max(span.y).ceil().max(1.0) as u32;
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            self.plot(a.lerp(b, t), ch, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(fb: &FrameBuffer) -> String {
        let mut out = String::new();
        for y in 0..fb.height() {
            for x in 0..fb.width() {
                out.push(fb.get(x, y).unwrap_or_default().ch);
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn put_u32_writes_digits() {
        let mut fb = FrameBuffer::new(12, 1);
        let end = fb.put_u32(1, 0, 300, CellStyle::default());
        assert_eq!(end, 4);
        fb.put_u32(6, 0, 0, CellStyle::default());
        assert_eq!(chars(&fb), " 300  0     \n");
    }

    #[test]
    fn put_str_clips_at_edge() {
        let mut fb = FrameBuffer::new(4, 1);
        assert_eq!(fb.put_str(2, 0, "abc", CellStyle::default()), 4);
        assert_eq!(chars(&fb), "  ab\n");
    }

    #[test]
    fn canvas_maps_world_corners() {
        let mut fb = FrameBuffer::new(20, 10);
        let canvas = Canvas::new(&mut fb, CellRect::new(2, 1, 10, 5), Vec2::new(100.0, 50.0));
        assert_eq!(canvas.to_cell(Vec2::ZERO), Some((2, 1)));
        assert_eq!(canvas.to_cell(Vec2::new(99.9, 49.9)), Some((11, 5)));
        assert_eq!(canvas.to_cell(Vec2::new(100.0, 10.0)), None);
        assert_eq!(canvas.to_cell(Vec2::new(-1.0, 10.0)), None);
    }

    #[test]
    fn tiny_circle_still_marks_a_cell() {
        let mut fb = FrameBuffer::new(10, 10);
        let mut canvas = Canvas::new(&mut fb, CellRect::new(0, 0, 10, 10), Vec2::splat(100.0));
        canvas.circle(Vec2::new(52.0, 52.0), 1.0, 'o', CellStyle::default());
        assert_eq!(fb.get(5, 5).unwrap().ch, 'o');
        assert_eq!(fb.cells().iter().filter(|c| c.ch == 'o').count(), 1);
    }

    #[test]
    fn circle_covers_cells_inside_radius() {
        let mut fb = FrameBuffer::new(10, 10);
        let mut canvas = Canvas::new(&mut fb, CellRect::new(0, 0, 10, 10), Vec2::splat(10.0));
        canvas.circle(Vec2::new(5.0, 5.0), 1.0, '#', CellStyle::default());
        let filled = fb.cells().iter().filter(|c| c.ch == '#').count();
        assert_eq!(filled, 4);
    }

    #[test]
    fn line_is_continuous() {
        let mut fb = FrameBuffer::new(10, 1);
        let mut canvas = Canvas::new(&mut fb, CellRect::new(0, 0, 10, 1), Vec2::new(10.0, 1.0));
        canvas.line(Vec2::new(0.5, 0.5), Vec2::new(9.5, 0.5), '-', CellStyle::default());
        assert_eq!(chars(&fb), "----------\n");
    }

    #[test]
    fn fill_rect_clips_to_grid() {
        let mut fb = FrameBuffer::new(4, 3);
        fb.fill_rect(2, 1, 10, 10, '#', CellStyle::PLAIN);
        assert_eq!(chars(&fb), "    \n  ##\n  ##\n");
        fb.fill_rect(9, 0, 2, 2, '!', CellStyle::PLAIN);
        assert!(!chars(&fb).contains('!'));
    }

    #[test]
    fn resize_keeps_dimensions_consistent() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.resize(5, 4);
        assert_eq!(fb.cells().len(), 20);
        assert_eq!(fb.get(4, 3), Some(Cell::BLANK));
        assert_eq!(fb.get(5, 0), None);
        fb.resize(0, 7);
        assert!(fb.cells().is_empty());
    }

    #[test]
    fn border_uses_box_drawing() {
        let mut fb = FrameBuffer::new(3, 3);
        fb.draw_border(0, 0, 3, 3, CellStyle::default());
        assert_eq!(chars(&fb), "┌─┐\n│ │\n└─┘\n");
    }
}
