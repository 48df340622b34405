//! Off-screen cell buffer: [`Color`], [`Cell`], [`Screen`], and the
//! [`Frame`] diff sent to the terminal.

use pathviz_core::Point;

// ---------------------------------------------------------------------------
// Color / Cell
// ---------------------------------------------------------------------------

/// An RGB colour packed into a `u32` (0x00RRGGBB). [`Color::DEFAULT`] means
/// "leave the terminal's own colour" and sits above the 24-bit range, so
/// every RGB value, black included, stays drawable.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    pub const DEFAULT: Self = Self(0xFF00_0000);

    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    #[inline]
    pub const fn r(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 & 0xFF) as u8
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A styled character cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
}

impl Cell {
    #[inline]
    pub const fn with_char(mut self, ch: char) -> Self {
        self.ch = ch;
        self
    }

    #[inline]
    pub const fn with_fg(mut self, fg: Color) -> Self {
        self.fg = fg;
        self
    }

    #[inline]
    pub const fn with_bg(mut self, bg: Color) -> Self {
        self.bg = bg;
        self
    }

    #[inline]
    pub const fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }
}

impl Default for Cell {
    #[inline]
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::DEFAULT,
            bg: Color::DEFAULT,
            bold: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Screen
// ---------------------------------------------------------------------------

/// A width × height buffer of cells. Writes outside the buffer are ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Screen {
    cells: Vec<Cell>,
    width: i32,
    height: i32,
}

impl Screen {
    pub fn new(width: i32, height: i32) -> Self {
        let (width, height) = (width.max(0), height.max(0));
        Self {
            cells: vec![Cell::default(); (width * height) as usize],
            width,
            height,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        self.contains(p)
            .then(|| (p.y * self.width + p.x) as usize)
    }

    /// Cell at `p`, or the default cell when out of range.
    pub fn at(&self, p: Point) -> Cell {
        self.idx(p).map(|i| self.cells[i]).unwrap_or_default()
    }

    pub fn set(&mut self, p: Point, cell: Cell) {
        if let Some(i) = self.idx(p) {
            self.cells[i] = cell;
        }
    }

    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Write `text` left to right from `p` using `style` for every cell.
    /// Returns the number of cells written.
    pub fn text(&mut self, p: Point, text: &str, style: Cell) -> i32 {
        let mut n = 0;
        for (i, ch) in text.chars().enumerate() {
            let q = Point::new(p.x + i as i32, p.y);
            if !self.contains(q) {
                break;
            }
            self.set(q, style.with_char(ch));
            n += 1;
        }
        n
    }

    /// Copy `src` into this buffer, resizing it first if needed.
    pub fn copy_from(&mut self, src: &Screen) {
        self.clone_from(src);
    }

    /// Iterate over `(position, cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        let w = self.width.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &c)| (Point::new(i as i32 % w, i as i32 / w), c))
    }
}

// ---------------------------------------------------------------------------
// Frame
// ---------------------------------------------------------------------------

/// A cell that changed since the previous frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FrameCell {
    pub pos: Point,
    pub cell: Cell,
}

/// The cells to redraw this frame.
#[derive(Clone, Debug, Default)]
pub struct Frame {
    pub cells: Vec<FrameCell>,
    pub width: i32,
    pub height: i32,
}

/// Diff two buffers. A size change redraws everything.
pub fn compute_frame(prev: &Screen, curr: &Screen) -> Frame {
    let resized = prev.width != curr.width || prev.height != curr.height;
    let cells = curr
        .iter()
        .filter(|&(p, c)| resized || prev.at(p) != c)
        .map(|(pos, cell)| FrameCell { pos, cell })
        .collect();
    Frame {
        cells,
        width: curr.width,
        height: curr.height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_new_and_at() {
        let s = Screen::new(4, 3);
        assert_eq!(s.width(), 4);
        assert_eq!(s.at(Point::new(0, 0)), Cell::default());
    }

    #[test]
    fn screen_set_and_get() {
        let mut s = Screen::new(4, 3);
        let c = Cell::default().with_char('X');
        s.set(Point::new(2, 1), c);
        assert_eq!(s.at(Point::new(2, 1)).ch, 'X');
        // out of bounds is ignored on write and default on read
        s.set(Point::new(10, 10), c);
        assert_eq!(s.at(Point::new(10, 10)), Cell::default());
    }

    #[test]
    fn text_clips_at_right_edge() {
        let mut s = Screen::new(5, 1);
        let n = s.text(Point::new(2, 0), "abcdef", Cell::default());
        assert_eq!(n, 3);
        assert_eq!(s.at(Point::new(4, 0)).ch, 'c');
    }

    #[test]
    fn iter_is_row_major() {
        let mut s = Screen::new(3, 2);
        s.set(Point::new(0, 1), Cell::default().with_char('y'));
        let (p, c) = s.iter().nth(3).unwrap();
        assert_eq!(p, Point::new(0, 1));
        assert_eq!(c.ch, 'y');
    }

    #[test]
    fn compute_frame_diff() {
        let a = Screen::new(3, 2);
        let mut b = Screen::new(3, 2);
        b.set(Point::new(1, 0), Cell::default().with_char('A'));
        let frame = compute_frame(&a, &b);
        assert_eq!(frame.cells.len(), 1);
        assert_eq!(frame.cells[0].pos, Point::new(1, 0));
        assert_eq!(frame.cells[0].cell.ch, 'A');
    }

    #[test]
    fn resize_redraws_everything() {
        let a = Screen::new(2, 2);
        let b = Screen::new(3, 2);
        assert_eq!(compute_frame(&a, &b).cells.len(), 6);
    }

    #[test]
    fn color_components() {
        let c = Color::from_rgb(0x12, 0x34, 0x56);
        assert_eq!((c.r(), c.g(), c.b()), (0x12, 0x34, 0x56));
    }
}
