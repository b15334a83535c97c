//! Terminal drawing of encoded grid frames.

use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::{Color, ResetColor, SetBackgroundColor},
};
use pathviz_core::{Flags, Point};

/// Background colour of one encoded cell. Markers win over path, path over
/// visited.
fn cell_color(bits: u8, on_path: bool) -> Color {
    let flags = Flags(bits);
    if flags.contains(Flags::START) {
        Color::Green
    } else if flags.contains(Flags::END) {
        Color::Red
    } else if flags.contains(Flags::WALL) {
        Color::DarkGrey
    } else if on_path {
        Color::Yellow
    } else if flags.contains(Flags::VISITED) {
        Color::DarkBlue
    } else {
        Color::Reset
    }
}

/// Draw `frame` (row-major flag bytes of a `width`-wide grid) at the top-left
/// of the terminal, two columns per cell. Cells in `path` are highlighted.
pub fn draw(out: &mut impl Write, frame: &[u8], width: i32, path: &[Point]) -> io::Result<()> {
    let w = width as usize;
    for (y, row) in frame.chunks(w).enumerate() {
        queue!(out, cursor::MoveTo(0, y as u16))?;
        for (x, &bits) in row.iter().enumerate() {
            let p = Point::new(x as i32, y as i32);
            queue!(out, SetBackgroundColor(cell_color(bits, path.contains(&p))))?;
            out.write_all(b"  ")?;
        }
        queue!(out, ResetColor)?;
    }
    out.flush()
}
