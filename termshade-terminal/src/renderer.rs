/// Grid blitting for terminal output
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::Write;
use termshade_core::{FrameGrid, ILLUM_RAMP};

/// Queue a frame grid to `writer`, coloring characters by ramp intensity.
///
/// The grid is read-only here; the cursor is repositioned per row so the
/// output is stable under raw mode.
pub fn draw_grid<W: Write>(grid: &FrameGrid, writer: &mut W) -> std::io::Result<()> {
    for (row_index, row) in grid.rows().enumerate() {
        writer.queue(cursor::MoveTo(0, row_index as u16))?;
        for &c in row {
            writer.queue(SetForegroundColor(char_color(c)))?;
            writer.queue(Print(c))?;
        }
    }
    writer.queue(ResetColor)?;
    Ok(())
}

/// Foreground color for a ramp character, by its intensity band.
fn char_color(c: char) -> Color {
    let index = ILLUM_RAMP.iter().position(|&r| r == c).unwrap_or(0);
    match index {
        0..=3 => Color::DarkGrey,
        4..=6 => Color::Grey,
        7..=9 => Color::White,
        _ => Color::Cyan,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_color_bands() {
        assert_eq!(char_color(' '), Color::DarkGrey);
        assert_eq!(char_color(':'), Color::Grey);
        assert_eq!(char_color('*'), Color::White);
        assert_eq!(char_color('@'), Color::Cyan);
        // Unknown characters fall back to the sparsest band.
        assert_eq!(char_color('x'), Color::DarkGrey);
    }
}
