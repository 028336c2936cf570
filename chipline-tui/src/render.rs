//! Full-frame rendering of the widget with queued crossterm commands.
//!
//! The screen is small and redrawn from scratch on every event; hit regions
//! for mouse input (chip close buttons, candidate rows) are collected while
//! drawing and returned to the app.

use std::io::{self, Write};

use chipline::{ChipId, ChipInputState};
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use unicode_width::UnicodeWidthStr;

use crate::identicon;

/// Minimum terminal width at which the randomart panel is drawn.
const PANEL_MIN_WIDTH: u16 = 48;

/// Hit regions collected during the last draw.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    /// Terminal cell of each chip's close button.
    pub close_cells: Vec<(u16, u16, ChipId)>,
    /// Screen row and label for each visible candidate in the filtered view.
    pub candidate_rows: Vec<(u16, String)>,
}

/// Draw one frame and return the hit regions.
pub fn draw(
    out: &mut impl Write,
    state: &ChipInputState,
    list_cursor: usize,
    width: u16,
    height: u16,
) -> io::Result<Layout> {
    let mut layout = Layout::default();

    queue!(out, SetAttribute(Attribute::Reset), Clear(ClearType::All))?;

    // Title line
    queue!(
        out,
        MoveTo(0, 0),
        SetAttribute(Attribute::Bold),
        Print("chipline"),
        SetAttribute(Attribute::Reset),
        Print("  "),
        SetAttribute(Attribute::Dim),
        Print("type to filter, enter to chip, backspace twice to drop the last chip"),
        SetAttribute(Attribute::Reset)
    )?;

    // Chips, wrapped across rows
    let mut x: u16 = 0;
    let mut y: u16 = 2;
    for chip in state.chips() {
        let digest = chip.avatar_digest();
        let address = format!("<{}>", chip.address);
        // " ◉ Label <address> ✕ "
        let chip_width = (7 + chip.label.width() + address.width()) as u16;

        if x > 0 && x + chip_width > width {
            x = 0;
            y += 1;
        }

        let armed = state.armed() == Some(chip.id);
        queue!(out, MoveTo(x, y))?;
        if armed {
            queue!(out, SetAttribute(Attribute::Reverse))?;
        }
        queue!(
            out,
            Print(" "),
            SetForegroundColor(identicon::tint(&digest)),
            Print(identicon::glyph(&digest)),
            ResetColor,
            Print(" "),
            Print(&chip.label),
            Print(" "),
            SetAttribute(Attribute::Dim),
            Print(&address),
            SetAttribute(Attribute::NormalIntensity),
            Print(" "),
            Print("✕"),
            Print(" "),
            SetAttribute(Attribute::Reset)
        )?;

        layout.close_cells.push((x + chip_width - 2, y, chip.id));
        x += chip_width + 1;
    }

    // Filter input line
    let input_y = y + 2;
    queue!(
        out,
        MoveTo(0, input_y),
        SetAttribute(Attribute::Bold),
        Print("❯ "),
        SetAttribute(Attribute::Reset)
    )?;
    let text = state.filter_text();
    if text.is_empty() {
        queue!(
            out,
            SetAttribute(Attribute::Reverse),
            Print(" "),
            SetAttribute(Attribute::Reset),
            SetAttribute(Attribute::Dim),
            Print("Type to filter items"),
            SetAttribute(Attribute::Reset)
        )?;
    } else {
        let cursor = state.input().cursor();
        let chars: Vec<char> = text.chars().collect();
        let before: String = chars[..cursor.min(chars.len())].iter().collect();
        let at = chars.get(cursor).copied().unwrap_or(' ');
        let after: String = if cursor + 1 < chars.len() {
            chars[cursor + 1..].iter().collect()
        } else {
            String::new()
        };
        queue!(
            out,
            Print(before),
            SetAttribute(Attribute::Reverse),
            Print(at),
            SetAttribute(Attribute::Reset),
            Print(after)
        )?;
    }

    // Filtered candidate list
    let list_y = input_y + 2;
    if state.filtered_len() == 0 {
        queue!(
            out,
            MoveTo(2, list_y),
            SetAttribute(Attribute::Dim),
            Print("no matches"),
            SetAttribute(Attribute::Reset)
        )?;
    }
    for (i, label) in state.filtered_labels().enumerate() {
        let row = list_y + i as u16;
        if row + 1 >= height {
            break;
        }
        queue!(out, MoveTo(2, row))?;
        if i == list_cursor {
            queue!(
                out,
                SetAttribute(Attribute::Reverse),
                Print(format!(" {label} ")),
                SetAttribute(Attribute::Reset)
            )?;
        } else {
            queue!(out, Print(label))?;
        }
        layout.candidate_rows.push((row, label.to_string()));
    }

    // Avatar panel for the most recent chip
    if let Some(chip) = state.chips().last() {
        if width >= PANEL_MIN_WIDTH {
            let art = identicon::randomart(&chip.avatar_digest());
            let panel_x = width - 2 - art[0].chars().count() as u16;
            for (i, line) in art.iter().enumerate() {
                queue!(out, MoveTo(panel_x, 2 + i as u16), Print(line))?;
            }
        }
        if height > 3 {
            let url: String = chip
                .avatar_url()
                .chars()
                .take(width.saturating_sub(9) as usize)
                .collect();
            queue!(
                out,
                MoveTo(0, height - 2),
                SetAttribute(Attribute::Dim),
                Print(format!("avatar · {url}")),
                SetAttribute(Attribute::Reset)
            )?;
        }
    }

    // Key help footer
    queue!(out, MoveTo(0, height.saturating_sub(1)))?;
    for (key, action) in [
        ("↑/↓", "move"),
        ("enter", "select"),
        ("bksp×2", "remove last"),
        ("esc", "quit"),
    ] {
        queue!(
            out,
            SetForegroundColor(Color::Cyan),
            Print(key),
            ResetColor,
            SetAttribute(Attribute::Dim),
            Print(format!(" {action}  ")),
            SetAttribute(Attribute::Reset)
        )?;
    }

    out.flush()?;
    Ok(layout)
}
