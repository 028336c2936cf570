//! Deterministic terminal identicon for a chip's avatar digest.
//!
//! The terminal cannot show the remote identicon image, so the demo draws its
//! own: a small drunken-bishop randomart grid computed from the same MD5
//! digest the avatar service is keyed on. Everything here is pure; a chip's
//! avatar can never fail to "load" and can never touch widget state.

use crossterm::style::Color;

/// Width of the randomart grid.
const WIDTH: usize = 9;
/// Height of the randomart grid.
const HEIGHT: usize = 5;

/// Characters by cell visit density, sparse to dense.
const CHARS: &[u8] = b" .o+=*BOX@%&#/^";

/// One-cell glyphs used for the inline chip avatar.
const GLYPHS: &[char] = &['●', '◆', '■', '▲', '◉', '✦', '❖', '◗'];

/// Foreground tints for the inline chip avatar.
const TINTS: &[Color] = &[
    Color::Cyan,
    Color::Magenta,
    Color::Yellow,
    Color::Green,
    Color::Blue,
    Color::Red,
];

/// The single-cell avatar glyph for a digest.
pub fn glyph(digest: &[u8; 16]) -> char {
    GLYPHS[digest[0] as usize % GLYPHS.len()]
}

/// The avatar tint for a digest.
pub fn tint(digest: &[u8; 16]) -> Color {
    TINTS[digest[15] as usize % TINTS.len()]
}

/// Render the bordered randomart grid for a digest, one string per line.
///
/// Bishop walk over the digest bits: each byte yields four 2-bit diagonal
/// moves, and each visited cell's density picks its character.
pub fn randomart(digest: &[u8; 16]) -> Vec<String> {
    let mut field = [[0u8; WIDTH]; HEIGHT];
    let mut x = WIDTH / 2;
    let mut y = HEIGHT / 2;

    for byte in digest {
        for shift in (0..8).step_by(2) {
            let bits = (byte >> shift) & 0x03;
            let dx: i32 = if bits & 1 == 0 { -1 } else { 1 };
            let dy: i32 = if bits & 2 == 0 { -1 } else { 1 };

            x = usize::try_from((x as i32 + dx).clamp(0, (WIDTH - 1) as i32)).unwrap_or(0);
            y = usize::try_from((y as i32 + dy).clamp(0, (HEIGHT - 1) as i32)).unwrap_or(0);

            if (field[y][x] as usize) < CHARS.len() - 1 {
                field[y][x] += 1;
            }
        }
    }

    let mut lines = Vec::with_capacity(HEIGHT + 2);
    lines.push(format!("+{}+", "-".repeat(WIDTH)));
    for row in &field {
        let mut line = String::with_capacity(WIDTH + 2);
        line.push('|');
        for &cell in row {
            line.push(CHARS[cell as usize] as char);
        }
        line.push('|');
        lines.push(line);
    }
    lines.push(format!("+{}+", "-".repeat(WIDTH)));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digest(seed: u8) -> [u8; 16] {
        let mut d = [0u8; 16];
        for (i, b) in d.iter_mut().enumerate() {
            *b = seed.wrapping_mul(31).wrapping_add(i as u8);
        }
        d
    }

    #[test]
    fn randomart_has_correct_dimensions() {
        let art = randomart(&digest(7));
        assert_eq!(art.len(), HEIGHT + 2);
        for line in &art {
            assert_eq!(line.chars().count(), WIDTH + 2);
        }
    }

    #[test]
    fn randomart_is_deterministic() {
        assert_eq!(randomart(&digest(42)), randomart(&digest(42)));
    }

    #[test]
    fn randomart_differs_across_digests() {
        assert_ne!(randomart(&digest(1)), randomart(&digest(2)));
    }

    #[test]
    fn glyph_and_tint_are_deterministic() {
        let d = digest(9);
        assert_eq!(glyph(&d), glyph(&d));
        assert_eq!(tint(&d), tint(&d));
    }

    #[test]
    fn glyph_tracks_first_digest_byte() {
        let mut a = digest(3);
        let mut b = digest(3);
        a[0] = 0;
        b[0] = 1;
        assert_ne!(glyph(&a), glyph(&b));
    }
}
