//! Assembling sampled grids into text or HTML output.

use super::grayscale::grayscale_color;
use super::ramp::CharacterRamp;
use super::sample::SampledGrid;

/// Line separator written after each row in file mode.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
/// Line separator written after each row in file mode.
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

const HTML_CELL_OPEN: &str = "<div style='width:15px; display:inline-block; text-align:center;'>";
const HTML_CELL_CLOSE: &str = "</div>";
const HTML_ROW_BREAK: &str = "<br>";

/// Output flavor for [`create_ascii_image`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Plain text: each glyph followed by a space, rows end with [`LINE_ENDING`]
    #[default]
    File,
    /// HTML fragment: each glyph in a fixed-width inline block, rows end with `<br>`
    Html,
}

/// Render a sampled grid to a string.
///
/// Every cell goes through [`grayscale_color`] and then
/// [`CharacterRamp::grayscale_to_char`]. A new string is built on every call.
pub fn create_ascii_image(grid: &SampledGrid, ramp: &CharacterRamp, mode: RenderMode) -> String {
    let mut out = String::with_capacity(estimate_capacity(grid, mode));

    for row in grid.iter_rows() {
        for px in row {
            let glyph = ramp.grayscale_to_char(grayscale_color(px.r, px.g, px.b));
            match mode {
                RenderMode::File => {
                    out.push(glyph);
                    out.push(' ');
                }
                RenderMode::Html => {
                    out.push_str(HTML_CELL_OPEN);
                    push_html_escaped(&mut out, glyph);
                    out.push_str(HTML_CELL_CLOSE);
                }
            }
        }

        match mode {
            RenderMode::File => out.push_str(LINE_ENDING),
            RenderMode::Html => out.push_str(HTML_ROW_BREAK),
        }
    }

    out
}

fn push_html_escaped(out: &mut String, glyph: char) {
    match glyph {
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '&' => out.push_str("&amp;"),
        '\'' => out.push_str("&#39;"),
        '"' => out.push_str("&quot;"),
        _ => out.push(glyph),
    }
}

fn estimate_capacity(grid: &SampledGrid, mode: RenderMode) -> usize {
    let (cell, row_end) = match mode {
        RenderMode::File => (2, LINE_ENDING.len()),
        RenderMode::Html => (
            HTML_CELL_OPEN.len() + 1 + HTML_CELL_CLOSE.len(),
            HTML_ROW_BREAK.len(),
        ),
    };
    grid.rows() * (grid.cols() * cell + row_end)
}
