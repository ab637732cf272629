use std::{io, path::Path};

use dot_matrix_core::{Frame, Renderer};
use svg::{Document, node::element::Rectangle};

/// How an SVG frame is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgStyle {
    /// Side of one cell, in user units.
    pub cell_size: f32,
    /// Blank space between neighbouring cells.
    pub gap: f32,
    pub on_color: String,
    /// Color of dark cells; `None` leaves them as background.
    pub off_color: Option<String>,
    pub background: String,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            cell_size: 10.0,
            gap: 2.0,
            on_color: "#ff3b1f".to_string(),
            off_color: Some("#2a0d08".to_string()),
            background: "black".to_string(),
        }
    }
}

fn cell(x: f32, y: f32, size: f32, color: &str) -> Rectangle {
    Rectangle::new()
        .set("x", x)
        .set("y", y)
        .set("width", size)
        .set("height", size)
        .set("fill", color)
}

/// Draw every cell of `frame` as a square.
pub fn frame_to_svg(frame: &Frame, style: &SvgStyle) -> Document {
    let pitch = style.cell_size + style.gap;
    let width = frame.columns() as f32 * pitch + style.gap;
    let height = frame.rows() as f32 * pitch + style.gap;

    let background = Rectangle::new()
        .set("x", 0)
        .set("y", 0)
        .set("width", width)
        .set("height", height)
        .set("fill", style.background.as_str());

    let mut document = Document::new().add(background);

    for (y, row) in frame.iter_rows().enumerate() {
        for (x, &bit) in row.iter().enumerate() {
            let color = match (bit, &style.off_color) {
                (1, _) => style.on_color.as_str(),
                (_, Some(off)) => off.as_str(),
                (_, None) => continue,
            };
            document = document.add(cell(
                style.gap + x as f32 * pitch,
                style.gap + y as f32 * pitch,
                style.cell_size,
                color,
            ));
        }
    }

    document
        .set("viewBox", (0, 0, width, height))
        .set("width", format!("{width}px"))
        .set("height", format!("{height}px"))
}

/// A [Renderer] keeping an SVG drawing of the latest frame.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    style: SvgStyle,
    document: Option<Document>,
    frames: usize,
}

impl SvgRenderer {
    pub fn new(style: SvgStyle) -> Self {
        Self {
            style,
            document: None,
            frames: 0,
        }
    }

    /// The drawing of the last rendered frame.
    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    /// How many frames have been rendered so far.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Write the last rendered frame to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let document = self
            .document
            .as_ref()
            .ok_or_else(|| io::Error::other("no frame has been rendered yet"))?;
        svg::save(path, document)
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &Frame) {
        self.document = Some(frame_to_svg(frame, &self.style));
        self.frames += 1;
    }
}
