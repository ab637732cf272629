use std::io::{self, Write};

use dot_matrix_core::{Frame, Renderer};

/// Draw a frame as text: `X` for a lit cell, a space for a dark one, one
/// line per row.
pub fn frame_to_ascii(frame: &Frame) -> String {
    let mut out = String::with_capacity(frame.rows() * (frame.columns() + 1));
    for row in frame.iter_rows() {
        out.extend(row.iter().map(|&bit| if bit == 1 { 'X' } else { ' ' }));
        out.push('\n');
    }
    out
}

/// A [Renderer] writing every frame as text, separated by a blank line.
///
/// Rendering cannot fail, so the first write error is kept and further frames
/// are dropped until it is collected with [AsciiRenderer::take_error].
pub struct AsciiRenderer<W> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> AsciiRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for AsciiRenderer<W> {
    fn render(&mut self, frame: &Frame) {
        if self.error.is_some() {
            return;
        }

        let mut text = frame_to_ascii(frame);
        text.push('\n');
        if let Err(error) = self
            .out
            .write_all(text.as_bytes())
            .and_then(|()| self.out.flush())
        {
            tracing::warn!(%error, "failed to write frame");
            self.error = Some(error);
        }
    }
}
