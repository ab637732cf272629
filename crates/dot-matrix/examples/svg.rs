//! Render the first frames of a banner to SVG files.

use dot_matrix::{Board, Padding, Panel, SvgRenderer, SvgStyle, alphabet};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dictionary = alphabet::dictionary()?;

    let mut board = Board::new(1, Padding::uniform(1));
    board.load("Rust [heart] LEDs", &dictionary)?;

    let mut panel = Panel::side_scrolling(&board, 40)?;
    let mut renderer = SvgRenderer::new(SvgStyle {
        cell_size: 8.0,
        ..SvgStyle::default()
    });

    panel.play();
    for step in 0..3 {
        panel.tick(&mut renderer)?;
        let path = format!("output_banner_{step}.svg");
        renderer.save(&path)?;
        println!("Wrote {path}");
    }

    // the whole board in one picture
    let mut full = Panel::side_scrolling(&board, board.width())?;
    full.play();
    full.tick(&mut renderer)?;
    renderer.save("output_board.svg")?;
    println!("Wrote output_board.svg");

    Ok(())
}
