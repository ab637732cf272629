//! Scroll a banner across the terminal.
//!
//! ```sh
//! cargo run --example banner -- "Hello [heart] World"
//! ```
//!
//! Set `DOT_MATRIX_CONFIG` to a JSON file to change the layout, and
//! `RUST_LOG=debug` to follow the panel's state changes.

use std::{env, fs, io, time::Duration};

use dot_matrix::{AsciiRenderer, Command, Frame, Renderer, alphabet, animate, config::DisplayConfig};
use tokio::{sync::mpsc, time::sleep};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let text = env::args().nth(1).unwrap_or_else(|| "Hello World!".to_string());
    let config = match env::var("DOT_MATRIX_CONFIG") {
        Ok(path) => DisplayConfig::from_json(&fs::read_to_string(path)?)?,
        Err(_) => DisplayConfig::default(),
    };

    let dictionary = alphabet::dictionary()?;
    let mut board = config.board.build()?;
    board.load(&text, &dictionary)?;

    let mut panel = config.panel.build(&board)?;
    let period = config.panel.interval()?;

    let mut ascii = AsciiRenderer::new(io::stdout());
    let mut renderer = |frame: &Frame| {
        // move the cursor home and clear the screen before each frame
        print!("\x1b[H\x1b[2J");
        ascii.render(frame);
    };

    let (tx, rx) = mpsc::channel(4);
    let script = async move {
        tx.send(Command::Play).await?;
        sleep(Duration::from_secs(4)).await;
        tx.send(Command::Pause).await?;
        sleep(Duration::from_secs(1)).await;
        tx.send(Command::Resume).await?;
        sleep(Duration::from_secs(4)).await;
        tx.send(Command::Stop).await?;
        anyhow::Ok(())
    };

    let (animation, script) = tokio::join!(animate(&mut panel, &mut renderer, period, rx), script);
    animation?;
    script?;

    if let Some(error) = ascii.take_error() {
        return Err(error.into());
    }

    Ok(())
}
