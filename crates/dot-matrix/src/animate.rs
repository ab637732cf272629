use std::time::Duration;

use dot_matrix_core::{Command, Error, Panel, Renderer, Result, Scroll};
use tokio::{
    sync::mpsc,
    time::{self, MissedTickBehavior},
};

/// Drive `panel` on a fixed `period`, applying [Command]s as they arrive.
///
/// Queued commands are always applied before the next tick fires, and a tick
/// runs to completion (renderer included) before anything else happens. Play
/// and resume restart the period, so the first frame follows one period
/// later. The loop returns once every sender of `commands` is dropped, or with
/// the first error a tick raises.
pub async fn animate<S, R>(
    panel: &mut Panel<'_, '_, S>,
    renderer: &mut R,
    period: Duration,
    mut commands: mpsc::Receiver<Command>,
) -> Result<()>
where
    S: Scroll,
    R: Renderer + ?Sized,
{
    if period.is_zero() {
        return Err(Error::InvalidConfig(
            "tick interval must be non-zero".to_string(),
        ));
    }

    let mut ticker = time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            command = commands.recv() => {
                let Some(command) = command else {
                    break;
                };
                tracing::debug!(?command, state = ?panel.state(), "panel command");

                let was_playing = panel.is_playing();
                panel.apply(command);
                if panel.is_playing() && !was_playing {
                    ticker.reset();
                }
            }
            _ = ticker.tick(), if panel.is_playing() => {
                panel.tick(renderer)?;
            }
        }
    }

    tracing::debug!("command channel closed, animation finished");
    Ok(())
}
