//! Headless demo driver
//!
//! Runs a scripted input pattern against the built-in campaign at the
//! fixed timestep and logs the resulting event stream. Useful as a
//! smoke test and as a minimal example of driving a [`Session`].

use pipe_runner::consts::SIM_DT;
use pipe_runner::sim::{GameEvent, LevelCatalog, TickInput};
use pipe_runner::{NullAudio, Session};

fn main() {
    env_logger::init();

    let mut session =
        Session::new(LevelCatalog::builtin(), 0xC0FFEE).with_audio(Box::new(NullAudio));

    // Hold right, tap jump in bursts. Enough to clear most of level 1.
    let total_frames = 60 * 30;
    for frame in 0..total_frames {
        session.set_input(TickInput {
            left: false,
            right: true,
            jump: frame % 45 < 12,
        });

        for event in session.advance(SIM_DT) {
            match event {
                GameEvent::ProgressChanged {
                    score,
                    coins,
                    level,
                } => {
                    log::info!("progress: score {score}, coins {coins}, level {level}");
                }
                other => log::info!("event: {other:?}"),
            }
        }
    }

    let progress = session.progress();
    println!(
        "after {total_frames} frames: level {}, score {}, coins {}",
        progress.level, progress.score, progress.coins
    );
}
