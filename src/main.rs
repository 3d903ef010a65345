use std::thread;

use anyhow::{Context, Result};
use clap::Parser;

use bounce_keyframes::animation::{KeyframeTrack, LoopMode, Player};
use bounce_keyframes::cli::{Cli, OutputFormat};
use bounce_keyframes::core::{Clock, FixedHz};
use bounce_keyframes::export;
use bounce_keyframes::trajectory::{generate, Trajectory};

const BAR_WIDTH: usize = 60;

fn render(trajectory: &Trajectory, format: OutputFormat) -> Result<String> {
    let text = match format {
        OutputFormat::Summary => export::summary(trajectory),
        OutputFormat::Json => export::to_json(trajectory)?,
        OutputFormat::Keyframes => export::keyframes_json(trajectory)?,
    };
    Ok(text)
}

/// Real-time text playback, one bar per keyframe slot
fn play(trajectory: &Trajectory) {
    let params = trajectory.parameters();
    let mut player = Player::new(KeyframeTrack::from_trajectory(trajectory), LoopMode::Constant);
    let mut gate = FixedHz::with_max_frames(params.sample_rate, 4);
    let mut clock = Clock::new();
    let scale = BAR_WIDTH as f64 / params.start_height;

    log::info!("Playing {:.2}s of animation", trajectory.duration());

    while !player.is_finished() {
        let delta = clock.tick();
        for _ in 0..gate.tick(delta) {
            player.tick(gate.interval());
            let height = player.height();
            let bar = ((height * scale).round() as usize).min(BAR_WIDTH);
            println!("{:>7.3}s |{:<width$}| {:.3}", player.elapsed(), "#".repeat(bar), height, width = BAR_WIDTH);
        }
        thread::sleep(gate.idle());
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let params = cli.resolve()?;

    let trajectory = generate(&params).context("Cannot generate trajectory")?;
    log::info!(
        "Generated {} samples over {:.3}s ({} bounces)",
        trajectory.len(),
        trajectory.duration(),
        trajectory.bounce_count()
    );

    if cli.play {
        play(&trajectory);
        return Ok(());
    }

    let text = render(&trajectory, cli.format)?;
    match &cli.output {
        Some(path) => {
            std::fs::write(path, &text)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            if !cli.quiet {
                println!("Wrote {} samples to {}", trajectory.len(), path.display());
            }
        }
        None if !cli.quiet => println!("{}", text),
        None => {}
    }

    Ok(())
}
