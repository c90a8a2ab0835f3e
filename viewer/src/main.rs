mod level;

use std::{error::Error as _, fs, io, path::Path, process::ExitCode};

use error_derive::Error;
use render::{Frame, MarkerAlignment, Palette, RenderConfig, RenderError, Renderer};
use settings::{Settings, SETTINGS};

#[derive(Debug, Error)]
enum ViewerError {
    #[msg = "failed to access the file system"]
    Io(io::Error),

    #[msg = "failed to load the level"]
    Level(level::LevelError),

    #[msg = "failed to render a snapshot"]
    Render(RenderError),
}

pub fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    exit_code(run(&SETTINGS))
}

/// Log the error chain of a failed run
fn exit_code(result: Result<(), ViewerError>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("{error}");

            let mut source = error.source();
            while let Some(cause) = source {
                log::error!("Caused by: {cause}");
                source = cause.source();
            }

            ExitCode::FAILURE
        },
    }
}

fn run(settings: &Settings) -> Result<(), ViewerError> {
    log::info!("Loading level from {}", settings.level.display());
    let source = fs::read_to_string(&settings.level)?;
    let mut snapshots = level::parse(&source)?;

    if let Some(scared_timer) = settings.scared_timer {
        log::debug!("Overriding the scared timer with {scared_timer}");
        for snapshot in &mut snapshots {
            snapshot.scared_timer = scared_timer;
        }
    }

    let renderer = Renderer::new(Palette::CLASSIC, render_config(settings));

    fs::create_dir_all(&settings.output)?;

    for (index, result) in renderer.render_all(&snapshots).enumerate() {
        let frame = result?;
        let path = settings.output.join(format!("frame_{index:04}.ppm"));

        log::info!(
            "{} ({}x{}) -> {}",
            snapshots[index].title(),
            frame.width(),
            frame.height(),
            path.display()
        );

        save_frame(&path, &frame)?;
    }

    log::info!(
        "Wrote {} frame(s) to {}",
        snapshots.len(),
        settings.output.display()
    );
    Ok(())
}

fn render_config(settings: &Settings) -> RenderConfig {
    let power_item_marker = if settings.shifted_power_markers {
        MarkerAlignment::Shifted
    } else {
        MarkerAlignment::Centered
    };

    RenderConfig {
        power_item_marker,
        skip_origin_items: !settings.draw_origin_items,
    }
}

fn save_frame(path: &Path, frame: &Frame) -> Result<(), ViewerError> {
    fs::write(path, image::ppm::encode(frame.texture()))?;
    Ok(())
}
