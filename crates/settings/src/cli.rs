use std::path::PathBuf;

use crate::Settings;

#[derive(clap::Parser, Debug)]
#[command(name = "pacman-viewer", version, about = "Renders maze snapshots into image frames", long_about = None)]
pub struct Arguments {
    /// Level file containing one or more snapshots
    #[arg(value_hint = clap::ValueHint::FilePath)]
    level: PathBuf,

    /// Directory that frames are written to
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    output: Option<PathBuf>,

    /// Override the scared timer of every snapshot
    #[arg(long, value_name = "TICKS", allow_negative_numbers = true)]
    scared: Option<i32>,

    /// Paint the red channel of power items one pixel below their center
    #[clap(
        long,
        action = clap::ArgAction::SetTrue,
    )]
    shifted_power_markers: bool,

    /// Also draw items at row 0, column 0 instead of treating them as empty slots
    #[clap(
        long,
        action = clap::ArgAction::SetTrue,
    )]
    draw_origin_items: bool,
}

impl Arguments {
    pub(crate) fn update_settings(self, settings: &mut Settings) {
        settings.level = self.level;

        if let Some(output) = self.output {
            settings.output = output;
        }

        settings.scared_timer = self.scared;
        settings.shifted_power_markers |= self.shifted_power_markers;
        settings.draw_origin_items |= self.draw_origin_items;
    }
}
