//! Responsible for creating and managing the global viewer settings

mod cli;

use std::{path::PathBuf, sync::LazyLock};

use clap::Parser;

/// The global settings singleton
pub static SETTINGS: LazyLock<Settings> = LazyLock::new(Settings::init);

const DEFAULT_OUTPUT: &str = "frames";

/// Holds all the configurable information for a viewer run
#[derive(Debug)]
pub struct Settings {
    /// Level file to render
    pub level: PathBuf,

    /// Directory that frames are written to
    pub output: PathBuf,

    /// Replaces the scared timer of every snapshot, if set
    pub scared_timer: Option<i32>,

    pub shifted_power_markers: bool,

    pub draw_origin_items: bool,
}

impl Settings {
    #[must_use]
    pub fn init() -> Self {
        let mut settings = Self::default();

        let args = cli::Arguments::parse();

        args.update_settings(&mut settings);

        settings
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            level: PathBuf::new(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            scared_timer: None,
            shifted_power_markers: false,
            draw_origin_items: false,
        }
    }
}
