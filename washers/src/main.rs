#![cfg_attr(windows, windows_subsystem = "windows")]

use clap::Parser;
use iced::{Pixels, Settings, Size, window};
use log::*;
#[cfg(debug_assertions)]
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::{
    append::rolling_file::{
        RollingFileAppender,
        policy::compound::{
            CompoundPolicy, roll::fixed_window::FixedWindowRoller, trigger::size::SizeTrigger,
        },
    },
    config::{Appender, Config as LogConfig, Logger, Root},
    encode::pattern::PatternEncoder,
};
use std::path::PathBuf;

mod app;
mod config;
mod match_manager;
mod store;

use config::Config;
use store::MatchStore;

const APP_NAME: &str = "washers";

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[clap(long, short, action(clap::ArgAction::Count))]
    /// Increase the log verbosity
    verbose: u8,

    #[clap(long, short)]
    /// Make the app fullscreen
    fullscreen: bool,

    #[clap(long)]
    /// File the scores and theme are saved to, default is platform dependent
    state_file: Option<PathBuf>,

    #[clap(long)]
    /// Directory within which log files will be placed, default is platform dependent
    log_location: Option<PathBuf>,

    #[clap(long, default_value = "5000000")]
    /// Max size in bytes that a log file is allowed to reach before being rolled over
    log_max_file_size: u64,

    #[clap(long, default_value = "3")]
    /// Number of archived logs to keep
    num_old_logs: u32,
}

fn load_config() -> Result<Config, Box<dyn std::error::Error>> {
    let config_path = confy::get_configuration_file_path(APP_NAME, None)?;
    info!("Reading config file from {config_path:?}");

    match confy::load(APP_NAME, None) {
        Ok(c) => Ok(c),
        Err(e) => {
            warn!("Failed to read config file, migrating what can be kept. Error: {e}");
            let config = match std::fs::read_to_string(&config_path)
                .ok()
                .and_then(|text| text.parse::<toml::Table>().ok())
            {
                Some(old) => Config::migrate(&old),
                None => Config::default(),
            };
            confy::store(APP_NAME, None, &config)?;
            Ok(config)
        }
    }
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();

    let log_level = match args.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let log_base_path = match args.log_location {
        Some(path) => path,
        None => {
            let mut path = directories::BaseDirs::new()
                .ok_or("Could not find a directory to store logs")?
                .data_local_dir()
                .to_path_buf();
            path.push("washers-logs");
            path
        }
    };
    let mut log_path = log_base_path.clone();
    let mut archived_log_path = log_base_path.clone();
    log_path.push(format!("{APP_NAME}-log.txt"));
    archived_log_path.push(format!("{APP_NAME}-log-{{}}.txt.gz"));

    #[cfg(debug_assertions)]
    println!("Log path: {}", log_path.display());

    // Only log to the console in debug mode
    #[cfg(all(debug_assertions, not(target_os = "windows")))]
    let console_target = Target::Stderr;
    #[cfg(all(debug_assertions, target_os = "windows"))]
    let console_target = Target::Stdout; // Windows apps don't get a stderr handle
    #[cfg(debug_assertions)]
    let console = ConsoleAppender::builder()
        .target(console_target)
        .encoder(Box::new(PatternEncoder::new("[{d} {h({l:5})} {M}] {m}{n}")))
        .build();

    // Setup the file log roller
    let roller = FixedWindowRoller::builder().build(
        archived_log_path
            .as_os_str()
            .to_str()
            .ok_or("Log path is not valid unicode")?,
        args.num_old_logs,
    )?;
    let file_policy = CompoundPolicy::new(
        Box::new(SizeTrigger::new(args.log_max_file_size)),
        Box::new(roller),
    );
    let file_appender = RollingFileAppender::builder()
        .append(true)
        .encoder(Box::new(PatternEncoder::new("[{d} {l:5} {M}] {m}{n}")))
        .build(log_path, Box::new(file_policy))?;

    // Everything else only logs errors
    let root = Root::builder().appender("file_appender");
    #[cfg(debug_assertions)]
    let root = root.appender("console");
    let root = root.build(LevelFilter::Error);

    let log_config = LogConfig::builder()
        .appender(Appender::builder().build("file_appender", Box::new(file_appender)));

    #[cfg(debug_assertions)]
    let log_config = log_config.appender(Appender::builder().build("console", Box::new(console)));

    let log_config = log_config
        .logger(Logger::builder().build(APP_NAME, log_level))
        .logger(Logger::builder().build("washers_common", log_level))
        .build(root)?;

    log4rs::init_config(log_config)?;
    log_panics::init();

    let config = load_config()?;

    let store = MatchStore::new(
        args.state_file
            .unwrap_or_else(|| MatchStore::default_path(APP_NAME)),
    );
    info!("Saving match state to {:?}", store.path());

    let window_size = Size::new(
        config.hardware.screen_x as f32,
        config.hardware.screen_y as f32,
    );

    let flags = app::WashersAppFlags {
        config,
        store,
        fullscreen: args.fullscreen,
    };

    info!("Starting UI");
    iced::application("Washers", app::WashersApp::update, app::WashersApp::view)
        .subscription(app::WashersApp::subscription)
        .style(app::WashersApp::application_style)
        .window(window::Settings {
            size: window_size,
            resizable: false,
            ..Default::default()
        })
        .settings(Settings {
            default_text_size: Pixels(app::theme::SMALL_PLUS_TEXT),
            ..Default::default()
        })
        .run_with(move || app::WashersApp::new(flags))?;

    Ok(())
}
