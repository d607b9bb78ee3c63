use std::io;
use std::process::Command;

use log::{Level, LevelFilter, debug};

fn timestamp() -> String {
    chrono::Local::now().format("%H:%M:%S%.3f").to_string()
}

/// Progress goes to stdout, warnings and errors to stderr.
pub fn init() {
    let level = if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info };
    let result = fern::Dispatch::new()
        .format(|out, message, record| match record.level() {
            Level::Info => out.finish(format_args!("  {message}")),
            Level::Warn => out.finish(format_args!("Warning: {message}")),
            Level::Error => out.finish(format_args!("{message}")),
            lvl => out.finish(format_args!("[{} {lvl}] {message}", timestamp())),
        })
        .level(level)
        .chain(
            fern::Dispatch::new()
                .filter(|meta| meta.level() > Level::Warn)
                .chain(io::stdout()),
        )
        .chain(fern::Dispatch::new().level(LevelFilter::Warn).chain(io::stderr()))
        .apply();
    // already installed (tests, repeated init)
    let _ = result;
}

pub fn log_command(cmd: &Command) {
    let args: Vec<String> = cmd.get_args().map(|a| a.to_string_lossy().into_owned()).collect();
    debug!("RUN: {} {}", cmd.get_program().to_string_lossy(), args.join(" "));
}
