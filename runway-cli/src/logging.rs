//! Console logging setup.
//!
//! Normal runs print bare messages so status lines read like program
//! output; warnings and errors get a level prefix. `--verbose` switches to
//! env_logger's full format with timestamps and debug messages from every
//! runway crate. `RUST_LOG` overrides the level chosen by the flags.

use std::io::Write;

use log::{Level, LevelFilter};

pub(crate) fn init_logging(quiet: bool, verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .target(env_logger::Target::Stdout);

    if verbose {
        builder.format_timestamp_millis();
    } else {
        builder.format(|buf, record| match record.level() {
            Level::Info => writeln!(buf, "{}", record.args()),
            level => writeln!(buf, "{}: {}", level.as_str().to_lowercase(), record.args()),
        });
    }

    builder.parse_env("RUST_LOG");
    let _ = builder.try_init();
}
