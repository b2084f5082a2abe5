//! stderr diagnostics: `LEVEL message`, no timestamps
//!
//! Quiet by default (warnings only). `--debug` or `debug = true` in the config
//! raises the level so defaulted operands and swallowed history failures
//! become visible. `RUST_LOG` takes precedence when set.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

pub(crate) fn init(debug: bool) {
    let default_level = if debug {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .with_ansi(false)
        .compact()
        .try_init();
}
