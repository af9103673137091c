use std::sync::Once;

use log::LevelFilter;

static INIT: Once = Once::new();

/// Initializes the global logger once, subsequent calls are ignored.
///
/// `verbosity` comes from the `-v` flag: 1 enables debug output and 2 or
/// more enables per-row trace output. Without it `RUST_LOG` is honored and
/// the fallback level is info.
pub fn init_logging(verbosity: u8) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match verbosity {
            0 => {
                if let Ok(filter) = std::env::var("RUST_LOG") {
                    builder.parse_filters(&filter);
                } else {
                    builder.filter_level(LevelFilter::Info);
                }
            }
            1 => {
                builder.filter_level(LevelFilter::Debug);
            }
            _ => {
                builder.filter_level(LevelFilter::Trace);
            }
        }

        builder.init();
        log::debug!("logging initialized");
    });
}
