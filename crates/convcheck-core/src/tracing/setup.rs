//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Install the stderr subscriber used by the `convcheck` binary.
///
/// `CONVCHECK_LOG` takes an `EnvFilter` directive over the convcheck crates:
/// `convcheck_analysis::scanner=debug` shows each inferred role,
/// `convcheck_analysis::classifier=debug` shows each violation as it is found,
/// and `info` adds the scan and classification summaries. Without it only
/// warnings are shown, such as skipped scan entries and ignored user configs.
///
/// The report owns stdout, so events never go there. Only the first call
/// installs anything.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("CONVCHECK_LOG")
            .unwrap_or_else(|_| EnvFilter::new("convcheck=warn"));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();
    });
}
