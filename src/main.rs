// SPDX-License-Identifier: MPL-2.0
use iced_toasts::app::{self, Flags};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("iced_toasts=info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    let allowed = args.contains("--allowed");
    let config_path = match args.opt_value_from_str::<_, PathBuf>("--config") {
        Ok(path) => path,
        Err(err) => {
            tracing::warn!(%err, "ignoring --config");
            None
        }
    };
    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "unrecognized arguments");
    }

    app::run(Flags {
        allowed,
        config_path,
    })
}
