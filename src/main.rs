// SPDX-License-Identifier: MPL-2.0
use superglass::app::{self, paths, Flags};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const HELP: &str = "\
superglass - Super Glass showroom kiosk

USAGE:
    superglass [OPTIONS]

OPTIONS:
    --lang <LOCALE>       UI language (e.g. en-US, hi)
    --photo <ID>          Open a single photo by media-host identifier
    --data-dir <PATH>     Directory for the session state file
    --config-dir <PATH>   Directory for settings.toml
    -h, --help            Print this help

ENVIRONMENT:
    SUPERGLASS_CLOUD_NAME, SUPERGLASS_API_KEY, SUPERGLASS_API_SECRET
    SUPERGLASS_DATA_DIR, SUPERGLASS_CONFIG_DIR, RUST_LOG
";

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,superglass=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_line_number(true))
        .init();
}

fn optional(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!("ignoring {key}: {err}");
            None
        }
    }
}

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    init_logging();

    let flags = Flags {
        lang: optional(&mut args, "--lang"),
        photo: optional(&mut args, "--photo"),
        data_dir: optional(&mut args, "--data-dir"),
        config_dir: optional(&mut args, "--config-dir"),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting showroom");

    app::run(flags)
}
