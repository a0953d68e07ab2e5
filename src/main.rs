// SPDX-License-Identifier: MPL-2.0
use keepsake::app::{self, paths, Flags};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the tracing filter.
const ENV_LOG: &str = "KEEPSAKE_LOG";

const HELP: &str = "\
keepsake - relive memories, one video at a time

USAGE:
    keepsake [OPTIONS]

OPTIONS:
    --lang <id>          Interface language (e.g. en-US, fr)
    --media-dir <dir>    Directory with the videos and an optional catalog.toml
    --data-dir <dir>     Where viewed memories are stored
    --config-dir <dir>   Where settings.toml is read from
    --reset              Forget viewed memories before starting
    -h, --help           Print this help

ENVIRONMENT:
    KEEPSAKE_DATA_DIR    Same as --data-dir
    KEEPSAKE_CONFIG_DIR  Same as --config-dir
    KEEPSAKE_LOG         Log filter (default: keepsake=info)
";

struct Args {
    flags: Flags,
    data_dir: Option<String>,
    config_dir: Option<String>,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let parsed = Args {
        flags: Flags {
            lang: args.opt_value_from_str("--lang")?,
            media_dir: args.opt_value_from_str::<_, PathBuf>("--media-dir")?,
            reset: args.contains("--reset"),
        },
        data_dir: args.opt_value_from_str("--data-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    Ok(Some(parsed))
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env(ENV_LOG)
                .unwrap_or_else(|_| "keepsake=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() -> iced::Result {
    init_tracing();

    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(args.data_dir, args.config_dir);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting keepsake");

    app::run(args.flags)
}
