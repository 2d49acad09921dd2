// SPDX-License-Identifier: MPL-2.0
use art_space::app::{self, Flags};
use tracing::warn;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Art Space

USAGE:
  art_space [OPTIONS]

OPTIONS:
  -h, --help             Print this help and exit
      --lang <ID>        Use the given locale (e.g. en-US, fr, ko)
      --i18n-dir <DIR>   Load additional .ftl translation files from DIR
      --config-dir <DIR> Read settings.toml from DIR
                         (overrides ART_SPACE_CONFIG_DIR)
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("art_space=info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let rest = args.finish();
    if !rest.is_empty() {
        warn!(?rest, "ignoring unexpected arguments");
    }

    app::run(flags)
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        i18n_dir: args.opt_value_from_str("--i18n-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    })
}
