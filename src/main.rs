// SPDX-License-Identifier: MPL-2.0
use galerie::app::{self, Flags};

const HELP: &str = "\
Galerie - portfolio gallery viewer

USAGE:
  galerie [OPTIONS] [SITE_ROOT]

ARGS:
  <SITE_ROOT>      Directory holding _data/ and the image files [default: .]

OPTIONS:
  --lang <LANG>    Locale override in BCP-47 form (e.g. fr, en-US)
  --status <TAG>   Status tag selected at startup [default: available]
  -h, --help       Print this help and exit
  -V, --version    Print the version and exit
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }
    if args.contains(["-V", "--version"]) {
        println!("galerie {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let lang = args.opt_value_from_str("--lang").unwrap();
    let status = args.opt_value_from_str("--status").unwrap();

    // First free-standing argument is the site root; anything else is noise.
    let mut site_root = None;
    let mut ignored = Vec::new();
    for arg in args.finish() {
        match arg.into_string() {
            Ok(text) if site_root.is_none() && !text.starts_with('-') => site_root = Some(text),
            Ok(text) => ignored.push(text),
            Err(raw) => ignored.push(raw.to_string_lossy().into_owned()),
        }
    }
    if !ignored.is_empty() {
        tracing::warn!("ignoring unexpected arguments: {}", ignored.join(" "));
    }

    let flags = Flags {
        lang,
        status,
        site_root,
    };

    app::run(flags)
}
