// SPDX-License-Identifier: MPL-2.0
use bhasha::config::paths;
use bhasha::error::Result;
use bhasha::i18n::{I18n, Language, LanguageAction};
use bhasha::storage::SettingsFile;
use std::process::ExitCode;

mod logger;

const USAGE: &str = "\
Usage: bhasha [OPTIONS] [KEY ...]

Prints the translation of each KEY in the active language,
or the active language when no key is given.

Options:
  --lang CODE        Use CODE for this run without saving it
  --set CODE         Switch to CODE and save it as the preference
  --config-dir DIR   Read and write settings.toml in DIR
  -v, --verbose      Log every lookup to stderr
  -h, --help         Show this message";

struct Flags {
    lang: Option<String>,
    set: Option<String>,
    config_dir: Option<String>,
    verbose: bool,
    keys: Vec<String>,
}

fn parse_flags() -> std::result::Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        verbose: args.contains(["-v", "--verbose"]),
        lang: args.opt_value_from_str("--lang")?,
        set: args.opt_value_from_str("--set")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        keys: args
            .finish()
            .into_iter()
            .filter_map(|s| s.into_string().ok())
            .collect(),
    };
    Ok(Some(flags))
}

fn run(flags: Flags) -> Result<()> {
    paths::init_cli_override(flags.config_dir);
    let storage = SettingsFile::open_default()?;
    log::debug!("Using settings file {}", storage.path().display());

    let mut i18n = I18n::new(flags.lang, storage)?;

    if let Some(code) = flags.set {
        let language: Language = code.parse()?;
        i18n.dispatch(LanguageAction::SetLanguage(language));
        log::info!("{}", i18n.tr("language-changed"));
    }

    if flags.keys.is_empty() {
        let language = i18n.current_language();
        println!("{} ({})", language.code(), language.display_name());
        return Ok(());
    }

    for key in &flags.keys {
        println!("{}={}", key, i18n.tr(key));
    }
    Ok(())
}

fn main() -> ExitCode {
    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{err}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    if let Err(err) = logger::setup(flags.verbose) {
        eprintln!("Failed to initialize logger: {err}");
    }

    match run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
