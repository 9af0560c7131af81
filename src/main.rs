// SPDX-License-Identifier: MPL-2.0
//! Validation and lookup tool for the NeoCalc locale resources.

use neocalc_l10n::config;
use neocalc_l10n::coverage;
use neocalc_l10n::error::Result;
use neocalc_l10n::localizer::Localizer;
use neocalc_l10n::template::Args;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const USAGE: &str = "\
Usage: neocalc-l10n [OPTIONS] [KEY [NAME=VALUE]...]

Without KEY, loads every locale catalog and prints a coverage report;
the exit status is non-zero when a catalog is malformed or incomplete.
With KEY, resolves the message in the selected locale and prints it.

Options:
  --lang <LOCALE>        Locale to use (default: config file, then OS locale)
  --locales-dir <DIR>    Load catalogs from DIR instead of the embedded set
  -h, --help             Print this help
";

fn main() -> ExitCode {
    let mut raw = pico_args::Arguments::from_env();
    if raw.contains(["-h", "--help"]) {
        print!("{}", USAGE);
        return ExitCode::SUCCESS;
    }

    let lang: Option<String> = match raw.opt_value_from_str("--lang") {
        Ok(value) => value,
        Err(err) => return usage_error(err),
    };
    let locales_dir: Option<PathBuf> = match raw.opt_value_from_str("--locales-dir") {
        Ok(value) => value,
        Err(err) => return usage_error(err),
    };

    let mut free = Vec::new();
    for arg in raw.finish() {
        match arg.into_string() {
            Ok(arg) => free.push(arg),
            Err(_) => return usage_error("arguments must be valid UTF-8"),
        }
    }
    let mut free = free.into_iter();
    let key = free.next();
    let mut args = Args::new();
    for pair in free {
        let Some((name, value)) = pair.split_once('=') else {
            return usage_error(format!("expected NAME=VALUE, got `{}`", pair));
        };
        args.set(name, value);
    }

    match run(lang.as_deref(), locales_dir.as_deref(), key.as_deref(), &args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(
    lang: Option<&str>,
    locales_dir: Option<&Path>,
    key: Option<&str>,
    args: &Args,
) -> Result<ExitCode> {
    let config = config::load().unwrap_or_default();
    let localizer = match locales_dir {
        Some(dir) => Localizer::from_dir(dir, lang, &config)?,
        None => Localizer::new(lang, &config)?,
    };

    match key {
        Some(key) => {
            println!("{}", localizer.resolve(key, args)?);
            Ok(ExitCode::SUCCESS)
        }
        None => {
            let report = coverage::coverage_report(localizer.catalogs());
            print!("{}", report);
            if report.is_complete() {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
    }
}

fn usage_error(err: impl fmt::Display) -> ExitCode {
    eprintln!("error: {}", err);
    eprint!("{}", USAGE);
    ExitCode::FAILURE
}
