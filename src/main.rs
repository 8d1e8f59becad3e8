use std::io;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use verbtrainer::shell::{self, format_tense_menu, tense_menu, Shell};
use verbtrainer::{get_language, languages, Config, Error};

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = languages::validate_all() {
        error!(error = %e, "tablas de reglas incompletas");
        return Err(e).context("las tablas de conjugación no son válidas");
    }
    info!("tablas de conjugación listas");

    if config.list_tenses {
        let code = config
            .language
            .as_deref()
            .ok_or(Error::MissingArgument("--language"))?;
        let language =
            get_language(code).ok_or_else(|| Error::UnsupportedLanguage(code.to_string()))?;
        println!("{}", format_tense_menu(&tense_menu(&language.tenses(), None)));
        return Ok(());
    }

    if config.is_one_shot() {
        let stdout = io::stdout();
        shell::run_once(&config, &mut stdout.lock())?;
        return Ok(());
    }

    let stdin = io::stdin();
    let mut shell = Shell::new(stdin.lock(), io::stdout(), config);
    shell.run().context("error en la sesión interactiva")?;
    Ok(())
}
