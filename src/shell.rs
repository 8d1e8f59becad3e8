//! Interfaz de texto: menús interactivos, modo directo y archivos de tarjetas
//!
//! El motor nunca toca la terminal ni el disco; todo eso ocurre aquí.

use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

use tracing::{info, warn};

use crate::config::{Config, OutputMode};
use crate::error::{Error, Result};
use crate::languages::{get_language, Language};

const LANGUAGE_MENU: &str =
    "Elija un idioma: 1) castellano 2) français\nEscriba '1' o '2' y pulse 'Enter' > ";

const TASK_MENU: &str =
    "¿Qué quiere hacer?\n1) Conjugar un verbo\n2) Salir\nEscriba '1' o '2' y pulse 'Enter' > ";

const OUTPUT_MENU: &str = "1) Mostrar en pantalla\n\
                           2) Escribir tarjetas cloze para Anki\n\
                           3) Escribir tarjetas cloze con traducción y audio\n\
                           4) Mostrar en JSON\n> ";

/// Menú numerado de tiempos (desde 1). `how_many` limita las entradas.
pub fn tense_menu<'a>(tenses: &[&'a str], how_many: Option<usize>) -> Vec<(usize, &'a str)> {
    let how_many = how_many.unwrap_or(tenses.len());
    tenses
        .iter()
        .take(how_many)
        .enumerate()
        .map(|(i, tense)| (i + 1, *tense))
        .collect()
}

pub fn format_tense_menu(menu: &[(usize, &str)]) -> String {
    menu.iter()
        .map(|(number, tense)| format!("{}) {}", number, tense))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Traduce la elección del usuario a un nombre de tiempo.
///
/// Un número dentro del menú se convierte en su tiempo; cualquier otra cosa
/// se devuelve tal cual para que el motor la valide.
pub fn resolve_tense(tenses: &[&str], choice: &str) -> String {
    let choice = choice.trim();
    choice
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| tenses.get(i))
        .map_or_else(|| choice.to_string(), |tense| tense.to_string())
}

/// Lee una lista con una entrada por línea; sin archivo, lista vacía
pub fn load_list(path: Option<&Path>) -> Result<Vec<String>> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };
    let content = fs::read_to_string(path)?;
    Ok(content.lines().map(|line| line.trim().to_string()).collect())
}

fn write_lines(dir: &Path, path: &Path, lines: &[String]) -> Result<()> {
    fs::create_dir_all(dir)?;
    fs::write(path, lines.join("\n"))?;
    info!(path = %path.display(), lines = lines.len(), "archivo de tarjetas escrito");
    Ok(())
}

/// Conjuga y entrega el resultado en el formato pedido
pub fn emit<W: Write>(
    output: &mut W,
    config: &Config,
    language: &dyn Language,
    infinitive: &str,
    tense: &str,
    mode: OutputMode,
) -> Result<()> {
    match mode {
        OutputMode::View => {
            let lines = language.display(infinitive, tense)?;
            writeln!(output)?;
            for line in lines {
                writeln!(output, "{}", line)?;
            }
            writeln!(output)?;
        }
        OutputMode::Cloze => {
            let lines = language.cloze(infinitive, tense)?;
            let path = config.cloze_path();
            write_lines(&config.output_dir, &path, &lines)?;
            writeln!(output, "Archivo '{}' escrito.", path.display())?;
        }
        OutputMode::Export => {
            let translations = load_list(config.translations.as_deref())?;
            let sounds = load_list(config.sounds.as_deref())?;
            let lines = language.cloze_export(infinitive, tense, &translations, &sounds)?;
            let path = config.cloze_extra_path();
            write_lines(&config.output_dir, &path, &lines)?;
            writeln!(output, "Archivo '{}' escrito.", path.display())?;
        }
        OutputMode::Json => {
            writeln!(output, "{}", language.json(infinitive, tense)?)?;
        }
    }
    Ok(())
}

/// Modo directo: idioma, infinitivo y tiempo vienen de la línea de órdenes
pub fn run_once<W: Write>(config: &Config, output: &mut W) -> Result<()> {
    let code = config
        .language
        .as_deref()
        .ok_or(Error::MissingArgument("--language"))?;
    let language = get_language(code).ok_or_else(|| Error::UnsupportedLanguage(code.to_string()))?;
    let infinitive = config
        .infinitive
        .as_deref()
        .ok_or(Error::MissingArgument("--infinitive"))?;
    let choice = config.tense.as_deref().ok_or(Error::MissingArgument("--tense"))?;

    let tense = resolve_tense(&language.tenses(), choice);
    emit(output, config, language.as_ref(), infinitive, &tense, config.mode)
}

/// Bucle interactivo sobre cualquier entrada/salida
pub struct Shell<R, W> {
    input: R,
    output: W,
    config: Config,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, config: Config) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "¡Bienvenido a Verb Trainer!")?;

        let language = match self.config.language.clone() {
            Some(code) => get_language(&code).ok_or(Error::UnsupportedLanguage(code))?,
            None => match self.choose_language()? {
                Some(language) => language,
                None => return Ok(()),
            },
        };
        info!(language = language.code(), "idioma seleccionado");

        while let Some(choice) = self.prompt(TASK_MENU)? {
            if choice != "1" || !self.conjugate_loop(language.as_ref())? {
                break;
            }
        }

        writeln!(self.output, "¡Gracias por usar Verb Trainer!")?;
        writeln!(self.output, "{}", language.farewell())?;
        Ok(())
    }

    /// Muestra `message` y lee una línea; `None` al final de la entrada
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn choose_language(&mut self) -> Result<Option<Box<dyn Language>>> {
        while let Some(choice) = self.prompt(LANGUAGE_MENU)? {
            let code = match choice.as_str() {
                "1" => "es",
                "2" => "fr",
                other => other,
            };
            if let Some(language) = get_language(code) {
                return Ok(Some(language));
            }
            warn!(choice = %choice, "idioma no válido");
            writeln!(self.output, "{}", Error::InvalidSelection(choice))?;
        }
        Ok(None)
    }

    /// Conjuga verbos hasta que el usuario no quiera seguir.
    /// Devuelve `false` si se acabó la entrada.
    fn conjugate_loop(&mut self, language: &dyn Language) -> Result<bool> {
        let tenses = language.tenses();
        let menu = format_tense_menu(&tense_menu(&tenses, None));

        loop {
            let Some(infinitive) = self.prompt("¿Infinitivo? > ")? else {
                return Ok(false);
            };
            let Some(choice) = self.prompt(&format!("¿Tiempo?\n{}\n> ", menu))? else {
                return Ok(false);
            };
            let tense = resolve_tense(&tenses, &choice);

            let Some(mode_choice) = self.prompt(OUTPUT_MENU)? else {
                return Ok(false);
            };
            let mode = match mode_choice.as_str() {
                "1" => Some(OutputMode::View),
                "2" => Some(OutputMode::Cloze),
                "3" => Some(OutputMode::Export),
                "4" => Some(OutputMode::Json),
                _ => None,
            };

            match mode {
                Some(mode) => {
                    match emit(&mut self.output, &self.config, language, &infinitive, &tense, mode) {
                        Ok(()) => {}
                        Err(Error::Conjugation(e)) => {
                            warn!(infinitive = %infinitive, tense = %tense, error = %e, "conjugación rechazada");
                            writeln!(self.output, "Error: {}", e)?;
                        }
                        Err(e) => return Err(e),
                    }
                }
                None => writeln!(self.output, "{}", Error::InvalidSelection(mode_choice))?,
            }

            let Some(answer) = self.prompt("¿Continuar? (s/n) > ")? else {
                return Ok(false);
            };
            if answer.eq_ignore_ascii_case("n") {
                return Ok(true);
            }
        }
    }
}
