//! Configuración y argumentos CLI

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::languages::get_language;

/// Archivo de tarjetas cloze básicas
pub const CLOZE_FILE: &str = "cloze.txt";

/// Archivo de tarjetas con traducción y audio
pub const CLOZE_EXTRA_FILE: &str = "cloze_extra.txt";

/// Formato de salida de una conjugación
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Vista a dos columnas en pantalla
    View,
    /// Tarjetas cloze básicas (cloze.txt)
    Cloze,
    /// Tarjetas cloze con traducción y audio (cloze_extra.txt)
    Export,
    /// Inflexión en JSON por la salida estándar
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(
    name = "verbtrainer",
    version,
    about = "Verb Trainer - conjugación de verbos regulares franceses y españoles",
    after_help = "EJEMPLOS:\n    verbtrainer\n    verbtrainer -l fr -i parler -t \"passé composé\"\n    verbtrainer -l es -i hablar -t 1 -m cloze -o tarjetas/"
)]
pub struct Config {
    /// Idioma a usar: es (castellano) o fr (français)
    #[arg(short, long, value_parser = parse_language)]
    pub language: Option<String>,

    /// Infinitivo a conjugar
    #[arg(short, long)]
    pub infinitive: Option<String>,

    /// Tiempo verbal: nombre o número del menú
    #[arg(short, long)]
    pub tense: Option<String>,

    /// Formato de salida
    #[arg(short, long, value_enum, default_value_t = OutputMode::View)]
    pub mode: OutputMode,

    /// Directorio donde se escriben los archivos de tarjetas
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Archivo con una traducción por persona (una por línea)
    #[arg(long)]
    pub translations: Option<PathBuf>,

    /// Archivo con un audio por persona (uno por línea)
    #[arg(long)]
    pub sounds: Option<PathBuf>,

    /// Lista los tiempos del idioma y termina
    #[arg(long)]
    pub list_tenses: bool,

    /// Más detalle en el registro (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            infinitive: None,
            tense: None,
            mode: OutputMode::View,
            output_dir: PathBuf::from("."),
            translations: None,
            sounds: None,
            list_tenses: false,
            verbose: 0,
        }
    }
}

impl Config {
    /// ¿Hay datos suficientes para conjugar sin preguntar?
    pub fn is_one_shot(&self) -> bool {
        self.infinitive.is_some() && self.tense.is_some()
    }

    /// Nivel de registro según el número de `-v`
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    pub fn cloze_path(&self) -> PathBuf {
        self.output_dir.join(CLOZE_FILE)
    }

    pub fn cloze_extra_path(&self) -> PathBuf {
        self.output_dir.join(CLOZE_EXTRA_FILE)
    }

    /// Código canónico ("es", "fr") de cualquier alias aceptado
    pub fn canonicalize_language(language: &str) -> Option<String> {
        get_language(language).map(|l| l.code().to_string())
    }
}

fn parse_language(value: &str) -> Result<String, String> {
    Config::canonicalize_language(value)
        .ok_or_else(|| format!("idioma no soportado: {} (use es o fr)", value))
}
