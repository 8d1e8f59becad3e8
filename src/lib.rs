//! Verb Trainer - conjugación de verbos regulares franceses y españoles
//!
//! Conjuga verbos regulares en los tiempos simples y compuestos de cada
//! idioma y da formato al resultado como vista en pantalla, tarjetas cloze
//! de Anki o JSON.

pub mod category;
pub mod config;
pub mod conjugation;
pub mod error;
pub mod languages;
pub mod output;
pub mod shell;

pub use category::{Category, Person, PersonSlots, SpanishCategory};
pub use config::{Config, OutputMode};
pub use conjugation::{Form, Tense, TenseKind, VerbClass};
pub use error::{ConjugationError, Error, Result};
pub use languages::{get_language, Language};
pub use shell::Shell;
