//! Tipos de error del conjugador y de la interfaz

use thiserror::Error;

use crate::category::Person;

/// Errores del motor de conjugación.
///
/// Todos se producen en el punto de detección y se propagan sin recuperación:
/// el motor nunca sustituye una forma por otra "parecida".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConjugationError {
    #[error("Clase verbal desconocida: '{0}'")]
    UnknownVerbClass(String),

    #[error("Tiempo verbal desconocido: '{0}'")]
    UnknownTense(String),

    #[error("Infinitivo no válido: '{0}'")]
    InvalidInfinitive(String),

    #[error("Solo 'je' y 'que' admiten elisión, no '{0}'")]
    ElisionMisuse(String),

    #[error("La persona {0:?} no existe en este idioma")]
    UnsupportedPerson(Person),

    #[error("Se esperaban {expected} personas gramaticales, se recibieron {found}")]
    Arity { expected: usize, found: usize },

    #[error("Falta la regla de '{tense}' para los verbos en -{class}")]
    MissingRule { class: &'static str, tense: &'static str },
}

/// Errores de la aplicación (motor + entrada/salida)
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Conjugation(#[from] ConjugationError),

    #[error("Idioma no soportado: {0}")]
    UnsupportedLanguage(String),

    #[error("Opción no válida: '{0}'")]
    InvalidSelection(String),

    #[error("Falta el argumento {0}")]
    MissingArgument(&'static str),

    #[error("Error de E/S: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error serializando JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
