//! Soporte para múltiples idiomas
//!
//! Define el trait común que usa la interfaz para conjugar y dar formato
//! sin conocer la aridad ni los tiempos de cada idioma.

pub mod french;
pub mod spanish;

use crate::error::ConjugationError;

/// Trait que define las capacidades requeridas para un idioma
pub trait Language: Send + Sync {
    /// Código del idioma (ej: "es", "fr")
    fn code(&self) -> &str;

    /// Nombre del idioma en el propio idioma
    fn name(&self) -> &str;

    /// Despedida al salir del programa
    fn farewell(&self) -> &str;

    /// Nombres de los tiempos, en el orden del menú
    fn tenses(&self) -> Vec<&'static str>;

    /// Comprueba que las tablas de reglas estén completas
    fn validate(&self) -> Result<(), ConjugationError>;

    /// Vista a dos columnas para pantalla
    fn display(&self, infinitive: &str, tense: &str) -> crate::Result<Vec<String>>;

    /// Una línea de tarjeta cloze por persona
    fn cloze(&self, infinitive: &str, tense: &str) -> crate::Result<Vec<String>>;

    /// Líneas de importación Anki con traducción y audio opcionales
    fn cloze_export(
        &self,
        infinitive: &str,
        tense: &str,
        translations: &[String],
        sounds: &[String],
    ) -> crate::Result<Vec<String>>;

    /// Inflexión serializada como JSON
    fn json(&self, infinitive: &str, tense: &str) -> crate::Result<String>;
}

/// Códigos de los idiomas disponibles, en el orden del menú
pub const SUPPORTED_LANGUAGES: [&str; 2] = ["es", "fr"];

/// Crea una instancia del idioma especificado
pub fn get_language(code: &str) -> Option<Box<dyn Language>> {
    match code.trim().to_lowercase().as_str() {
        "es" | "spanish" | "español" | "espanol" | "castellano" => {
            Some(Box::new(spanish::Spanish::new()))
        }
        "fr" | "french" | "français" | "francais" => Some(Box::new(french::French::new())),
        _ => None,
    }
}

/// Valida las tablas de todos los idiomas; se llama al arrancar
pub fn validate_all() -> Result<(), ConjugationError> {
    for code in SUPPORTED_LANGUAGES {
        if let Some(language) = get_language(code) {
            language.validate()?;
            tracing::debug!(language = code, "tablas de reglas validadas");
        }
    }
    Ok(())
}
