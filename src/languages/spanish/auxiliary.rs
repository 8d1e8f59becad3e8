//! Formas del auxiliar "haber" para los tiempos compuestos

use super::SpanishTense;

pub const HABER_PRESENTE: [&str; 7] = ["he", "has", "has", "ha", "hemos", "habéis", "han"];
pub const HABER_IMPERFECTO: [&str; 7] =
    ["había", "habías", "habías", "había", "habíamos", "habíais", "habían"];
pub const HABER_PRETERITO: [&str; 7] =
    ["hube", "hubiste", "hubiste", "hubo", "hubimos", "hubisteis", "hubieron"];
pub const HABER_FUTURO: [&str; 7] =
    ["habré", "habrás", "habrás", "habrá", "habremos", "habréis", "habrán"];
pub const HABER_CONDICIONAL: [&str; 7] =
    ["habría", "habrías", "habrías", "habría", "habríamos", "habríais", "habrían"];
pub const HABER_SUBJUNTIVO_PRESENTE: [&str; 7] =
    ["haya", "hayas", "hayás", "haya", "hayamos", "hayáis", "hayan"];
pub const HABER_SUBJUNTIVO_IMPERFECTO: [&str; 7] =
    ["hubiera", "hubieras", "hubieras", "hubiera", "hubiéramos", "hubierais", "hubieran"];

/// Formas de "haber" en un tiempo simple
pub fn haber(tense: SpanishTense) -> Option<[&'static str; 7]> {
    match tense {
        SpanishTense::Presente => Some(HABER_PRESENTE),
        SpanishTense::PreteritoImperfecto => Some(HABER_IMPERFECTO),
        SpanishTense::PreteritoIndefinido => Some(HABER_PRETERITO),
        SpanishTense::FuturoSimple => Some(HABER_FUTURO),
        SpanishTense::CondicionalSimple => Some(HABER_CONDICIONAL),
        SpanishTense::PresenteSubjuntivo => Some(HABER_SUBJUNTIVO_PRESENTE),
        SpanishTense::ImperfectoSubjuntivo => Some(HABER_SUBJUNTIVO_IMPERFECTO),
        _ => None,
    }
}
