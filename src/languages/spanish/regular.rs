//! Tablas de terminaciones para verbos regulares españoles
//!
//! Siete personas: la tercera casilla es el voseo ("vos hablás").

use super::SpanishTense;
use crate::conjugation::{StemRule, VerbClass};

/// Terminaciones del presente de indicativo
pub const PRESENTE_AR: [&str; 7] = ["o", "as", "ás", "a", "amos", "áis", "an"];
pub const PRESENTE_ER: [&str; 7] = ["o", "es", "és", "e", "emos", "éis", "en"];
pub const PRESENTE_IR: [&str; 7] = ["o", "es", "ís", "e", "imos", "ís", "en"];

/// Terminaciones del pretérito imperfecto
pub const IMPERFECTO_AR: [&str; 7] = ["aba", "abas", "abas", "aba", "ábamos", "abais", "aban"];
pub const IMPERFECTO_ER: [&str; 7] = ["ía", "ías", "ías", "ía", "íamos", "íais", "ían"];
pub const IMPERFECTO_IR: [&str; 7] = IMPERFECTO_ER;

/// Terminaciones del pretérito indefinido; "(s)" marca la variante voseante
/// coloquial ("hablastes")
pub const PRETERITO_AR: [&str; 7] = ["é", "aste(s)", "aste(s)", "ó", "amos", "asteis", "aron"];
pub const PRETERITO_ER: [&str; 7] = ["í", "iste(s)", "iste(s)", "ió", "imos", "isteis", "ieron"];
pub const PRETERITO_IR: [&str; 7] = PRETERITO_ER;

/// Terminaciones del futuro simple (se añaden al infinitivo completo)
pub const FUTURO: [&str; 7] = ["é", "ás", "ás", "á", "emos", "éis", "án"];

/// Terminaciones del condicional simple (se añaden al infinitivo completo)
pub const CONDICIONAL: [&str; 7] = ["ía", "ías", "ías", "ía", "íamos", "íais", "ían"];

/// Terminaciones del presente de subjuntivo
pub const SUBJUNTIVO_PRESENTE_AR: [&str; 7] = ["e", "es", "és", "e", "emos", "éis", "en"];
pub const SUBJUNTIVO_PRESENTE_ER: [&str; 7] = ["a", "as", "ás", "a", "amos", "áis", "an"];
pub const SUBJUNTIVO_PRESENTE_IR: [&str; 7] = SUBJUNTIVO_PRESENTE_ER;

/// Terminaciones del imperfecto de subjuntivo (-ra)
pub const SUBJUNTIVO_IMPERFECTO_AR: [&str; 7] =
    ["ara", "aras", "aras", "ara", "áramos", "arais", "aran"];
pub const SUBJUNTIVO_IMPERFECTO_ER: [&str; 7] =
    ["iera", "ieras", "ieras", "iera", "iéramos", "ierais", "ieran"];
pub const SUBJUNTIVO_IMPERFECTO_IR: [&str; 7] = SUBJUNTIVO_IMPERFECTO_ER;

/// Terminación del participio
pub const PARTICIPIO_AR: &str = "ado";
pub const PARTICIPIO_ER: &str = "ido";
pub const PARTICIPIO_IR: &str = "ido";

/// Clases verbales regulares del español
pub const CLASSES: [VerbClass; 3] = [VerbClass::Ar, VerbClass::Er, VerbClass::Ir];

/// Regla de raíz de cada tiempo simple
pub fn stem_rule(tense: SpanishTense) -> Option<StemRule> {
    match tense {
        SpanishTense::FuturoSimple | SpanishTense::CondicionalSimple => Some(StemRule::Infinitive),
        SpanishTense::Presente
        | SpanishTense::PreteritoImperfecto
        | SpanishTense::PreteritoIndefinido
        | SpanishTense::PresenteSubjuntivo
        | SpanishTense::ImperfectoSubjuntivo => Some(StemRule::DropClassSuffix),
        _ => None,
    }
}

/// Terminaciones de un tiempo simple para una clase verbal
pub fn endings(class: VerbClass, tense: SpanishTense) -> Option<[&'static str; 7]> {
    let endings = match (tense, class) {
        (SpanishTense::Presente, VerbClass::Ar) => PRESENTE_AR,
        (SpanishTense::Presente, VerbClass::Er) => PRESENTE_ER,
        (SpanishTense::Presente, VerbClass::Ir) => PRESENTE_IR,
        (SpanishTense::PreteritoImperfecto, VerbClass::Ar) => IMPERFECTO_AR,
        (SpanishTense::PreteritoImperfecto, VerbClass::Er) => IMPERFECTO_ER,
        (SpanishTense::PreteritoImperfecto, VerbClass::Ir) => IMPERFECTO_IR,
        (SpanishTense::PreteritoIndefinido, VerbClass::Ar) => PRETERITO_AR,
        (SpanishTense::PreteritoIndefinido, VerbClass::Er) => PRETERITO_ER,
        (SpanishTense::PreteritoIndefinido, VerbClass::Ir) => PRETERITO_IR,
        (SpanishTense::FuturoSimple, VerbClass::Ar | VerbClass::Er | VerbClass::Ir) => FUTURO,
        (SpanishTense::CondicionalSimple, VerbClass::Ar | VerbClass::Er | VerbClass::Ir) => {
            CONDICIONAL
        }
        (SpanishTense::PresenteSubjuntivo, VerbClass::Ar) => SUBJUNTIVO_PRESENTE_AR,
        (SpanishTense::PresenteSubjuntivo, VerbClass::Er) => SUBJUNTIVO_PRESENTE_ER,
        (SpanishTense::PresenteSubjuntivo, VerbClass::Ir) => SUBJUNTIVO_PRESENTE_IR,
        (SpanishTense::ImperfectoSubjuntivo, VerbClass::Ar) => SUBJUNTIVO_IMPERFECTO_AR,
        (SpanishTense::ImperfectoSubjuntivo, VerbClass::Er) => SUBJUNTIVO_IMPERFECTO_ER,
        (SpanishTense::ImperfectoSubjuntivo, VerbClass::Ir) => SUBJUNTIVO_IMPERFECTO_IR,
        _ => return None,
    };
    Some(endings)
}

/// Obtiene la terminación del participio para una clase de verbo
pub fn get_participle_ending(class: VerbClass) -> Option<&'static str> {
    match class {
        VerbClass::Ar => Some(PARTICIPIO_AR),
        VerbClass::Er => Some(PARTICIPIO_ER),
        VerbClass::Ir => Some(PARTICIPIO_IR),
        VerbClass::Re => None,
    }
}
