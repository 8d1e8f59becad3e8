//! Tablas de terminaciones para verbos regulares franceses

use super::FrenchTense;
use crate::category::Person;
use crate::conjugation::{StemRule, VerbClass};

/// Terminaciones del présent
pub const PRESENT_ER: [&str; 6] = ["e", "es", "e", "ons", "ez", "ent"];
pub const PRESENT_IR: [&str; 6] = ["is", "is", "it", "issons", "issez", "issent"];
pub const PRESENT_RE: [&str; 6] = ["s", "s", "", "ons", "ez", "ent"];

/// Terminaciones del imparfait (iguales para las tres clases)
pub const IMPARFAIT: [&str; 6] = ["ais", "ais", "ait", "ions", "iez", "aient"];

/// Terminaciones del passé simple
pub const PASSE_SIMPLE_ER: [&str; 6] = ["ai", "as", "a", "âmes", "âtes", "èrent"];
pub const PASSE_SIMPLE_IR: [&str; 6] = ["is", "is", "it", "îmes", "îtes", "irent"];
pub const PASSE_SIMPLE_RE: [&str; 6] = PASSE_SIMPLE_IR;

/// Terminaciones del futur (se añaden al infinitivo)
pub const FUTUR: [&str; 6] = ["ai", "as", "a", "ons", "ez", "ont"];

/// Terminaciones del conditionnel (se añaden al infinitivo)
pub const CONDITIONNEL: [&str; 6] = IMPARFAIT;

/// Terminaciones del subjonctif présent
pub const SUBJONCTIF_PRESENT: [&str; 6] = ["e", "es", "e", "ions", "iez", "ent"];

/// Terminaciones del subjonctif imparfait
pub const SUBJONCTIF_IMPARFAIT_ER: [&str; 6] =
    ["asse", "asses", "ât", "assions", "assiez", "assent"];
pub const SUBJONCTIF_IMPARFAIT_IR: [&str; 6] =
    ["isse", "isses", "ît", "issions", "issiez", "issent"];
pub const SUBJONCTIF_IMPARFAIT_RE: [&str; 6] = SUBJONCTIF_IMPARFAIT_IR;

/// Terminaciones del participio pasado
pub const PARTICIPE_ER: &str = "é";
pub const PARTICIPE_IR: &str = "i";
pub const PARTICIPE_RE: &str = "u";

/// Clases verbales regulares del francés
pub const CLASSES: [VerbClass; 3] = [VerbClass::Er, VerbClass::Ir, VerbClass::Re];

/// Regla de raíz de cada tiempo simple
pub fn stem_rule(tense: FrenchTense) -> Option<StemRule> {
    match tense {
        FrenchTense::Present | FrenchTense::PasseSimple | FrenchTense::SubjonctifImparfait => {
            Some(StemRule::DropClassSuffix)
        }
        FrenchTense::Futur | FrenchTense::Conditionnel => Some(StemRule::DropFinalEOfRe),
        // parlons → parl, finissons → finiss
        FrenchTense::Imparfait => Some(StemRule::Derived {
            person: Person::FirstPlural,
            strip: "ons",
        }),
        // parlent → parl, finissent → finiss
        FrenchTense::SubjonctifPresent => Some(StemRule::Derived {
            person: Person::ThirdPlural,
            strip: "ent",
        }),
        _ => None,
    }
}

/// Terminaciones de un tiempo simple para una clase verbal
pub fn endings(class: VerbClass, tense: FrenchTense) -> Option<[&'static str; 6]> {
    let endings = match (tense, class) {
        (FrenchTense::Present, VerbClass::Er) => PRESENT_ER,
        (FrenchTense::Present, VerbClass::Ir) => PRESENT_IR,
        (FrenchTense::Present, VerbClass::Re) => PRESENT_RE,
        (FrenchTense::Imparfait, _) => IMPARFAIT,
        (FrenchTense::PasseSimple, VerbClass::Er) => PASSE_SIMPLE_ER,
        (FrenchTense::PasseSimple, VerbClass::Ir) => PASSE_SIMPLE_IR,
        (FrenchTense::PasseSimple, VerbClass::Re) => PASSE_SIMPLE_RE,
        (FrenchTense::Futur, _) => FUTUR,
        (FrenchTense::Conditionnel, _) => CONDITIONNEL,
        (FrenchTense::SubjonctifPresent, _) => SUBJONCTIF_PRESENT,
        (FrenchTense::SubjonctifImparfait, VerbClass::Er) => SUBJONCTIF_IMPARFAIT_ER,
        (FrenchTense::SubjonctifImparfait, VerbClass::Ir) => SUBJONCTIF_IMPARFAIT_IR,
        (FrenchTense::SubjonctifImparfait, VerbClass::Re) => SUBJONCTIF_IMPARFAIT_RE,
        _ => return None,
    };
    Some(endings)
}

/// Obtiene la terminación del participio para una clase de verbo
pub fn get_participle_ending(class: VerbClass) -> Option<&'static str> {
    match class {
        VerbClass::Er => Some(PARTICIPE_ER),
        VerbClass::Ir => Some(PARTICIPE_IR),
        VerbClass::Re => Some(PARTICIPE_RE),
        VerbClass::Ar => None,
    }
}
