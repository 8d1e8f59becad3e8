//! Conjugación del auxiliar "avoir" para los tiempos compuestos
//!
//! Solo se usa "avoir": los verbos que se construyen con "être" (movimiento,
//! pronominales) quedan fuera.

use super::FrenchTense;

pub const AVOIR_PRESENT: [&str; 6] = ["ai", "as", "a", "avons", "avez", "ont"];
pub const AVOIR_IMPARFAIT: [&str; 6] = ["avais", "avais", "avait", "avions", "aviez", "avaient"];
pub const AVOIR_PASSE_SIMPLE: [&str; 6] = ["eus", "eus", "eut", "eûmes", "eûtes", "eurent"];
pub const AVOIR_FUTUR: [&str; 6] = ["aurai", "auras", "aura", "aurons", "aurez", "auront"];
pub const AVOIR_CONDITIONNEL: [&str; 6] =
    ["aurais", "aurais", "aurait", "aurions", "auriez", "auraient"];
pub const AVOIR_SUBJONCTIF_PRESENT: [&str; 6] = ["aie", "aies", "ait", "ayons", "ayez", "aient"];
pub const AVOIR_SUBJONCTIF_IMPARFAIT: [&str; 6] =
    ["eusse", "eusses", "eût", "eussions", "eussiez", "eussent"];

/// Formas de "avoir" en un tiempo simple
pub fn avoir(tense: FrenchTense) -> Option<[&'static str; 6]> {
    match tense {
        FrenchTense::Present => Some(AVOIR_PRESENT),
        FrenchTense::Imparfait => Some(AVOIR_IMPARFAIT),
        FrenchTense::PasseSimple => Some(AVOIR_PASSE_SIMPLE),
        FrenchTense::Futur => Some(AVOIR_FUTUR),
        FrenchTense::Conditionnel => Some(AVOIR_CONDITIONNEL),
        FrenchTense::SubjonctifPresent => Some(AVOIR_SUBJONCTIF_PRESENT),
        FrenchTense::SubjonctifImparfait => Some(AVOIR_SUBJONCTIF_IMPARFAIT),
        _ => None,
    }
}
