//! Motor de conjugación compartido por todos los idiomas
//!
//! Cada idioma aporta sus tablas (`RuleTable`) y sus reglas de pronombres
//! (`PronounRules`); aquí se combinan raíz, terminación, pronombre y auxiliar.

pub mod rules;

use std::fmt::Debug;
use std::hash::Hash;

use serde::Serialize;
use tracing::{debug, trace};

use crate::category::{Person, PersonSlots};
use crate::error::ConjugationError;

pub use rules::{ConjugationRule, RuleTable, StemRule};

/// Longitud (en caracteres) del sufijo que identifica la clase verbal
pub const CLASS_SUFFIX_LEN: usize = 2;

/// Clase de verbo según su terminación
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerbClass {
    Ar,
    Er,
    Ir,
    Re,
}

impl VerbClass {
    /// Determina la clase de verbo a partir del infinitivo
    pub fn from_infinitive(infinitive: &str) -> Option<Self> {
        let lower = infinitive.to_lowercase();
        if lower.ends_with("ar") {
            Some(VerbClass::Ar)
        } else if lower.ends_with("er") {
            Some(VerbClass::Er)
        } else if lower.ends_with("ir") {
            Some(VerbClass::Ir)
        } else if lower.ends_with("re") {
            Some(VerbClass::Re)
        } else {
            None
        }
    }

    /// Obtiene la terminación del infinitivo
    pub fn infinitive_ending(&self) -> &'static str {
        match self {
            VerbClass::Ar => "ar",
            VerbClass::Er => "er",
            VerbClass::Ir => "ir",
            VerbClass::Re => "re",
        }
    }
}

/// Familia de tiempo: decide la forma de cada casilla de la inflexión
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TenseKind {
    Simple,
    SimpleSubjunctive,
    Compound,
    CompoundSubjunctive,
}

impl TenseKind {
    pub fn is_compound(self) -> bool {
        matches!(self, TenseKind::Compound | TenseKind::CompoundSubjunctive)
    }

    pub fn is_subjunctive(self) -> bool {
        matches!(self, TenseKind::SimpleSubjunctive | TenseKind::CompoundSubjunctive)
    }
}

/// Tiempo verbal de un idioma concreto
pub trait Tense: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// Todos los tiempos, en el orden del menú
    const ALL: &'static [Self];

    /// Presente de indicativo: base de las raíces derivadas
    const PRESENT: Self;

    /// Nombre del tiempo tal como lo ve el usuario
    fn name(self) -> &'static str;

    fn kind(self) -> TenseKind;

    /// Tiempo simple en que se conjuga el auxiliar (solo tiempos compuestos)
    fn auxiliary_tense(self) -> Option<Self>;

    /// Busca un tiempo por nombre, sin distinguir mayúsculas
    fn from_name(name: &str) -> Result<Self, ConjugationError> {
        let wanted = name.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|tense| tense.name() == wanted)
            .ok_or_else(|| ConjugationError::UnknownTense(name.trim().to_string()))
    }

    fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|tense| tense.name()).collect()
    }
}

/// Selección de pronombres y conjunción de un idioma
pub trait PronounRules {
    /// Pronombre sujeto para `person`, según la palabra que le sigue
    fn pronoun(&self, person: Person, next: &str) -> Result<&'static str, ConjugationError>;

    /// Conjunción del subjuntivo, según la palabra que le sigue
    fn conjunction(&self, next: &str) -> Result<&'static str, ConjugationError>;
}

/// Contenido de una casilla de la inflexión
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Form {
    Simple {
        pronoun: &'static str,
        verb: String,
    },
    SubjunctiveSimple {
        conjunction: &'static str,
        pronoun: &'static str,
        verb: String,
    },
    Compound {
        pronoun: &'static str,
        auxiliary: &'static str,
        participle: String,
    },
    SubjunctiveCompound {
        conjunction: &'static str,
        pronoun: &'static str,
        auxiliary: &'static str,
        participle: String,
    },
}

impl Form {
    /// Palabras de la casilla en orden de lectura
    pub fn words(&self) -> Vec<&str> {
        match self {
            Form::Simple { pronoun, verb } => vec![*pronoun, verb.as_str()],
            Form::SubjunctiveSimple {
                conjunction,
                pronoun,
                verb,
            } => vec![*conjunction, *pronoun, verb.as_str()],
            Form::Compound {
                pronoun,
                auxiliary,
                participle,
            } => vec![*pronoun, *auxiliary, participle.as_str()],
            Form::SubjunctiveCompound {
                conjunction,
                pronoun,
                auxiliary,
                participle,
            } => vec![*conjunction, *pronoun, *auxiliary, participle.as_str()],
        }
    }

    /// Conjunción + pronombre ("que je", "qu'il/elle/on", "yo")
    pub fn subject(&self) -> String {
        match self {
            Form::Simple { pronoun, .. } | Form::Compound { pronoun, .. } => pronoun.to_string(),
            Form::SubjunctiveSimple {
                conjunction,
                pronoun,
                ..
            }
            | Form::SubjunctiveCompound {
                conjunction,
                pronoun,
                ..
            } => join_words(&[*conjunction, *pronoun]),
        }
    }

    /// Forma verbal sin sujeto ("parle", "ai parlé")
    pub fn predicate(&self) -> String {
        match self {
            Form::Simple { verb, .. } | Form::SubjunctiveSimple { verb, .. } => verb.clone(),
            Form::Compound {
                auxiliary,
                participle,
                ..
            }
            | Form::SubjunctiveCompound {
                auxiliary,
                participle,
                ..
            } => join_words(&[*auxiliary, participle.as_str()]),
        }
    }

    /// La casilla completa como texto ("j'abandonne", "que tu parles")
    pub fn render(&self) -> String {
        join_words(&self.words())
    }
}

/// Une palabras con espacios, salvo tras una palabra elidida ("j'", "qu'")
pub fn join_words(words: &[&str]) -> String {
    let mut result = String::new();
    for word in words {
        if !result.is_empty() && !is_elided(&result) {
            result.push(' ');
        }
        result.push_str(word);
    }
    result
}

/// ¿Termina la palabra en apóstrofo?
pub fn is_elided(word: &str) -> bool {
    word.ends_with('\'') || word.ends_with('\u{2019}')
}

/// Quita los `n` últimos caracteres (no bytes) de una palabra
pub(crate) fn drop_last_chars(word: &str, n: usize) -> &str {
    if n == 0 {
        return word;
    }
    word.char_indices()
        .rev()
        .nth(n - 1)
        .map_or("", |(idx, _)| &word[..idx])
}

/// Normaliza el infinitivo tal como llega del usuario
pub fn normalize_infinitive(infinitive: &str) -> String {
    infinitive.trim().to_lowercase()
}

/// Raíz + terminación para cada persona, en orden canónico
pub fn conjugated_forms<T, C>(
    table: &RuleTable<T, C>,
    infinitive: &str,
    tense: T,
) -> Result<Vec<(Person, String)>, ConjugationError>
where
    T: Tense,
    C: PersonSlots<Item = &'static str>,
{
    let infinitive = normalize_infinitive(infinitive);
    let class = table.classify(&infinitive)?;
    let rule = table.rule(class, tense)?;

    let stem = rule.stem.apply(&infinitive, |person| {
        conjugated_forms(table, &infinitive, T::PRESENT)?
            .into_iter()
            .find(|(p, _)| *p == person)
            .map(|(_, form)| form)
            .ok_or_else(|| ConjugationError::UnknownTense(T::PRESENT.name().to_string()))
    })?;
    trace!(infinitive = %infinitive, tense = tense.name(), stem = %stem, "raíz calculada");

    Ok(rule
        .endings
        .entries()
        .into_iter()
        .map(|(person, ending)| (person, format!("{stem}{ending}")))
        .collect())
}

/// Raíz + terminación empaquetadas en la categoría del idioma
pub fn stem_and_ending<T, C, O>(
    table: &RuleTable<T, C>,
    infinitive: &str,
    tense: T,
) -> Result<O, ConjugationError>
where
    T: Tense,
    C: PersonSlots<Item = &'static str>,
    O: PersonSlots<Item = String>,
{
    let forms = conjugated_forms(table, infinitive, tense)?;
    O::from_values(forms.into_iter().map(|(_, form)| form).collect())
}

/// Inflexión completa: pronombres, conjunción y auxiliar según el tiempo
pub fn inflect<T, C, O, P>(
    table: &RuleTable<T, C>,
    pronouns: &P,
    infinitive: &str,
    tense: T,
) -> Result<O, ConjugationError>
where
    T: Tense,
    C: PersonSlots<Item = &'static str>,
    O: PersonSlots<Item = Form>,
    P: PronounRules,
{
    let kind = tense.kind();
    debug!(infinitive, tense = tense.name(), ?kind, "conjugando");

    let forms = match kind {
        TenseKind::Simple | TenseKind::SimpleSubjunctive => {
            conjugated_forms(table, infinitive, tense)?
                .into_iter()
                .map(|(person, verb)| -> Result<Form, ConjugationError> {
                    let pronoun = pronouns.pronoun(person, &verb)?;
                    if kind == TenseKind::Simple {
                        return Ok(Form::Simple { pronoun, verb });
                    }
                    Ok(Form::SubjunctiveSimple {
                        conjunction: pronouns.conjunction(pronoun)?,
                        pronoun,
                        verb,
                    })
                })
                .collect::<Result<Vec<_>, ConjugationError>>()?
        }
        TenseKind::Compound | TenseKind::CompoundSubjunctive => {
            let aux_tense = tense
                .auxiliary_tense()
                .ok_or_else(|| ConjugationError::UnknownTense(tense.name().to_string()))?;
            let auxiliaries = table.auxiliary(aux_tense)?;
            let participle = table.past_participle(&normalize_infinitive(infinitive))?;

            auxiliaries
                .entries()
                .into_iter()
                .map(|(person, &auxiliary)| -> Result<Form, ConjugationError> {
                    let pronoun = pronouns.pronoun(person, auxiliary)?;
                    let participle = participle.clone();
                    if kind == TenseKind::Compound {
                        return Ok(Form::Compound {
                            pronoun,
                            auxiliary,
                            participle,
                        });
                    }
                    Ok(Form::SubjunctiveCompound {
                        conjunction: pronouns.conjunction(pronoun)?,
                        pronoun,
                        auxiliary,
                        participle,
                    })
                })
                .collect::<Result<Vec<_>, ConjugationError>>()?
        }
    };

    O::from_values(forms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verb_class_from_infinitive() {
        assert_eq!(VerbClass::from_infinitive("hablar"), Some(VerbClass::Ar));
        assert_eq!(VerbClass::from_infinitive("PARLER"), Some(VerbClass::Er));
        assert_eq!(VerbClass::from_infinitive("finir"), Some(VerbClass::Ir));
        assert_eq!(VerbClass::from_infinitive("vendre"), Some(VerbClass::Re));
        assert_eq!(VerbClass::from_infinitive("casa"), None);
    }

    #[test]
    fn test_drop_last_chars_counts_characters() {
        assert_eq!(drop_last_chars("parler", 2), "parl");
        assert_eq!(drop_last_chars("freír", 2), "fre");
        assert_eq!(drop_last_chars("ir", 2), "");
        assert_eq!(drop_last_chars("r", 2), "");
        assert_eq!(drop_last_chars("vendre", 0), "vendre");
    }

    #[test]
    fn test_join_words_elision() {
        assert_eq!(join_words(&["j'", "abandonne"]), "j'abandonne");
        assert_eq!(join_words(&["je", "parle"]), "je parle");
        assert_eq!(join_words(&["qu'", "il/elle/on", "parle"]), "qu'il/elle/on parle");
        assert_eq!(join_words(&["que", "j'", "aie", "parlé"]), "que j'aie parlé");
    }

    #[test]
    fn test_form_parts() {
        let form = Form::SubjunctiveCompound {
            conjunction: "que",
            pronoun: "j'",
            auxiliary: "aie",
            participle: "parlé".to_string(),
        };
        assert_eq!(form.subject(), "que j'");
        assert_eq!(form.predicate(), "aie parlé");
        assert_eq!(form.render(), "que j'aie parlé");
        assert_eq!(form.words().len(), 4);
    }
}
