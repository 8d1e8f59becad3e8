//! Conjugación de verbos regulares españoles (-ar, -er, -ir)
//!
//! Incluye el voseo como séptima persona. El español no tiene elisión:
//! la conjunción del subjuntivo es siempre "que".

pub mod auxiliary;
pub mod regular;

use std::sync::OnceLock;

use crate::category::{Person, SpanishCategory};
use crate::conjugation::{self, ConjugationRule, Form, PronounRules, RuleTable, Tense, TenseKind};
use crate::error::ConjugationError;
use crate::languages::Language;
use crate::output;

/// Tiempos verbales españoles, en el orden del menú
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanishTense {
    Presente,
    PreteritoImperfecto,
    PreteritoIndefinido,
    FuturoSimple,
    PreteritoPerfecto,
    PreteritoPluscuamperfecto,
    PreteritoAnterior,
    FuturoPerfecto,
    CondicionalSimple,
    CondicionalCompuesto,
    PresenteSubjuntivo,
    ImperfectoSubjuntivo,
    PerfectoSubjuntivo,
    PluscuamperfectoSubjuntivo,
}

impl Tense for SpanishTense {
    const ALL: &'static [Self] = &[
        SpanishTense::Presente,
        SpanishTense::PreteritoImperfecto,
        SpanishTense::PreteritoIndefinido,
        SpanishTense::FuturoSimple,
        SpanishTense::PreteritoPerfecto,
        SpanishTense::PreteritoPluscuamperfecto,
        SpanishTense::PreteritoAnterior,
        SpanishTense::FuturoPerfecto,
        SpanishTense::CondicionalSimple,
        SpanishTense::CondicionalCompuesto,
        SpanishTense::PresenteSubjuntivo,
        SpanishTense::ImperfectoSubjuntivo,
        SpanishTense::PerfectoSubjuntivo,
        SpanishTense::PluscuamperfectoSubjuntivo,
    ];

    const PRESENT: Self = SpanishTense::Presente;

    fn name(self) -> &'static str {
        match self {
            SpanishTense::Presente => "presente",
            SpanishTense::PreteritoImperfecto => "pretérito imperfecto",
            SpanishTense::PreteritoIndefinido => "pretérito indefinido",
            SpanishTense::FuturoSimple => "futuro simple",
            SpanishTense::PreteritoPerfecto => "pretérito perfecto",
            SpanishTense::PreteritoPluscuamperfecto => "pretérito pluscuamperfecto",
            SpanishTense::PreteritoAnterior => "pretérito anterior",
            SpanishTense::FuturoPerfecto => "futuro perfecto",
            SpanishTense::CondicionalSimple => "condicional simple",
            SpanishTense::CondicionalCompuesto => "condicional compuesto",
            SpanishTense::PresenteSubjuntivo => "presente de subjuntivo",
            SpanishTense::ImperfectoSubjuntivo => "pretérito imperfecto de subjuntivo",
            SpanishTense::PerfectoSubjuntivo => "pretérito perfecto de subjuntivo",
            SpanishTense::PluscuamperfectoSubjuntivo => "pretérito pluscuamperfecto de subjuntivo",
        }
    }

    fn kind(self) -> TenseKind {
        match self {
            SpanishTense::Presente
            | SpanishTense::PreteritoImperfecto
            | SpanishTense::PreteritoIndefinido
            | SpanishTense::FuturoSimple
            | SpanishTense::CondicionalSimple => TenseKind::Simple,
            SpanishTense::PresenteSubjuntivo | SpanishTense::ImperfectoSubjuntivo => {
                TenseKind::SimpleSubjunctive
            }
            SpanishTense::PreteritoPerfecto
            | SpanishTense::PreteritoPluscuamperfecto
            | SpanishTense::PreteritoAnterior
            | SpanishTense::FuturoPerfecto
            | SpanishTense::CondicionalCompuesto => TenseKind::Compound,
            SpanishTense::PerfectoSubjuntivo | SpanishTense::PluscuamperfectoSubjuntivo => {
                TenseKind::CompoundSubjunctive
            }
        }
    }

    fn auxiliary_tense(self) -> Option<Self> {
        match self {
            SpanishTense::PreteritoPerfecto => Some(SpanishTense::Presente),
            SpanishTense::PreteritoPluscuamperfecto => Some(SpanishTense::PreteritoImperfecto),
            SpanishTense::PreteritoAnterior => Some(SpanishTense::PreteritoIndefinido),
            SpanishTense::FuturoPerfecto => Some(SpanishTense::FuturoSimple),
            SpanishTense::CondicionalCompuesto => Some(SpanishTense::CondicionalSimple),
            SpanishTense::PerfectoSubjuntivo => Some(SpanishTense::PresenteSubjuntivo),
            SpanishTense::PluscuamperfectoSubjuntivo => Some(SpanishTense::ImperfectoSubjuntivo),
            _ => None,
        }
    }
}

/// Pronombres sujeto de cada persona
pub fn pronoun(person: Person) -> &'static str {
    match person {
        Person::FirstSingular => "yo",
        Person::SecondSingular => "tú",
        Person::SecondSingularRegional => "vos",
        Person::ThirdSingular => "él/ella/usted",
        Person::FirstPlural => "nosotros/nosotras",
        Person::SecondPlural => "vosotros/vosotras",
        Person::ThirdPlural => "ellos/ellas/ustedes",
    }
}

/// Reglas de pronombres del español: sin elisión
pub struct SpanishPronouns;

impl PronounRules for SpanishPronouns {
    fn pronoun(&self, person: Person, _next: &str) -> Result<&'static str, ConjugationError> {
        Ok(pronoun(person))
    }

    fn conjunction(&self, _next: &str) -> Result<&'static str, ConjugationError> {
        Ok("que")
    }
}

pub type SpanishRuleTable = RuleTable<SpanishTense, SpanishCategory<&'static str>>;

fn build_rule_table() -> SpanishRuleTable {
    let mut table = RuleTable::new(&regular::CLASSES);

    for &tense in SpanishTense::ALL {
        if let Some(forms) = auxiliary::haber(tense) {
            table.insert_auxiliary(tense, SpanishCategory::from(forms));
        }
        let Some(stem) = regular::stem_rule(tense) else {
            continue;
        };
        for class in regular::CLASSES {
            if let Some(endings) = regular::endings(class, tense) {
                let endings = SpanishCategory::from(endings);
                table.insert_rule(class, tense, ConjugationRule { stem, endings });
            }
        }
    }

    for class in regular::CLASSES {
        if let Some(ending) = regular::get_participle_ending(class) {
            table.insert_participle(class, ending);
        }
    }

    table
}

/// Tabla de reglas del español, construida una sola vez
pub fn rule_table() -> &'static SpanishRuleTable {
    static SPANISH_RULES: OnceLock<SpanishRuleTable> = OnceLock::new();
    SPANISH_RULES.get_or_init(build_rule_table)
}

/// Raíz + terminación de cada persona ("hablar", "presente" → hablo, hablas...)
pub fn construct_stem_and_ending(
    infinitive: &str,
    tense: &str,
) -> Result<SpanishCategory<String>, ConjugationError> {
    let tense = SpanishTense::from_name(tense)?;
    conjugation::stem_and_ending(rule_table(), infinitive, tense)
}

/// Inflexión completa con pronombres, conjunción y auxiliar
pub fn construct_inflection(
    infinitive: &str,
    tense: &str,
) -> Result<SpanishCategory<Form>, ConjugationError> {
    let tense = SpanishTense::from_name(tense)?;
    inflect(infinitive, tense)
}

pub fn inflect(
    infinitive: &str,
    tense: SpanishTense,
) -> Result<SpanishCategory<Form>, ConjugationError> {
    conjugation::inflect(rule_table(), &SpanishPronouns, infinitive, tense)
}

/// Participio pasado regular: hablar → hablado, vender → vendido
pub fn past_participle(infinitive: &str) -> Result<String, ConjugationError> {
    rule_table().past_participle(&conjugation::normalize_infinitive(infinitive))
}

/// El español como idioma del entrenador
pub struct Spanish;

impl Spanish {
    pub fn new() -> Self {
        Self
    }

    fn resolve(
        &self,
        infinitive: &str,
        tense: &str,
    ) -> Result<(String, SpanishTense, SpanishCategory<Form>), ConjugationError> {
        let tense = SpanishTense::from_name(tense)?;
        let inflection = inflect(infinitive, tense)?;
        Ok((conjugation::normalize_infinitive(infinitive), tense, inflection))
    }
}

impl Default for Spanish {
    fn default() -> Self {
        Self::new()
    }
}

impl Language for Spanish {
    fn code(&self) -> &str {
        "es"
    }

    fn name(&self) -> &str {
        "castellano"
    }

    fn farewell(&self) -> &str {
        "Adiós"
    }

    fn tenses(&self) -> Vec<&'static str> {
        SpanishTense::names()
    }

    fn validate(&self) -> Result<(), ConjugationError> {
        rule_table().validate()
    }

    fn display(&self, infinitive: &str, tense: &str) -> crate::Result<Vec<String>> {
        let (infinitive, tense, inflection) = self.resolve(infinitive, tense)?;
        Ok(output::display_view(&infinitive, tense.name(), &inflection))
    }

    fn cloze(&self, infinitive: &str, tense: &str) -> crate::Result<Vec<String>> {
        let (infinitive, tense, inflection) = self.resolve(infinitive, tense)?;
        Ok(output::cloze_view(&infinitive, tense.name(), &inflection))
    }

    fn cloze_export(
        &self,
        infinitive: &str,
        tense: &str,
        translations: &[String],
        sounds: &[String],
    ) -> crate::Result<Vec<String>> {
        let (infinitive, tense, inflection) = self.resolve(infinitive, tense)?;
        Ok(output::cloze_export_view(
            &infinitive,
            tense.name(),
            &inflection,
            translations,
            sounds,
        ))
    }

    fn json(&self, infinitive: &str, tense: &str) -> crate::Result<String> {
        let (infinitive, tense, inflection) = self.resolve(infinitive, tense)?;
        Ok(output::json_view(&infinitive, tense.name(), tense.kind(), &inflection)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_table_is_complete() {
        assert_eq!(rule_table().validate(), Ok(()));
    }

    #[test]
    fn test_menu_starts_with_indicative_tenses() {
        assert_eq!(
            &SpanishTense::names()[..5],
            &[
                "presente",
                "pretérito imperfecto",
                "pretérito indefinido",
                "futuro simple",
                "pretérito perfecto",
            ]
        );
    }

    #[test]
    fn test_que_is_never_elided() {
        let rules = SpanishPronouns;
        assert_eq!(rules.conjunction("él/ella/usted").unwrap(), "que");
        assert_eq!(rules.pronoun(Person::SecondSingularRegional, "hablás").unwrap(), "vos");
    }
}
