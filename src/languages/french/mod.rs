//! Conjugación de verbos regulares franceses (-er, -ir, -re)

pub mod auxiliary;
pub mod pronouns;
pub mod regular;

use std::sync::OnceLock;

use crate::category::Category;
use crate::conjugation::{self, ConjugationRule, Form, RuleTable, Tense, TenseKind};
use crate::error::ConjugationError;
use crate::languages::Language;
use crate::output;

pub use pronouns::{elide, FrenchPronouns};

/// Tiempos verbales franceses, en el orden del menú
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrenchTense {
    Present,
    Imparfait,
    PasseSimple,
    Futur,
    Conditionnel,
    SubjonctifPresent,
    SubjonctifImparfait,
    PasseCompose,
    PlusQueParfait,
    PasseAnterieur,
    FuturAnterieur,
    PasseDuConditionnel,
    SubjonctifPasse,
    SubjonctifPlusQueParfait,
}

impl Tense for FrenchTense {
    const ALL: &'static [Self] = &[
        FrenchTense::Present,
        FrenchTense::Imparfait,
        FrenchTense::PasseSimple,
        FrenchTense::Futur,
        FrenchTense::Conditionnel,
        FrenchTense::SubjonctifPresent,
        FrenchTense::SubjonctifImparfait,
        FrenchTense::PasseCompose,
        FrenchTense::PlusQueParfait,
        FrenchTense::PasseAnterieur,
        FrenchTense::FuturAnterieur,
        FrenchTense::PasseDuConditionnel,
        FrenchTense::SubjonctifPasse,
        FrenchTense::SubjonctifPlusQueParfait,
    ];

    const PRESENT: Self = FrenchTense::Present;

    fn name(self) -> &'static str {
        match self {
            FrenchTense::Present => "présent",
            FrenchTense::Imparfait => "imparfait",
            FrenchTense::PasseSimple => "passé simple",
            FrenchTense::Futur => "futur",
            FrenchTense::Conditionnel => "conditionnel",
            FrenchTense::SubjonctifPresent => "subjonctif présent",
            FrenchTense::SubjonctifImparfait => "subjonctif imparfait",
            FrenchTense::PasseCompose => "passé composé",
            FrenchTense::PlusQueParfait => "plus-que-parfait",
            FrenchTense::PasseAnterieur => "passé antérieur",
            FrenchTense::FuturAnterieur => "futur antérieur",
            FrenchTense::PasseDuConditionnel => "passé du conditionnel",
            FrenchTense::SubjonctifPasse => "subjonctif passé",
            FrenchTense::SubjonctifPlusQueParfait => "subjonctif plus-que-parfait",
        }
    }

    fn kind(self) -> TenseKind {
        match self {
            FrenchTense::Present
            | FrenchTense::Imparfait
            | FrenchTense::PasseSimple
            | FrenchTense::Futur
            | FrenchTense::Conditionnel => TenseKind::Simple,
            FrenchTense::SubjonctifPresent | FrenchTense::SubjonctifImparfait => {
                TenseKind::SimpleSubjunctive
            }
            FrenchTense::PasseCompose
            | FrenchTense::PlusQueParfait
            | FrenchTense::PasseAnterieur
            | FrenchTense::FuturAnterieur
            | FrenchTense::PasseDuConditionnel => TenseKind::Compound,
            FrenchTense::SubjonctifPasse | FrenchTense::SubjonctifPlusQueParfait => {
                TenseKind::CompoundSubjunctive
            }
        }
    }

    fn auxiliary_tense(self) -> Option<Self> {
        match self {
            FrenchTense::PasseCompose => Some(FrenchTense::Present),
            FrenchTense::PlusQueParfait => Some(FrenchTense::Imparfait),
            FrenchTense::PasseAnterieur => Some(FrenchTense::PasseSimple),
            FrenchTense::FuturAnterieur => Some(FrenchTense::Futur),
            FrenchTense::PasseDuConditionnel => Some(FrenchTense::Conditionnel),
            FrenchTense::SubjonctifPasse => Some(FrenchTense::SubjonctifPresent),
            FrenchTense::SubjonctifPlusQueParfait => Some(FrenchTense::SubjonctifImparfait),
            _ => None,
        }
    }
}

pub type FrenchRuleTable = RuleTable<FrenchTense, Category<&'static str>>;

fn build_rule_table() -> FrenchRuleTable {
    let mut table = RuleTable::new(&regular::CLASSES);

    for &tense in FrenchTense::ALL {
        if let Some(forms) = auxiliary::avoir(tense) {
            table.insert_auxiliary(tense, Category::from(forms));
        }
        let Some(stem) = regular::stem_rule(tense) else {
            continue;
        };
        for class in regular::CLASSES {
            if let Some(endings) = regular::endings(class, tense) {
                let endings = Category::from(endings);
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

/// Tabla de reglas del francés, construida una sola vez
pub fn rule_table() -> &'static FrenchRuleTable {
    static FRENCH_RULES: OnceLock<FrenchRuleTable> = OnceLock::new();
    FRENCH_RULES.get_or_init(build_rule_table)
}

/// Raíz + terminación de cada persona ("parler", "présent" → parle, parles...)
pub fn construct_stem_and_ending(
    infinitive: &str,
    tense: &str,
) -> Result<Category<String>, ConjugationError> {
    let tense = FrenchTense::from_name(tense)?;
    conjugation::stem_and_ending(rule_table(), infinitive, tense)
}

/// Inflexión completa con pronombres, conjunción y auxiliar
pub fn construct_inflection(
    infinitive: &str,
    tense: &str,
) -> Result<Category<Form>, ConjugationError> {
    let tense = FrenchTense::from_name(tense)?;
    inflect(infinitive, tense)
}

pub fn inflect(infinitive: &str, tense: FrenchTense) -> Result<Category<Form>, ConjugationError> {
    conjugation::inflect(rule_table(), &FrenchPronouns, infinitive, tense)
}

/// Participio pasado regular: parler → parlé, finir → fini, vendre → vendu
pub fn past_participle(infinitive: &str) -> Result<String, ConjugationError> {
    rule_table().past_participle(&conjugation::normalize_infinitive(infinitive))
}

/// El francés como idioma del entrenador
pub struct French;

impl French {
    pub fn new() -> Self {
        Self
    }

    fn resolve(
        &self,
        infinitive: &str,
        tense: &str,
    ) -> Result<(String, FrenchTense, Category<Form>), ConjugationError> {
        let tense = FrenchTense::from_name(tense)?;
        let inflection = inflect(infinitive, tense)?;
        Ok((conjugation::normalize_infinitive(infinitive), tense, inflection))
    }
}

impl Default for French {
    fn default() -> Self {
        Self::new()
    }
}

impl Language for French {
    fn code(&self) -> &str {
        "fr"
    }

    fn name(&self) -> &str {
        "français"
    }

    fn farewell(&self) -> &str {
        "Au revoir!"
    }

    fn tenses(&self) -> Vec<&'static str> {
        FrenchTense::names()
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
