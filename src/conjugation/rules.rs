//! Tablas de reglas: raíz + terminaciones por (clase, tiempo)
//!
//! Cada idioma construye una `RuleTable` una sola vez (ver `OnceLock` en los
//! módulos de idioma) y la valida entera antes de usarla.

use std::collections::HashMap;

use super::{drop_last_chars, Tense, TenseKind, VerbClass, CLASS_SUFFIX_LEN};
use crate::category::{Person, PersonSlots};
use crate::error::ConjugationError;

/// Transformación del infinitivo en la raíz a la que se añaden las terminaciones
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StemRule {
    /// parler → parl, hablar → habl
    DropClassSuffix,
    /// hablar → hablar (futuro y condicional)
    Infinitive,
    /// vendre → vendr; el resto se queda igual (futur, conditionnel)
    DropFinalEOfRe,
    /// Raíz derivada de una forma del presente, quitándole un sufijo
    /// (finissons → finiss para el imparfait)
    Derived { person: Person, strip: &'static str },
}

impl StemRule {
    /// Aplica la regla. `present_form` devuelve la forma del presente de la
    /// persona pedida; solo se invoca para `Derived`.
    pub fn apply<F>(&self, infinitive: &str, present_form: F) -> Result<String, ConjugationError>
    where
        F: FnOnce(Person) -> Result<String, ConjugationError>,
    {
        match *self {
            StemRule::DropClassSuffix => Ok(drop_last_chars(infinitive, CLASS_SUFFIX_LEN).to_string()),
            StemRule::Infinitive => Ok(infinitive.to_string()),
            StemRule::DropFinalEOfRe => {
                if infinitive.ends_with("re") {
                    Ok(drop_last_chars(infinitive, 1).to_string())
                } else {
                    Ok(infinitive.to_string())
                }
            }
            StemRule::Derived { person, strip } => {
                let form = present_form(person)?;
                form.strip_suffix(strip)
                    .map(str::to_string)
                    .ok_or_else(|| ConjugationError::InvalidInfinitive(infinitive.to_string()))
            }
        }
    }
}

/// Regla de un tiempo simple para una clase verbal
#[derive(Debug, Clone)]
pub struct ConjugationRule<C> {
    pub stem: StemRule,
    pub endings: C,
}

/// Tabla completa de un idioma
pub struct RuleTable<T, C> {
    classes: &'static [VerbClass],
    rules: HashMap<(VerbClass, T), ConjugationRule<C>>,
    auxiliaries: HashMap<T, C>,
    participles: HashMap<VerbClass, &'static str>,
}

impl<T, C> RuleTable<T, C>
where
    T: Tense,
    C: PersonSlots<Item = &'static str>,
{
    pub fn new(classes: &'static [VerbClass]) -> Self {
        Self {
            classes,
            rules: HashMap::new(),
            auxiliaries: HashMap::new(),
            participles: HashMap::new(),
        }
    }

    pub fn insert_rule(&mut self, class: VerbClass, tense: T, rule: ConjugationRule<C>) {
        self.rules.insert((class, tense), rule);
    }

    pub fn insert_auxiliary(&mut self, tense: T, forms: C) {
        self.auxiliaries.insert(tense, forms);
    }

    pub fn insert_participle(&mut self, class: VerbClass, ending: &'static str) {
        self.participles.insert(class, ending);
    }

    /// Determina la clase verbal de un infinitivo ya normalizado
    pub fn classify(&self, infinitive: &str) -> Result<VerbClass, ConjugationError> {
        if infinitive.chars().count() <= CLASS_SUFFIX_LEN {
            return Err(ConjugationError::InvalidInfinitive(infinitive.to_string()));
        }
        VerbClass::from_infinitive(infinitive)
            .filter(|class| self.classes.contains(class))
            .ok_or_else(|| ConjugationError::UnknownVerbClass(infinitive.to_string()))
    }

    pub fn rule(&self, class: VerbClass, tense: T) -> Result<&ConjugationRule<C>, ConjugationError> {
        self.rules
            .get(&(class, tense))
            .ok_or_else(|| ConjugationError::UnknownTense(tense.name().to_string()))
    }

    pub fn auxiliary(&self, tense: T) -> Result<&C, ConjugationError> {
        self.auxiliaries
            .get(&tense)
            .ok_or_else(|| ConjugationError::UnknownTense(tense.name().to_string()))
    }

    /// Participio pasado regular: sustitución fija del sufijo de clase
    pub fn past_participle(&self, infinitive: &str) -> Result<String, ConjugationError> {
        if infinitive.chars().count() <= CLASS_SUFFIX_LEN {
            return Err(ConjugationError::InvalidInfinitive(infinitive.to_string()));
        }
        let ending = VerbClass::from_infinitive(infinitive)
            .and_then(|class| self.participles.get(&class))
            .ok_or_else(|| ConjugationError::InvalidInfinitive(infinitive.to_string()))?;

        let mut participle = drop_last_chars(infinitive, CLASS_SUFFIX_LEN).to_string();
        participle.push_str(ending);
        Ok(participle)
    }

    /// Comprueba que cada tiempo tenga exactamente lo que necesita para
    /// cada clase verbal. Se llama al arrancar.
    pub fn validate(&self) -> Result<(), ConjugationError> {
        for &class in self.classes {
            let missing = |tense: T| ConjugationError::MissingRule {
                class: class.infinitive_ending(),
                tense: tense.name(),
            };

            if !self.participles.contains_key(&class) {
                return Err(missing(T::PRESENT));
            }

            for &tense in T::ALL {
                match tense.kind() {
                    TenseKind::Simple | TenseKind::SimpleSubjunctive => {
                        let rule = self.rules.get(&(class, tense)).ok_or_else(|| missing(tense))?;
                        if tense == T::PRESENT && matches!(rule.stem, StemRule::Derived { .. }) {
                            return Err(missing(tense));
                        }
                    }
                    TenseKind::Compound | TenseKind::CompoundSubjunctive => {
                        if self.rules.contains_key(&(class, tense)) {
                            return Err(missing(tense));
                        }
                        let aux_tense = tense.auxiliary_tense().ok_or_else(|| missing(tense))?;
                        if matches!(
                            aux_tense.kind(),
                            TenseKind::Compound | TenseKind::CompoundSubjunctive
                        ) || !self.auxiliaries.contains_key(&aux_tense)
                        {
                            return Err(missing(tense));
                        }
                    }
                }
            }
        }
        Ok(())
    }
}
