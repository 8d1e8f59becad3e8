//! Pronombres sujeto franceses y elisión
//!
//! "je" → "j'" y "que" → "qu'" delante de vocal. La "h" muda no se trata:
//! "habiter" da "je habite".

use crate::category::Person;
use crate::conjugation::PronounRules;
use crate::error::ConjugationError;

const VOWELS: &[char] = &[
    'a', 'e', 'i', 'o', 'u', 'à', 'â', 'é', 'è', 'ê', 'ë', 'î', 'ï', 'ô', 'û', 'ù',
];

/// ¿Empieza la palabra por vocal?
pub fn starts_with_vowel(word: &str) -> bool {
    word.chars()
        .next()
        .is_some_and(|c| VOWELS.contains(&c.to_lowercase().next().unwrap_or(c)))
}

/// Aplica la elisión a "je" o "que" según la palabra siguiente.
///
/// Cualquier otra palabra es un error: la elisión del francés no es general
/// ("le", "la", "si"... tienen sus propias reglas y no se usan aquí).
pub fn elide(word: &str, next: &str) -> Result<&'static str, ConjugationError> {
    let elided = starts_with_vowel(next);
    match word {
        "je" => Ok(if elided { "j'" } else { "je" }),
        "que" => Ok(if elided { "qu'" } else { "que" }),
        _ => Err(ConjugationError::ElisionMisuse(word.to_string())),
    }
}

/// Pronombre sin elisión de cada persona
pub fn base_pronoun(person: Person) -> Option<&'static str> {
    match person {
        Person::FirstSingular => Some("je"),
        Person::SecondSingular => Some("tu"),
        Person::ThirdSingular => Some("il/elle/on"),
        Person::FirstPlural => Some("nous"),
        Person::SecondPlural => Some("vous"),
        Person::ThirdPlural => Some("ils/elles"),
        Person::SecondSingularRegional => None,
    }
}

/// Reglas de pronombres del francés
pub struct FrenchPronouns;

impl PronounRules for FrenchPronouns {
    fn pronoun(&self, person: Person, next: &str) -> Result<&'static str, ConjugationError> {
        let pronoun = base_pronoun(person).ok_or(ConjugationError::UnsupportedPerson(person))?;
        if person == Person::FirstSingular {
            return elide(pronoun, next);
        }
        Ok(pronoun)
    }

    fn conjunction(&self, next: &str) -> Result<&'static str, ConjugationError> {
        elide("que", next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elide_je() {
        assert_eq!(elide("je", "abandonne").unwrap(), "j'");
        assert_eq!(elide("je", "parle").unwrap(), "je");
        assert_eq!(elide("je", "écoute").unwrap(), "j'");
        assert_eq!(elide("je", "ai").unwrap(), "j'");
    }

    #[test]
    fn test_elide_que() {
        assert_eq!(elide("que", "il/elle/on").unwrap(), "qu'");
        assert_eq!(elide("que", "ils/elles").unwrap(), "qu'");
        assert_eq!(elide("que", "j'").unwrap(), "que");
        assert_eq!(elide("que", "nous").unwrap(), "que");
    }

    #[test]
    fn test_elide_other_words_is_an_error() {
        assert_eq!(
            elide("le", "arbre").unwrap_err(),
            ConjugationError::ElisionMisuse("le".to_string())
        );
        assert!(elide("tu", "aimes").is_err());
    }

    #[test]
    fn test_elided_forms_are_not_elided_again() {
        assert_eq!(
            elide("j'", "parle").unwrap_err(),
            ConjugationError::ElisionMisuse("j'".to_string())
        );
        assert_eq!(
            elide("qu'", "il/elle/on").unwrap_err(),
            ConjugationError::ElisionMisuse("qu'".to_string())
        );
    }

    #[test]
    fn test_voseo_has_no_french_pronoun() {
        assert_eq!(
            FrenchPronouns.pronoun(Person::SecondSingularRegional, "parles"),
            Err(ConjugationError::UnsupportedPerson(Person::SecondSingularRegional))
        );
    }

    #[test]
    fn test_h_is_not_elided() {
        assert_eq!(elide("je", "habite").unwrap(), "je");
    }

    #[test]
    fn test_only_first_person_elides() {
        let rules = FrenchPronouns;
        assert_eq!(rules.pronoun(Person::FirstSingular, "aime").unwrap(), "j'");
        assert_eq!(rules.pronoun(Person::SecondSingular, "aimes").unwrap(), "tu");
        assert!(rules.pronoun(Person::SecondSingularRegional, "aimes").is_err());
    }
}
