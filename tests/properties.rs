//! Propiedades del motor con entradas generadas.
//!
//! Ejecutar solo estos tests:  cargo test --test properties

use proptest::prelude::*;
use verbtrainer::languages::{french, spanish};
use verbtrainer::{ConjugationError, Form, Language, PersonSlots};

fn french_tenses() -> Vec<&'static str> {
    french::French::new().tenses()
}

fn spanish_tenses() -> Vec<&'static str> {
    spanish::Spanish::new().tenses()
}

proptest! {
    #[test]
    fn french_inflection_is_deterministic_with_six_forms(
        stem in "[bcdfglmnprstv][aeiou][bcdfglmnprstv]{1,3}",
        class in prop::sample::select(vec!["er", "ir", "re"]),
        index in 0usize..14,
    ) {
        let infinitive = format!("{stem}{class}");
        let tense = french_tenses()[index];
        let first = french::construct_inflection(&infinitive, tense).unwrap();
        let second = french::construct_inflection(&infinitive, tense).unwrap();
        prop_assert_eq!(first.values().len(), 6);
        prop_assert_eq!(&first, &second);
    }

    #[test]
    fn spanish_inflection_has_seven_forms(
        stem in "[bcdfglmnprstv][aeiou][bcdfglmnprstv]{1,3}",
        class in prop::sample::select(vec!["ar", "er", "ir"]),
        index in 0usize..14,
    ) {
        let infinitive = format!("{stem}{class}");
        let tense = spanish_tenses()[index];
        let inflection = spanish::construct_inflection(&infinitive, tense).unwrap();
        prop_assert_eq!(inflection.values().len(), 7);
        for form in inflection.values() {
            prop_assert!(!form.render().contains('\''), "{:?}", form);
        }
    }

    #[test]
    fn french_first_person_elides_only_before_vowels(
        initial in "[a-z]",
        rest in "[a-z]{2,5}",
    ) {
        let infinitive = format!("{initial}{rest}er");
        let inflection = french::construct_inflection(&infinitive, "présent").unwrap();
        let Form::Simple { pronoun, .. } = &inflection.fps else {
            return Err(TestCaseError::fail("el présent debe dar formas simples"));
        };
        let expected = if "aeiou".contains(initial.as_str()) { "j'" } else { "je" };
        prop_assert_eq!(*pronoun, expected);
    }

    #[test]
    fn short_infinitives_are_rejected(word in "[a-z]{0,2}") {
        prop_assert!(matches!(
            french::construct_stem_and_ending(&word, "présent"),
            Err(ConjugationError::InvalidInfinitive(_))
        ));
        prop_assert!(matches!(
            spanish::construct_stem_and_ending(&word, "presente"),
            Err(ConjugationError::InvalidInfinitive(_))
        ));
    }

    #[test]
    fn unknown_suffixes_are_rejected(stem in "[a-z]{2,6}", suffix in "(on|us|ax|oz)") {
        let infinitive = format!("{stem}{suffix}");
        prop_assert!(matches!(
            french::construct_stem_and_ending(&infinitive, "imparfait"),
            Err(ConjugationError::UnknownVerbClass(_))
        ));
        prop_assert!(matches!(
            spanish::construct_stem_and_ending(&infinitive, "presente"),
            Err(ConjugationError::UnknownVerbClass(_))
        ));
    }
}
