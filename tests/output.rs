//! Tests de integración de los formatos de salida a través de `Language`.
//!
//! Ejecutar solo estos tests:  cargo test --test output

use verbtrainer::get_language;
use verbtrainer::output::{LEFT_COLUMN_WIDTH, RULE_WIDTH};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_cloze_normal() {
    let french = get_language("fr").unwrap();
    let lines = french.cloze("parler", "présent").unwrap();
    assert_eq!(
        lines,
        [
            "je {{c1::parle::parler, présent}}",
            "tu {{c1::parles::parler, présent}}",
            "il/elle/on {{c1::parle::parler, présent}}",
            "nous {{c1::parlons::parler, présent}}",
            "vous {{c1::parlez::parler, présent}}",
            "ils/elles {{c1::parlent::parler, présent}}",
        ]
    );
}

#[test]
fn test_cloze_verb_begins_with_vowel() {
    let french = get_language("fr").unwrap();
    let lines = french.cloze("abandonner", "présent").unwrap();
    assert_eq!(lines[0], "j'{{c1::abandonne::abandonner, présent}}");
    assert_eq!(lines[1], "tu {{c1::abandonnes::abandonner, présent}}");
}

#[test]
fn test_cloze_compound_subjunctive() {
    let french = get_language("fr").unwrap();
    let lines = french.cloze("parler", "subjonctif passé").unwrap();
    assert_eq!(lines[0], "que j'{{c1::aie parlé::parler, subjonctif passé}}");
    assert_eq!(lines[2], "qu'il/elle/on {{c1::ait parlé::parler, subjonctif passé}}");
}

#[test]
fn test_cloze_import() {
    let french = get_language("fr").unwrap();
    let translations = strings(&[
        "I speak",
        "you speak",
        "he/she/it speaks",
        "we speak",
        "you speak",
        "they speak",
    ]);
    let sounds = strings(&[
        "je parle.mp3",
        "tu parles.mp3",
        "il parle.mp3",
        "nous parlons.mp3",
        "vous parlez.mp3",
        "ils parlent.mp3",
    ]);

    let lines = french
        .cloze_export("parler", "présent", &translations, &sounds)
        .unwrap();
    assert_eq!(
        lines,
        [
            "je {{c1::parle::parler, présent}}|I speak|[sound:je parle.mp3]|parler",
            "tu {{c1::parles::parler, présent}}|you speak|[sound:tu parles.mp3]|parler",
            "il/elle/on {{c1::parle::parler, présent}}|he/she/it speaks|[sound:il parle.mp3]|parler",
            "nous {{c1::parlons::parler, présent}}|we speak|[sound:nous parlons.mp3]|parler",
            "vous {{c1::parlez::parler, présent}}|you speak|[sound:vous parlez.mp3]|parler",
            "ils/elles {{c1::parlent::parler, présent}}|they speak|[sound:ils parlent.mp3]|parler",
        ]
    );
}

#[test]
fn test_cloze_import_with_short_lists() {
    let spanish = get_language("es").unwrap();
    let translations = strings(&["I speak"]);
    let lines = spanish
        .cloze_export("hablar", "presente", &translations, &[])
        .unwrap();
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], "yo {{c1::hablo::hablar, presente}}|I speak||hablar");
    assert_eq!(lines[2], "vos {{c1::hablás::hablar, presente}}|||hablar");
}

#[test]
fn test_display_french() {
    let french = get_language("fr").unwrap();
    let lines = french.display("finir", "passé composé").unwrap();
    assert_eq!(lines[0], "finir, passé composé:");
    assert_eq!(lines[1], "⎯".repeat(RULE_WIDTH));
    assert_eq!(
        lines[2],
        format!("{:<width$}‖ nous avons fini", "j'ai fini", width = LEFT_COLUMN_WIDTH)
    );
    assert_eq!(
        lines[4],
        format!("{:<width$}‖ ils/elles ont fini", "il/elle/on a fini", width = LEFT_COLUMN_WIDTH)
    );
    assert_eq!(lines.len(), 5);
}

#[test]
fn test_display_spanish_regional_row() {
    let spanish = get_language("es").unwrap();
    let lines = spanish.display("hablar", "presente").unwrap();
    assert_eq!(lines.len(), 6);
    assert_eq!(
        lines[2],
        format!("{:<width$}‖ nosotros/nosotras hablamos", "yo hablo", width = LEFT_COLUMN_WIDTH)
    );
    assert_eq!(
        lines[4],
        format!("{:<width$}‖", "vos hablás", width = LEFT_COLUMN_WIDTH)
    );
    assert!(lines[5].starts_with("él/ella/usted habla"));
}

#[test]
fn test_json_output() {
    let spanish = get_language("es").unwrap();
    let json = spanish.json("vivir", "pretérito perfecto").unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["infinitive"], "vivir");
    assert_eq!(value["tense"], "pretérito perfecto");
    assert_eq!(value["forms"].as_array().map(Vec::len), Some(7));
    assert_eq!(value["forms"][2]["person"], "SecondSingularRegional");
    assert_eq!(value["forms"][0]["auxiliary"], "he");
    assert_eq!(value["forms"][0]["participle"], "vivido");
    assert_eq!(value["forms"][0]["text"], "yo he vivido");
}

#[test]
fn test_canonical_tense_name_in_output() {
    let french = get_language("fr").unwrap();
    let lines = french.cloze(" Parler ", "PRÉSENT").unwrap();
    assert_eq!(lines[0], "je {{c1::parle::parler, présent}}");
}

#[test]
fn test_engine_errors_surface_through_language() {
    let french = get_language("fr").unwrap();
    let error = french.display("parler", "aoriste").unwrap_err();
    assert!(matches!(
        error,
        verbtrainer::Error::Conjugation(verbtrainer::ConjugationError::UnknownTense(_))
    ));
    assert_eq!(error.to_string(), "Tiempo verbal desconocido: 'aoriste'");
}

#[test]
fn test_cloze_import_keeps_four_fields_with_pipes_in_entries() {
    let french = get_language("fr").unwrap();
    let translations = strings(&["I speak", "you|thou speak"]);
    let sounds = strings(&["", "tu parles].mp3"]);
    let lines = french
        .cloze_export("parler", "présent", &translations, &sounds)
        .unwrap();
    for line in &lines {
        assert_eq!(line.split('|').count(), 4, "Línea con campos de más: {}", line);
    }
    assert_eq!(
        lines[1],
        "tu {{c1::parles::parler, présent}}|you&#124;thou speak|[sound:tu parles&#93;.mp3]|parler"
    );
}

#[test]
fn test_display_long_forms_keep_separator_column() {
    let spanish = get_language("es").unwrap();
    let lines = spanish
        .display("hablar", "pretérito pluscuamperfecto de subjuntivo")
        .unwrap();
    let rows = &lines[2..];
    let column = rows[0].chars().position(|c| c == '‖');
    for row in rows {
        assert_eq!(row.chars().position(|c| c == '‖'), column, "Columna desalineada: {}", row);
        assert!(row.contains(" ‖"), "Falta espacio antes del separador: {}", row);
    }
    assert!(rows[3].starts_with("que él/ella/usted hubiera hablado ‖ que ellos/ellas/ustedes"));
}
