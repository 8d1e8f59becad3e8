//! Tests de la interfaz de texto con entrada guionizada.
//!
//! Ejecutar solo estos tests:  cargo test --test shell

use std::fs;
use std::io::Cursor;

use tempfile::TempDir;
use verbtrainer::config::{Config, OutputMode};
use verbtrainer::shell::{run_once, Shell};
use verbtrainer::Error;

fn run_session(input: &str, config: Config) -> String {
    let mut shell = Shell::new(Cursor::new(input.to_string()), Vec::<u8>::new(), config);
    shell.run().expect("la sesión no debería fallar");
    String::from_utf8(shell.into_output()).expect("salida UTF-8")
}

#[test]
fn test_interactive_display_session() {
    // francés, conjugar, parler, passé composé, en pantalla, no seguir, salir
    let output = run_session("2\n1\nparler\n8\n1\nn\n2\n", Config::default());
    assert!(output.contains("¡Bienvenido a Verb Trainer!"), "{}", output);
    assert!(output.contains("parler, passé composé:"), "{}", output);
    assert!(output.contains("j'ai parlé"), "{}", output);
    assert!(output.contains("Au revoir!"), "{}", output);
}

#[test]
fn test_language_from_config_skips_menu() {
    let config = Config {
        language: Some("es".to_string()),
        ..Config::default()
    };
    let output = run_session("1\nhablar\npresente\n1\nn\n2\n", config);
    assert!(!output.contains("Elija un idioma"), "{}", output);
    assert!(output.contains("vos hablás"), "{}", output);
    assert!(output.contains("Adiós"), "{}", output);
}

#[test]
fn test_engine_error_is_reported_and_session_continues() {
    let output = run_session("2\n1\nparler\naoriste\n1\ns\nfinir\n1\n1\nn\n2\n", Config::default());
    assert!(output.contains("Error: Tiempo verbal desconocido: 'aoriste'"), "{}", output);
    assert!(output.contains("je finis"), "{}", output);
    assert!(output.contains("Au revoir!"), "{}", output);
}

#[test]
fn test_invalid_language_is_reprompted() {
    let output = run_session("xx\n2\n2\n", Config::default());
    assert!(output.contains("Opción no válida: 'xx'"), "{}", output);
    assert!(output.contains("Au revoir!"), "{}", output);
}

#[test]
fn test_invalid_output_mode_is_reported() {
    let output = run_session("2\n1\nparler\n1\n9\nn\n2\n", Config::default());
    assert!(output.contains("Opción no válida: '9'"), "{}", output);
}

#[test]
fn test_end_of_input_ends_session() {
    let output = run_session("", Config::default());
    assert!(output.contains("¡Bienvenido a Verb Trainer!"));
    assert!(!output.contains("Au revoir!"));
}

#[test]
fn test_cloze_file_is_written() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        output_dir: dir.path().join("tarjetas"),
        ..Config::default()
    };
    let output = run_session("1\n1\nhablar\n1\n2\nn\n2\n", config);
    assert!(output.contains("cloze.txt"), "{}", output);

    let content = fs::read_to_string(dir.path().join("tarjetas").join("cloze.txt")).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], "yo {{c1::hablo::hablar, presente}}");
    assert_eq!(lines[2], "vos {{c1::hablás::hablar, presente}}");
}

#[test]
fn test_export_file_uses_translation_and_sound_lists() {
    let dir = TempDir::new().unwrap();
    let translations = dir.path().join("traducciones.txt");
    let sounds = dir.path().join("audios.txt");
    fs::write(&translations, "I speak\nyou speak\n").unwrap();
    fs::write(&sounds, "je parle.mp3\n").unwrap();

    let config = Config {
        language: Some("fr".to_string()),
        infinitive: Some("parler".to_string()),
        tense: Some("présent".to_string()),
        mode: OutputMode::Export,
        output_dir: dir.path().to_path_buf(),
        translations: Some(translations),
        sounds: Some(sounds),
        ..Config::default()
    };
    let mut output: Vec<u8> = Vec::new();
    run_once(&config, &mut output).unwrap();

    let content = fs::read_to_string(config.cloze_extra_path()).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines[0],
        "je {{c1::parle::parler, présent}}|I speak|[sound:je parle.mp3]|parler"
    );
    assert_eq!(lines[1], "tu {{c1::parles::parler, présent}}|you speak||parler");
    assert_eq!(lines[5], "ils/elles {{c1::parlent::parler, présent}}|||parler");
}

#[test]
fn test_run_once_view_by_menu_number() {
    let config = Config {
        language: Some("fr".to_string()),
        infinitive: Some("vendre".to_string()),
        tense: Some("4".to_string()),
        ..Config::default()
    };
    let mut output: Vec<u8> = Vec::new();
    run_once(&config, &mut output).unwrap();
    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("vendre, futur:"), "{}", output);
    assert!(output.contains("je vendrai"), "{}", output);
}

#[test]
fn test_run_once_requires_arguments() {
    let config = Config {
        language: Some("fr".to_string()),
        tense: Some("présent".to_string()),
        ..Config::default()
    };
    let result = run_once(&config, &mut Vec::<u8>::new());
    assert!(matches!(result, Err(Error::MissingArgument("--infinitive"))));

    let result = run_once(&Config::default(), &mut Vec::<u8>::new());
    assert!(matches!(result, Err(Error::MissingArgument("--language"))));
}

#[test]
fn test_missing_list_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        language: Some("es".to_string()),
        infinitive: Some("hablar".to_string()),
        tense: Some("presente".to_string()),
        mode: OutputMode::Export,
        output_dir: dir.path().to_path_buf(),
        translations: Some(dir.path().join("no_existe.txt")),
        ..Config::default()
    };
    let result = run_once(&config, &mut Vec::<u8>::new());
    assert!(matches!(result, Err(Error::Io(_))));
}
