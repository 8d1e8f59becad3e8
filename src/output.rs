//! Formatos de salida de una inflexión
//!
//! - Vista a dos columnas para pantalla
//! - Tarjetas cloze de Anki: `je {{c1::parle::parler, présent}}`
//! - Líneas de importación: `cloze|traducción|[sound:audio]|infinitivo`
//!
//! Ningún formateador falla con una inflexión bien formada.

use serde::Serialize;

use crate::category::{Person, PersonSlots};
use crate::conjugation::{is_elided, Form, TenseKind};

/// Ancho de la línea bajo el encabezado
pub const RULE_WIDTH: usize = 45;

/// Ancho fijo de la columna del singular
pub const LEFT_COLUMN_WIDTH: usize = 25;

/// Separador de campos del formato de importación de Anki
pub const FIELD_SEPARATOR: &str = "|";

/// Entidad HTML con la que Anki muestra un `|` dentro de un campo
const ESCAPED_SEPARATOR: &str = "&#124;";

/// Vista tradicional: singular a la izquierda, plural a la derecha.
///
/// Las personas sin pareja en el plural (el voseo) ocupan su propia fila.
/// La columna izquierda mide `LEFT_COLUMN_WIDTH` o, si alguna forma no cabe,
/// lo que mida la más larga más un espacio.
pub fn display_view<O>(infinitive: &str, tense: &str, inflection: &O) -> Vec<String>
where
    O: PersonSlots<Item = Form>,
{
    let mut lines = vec![format!("{}, {}:", infinitive, tense), "⎯".repeat(RULE_WIDTH)];

    let singular: Vec<(Person, String)> = inflection
        .entries()
        .into_iter()
        .filter(|(person, _)| !person.is_plural())
        .map(|(person, form)| (person, form.render()))
        .collect();
    let width = singular
        .iter()
        .map(|(_, left)| left.chars().count() + 1)
        .fold(LEFT_COLUMN_WIDTH, usize::max);

    for (person, left) in singular {
        let right = person
            .plural_counterpart()
            .and_then(|plural| inflection.get(plural))
            .map(Form::render)
            .unwrap_or_default();
        let row = format!("{:<width$}‖ {}", left, right, width = width);
        lines.push(row.trim_end().to_string());
    }

    lines
}

/// Línea cloze de una casilla. Tras "j'" o "qu'" no va espacio.
pub fn cloze_line(infinitive: &str, tense: &str, form: &Form) -> String {
    let subject = form.subject();
    let separator = if is_elided(&subject) { "" } else { " " };
    format!(
        "{}{}{{{{c1::{}::{}, {}}}}}",
        subject,
        separator,
        form.predicate(),
        infinitive,
        tense
    )
}

/// Una línea cloze por persona, en orden canónico
pub fn cloze_view<O>(infinitive: &str, tense: &str, inflection: &O) -> Vec<String>
where
    O: PersonSlots<Item = Form>,
{
    inflection
        .values()
        .into_iter()
        .map(|form| cloze_line(infinitive, tense, form))
        .collect()
}

/// Cloze + traducción + audio + etiqueta con el infinitivo.
///
/// `translations` y `sounds` se leen por posición; si faltan o están vacíos
/// el campo queda vacío. Los `|` de esos campos (y los `]` del audio) se
/// escriben como entidades para no romper los cuatro campos de la línea.
pub fn cloze_export_view<O>(
    infinitive: &str,
    tense: &str,
    inflection: &O,
    translations: &[String],
    sounds: &[String],
) -> Vec<String>
where
    O: PersonSlots<Item = Form>,
{
    cloze_view(infinitive, tense, inflection)
        .into_iter()
        .enumerate()
        .map(|(i, cloze)| {
            let translation = translations
                .get(i)
                .map(|t| escape_field(t.trim()))
                .unwrap_or_default();
            let sound = sounds
                .get(i)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(|s| format!("[sound:{}]", escape_field(s).replace(']', "&#93;")))
                .unwrap_or_default();
            [cloze.as_str(), translation.as_str(), sound.as_str(), infinitive]
                .join(FIELD_SEPARATOR)
        })
        .collect()
}

fn escape_field(field: &str) -> String {
    field.replace(FIELD_SEPARATOR, ESCAPED_SEPARATOR)
}

#[derive(Serialize)]
struct JsonSlot<'a> {
    person: Person,
    text: String,
    #[serde(flatten)]
    form: &'a Form,
}

#[derive(Serialize)]
struct JsonInflection<'a> {
    infinitive: &'a str,
    tense: &'a str,
    kind: TenseKind,
    forms: Vec<JsonSlot<'a>>,
}

/// Inflexión completa como JSON, una entrada por persona
pub fn json_view<O>(
    infinitive: &str,
    tense: &str,
    kind: TenseKind,
    inflection: &O,
) -> Result<String, serde_json::Error>
where
    O: PersonSlots<Item = Form>,
{
    let forms = inflection
        .entries()
        .into_iter()
        .map(|(person, form)| JsonSlot {
            person,
            text: form.render(),
            form,
        })
        .collect();

    serde_json::to_string_pretty(&JsonInflection {
        infinitive,
        tense,
        kind,
        forms,
    })
}
