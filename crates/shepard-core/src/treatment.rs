use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::error::Error;

/// One instance of adverse treatment of a referenced case, as extracted
/// from the model's response. Field names match the JSON keys the
/// prompt demands, and are what `results.json` carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NegativeTreatment {
    pub case_name: String,
    pub jurisdiction: String,
    pub citation: String,
    /// Nature of the treatment (overruled, distinguished, criticized, ...).
    pub nature: String,
    pub quoted_text: String,
    pub explanation: String,
}

/// Parse the model's response into treatment records.
///
/// The response is expected to be a bare JSON list, but models drift
/// from that despite the system prompts: markdown fences and leading
/// prose are tolerated and stripped. A response of `[]` (the prompt's
/// no-treatment sentinel) yields an empty vec. Anything that does not
/// contain a JSON array fails with `Error::Parse` — a fabricated
/// citator record is worse than an aborted run.
pub fn parse_treatments(response_text: &str) -> Result<Vec<NegativeTreatment>, Error> {
    let text = strip_fences(response_text.trim());
    if text.is_empty() || text == "[]" {
        return Ok(Vec::new());
    }

    let json_text = extract_array(text).ok_or_else(|| {
        Error::Parse(format!(
            "no JSON array in response: {}",
            preview(response_text)
        ))
    })?;

    let value: Value = serde_json::from_str(json_text)
        .map_err(|e| Error::Parse(format!("{e}: {}", preview(json_text))))?;

    let Some(items) = value.as_array() else {
        return Err(Error::Parse(format!(
            "expected a JSON array, got {}",
            preview(json_text)
        )));
    };

    Ok(items.iter().map(treatment_from_value).collect())
}

/// Lenient per-record extraction: missing or null keys become empty
/// strings, unknown keys are ignored. Models frequently drop optional
/// fields; a record with a blank jurisdiction is still useful.
fn treatment_from_value(v: &Value) -> NegativeTreatment {
    if !v.is_object() {
        warn!("treatment entry is not an object: {v}");
    }
    NegativeTreatment {
        case_name: field(v, "caseName"),
        jurisdiction: field(v, "jurisdiction"),
        citation: field(v, "citation"),
        nature: field(v, "nature"),
        quoted_text: field(v, "quotedText"),
        explanation: field(v, "explanation"),
    }
}

fn field(v: &Value, key: &str) -> String {
    v.get(key)
        .and_then(|x| x.as_str())
        .unwrap_or_default()
        .to_string()
}

/// Strip a markdown code fence if the model added one anyway.
fn strip_fences(text: &str) -> &str {
    let text = text.trim();
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Drop the info string ("json") on the opening fence line.
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.trim_start_matches(['\r', '\n'])
        .strip_suffix("```")
        .unwrap_or(rest)
        .trim()
}

/// Extract the outermost `[...]` span from text that may carry prose
/// around the list.
fn extract_array(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    (start < end).then(|| &text[start..=end])
}

fn preview(text: &str) -> String {
    let trimmed = text.trim();
    match trimmed.char_indices().nth(120) {
        Some((idx, _)) => format!("{}...", &trimmed[..idx]),
        None => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_RECORD: &str = r#"[{
        "caseName": "Smith v. Jones",
        "jurisdiction": "Fla.",
        "citation": "123 So. 2d 456",
        "nature": "overruled",
        "quotedText": "We recede from Smith.",
        "explanation": "The opinion expressly recedes from the holding."
    }]"#;

    #[test]
    fn empty_list_sentinel_yields_no_records() {
        assert!(parse_treatments("[]").unwrap().is_empty());
    }

    #[test]
    fn whitespace_wrapped_sentinel_yields_no_records() {
        assert!(parse_treatments("  []\n").unwrap().is_empty());
    }

    #[test]
    fn empty_response_yields_no_records() {
        assert!(parse_treatments("").unwrap().is_empty());
    }

    #[test]
    fn single_record_is_parsed() {
        let records = parse_treatments(ONE_RECORD).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].case_name, "Smith v. Jones");
        assert_eq!(records[0].nature, "overruled");
        assert_eq!(records[0].quoted_text, "We recede from Smith.");
    }

    #[test]
    fn record_count_matches_instances() {
        let three = r#"[
            {"caseName": "A v. B", "jurisdiction": "", "citation": "", "nature": "criticized", "quotedText": "", "explanation": ""},
            {"caseName": "C v. D", "jurisdiction": "", "citation": "", "nature": "limited", "quotedText": "", "explanation": ""},
            {"caseName": "E v. F", "jurisdiction": "", "citation": "", "nature": "distinguished", "quotedText": "", "explanation": ""}
        ]"#;
        assert_eq!(parse_treatments(three).unwrap().len(), 3);
    }

    #[test]
    fn markdown_fences_are_stripped() {
        let fenced = format!("```json\n{ONE_RECORD}\n```");
        assert_eq!(parse_treatments(&fenced).unwrap().len(), 1);
    }

    #[test]
    fn fenced_empty_list_yields_no_records() {
        assert!(parse_treatments("```json\n[]\n```").unwrap().is_empty());
    }

    #[test]
    fn surrounding_prose_is_tolerated() {
        let wrapped = format!("Here are the negatively treated cases:\n{ONE_RECORD}\nLet me know!");
        assert_eq!(parse_treatments(&wrapped).unwrap().len(), 1);
    }

    #[test]
    fn missing_keys_default_to_empty() {
        let records = parse_treatments(r#"[{"caseName": "A v. B"}]"#).unwrap();
        assert_eq!(records[0].case_name, "A v. B");
        assert_eq!(records[0].jurisdiction, "");
        assert_eq!(records[0].explanation, "");
    }

    #[test]
    fn null_keys_default_to_empty() {
        let records =
            parse_treatments(r#"[{"caseName": "A v. B", "jurisdiction": null}]"#).unwrap();
        assert_eq!(records[0].jurisdiction, "");
    }

    #[test]
    fn prose_without_array_is_a_parse_error() {
        let err = parse_treatments("No negatively treated cases were found.").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let err = parse_treatments("[{not json").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn serialized_record_uses_camel_case_keys() {
        let records = parse_treatments(ONE_RECORD).unwrap();
        let json = serde_json::to_string(&records[0]).unwrap();
        assert!(json.contains("\"caseName\""));
        assert!(json.contains("\"quotedText\""));
        assert!(!json.contains("case_name"));
    }
}
