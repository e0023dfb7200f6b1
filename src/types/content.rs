use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::db::{DialogueRow, DialogueSummary, Sentence, SentenceRecord};

/// Level used when a request names none.
pub const DEFAULT_LEVEL: &str = "A1";

/// `{"ok": bool, "msg": "..."}` envelope used for failures on the content routes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OkMessage {
    pub ok: bool,
    pub msg: String,
}

impl OkMessage {
    pub fn failed(msg: impl Into<String>) -> Self {
        Self {
            ok: false,
            msg: msg.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RandomSentenceQuery {
    #[serde(default)]
    pub level: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewSentence {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
}

/// Body of `POST /api/dialogues`: inserts without `id`, updates with one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SaveDialogue {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub body: Option<Value>,
}

/// `Some(level)` unless absent or empty.
pub fn level_or_default(level: Option<&str>) -> &str {
    level.filter(|l| !l.is_empty()).unwrap_or(DEFAULT_LEVEL)
}

#[derive(Debug, Clone, Serialize)]
pub struct Ack {
    pub ok: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Created {
    pub ok: bool,
    pub id: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SentenceResponse {
    pub ok: bool,
    pub sentence: Sentence,
}

#[derive(Debug, Clone, Serialize)]
pub struct Items<T> {
    pub ok: bool,
    pub items: Vec<T>,
}

pub type SentenceList = Items<SentenceRecord>;
pub type DialogueList = Items<DialogueSummary>;

/// Dialogue with its body decoded; a body that is not valid JSON is served as
/// the raw string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DialogueView {
    pub id: i64,
    pub title: String,
    pub level: String,
    pub body: Value,
}

impl From<DialogueRow> for DialogueView {
    fn from(row: DialogueRow) -> Self {
        let body = serde_json::from_str(&row.body).unwrap_or(Value::String(row.body));
        Self {
            id: row.id,
            title: row.title,
            level: row.level,
            body,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DialogueResponse {
    pub ok: bool,
    pub dialogue: DialogueView,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_or_missing_level_falls_back_to_a1() {
        assert_eq!(level_or_default(None), "A1");
        assert_eq!(level_or_default(Some("")), "A1");
        assert_eq!(level_or_default(Some("B2")), "B2");
    }

    #[test]
    fn dialogue_body_is_decoded_when_possible() {
        let row = DialogueRow {
            id: 1,
            title: "t".into(),
            level: "A1".into(),
            body: r#"[{"who":"A"}]"#.into(),
        };
        let view = DialogueView::from(row);
        assert_eq!(view.body, serde_json::json!([{"who": "A"}]));

        let row = DialogueRow {
            id: 2,
            title: "t".into(),
            level: "A1".into(),
            body: "not json".into(),
        };
        assert_eq!(DialogueView::from(row).body, Value::String("not json".into()));
    }
}
