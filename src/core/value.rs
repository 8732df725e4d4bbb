use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Value {
    #[default]
    None,
    Text(String),
    Choice(String),
    Date(NaiveDate),
}

impl Value {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::None => true,
            Self::Text(v) | Self::Choice(v) => v.trim().is_empty(),
            _ => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v.as_str()),
            _ => None,
        }
    }

    /// Choice values, falling back to plain text for hand-written results.
    pub fn as_choice(&self) -> Option<&str> {
        match self {
            Self::Choice(v) | Self::Text(v) => Some(v.as_str()),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(date) => Some(*date),
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Text(_) => "text",
            Self::Choice(_) => "choice",
            Self::Date(_) => "date",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Value;
    use chrono::NaiveDate;

    #[test]
    fn whitespace_text_counts_as_empty() {
        assert!(Value::Text("   ".to_string()).is_empty());
        assert!(Value::None.is_empty());
        assert!(!Value::Choice("other".to_string()).is_empty());
    }

    #[test]
    fn date_serializes_tagged() {
        let date = NaiveDate::from_ymd_opt(1990, 4, 12).expect("date");
        let json = serde_json::to_string(&Value::Date(date)).expect("serialize");
        assert_eq!(json, r#"{"type":"date","value":"1990-04-12"}"#);

        let back: Value = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.as_date(), Some(date));
    }

    #[test]
    fn rejects_unknown_answer_types() {
        assert!(serde_json::from_str::<Value>(r#"{"type":"bool","value":true}"#).is_err());
        assert!(serde_json::from_str::<Value>(r#"{"type":"number","value":3}"#).is_err());
    }
}
