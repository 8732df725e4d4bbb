use chrono::NaiveDate;
use regex::Regex;

use crate::core::value::Value;

pub type ValidationError = String;
pub type Validator = Box<dyn Fn(&Value) -> Result<(), ValidationError> + Send + Sync>;

/// Run a list of validators against `value`, returning the first error.
pub fn run_validators(validators: &[Validator], value: &Value) -> Result<(), ValidationError> {
    for validator in validators {
        validator(value)?;
    }
    Ok(())
}

pub fn required(message: impl Into<String>) -> Validator {
    let message = message.into();
    Box::new(move |value: &Value| {
        if value.is_empty() {
            Err(message.clone())
        } else {
            Ok(())
        }
    })
}

pub fn text() -> Validator {
    Box::new(|value: &Value| match value {
        Value::None | Value::Text(_) => Ok(()),
        other => Err(format!("Expected text, got {}", other.kind())),
    })
}

pub fn max_length(max_len: usize) -> Validator {
    Box::new(move |value: &Value| match value.as_text() {
        Some(text) if text.chars().count() > max_len => {
            Err(format!("Maximum length is {max_len}"))
        }
        _ => Ok(()),
    })
}

pub fn pattern(re: Regex) -> Validator {
    Box::new(move |value: &Value| match value.as_text() {
        Some(text) if !text.is_empty() && !re.is_match(text) => {
            Err(format!("Value must match pattern: {}", re.as_str()))
        }
        _ => Ok(()),
    })
}

pub fn one_of(allowed: Vec<String>) -> Validator {
    Box::new(move |value: &Value| match value {
        Value::None => Ok(()),
        Value::Choice(choice) | Value::Text(choice) => {
            if allowed.iter().any(|candidate| candidate == choice) {
                Ok(())
            } else {
                Err(format!("`{choice}` is not one of the allowed choices"))
            }
        }
        other => Err(format!("Expected a choice, got {}", other.kind())),
    })
}

pub fn date_range(minimum: Option<NaiveDate>, maximum: Option<NaiveDate>) -> Validator {
    Box::new(move |value: &Value| match value {
        Value::None => Ok(()),
        Value::Date(date) => match (minimum, maximum) {
            (Some(min), _) if *date < min => Err(format!("Date must not be before {min}")),
            (_, Some(max)) if *date > max => Err(format!("Date must not be after {max}")),
            _ => Ok(()),
        },
        other => Err(format!("Expected a date, got {}", other.kind())),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("date")
    }

    #[test]
    fn first_failing_validator_wins() {
        let validators = vec![required("Name is required"), max_length(3)];
        assert_eq!(
            run_validators(&validators, &Value::None),
            Err("Name is required".to_string())
        );
        assert_eq!(
            run_validators(&validators, &Value::Text("Kasia".to_string())),
            Err("Maximum length is 3".to_string())
        );
        assert!(run_validators(&validators, &Value::Text("Jas".to_string())).is_ok());
    }

    #[test]
    fn pattern_skips_empty_text() {
        let validator = pattern(Regex::new(r"^\d+$").expect("regex"));
        assert!(validator(&Value::Text(String::new())).is_ok());
        assert!(validator(&Value::Text("42".to_string())).is_ok());
        assert!(validator(&Value::Text("forty".to_string())).is_err());
    }

    #[test]
    fn one_of_accepts_text_for_choice() {
        let validator = one_of(vec!["female".to_string(), "male".to_string()]);
        assert!(validator(&Value::Choice("female".to_string())).is_ok());
        assert!(validator(&Value::Text("male".to_string())).is_ok());
        assert!(validator(&Value::Choice("unknown".to_string())).is_err());
        assert!(validator(&Value::Date(date(2000, 1, 1))).is_err());
    }

    #[test]
    fn date_range_is_inclusive() {
        let validator = date_range(Some(date(1900, 1, 1)), Some(date(2000, 12, 31)));
        assert!(validator(&Value::Date(date(1900, 1, 1))).is_ok());
        assert!(validator(&Value::Date(date(2000, 12, 31))).is_ok());
        assert!(validator(&Value::Date(date(1899, 12, 31))).is_err());
        assert!(validator(&Value::Text("1990-01-01".to_string())).is_err());
    }
}
