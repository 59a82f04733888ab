use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::models::TodoDraft;

/// Field checks shared by create and update. Works on raw JSON so a wrong
/// type reports the field rule instead of a deserialization error.
pub(crate) fn parse_draft(payload: &Value) -> AppResult<TodoDraft> {
    let title = match payload.get("title") {
        Some(Value::String(raw)) if !raw.trim().is_empty() => raw.trim().to_string(),
        _ => {
            return Err(AppError::invalid_input(
                "Title is required and must be a non-empty string",
            ));
        }
    };

    let description = match payload.get("description") {
        None => None,
        Some(Value::String(raw)) => Some(raw.trim().to_string()),
        Some(_) => return Err(AppError::invalid_input("Description must be a string")),
    };

    let completed = match payload.get("completed") {
        None => None,
        Some(Value::Bool(flag)) => Some(*flag),
        Some(_) => {
            return Err(AppError::invalid_input("Completed must be a boolean value"));
        }
    };

    Ok(TodoDraft {
        title,
        description,
        completed,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn message(err: AppError) -> String {
        match err {
            AppError::InvalidInput(message) => message,
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn accepts_full_payload_and_trims() {
        let draft = parse_draft(&json!({
            "title": "  Buy milk  ",
            "description": " 2% if possible ",
            "completed": true,
        }))
        .unwrap();

        assert_eq!(draft.title, "Buy milk");
        assert_eq!(draft.description.as_deref(), Some("2% if possible"));
        assert_eq!(draft.completed, Some(true));
    }

    #[test]
    fn optional_fields_stay_absent() {
        let draft = parse_draft(&json!({ "title": "Buy milk" })).unwrap();

        assert_eq!(draft.description, None);
        assert_eq!(draft.completed, None);
    }

    #[test]
    fn rejects_missing_empty_or_non_string_title() {
        for payload in [
            json!({}),
            json!({ "title": "" }),
            json!({ "title": "   " }),
            json!({ "title": 42 }),
            json!({ "title": null }),
        ] {
            let err = parse_draft(&payload).unwrap_err();
            assert_eq!(
                message(err),
                "Title is required and must be a non-empty string"
            );
        }
    }

    #[test]
    fn rejects_non_string_description() {
        for payload in [
            json!({ "title": "Buy milk", "description": 5 }),
            json!({ "title": "Buy milk", "description": null }),
            json!({ "title": "Buy milk", "description": ["x"] }),
        ] {
            let err = parse_draft(&payload).unwrap_err();
            assert_eq!(message(err), "Description must be a string");
        }
    }

    #[test]
    fn rejects_non_boolean_completed() {
        for payload in [
            json!({ "title": "Buy milk", "completed": "yes" }),
            json!({ "title": "Buy milk", "completed": 1 }),
            json!({ "title": "Buy milk", "completed": null }),
        ] {
            let err = parse_draft(&payload).unwrap_err();
            assert_eq!(message(err), "Completed must be a boolean value");
        }
    }

    #[test]
    fn empty_description_passes_validation() {
        let draft = parse_draft(&json!({ "title": "Buy milk", "description": "   " })).unwrap();
        assert_eq!(draft.description.as_deref(), Some(""));
    }

    #[test]
    fn non_object_payload_fails_the_title_rule() {
        let err = parse_draft(&json!(["not", "an", "object"])).unwrap_err();
        assert_eq!(
            message(err),
            "Title is required and must be a non-empty string"
        );
    }
}
