pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod register;
pub mod shop;

use validator::ValidationErrors;

/// First inline message for a field, for rendering next to its input.
pub(crate) fn field_message(errors: &ValidationErrors, field: &str) -> Option<String> {
    errors.field_errors().get(field).and_then(|list| {
        list.first().map(|err| {
            err.message
                .as_ref()
                .map(|message| message.to_string())
                .unwrap_or_else(|| format!("Invalid {field}"))
        })
    })
}
