use super::super::TextInputAction;

/// Local checks before a modal submits. Name rules stay with the collection
/// views; this only keeps obviously incomplete forms open.
pub(super) fn validate_text_input(action: &TextInputAction, raw: &str) -> Result<(), String> {
    if raw.is_empty() {
        return Err("value required".to_string());
    }
    match action {
        TextInputAction::AuthEmail if !raw.contains('@') => {
            Err("email must contain '@'".to_string())
        }
        TextInputAction::AuthUsername if raw.chars().any(char::is_whitespace) => {
            Err("username cannot contain spaces".to_string())
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_values_keep_the_modal_open() {
        assert!(validate_text_input(&TextInputAction::NewChecklist, "").is_err());
        assert!(validate_text_input(&TextInputAction::AuthPassword, "").is_err());
        assert!(validate_text_input(&TextInputAction::NewItem, "Milk").is_ok());
    }

    #[test]
    fn auth_fields_are_checked() {
        assert!(validate_text_input(&TextInputAction::AuthEmail, "ann").is_err());
        assert!(validate_text_input(&TextInputAction::AuthEmail, "ann@example.com").is_ok());
        assert!(validate_text_input(&TextInputAction::AuthUsername, "a b").is_err());
        assert!(validate_text_input(&TextInputAction::AuthPassword, "with space").is_ok());
    }
}
