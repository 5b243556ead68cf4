use validator::ValidationErrors;

/// Flattens field errors into a single message suitable for an `error` output field.
pub fn into_message(errors: &ValidationErrors) -> String {
    let mut messages = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| match &error.message {
                Some(message) => format!("{}: {}", field, message),
                None => format!("{}: {}", field, error.code),
            })
        })
        .collect::<Vec<_>>();

    messages.sort();
    messages.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Payload {
        #[validate(email(message = "Invalid email address"))]
        email: String,
        #[validate(length(min = 8, code = "PASSWORD_TOO_SHORT"))]
        password: String,
    }

    #[test]
    fn joins_messages_and_codes() {
        let errors = Payload {
            email: "nope".to_string(),
            password: "short".to_string(),
        }
        .validate()
        .unwrap_err();

        assert_eq!(
            into_message(&errors),
            "email: Invalid email address, password: PASSWORD_TOO_SHORT"
        );
    }
}
