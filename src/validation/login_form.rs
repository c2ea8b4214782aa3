// ============================================================================
// LOGIN FORM VALIDATION - Validación por campo y del formulario completo
// ============================================================================
// Cada campo se valida contra el valor *prospectivo* (el que el usuario
// acaba de teclear), no contra el que ya está guardado en el estado.
// ============================================================================

use crate::models::LoginEntity;

pub const MANDATORY_FIELD_MESSAGE: &str = "Please fill in this mandatory field.";
pub const PASSWORD_MIN_LENGTH: usize = 4;

/// Campos declarados por el esquema del formulario de login.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LoginField {
    Login,
    Password,
}

impl LoginField {
    pub const ALL: [LoginField; 2] = [LoginField::Login, LoginField::Password];

    pub fn as_str(self) -> &'static str {
        match self {
            LoginField::Login => "login",
            LoginField::Password => "password",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct FieldValidationResult {
    pub succeeded: bool,
    pub message: String,
}

impl FieldValidationResult {
    pub fn ok() -> Self {
        Self {
            succeeded: true,
            message: String::new(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            succeeded: false,
            message: message.into(),
        }
    }
}

impl Default for FieldValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

/// Resultado de validación por campo. Es un struct y no un mapa: siempre
/// existe una entrada por cada campo del esquema.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct LoginFormErrors {
    pub login: FieldValidationResult,
    pub password: FieldValidationResult,
}

impl LoginFormErrors {
    pub fn get(&self, field: LoginField) -> &FieldValidationResult {
        match field {
            LoginField::Login => &self.login,
            LoginField::Password => &self.password,
        }
    }

    pub fn set(&mut self, field: LoginField, result: FieldValidationResult) {
        match field {
            LoginField::Login => self.login = result,
            LoginField::Password => self.password = result,
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct FormValidationResult {
    pub succeeded: bool,
    pub field_errors: LoginFormErrors,
}

fn required(value: &str) -> FieldValidationResult {
    if value.trim().is_empty() {
        FieldValidationResult::error(MANDATORY_FIELD_MESSAGE)
    } else {
        FieldValidationResult::ok()
    }
}

fn min_length(value: &str, min: usize) -> FieldValidationResult {
    if value.chars().count() < min {
        FieldValidationResult::error(format!(
            "The password must be at least {} characters long",
            min
        ))
    } else {
        FieldValidationResult::ok()
    }
}

/// Valida un solo campo contra el valor prospectivo `value`.
/// `_entity` queda disponible para futuras reglas que crucen campos.
pub async fn validate_field(
    _entity: &LoginEntity,
    field: LoginField,
    value: &str,
) -> FieldValidationResult {
    match field {
        LoginField::Login => required(value),
        LoginField::Password => {
            let result = required(value);
            if !result.succeeded {
                return result;
            }
            min_length(value, PASSWORD_MIN_LENGTH)
        }
    }
}

/// Valida el formulario completo sobre los valores ya almacenados.
/// Recoge el resultado de todos los campos antes de resolver.
pub async fn validate_form(entity: &LoginEntity) -> FormValidationResult {
    let mut field_errors = LoginFormErrors::default();

    for field in LoginField::ALL {
        let value = match field {
            LoginField::Login => entity.login.as_str(),
            LoginField::Password => entity.password.as_str(),
        };
        field_errors.set(field, validate_field(entity, field, value).await);
    }

    let succeeded = LoginField::ALL
        .iter()
        .all(|field| field_errors.get(*field).succeeded);

    FormValidationResult {
        succeeded,
        field_errors,
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn test_empty_login_fails_required() {
        let entity = LoginEntity::default();

        let result = block_on(validate_field(&entity, LoginField::Login, ""));

        assert!(!result.succeeded);
        assert_eq!(result.message, MANDATORY_FIELD_MESSAGE);
    }

    #[test]
    fn test_whitespace_login_fails_required() {
        let entity = LoginEntity::default();

        let result = block_on(validate_field(&entity, LoginField::Login, "   "));

        assert!(!result.succeeded);
    }

    #[test]
    fn test_short_password_fails_min_length() {
        let entity = LoginEntity::default();

        let result = block_on(validate_field(&entity, LoginField::Password, "abc"));

        assert!(!result.succeeded);
        assert!(result.message.contains("at least 4"));
    }

    #[test]
    fn test_valid_values_pass() {
        let entity = LoginEntity::default();

        let login = block_on(validate_field(&entity, LoginField::Login, "bob"));
        let password = block_on(validate_field(&entity, LoginField::Password, "secret"));

        assert!(login.succeeded);
        assert!(login.message.is_empty());
        assert!(password.succeeded);
    }

    #[test]
    fn test_validates_prospective_value_not_stored_one() {
        // El estado guarda un valor válido, pero el usuario acaba de borrarlo
        let entity = LoginEntity {
            login: "bob".to_string(),
            password: "secret".to_string(),
        };

        let result = block_on(validate_field(&entity, LoginField::Login, ""));

        assert!(!result.succeeded);
    }

    #[test]
    fn test_form_with_empty_credentials_fails_both_fields() {
        let entity = LoginEntity::default();

        let result = block_on(validate_form(&entity));

        assert!(!result.succeeded);
        assert!(!result.field_errors.get(LoginField::Login).succeeded);
        assert!(!result.field_errors.get(LoginField::Password).succeeded);
    }

    #[test]
    fn test_form_reports_exactly_the_failing_fields() {
        let entity = LoginEntity {
            login: "bob".to_string(),
            password: String::new(),
        };

        let result = block_on(validate_form(&entity));

        assert!(!result.succeeded);
        assert!(result.field_errors.get(LoginField::Login).succeeded);
        assert!(!result.field_errors.get(LoginField::Password).succeeded);
    }

    #[test]
    fn test_form_with_valid_credentials_succeeds() {
        let entity = LoginEntity {
            login: "bob".to_string(),
            password: "secret".to_string(),
        };

        let result = block_on(validate_form(&entity));

        assert!(result.succeeded);
        for field in LoginField::ALL {
            assert!(result.field_errors.get(field).succeeded);
        }
    }
}
