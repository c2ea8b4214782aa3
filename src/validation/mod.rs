pub mod login_form;

pub use login_form::{
    validate_field, validate_form, FieldValidationResult, FormValidationResult, LoginField,
    LoginFormErrors,
};
