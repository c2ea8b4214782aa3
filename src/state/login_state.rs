// ============================================================================
// LOGIN STATE - Máquina de estados del flujo de login (reducer puro)
// ============================================================================
// Separa "qué ha pasado" (LoginAction) de "cómo cambia el estado" (reduce).
// La transición es pura: no toca la UI ni lanza trabajo asíncrono, así que
// se prueba sin montar componentes.
// ============================================================================

use std::rc::Rc;

use yew::Reducible;

use crate::models::{create_empty_login, LoginEntity};
use crate::validation::{FieldValidationResult, LoginField, LoginFormErrors};

/// Fase del flujo: editar → enviar → autenticado.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LoginPhase {
    Editing,
    Submitting,
    Authenticated,
}

/// Aviso de fallo visible sobre el formulario. Distingue credenciales
/// rechazadas de un fallo del propio servicio de autenticación.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LoginNotice {
    InvalidCredentials,
    ServiceUnavailable,
}

impl LoginNotice {
    pub fn message(self) -> &'static str {
        match self {
            LoginNotice::InvalidCredentials => "Invalid login or password, please type again",
            LoginNotice::ServiceUnavailable => {
                "Login service unavailable, please try again later"
            }
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct LoginPageState {
    pub entity: LoginEntity,
    pub errors: LoginFormErrors,
    pub phase: LoginPhase,
    pub notice: Option<LoginNotice>,
}

impl Default for LoginPageState {
    fn default() -> Self {
        Self {
            entity: create_empty_login(),
            errors: LoginFormErrors::default(),
            phase: LoginPhase::Editing,
            notice: None,
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum LoginAction {
    UpdateField { field: LoginField, value: String },
    FieldValidated { field: LoginField, result: FieldValidationResult },
    Submit,
    ValidationFailed(LoginFormErrors),
    AuthAccepted,
    AuthRejected,
    AuthUnavailable,
    DismissNotice,
}

impl LoginPageState {
    pub fn reduce(&self, action: LoginAction) -> Self {
        let mut next = self.clone();

        match action {
            LoginAction::UpdateField { field, value } => match field {
                LoginField::Login => next.entity.login = value,
                LoginField::Password => next.entity.password = value,
            },
            LoginAction::FieldValidated { field, result } => {
                // Cada resolución escribe solo su propia ranura:
                // validaciones concurrentes de campos distintos conmutan
                next.errors.set(field, result);
            }
            LoginAction::Submit => next.phase = LoginPhase::Submitting,
            LoginAction::ValidationFailed(errors) => {
                next.phase = LoginPhase::Editing;
                next.errors = errors;
            }
            LoginAction::AuthAccepted => {
                next.phase = LoginPhase::Authenticated;
                next.notice = None;
            }
            LoginAction::AuthRejected => {
                next.phase = LoginPhase::Editing;
                next.notice = Some(LoginNotice::InvalidCredentials);
            }
            LoginAction::AuthUnavailable => {
                next.phase = LoginPhase::Editing;
                next.notice = Some(LoginNotice::ServiceUnavailable);
            }
            LoginAction::DismissNotice => next.notice = None,
        }

        next
    }
}

impl Reducible for LoginPageState {
    type Action = LoginAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(LoginPageState::reduce(&self, action))
    }
}
