// ============================================================================
// USE LOGIN HOOK - Orquesta el flujo editar → validar → enviar → autenticar
// ============================================================================
// Cada edición actualiza la entidad y lanza la validación asíncrona del
// campo contra el valor prospectivo. El envío valida el formulario completo
// y solo si pasa llama al cliente de autenticación.
// ============================================================================

use std::future::Future;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::LoginEntity;
use crate::services::is_valid_login;
use crate::state::{LoginAction, LoginPageState};
use crate::validation::{validate_field, validate_form, LoginField, LoginFormErrors};

pub const REVIEW_FIELDS_MESSAGE: &str = "Error, please review the fields";

/// Resultado del envío, ya clasificado para el reducer.
#[derive(Clone, PartialEq, Debug)]
pub enum SubmitOutcome {
    Authenticated,
    Rejected,
    Unavailable(String),
    InvalidForm(LoginFormErrors),
}

/// Flujo de envío completo. Genérico sobre el cliente de autenticación para
/// poder probarlo sin red: si la validación falla, `authenticate` no llega
/// a invocarse.
pub async fn submit_login<F, Fut>(entity: &LoginEntity, authenticate: F) -> SubmitOutcome
where
    F: FnOnce(LoginEntity) -> Fut,
    Fut: Future<Output = Result<bool, String>>,
{
    let form_result = validate_form(entity).await;
    if !form_result.succeeded {
        return SubmitOutcome::InvalidForm(form_result.field_errors);
    }

    match authenticate(entity.clone()).await {
        Ok(true) => SubmitOutcome::Authenticated,
        Ok(false) => SubmitOutcome::Rejected,
        Err(e) => SubmitOutcome::Unavailable(e),
    }
}

#[derive(Clone)]
pub struct UseLoginHandle {
    pub state: UseReducerHandle<LoginPageState>,
    pub on_update_field: Callback<(LoginField, String)>,
    pub on_login: Callback<()>,
    pub on_dismiss_notice: Callback<()>,
}

#[hook]
pub fn use_login(on_authenticated: Callback<String>) -> UseLoginHandle {
    let state = use_reducer(LoginPageState::default);
    let session = super::use_session();

    // No se cancelan validaciones en vuelo: cada resolución escribe solo la
    // ranura de su campo, y la siguiente edición vuelve a validar
    let on_update_field = {
        let state = state.clone();
        Callback::from(move |(field, value): (LoginField, String)| {
            let snapshot = state.entity.clone();
            state.dispatch(LoginAction::UpdateField {
                field,
                value: value.clone(),
            });

            let state = state.clone();
            spawn_local(async move {
                let result = validate_field(&snapshot, field, &value).await;
                log::debug!("✏️ Campo {} validado: {}", field.as_str(), result.succeeded);
                state.dispatch(LoginAction::FieldValidated { field, result });
            });
        })
    };

    let on_login = {
        let state = state.clone();
        let session = session.clone();
        let on_authenticated = on_authenticated.clone();
        Callback::from(move |_| {
            state.dispatch(LoginAction::Submit);

            let state = state.clone();
            let session = session.clone();
            let on_authenticated = on_authenticated.clone();
            let entity = state.entity.clone();
            spawn_local(async move {
                let outcome =
                    submit_login(&entity, |e| async move { is_valid_login(&e).await }).await;

                match outcome {
                    SubmitOutcome::Authenticated => {
                        log::info!("✅ Login correcto: {}", entity.login);
                        session.update_login.emit(entity.login.clone());
                        state.dispatch(LoginAction::AuthAccepted);
                        on_authenticated.emit(entity.login.clone());
                    }
                    SubmitOutcome::Rejected => {
                        log::warn!("⚠️ Credenciales rechazadas");
                        state.dispatch(LoginAction::AuthRejected);
                    }
                    SubmitOutcome::Unavailable(e) => {
                        log::error!("❌ Servicio de login no disponible: {}", e);
                        state.dispatch(LoginAction::AuthUnavailable);
                    }
                    SubmitOutcome::InvalidForm(errors) => {
                        state.dispatch(LoginAction::ValidationFailed(errors));
                        // Aviso bloqueante del intento; los errores por campo
                        // quedan marcados junto a cada input
                        if let Some(win) = web_sys::window() {
                            let _ = win.alert_with_message(REVIEW_FIELDS_MESSAGE);
                        }
                    }
                }
            });
        })
    };

    let on_dismiss_notice = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(LoginAction::DismissNotice))
    };

    UseLoginHandle {
        state,
        on_update_field,
        on_login,
        on_dismiss_notice,
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use futures::executor::block_on;

    use super::*;

    fn valid_entity() -> LoginEntity {
        LoginEntity {
            login: "bob".to_string(),
            password: "secret".to_string(),
        }
    }

    #[test]
    fn test_valid_credentials_authenticate() {
        let outcome = block_on(submit_login(&valid_entity(), |_| async { Ok(true) }));

        assert_eq!(outcome, SubmitOutcome::Authenticated);
    }

    #[test]
    fn test_wrong_credentials_are_rejected() {
        let outcome = block_on(submit_login(&valid_entity(), |_| async { Ok(false) }));

        assert_eq!(outcome, SubmitOutcome::Rejected);
    }

    #[test]
    fn test_transport_failure_is_not_a_rejection() {
        let outcome = block_on(submit_login(&valid_entity(), |_| async {
            Err("Request error: connection refused".to_string())
        }));

        assert_eq!(
            outcome,
            SubmitOutcome::Unavailable("Request error: connection refused".to_string())
        );
    }

    #[test]
    fn test_invalid_form_never_calls_the_auth_client() {
        let calls = Rc::new(Cell::new(0));
        let entity = LoginEntity::default();

        let outcome = {
            let calls = Rc::clone(&calls);
            block_on(submit_login(&entity, move |_| {
                calls.set(calls.get() + 1);
                async { Ok(true) }
            }))
        };

        assert_eq!(calls.get(), 0);
        match outcome {
            SubmitOutcome::InvalidForm(errors) => {
                assert!(!errors.get(LoginField::Login).succeeded);
                assert!(!errors.get(LoginField::Password).succeeded);
            }
            other => panic!("expected InvalidForm, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_form_reports_exactly_the_failing_fields() {
        let entity = LoginEntity {
            login: "bob".to_string(),
            password: "abc".to_string(),
        };

        let outcome = block_on(submit_login(&entity, |_| async { Ok(true) }));

        match outcome {
            SubmitOutcome::InvalidForm(errors) => {
                assert!(errors.get(LoginField::Login).succeeded);
                assert!(!errors.get(LoginField::Password).succeeded);
            }
            other => panic!("expected InvalidForm, got {:?}", other),
        }
    }
}
