use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::Notification;
use crate::hooks::use_login;
use crate::state::LoginPhase;
use crate::validation::LoginField;

#[derive(Properties, PartialEq)]
pub struct LoginScreenProps {
    pub on_authenticated: Callback<String>,
}

#[function_component(LoginScreen)]
pub fn login_screen(props: &LoginScreenProps) -> Html {
    let login = use_login(props.on_authenticated.clone());
    let state = &login.state;

    let on_login_input = field_input_callback(LoginField::Login, login.on_update_field.clone());
    let on_password_input =
        field_input_callback(LoginField::Password, login.on_update_field.clone());

    let on_submit = {
        let on_login = login.on_login.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_login.emit(());
        })
    };

    let submitting = state.phase == LoginPhase::Submitting;
    let login_error = state.errors.get(LoginField::Login).clone();
    let password_error = state.errors.get(LoginField::Password).clone();

    html! {
        <>
            <div class="login-screen">
                <div class="login-card">
                    <h2>{"Login"}</h2>
                    <form class="login-form" onsubmit={on_submit}>
                        <div class="form-group">
                            <label for="login">{"Name"}</label>
                            <input
                                type="text"
                                id="login"
                                value={state.entity.login.clone()}
                                oninput={on_login_input}
                            />
                            if !login_error.succeeded {
                                <span class="field-error">{ login_error.message.clone() }</span>
                            }
                        </div>

                        <div class="form-group">
                            <label for="password">{"Password"}</label>
                            <input
                                type="password"
                                id="password"
                                value={state.entity.password.clone()}
                                oninput={on_password_input}
                            />
                            if !password_error.succeeded {
                                <span class="field-error">{ password_error.message.clone() }</span>
                            }
                        </div>

                        <button type="submit" class="btn-login" disabled={submitting}>
                            { if submitting { "Signing in..." } else { "Login" } }
                        </button>
                    </form>
                </div>
            </div>
            <Notification
                message={
                    state
                        .notice
                        .map(|notice| notice.message().to_string())
                        .unwrap_or_default()
                }
                show={state.notice.is_some()}
                on_close={login.on_dismiss_notice.clone()}
            />
        </>
    }
}

fn field_input_callback(
    field: LoginField,
    on_update_field: Callback<(LoginField, String)>,
) -> Callback<InputEvent> {
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        on_update_field.emit((field, input.value()));
    })
}
