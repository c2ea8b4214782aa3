use gloo_timers::callback::Timeout;
use yew::prelude::*;

const AUTO_HIDE_MS: u32 = 4000;

#[derive(Properties, PartialEq)]
pub struct NotificationProps {
    pub message: String,
    pub show: bool,
    pub on_close: Callback<()>,
}

/// Aviso descartable tipo snackbar: se cierra con el botón o solo pasados
/// AUTO_HIDE_MS. Cerrarlo no toca nada más que la visibilidad.
#[function_component(Notification)]
pub fn notification(props: &NotificationProps) -> Html {
    {
        let on_close = props.on_close.clone();
        use_effect_with(props.show, move |show| {
            let timeout =
                (*show).then(|| Timeout::new(AUTO_HIDE_MS, move || on_close.emit(())));

            // Al soltar el Timeout se cancela si seguía pendiente
            move || drop(timeout)
        });
    }

    if !props.show {
        return html! {};
    }

    html! {
        <div class="notification" role="alert">
            <span class="notification-message">{ props.message.clone() }</span>
            <button class="notification-close" onclick={props.on_close.reform(|_| ())}>
                {"✕"}
            </button>
        </div>
    }
}
