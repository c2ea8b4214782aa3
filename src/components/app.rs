use yew::prelude::*;

use super::{LoginScreen, MemberTable};
use crate::hooks::{use_session, SessionProvider};

/// Vistas de la aplicación. Navegar = fijar la vista activa.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum AppRoute {
    Login,
    Members,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <SessionProvider>
            <AppShell />
        </SessionProvider>
    }
}

#[function_component(AppShell)]
fn app_shell() -> Html {
    let route = use_state(|| AppRoute::Login);
    let session = use_session();

    let on_authenticated = {
        let route = route.clone();
        Callback::from(move |_login: String| route.set(AppRoute::Members))
    };

    html! {
        <div class="app">
            <header class="app-header">
                <h1>{"Member Portal"}</h1>
                // Consumidor de sesión: re-renderiza con cada cambio de login
                <span class="current-user">{ session.login.clone() }</span>
            </header>
            <main>
                {
                    match *route {
                        AppRoute::Login => html! { <LoginScreen {on_authenticated} /> },
                        AppRoute::Members => html! { <MemberTable /> },
                    }
                }
            </main>
        </div>
    }
}
