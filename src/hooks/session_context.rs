// ============================================================================
// SESSION CONTEXT - Comparte la identidad autenticada entre componentes
// ============================================================================
// El provider posee el único SessionStore de la app y refleja su valor en
// estado de Yew mediante una suscripción (con baja al desmontar), así todos
// los consumidores re-renderizan en cada cambio.
// ============================================================================

use yew::prelude::*;

use crate::stores::SessionStore;

/// Visión del store que reciben los consumidores vía contexto. Solo el
/// flujo de login debe emitir `update_login`; el resto de la UI lee `login`.
#[derive(Clone, PartialEq)]
pub struct SessionHandle {
    pub login: String,
    pub update_login: Callback<String>,
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let store = use_mut_ref(SessionStore::new);
    let login = use_state(|| store.borrow().current_login());

    {
        let store = store.clone();
        let login = login.clone();
        use_effect_with((), move |_| {
            let id = {
                let login = login.clone();
                store
                    .borrow()
                    .subscribe(move |new_login| login.set(new_login.to_string()))
            };

            move || store.borrow().unsubscribe(id)
        });
    }

    let update_login = {
        let store = store.clone();
        Callback::from(move |new_login: String| {
            log::info!("🔐 Sesión actualizada: {}", new_login);
            store.borrow().update_login(&new_login);
        })
    };

    let handle = SessionHandle {
        login: (*login).clone(),
        update_login,
    };

    html! {
        <ContextProvider<SessionHandle> context={handle}>
            { props.children.clone() }
        </ContextProvider<SessionHandle>>
    }
}

#[hook]
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>().expect("SessionProvider missing above this component")
}
