// ============================================================================
// USE MEMBERS HOOK - Carga la lista de miembros al montar la vista
// ============================================================================

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::MemberEntity;
use crate::services::fetch_all_members;

#[derive(Clone, PartialEq)]
pub struct UseMembersHandle {
    pub members: Vec<MemberEntity>,
    pub loading: bool,
    pub error: Option<String>,
}

#[hook]
pub fn use_members() -> UseMembersHandle {
    let members = use_state(Vec::<MemberEntity>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let members = members.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match fetch_all_members().await {
                    Ok(list) => {
                        log::info!("✅ Miembros cargados: {}", list.len());
                        members.set(list);
                    }
                    Err(e) => {
                        log::error!("❌ Error cargando miembros: {}", e);
                        error.set(Some(e));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    UseMembersHandle {
        members: (*members).clone(),
        loading: *loading,
        error: (*error).clone(),
    }
}
