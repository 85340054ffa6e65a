use yew::prelude::*;
use yewdux::prelude::*;

use crate::hooks::use_push_route;
use crate::{Route, State, get_api_client};

#[hook]
pub fn use_logout() -> Callback<()> {
    let (_, dispatch) = use_store::<State>();
    let push_route = use_push_route();

    Callback::from(move |_| {
        let dispatch = dispatch.clone();
        let push_route = push_route.clone();
        yew::platform::spawn_local(async move {
            // Best-effort: drop local auth state even if the request fails
            let _ = get_api_client().logout().await;
            dispatch.reduce_mut(|state| state.logout());
            push_route.emit(Route::Login);
        });
    })
}
