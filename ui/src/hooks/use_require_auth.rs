use payloads::responses::UserProfile;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::hooks::{use_authentication, use_push_route};
use crate::{AuthState, Route, State};

/// Returns the profile when logged in; redirects to the login page once
/// the auth check settles on logged-out. While auth state is unknown the
/// caller should render nothing rather than stale or partial data.
#[hook]
pub fn use_require_auth() -> Option<UserProfile> {
    use_authentication();

    let (state, _) = use_store::<State>();
    let push_route = use_push_route();

    let logged_out = matches!(state.auth_state, AuthState::LoggedOut);
    use_effect_with(logged_out, move |logged_out| {
        if *logged_out {
            push_route.emit(Route::Login);
        }
    });

    state.profile().cloned()
}
