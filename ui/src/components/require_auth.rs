use yew::prelude::*;

use crate::hooks::use_require_auth;

/// Only renders its children once the auth check has confirmed a logged-in
/// user. While the check is pending (or after it fails and the redirect to
/// the login page fires) nothing is rendered, so child hooks never fetch
/// data without credentials.
#[derive(Properties, PartialEq)]
pub struct RequireAuthProps {
    pub children: Children,
}

#[function_component]
pub fn RequireAuth(props: &RequireAuthProps) -> Html {
    let profile = use_require_auth();

    if profile.is_none() {
        return html! {};
    }

    html! {
        <>
            {for props.children.iter()}
        </>
    }
}
