use payloads::requests::LoginCredentials;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::components::ToastContainer;
use crate::contexts::toast::use_toast;
use crate::state::{AuthState, State};
use crate::utils::is_dev_mode;
use crate::{Route, get_api_client};

#[function_component]
pub fn LoginPage() -> Html {
    let navigator = use_navigator().unwrap();
    let (state, dispatch) = use_store::<State>();
    let toast = use_toast();

    let username = use_state(String::new);
    let password = use_state(String::new);
    let is_submitting = use_state(|| false);

    // Redirect to home if already logged in
    {
        let navigator = navigator.clone();
        let is_authenticated = state.is_authenticated();

        use_effect_with(is_authenticated, move |is_auth| {
            if *is_auth {
                navigator.push(&Route::Home);
            }
        });
    }

    let on_username = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };

    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let username = username.clone();
        let password = password.clone();
        let is_submitting = is_submitting.clone();
        let navigator = navigator.clone();
        let dispatch = dispatch.clone();
        let toast = toast.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let credentials = LoginCredentials {
                username: (*username).clone(),
                password: (*password).clone(),
            };
            let is_submitting = is_submitting.clone();
            let navigator = navigator.clone();
            let dispatch = dispatch.clone();
            let toast = toast.clone();

            is_submitting.set(true);
            yew::platform::spawn_local(async move {
                let api_client = get_api_client();
                let result = api_client.login(&credentials).await;
                match result {
                    Ok(()) => match api_client.user_profile().await {
                        Ok(profile) => {
                            dispatch.reduce_mut(|state| {
                                state.auth_state =
                                    AuthState::LoggedIn(profile);
                            });
                            navigator.push(&Route::Home);
                        }
                        Err(error) => {
                            toast.error(error.to_string());
                        }
                    },
                    Err(error) => {
                        toast.error(error.to_string());
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    let input_class = "w-full px-3 py-2 text-sm border border-neutral-300 \
                       dark:border-neutral-600 rounded-md bg-white \
                       dark:bg-neutral-700 text-neutral-900 \
                       dark:text-neutral-100";

    html! {
        <div class="flex items-center justify-center min-h-[60vh]">
            <div class="max-w-md w-full space-y-4">
                <div class="text-center">
                    <h1 class="text-2xl font-semibold text-neutral-900 \
                               dark:text-neutral-100">
                        {"Sign in to ParkDesk"}
                    </h1>
                    <p class="text-sm text-neutral-600 \
                              dark:text-neutral-400">
                        {"Enter your credentials to continue"}
                    </p>
                </div>

                <form onsubmit={on_submit} class="space-y-4">
                    <input
                        type="text"
                        class={input_class}
                        placeholder="Username"
                        value={(*username).clone()}
                        oninput={on_username}
                    />
                    <input
                        type="password"
                        class={input_class}
                        placeholder="Password"
                        value={(*password).clone()}
                        oninput={on_password}
                    />
                    <button
                        type="submit"
                        disabled={*is_submitting}
                        class="w-full px-4 py-2 text-sm font-medium \
                               text-white bg-blue-600 hover:bg-blue-700 \
                               rounded-md disabled:opacity-50"
                    >
                        {if *is_submitting {
                            "Signing in..."
                        } else {
                            "Sign in"
                        }}
                    </button>
                </form>

                if is_dev_mode() {
                    <p class="text-center text-xs text-neutral-500">
                        {"Dev credentials: admin / parkdesk"}
                    </p>
                }
            </div>
            <ToastContainer />
        </div>
    }
}
