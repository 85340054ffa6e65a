use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

use super::list_state::{ListAction, ListState};
use crate::Route;
use crate::hooks::use_push_route;
use payloads::{ClientError, responses::Page};

/// Handle returned by [`use_list`].
pub struct ListHandle<T: Clone> {
    pub state: UseReducerHandle<ListState<T>>,
    pub refetch: Callback<()>,
}

/// Drive a [`ListState`] from a query value.
///
/// Fetches on mount and whenever the query changes. Each fetch gets a
/// fresh generation from a monotonically increasing counter; the reducer
/// applies a response only if its generation is still current, so rapid
/// filter/search changes cannot be overwritten by an older in-flight
/// response. A 401 means the session is gone and redirects to login
/// instead of rendering partial data.
#[hook]
pub fn use_list<T, Q, F, Fut>(query: Q, fetch: F) -> ListHandle<T>
where
    T: Clone + 'static,
    Q: Clone + PartialEq + 'static,
    F: Fn(Q) -> Fut + 'static,
    Fut: Future<Output = Result<Page<T>, ClientError>> + 'static,
{
    let state = use_reducer(ListState::<T>::default);
    let generation = use_mut_ref(|| 0u64);
    let push_route = use_push_route();

    let refetch = {
        let state = state.clone();
        let generation = generation.clone();
        let fetch = Rc::new(fetch);

        use_callback(query.clone(), move |_: (), query| {
            let state = state.clone();
            let push_route = push_route.clone();
            let fetch = fetch.clone();
            let query = query.clone();

            let current = {
                let mut generation = generation.borrow_mut();
                *generation += 1;
                *generation
            };
            state.dispatch(ListAction::FetchStarted { generation: current });

            yew::platform::spawn_local(async move {
                match fetch(query).await {
                    Ok(page) => {
                        state.dispatch(ListAction::Loaded {
                            generation: current,
                            rows: page.data,
                            total: page.total,
                        });
                    }
                    Err(error) if error.is_unauthorized() => {
                        push_route.emit(Route::Login);
                    }
                    Err(error) => {
                        state.dispatch(ListAction::Failed {
                            generation: current,
                            message: error.to_string(),
                        });
                    }
                }
            });
        })
    };

    // Fetch on mount and when the query changes
    {
        let refetch = refetch.clone();
        use_effect_with(query, move |_| {
            refetch.emit(());
        });
    }

    ListHandle {
        state,
        refetch: Callback::from(move |_| refetch.emit(())),
    }
}
