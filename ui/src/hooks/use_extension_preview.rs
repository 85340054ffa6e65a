use jiff::civil::DateTime;
use payloads::requests::ExtendPreview;
use payloads::{BookingId, responses};
use yew::prelude::*;

use crate::get_api_client;

/// Current state of the extension quote shown in the extend modal.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PreviewState {
    pub preview: Option<responses::ExtensionPreview>,
    pub error: Option<String>,
    pub loading: bool,
}

/// Handle returned by [`use_extension_preview`].
pub struct ExtensionPreviewHandle {
    pub state: UseStateHandle<PreviewState>,
    pub request: Callback<(BookingId, DateTime)>,
}

/// Fetch a server-side extension quote whenever the staff member picks a
/// new return date. Requests are generation-tagged so that when dates are
/// changed in quick succession only the latest response is shown; a stale
/// response (success or failure) is dropped. On error the previous quote
/// is cleared rather than left on screen next to the error message.
#[hook]
pub fn use_extension_preview() -> ExtensionPreviewHandle {
    let state = use_state(PreviewState::default);
    let generation = use_mut_ref(|| 0u64);

    let request = {
        let state = state.clone();
        Callback::from(move |(booking_id, new_return_at): (BookingId, DateTime)| {
            let state = state.clone();
            let generation = generation.clone();

            let current = {
                let mut generation = generation.borrow_mut();
                *generation += 1;
                *generation
            };
            state.set(PreviewState {
                preview: (*state).preview.clone(),
                error: None,
                loading: true,
            });

            yew::platform::spawn_local(async move {
                let details = ExtendPreview { new_return_at };
                let result =
                    get_api_client().extend_preview(&booking_id, &details).await;
                if *generation.borrow() != current {
                    return;
                }
                match result {
                    Ok(preview) => {
                        state.set(PreviewState {
                            preview: Some(preview),
                            error: None,
                            loading: false,
                        });
                    }
                    Err(error) => {
                        state.set(PreviewState {
                            preview: None,
                            error: Some(error.to_string()),
                            loading: false,
                        });
                    }
                }
            });
        })
    };

    ExtensionPreviewHandle { state, request }
}
