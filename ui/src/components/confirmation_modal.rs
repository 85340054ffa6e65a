use yew::prelude::*;

use crate::components::Modal;

/// Yes/no prompt used before destructive booking actions (cancel,
/// delete). The action button is disabled while the request is in
/// flight so it cannot be fired twice.
#[derive(Properties, PartialEq)]
pub struct ConfirmationModalProps {
    pub title: AttrValue,
    pub message: AttrValue,
    pub confirm_text: AttrValue,
    pub on_confirm: Callback<()>,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub is_loading: bool,
}

#[function_component]
pub fn ConfirmationModal(props: &ConfirmationModalProps) -> Html {
    let on_confirm_click = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| on_confirm.emit(()))
    };

    let on_cancel_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <Modal on_close={props.on_close.clone()}>
            <h3 class="text-lg font-semibold text-neutral-900 \
                       dark:text-neutral-100 mb-4">
                {&props.title}
            </h3>

            <p class="text-sm text-neutral-600 dark:text-neutral-400">
                {&props.message}
            </p>

            <div class="flex justify-end gap-3 mt-6">
                <button
                    onclick={on_cancel_click}
                    disabled={props.is_loading}
                    class="px-4 py-2 text-sm font-medium \
                           text-neutral-700 dark:text-neutral-300 \
                           bg-white dark:bg-neutral-700 border \
                           border-neutral-300 dark:border-neutral-600 \
                           rounded-md hover:bg-neutral-50 \
                           disabled:opacity-50 disabled:cursor-not-allowed"
                >
                    {"Cancel"}
                </button>
                <button
                    onclick={on_confirm_click}
                    disabled={props.is_loading}
                    class="px-4 py-2 text-sm font-medium text-white \
                           bg-red-600 hover:bg-red-700 rounded-md \
                           disabled:opacity-50 disabled:cursor-not-allowed"
                >
                    {if props.is_loading {
                        "Processing..."
                    } else {
                        props.confirm_text.as_str()
                    }}
                </button>
            </div>
        </Modal>
    }
}
