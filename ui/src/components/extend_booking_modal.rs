use payloads::pricing::ExtensionBreakdown;
use payloads::requests::ExtendBooking;
use payloads::time::{parse_datetime_local, to_datetime_local};
use payloads::Booking;
use yew::prelude::*;

use crate::components::Modal;
use crate::contexts::toast::use_toast;
use crate::get_api_client;
use crate::hooks::use_extension_preview;
use crate::utils::money::{format_amount, parse_amount};

/// Push a booking's return date later. Every date pick fetches a fresh
/// server-side quote; the staff member can add a manual extra charge on
/// top before committing.
#[derive(Properties, PartialEq)]
pub struct ExtendBookingModalProps {
    pub booking: Booking,
    pub on_close: Callback<()>,
    /// Called with the updated booking after a successful extension.
    pub on_extended: Callback<Booking>,
}

const INPUT_CLASS: &str = "w-full px-3 py-2 text-sm border \
                           border-neutral-300 dark:border-neutral-600 \
                           rounded-md bg-white dark:bg-neutral-700 \
                           text-neutral-900 dark:text-neutral-100";

#[function_component]
pub fn ExtendBookingModal(props: &ExtendBookingModalProps) -> Html {
    let toast = use_toast();
    let preview = use_extension_preview();
    let new_return_at = use_state(|| None::<jiff::civil::DateTime>);
    let extra_charge_input = use_state(String::new);
    let is_submitting = use_state(|| false);

    let on_date_change = {
        let new_return_at = new_return_at.clone();
        let request = preview.request.clone();
        let booking_id = props.booking.id;
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let parsed = parse_datetime_local(&input.value());
            new_return_at.set(parsed);
            if let Some(datetime) = parsed {
                request.emit((booking_id, datetime));
            }
        })
    };

    let on_extra_charge = {
        let extra_charge_input = extra_charge_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            extra_charge_input.set(input.value());
        })
    };

    // Blank or malformed extra charge counts as zero
    let extra_charge = parse_amount(&extra_charge_input);

    let breakdown = preview.state.preview.as_ref().map(|quoted| {
        ExtensionBreakdown {
            old_quote: quoted.old_quote,
            new_quote: quoted.new_quote,
            extend_charge: quoted.extend_charge,
            extra_charge,
        }
    });

    let on_confirm = {
        let booking_id = props.booking.id;
        let new_return_at = new_return_at.clone();
        let is_submitting = is_submitting.clone();
        let on_extended = props.on_extended.clone();
        let on_close = props.on_close.clone();
        let toast = toast.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(return_at) = *new_return_at else {
                return;
            };
            let is_submitting = is_submitting.clone();
            let on_extended = on_extended.clone();
            let on_close = on_close.clone();
            let toast = toast.clone();
            is_submitting.set(true);
            yew::platform::spawn_local(async move {
                let details = ExtendBooking {
                    new_return_at: return_at,
                    extra_charge,
                };
                match get_api_client()
                    .extend_booking(&booking_id, &details)
                    .await
                {
                    Ok(booking) => {
                        toast.success("Booking extended.");
                        on_extended.emit(booking);
                        on_close.emit(());
                    }
                    Err(error) => {
                        toast.error(error.to_string());
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    let on_cancel_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let current_total = props.booking.quote.total_payable();
    let can_confirm =
        new_return_at.is_some() && breakdown.is_some() && !*is_submitting;

    let row = |label: &'static str, amount: String| {
        html! {
            <div class="flex justify-between text-sm">
                <span class="text-neutral-600 dark:text-neutral-400">
                    {label}
                </span>
                <span class="font-medium text-neutral-900 \
                             dark:text-neutral-100">
                    {amount}
                </span>
            </div>
        }
    };

    html! {
        <Modal on_close={props.on_close.clone()} max_width="max-w-lg">
            <h3 class="text-lg font-semibold text-neutral-900 \
                       dark:text-neutral-100 mb-4">
                {format!("Extend {}", props.booking.reference)}
            </h3>

            <p class="text-sm text-neutral-600 dark:text-neutral-400 mb-4">
                {format!(
                    "Current return: {} ({} total)",
                    crate::utils::time::display_datetime(
                        props.booking.return_at),
                    format_amount(current_total),
                )}
            </p>

            <div class="space-y-4">
                <label class="block text-sm text-neutral-600 \
                              dark:text-neutral-400">
                    {"New return date"}
                    <input
                        type="datetime-local"
                        class={INPUT_CLASS}
                        value={new_return_at
                            .map(to_datetime_local)
                            .unwrap_or_default()}
                        onchange={on_date_change}
                    />
                </label>

                <label class="block text-sm text-neutral-600 \
                              dark:text-neutral-400">
                    {"Extra charge"}
                    <input
                        type="text"
                        class={INPUT_CLASS}
                        placeholder="0.00"
                        value={(*extra_charge_input).clone()}
                        oninput={on_extra_charge}
                    />
                </label>

                if preview.state.loading {
                    <p class="text-sm text-neutral-500">
                        {"Fetching quote..."}
                    </p>
                }

                if let Some(error) = &preview.state.error {
                    <div class="text-sm text-red-600 dark:text-red-400">
                        {error}
                    </div>
                }

                if let Some(breakdown) = &breakdown {
                    <div class="space-y-1 border-t border-neutral-200 \
                                dark:border-neutral-700 pt-3">
                        {row("Old quote",
                            format_amount(breakdown.old_quote))}
                        {row("New quote",
                            format_amount(breakdown.new_quote))}
                        {row("Difference", format_amount(breakdown.diff()))}
                        {row("Extension charge",
                            format_amount(breakdown.extend_charge))}
                        {row("Extra charge",
                            format_amount(breakdown.extra_charge))}
                        {row("Payable now",
                            format_amount(breakdown.optional_payable()))}
                        {row("New booking total",
                            format_amount(
                                breakdown.final_total(current_total)))}
                    </div>
                }
            </div>

            <div class="flex justify-end gap-3 mt-6">
                <button
                    onclick={on_cancel_click}
                    disabled={*is_submitting}
                    class="px-4 py-2 text-sm font-medium text-neutral-700 \
                           dark:text-neutral-300 bg-white \
                           dark:bg-neutral-700 border border-neutral-300 \
                           dark:border-neutral-600 rounded-md \
                           hover:bg-neutral-50 disabled:opacity-50"
                >
                    {"Cancel"}
                </button>
                <button
                    onclick={on_confirm}
                    disabled={!can_confirm}
                    class="px-4 py-2 text-sm font-medium text-white \
                           bg-blue-600 hover:bg-blue-700 rounded-md \
                           disabled:opacity-50 disabled:cursor-not-allowed"
                >
                    {if *is_submitting {
                        "Extending..."
                    } else {
                        "Confirm extension"
                    }}
                </button>
            </div>
        </Modal>
    }
}
