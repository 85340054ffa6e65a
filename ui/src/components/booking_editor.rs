use payloads::requests::UpdateBooking;
use payloads::time::{parse_datetime_local, to_datetime_local};
use payloads::{Booking, pricing};
use yew::prelude::*;

use crate::components::Modal;
use crate::utils::money::{format_amount, parse_amount};

/// Edit panel for a booking, holding a local draft that is only sent on
/// save. A failed save keeps the panel open with the attempted values so
/// nothing the staff member typed is lost.
#[derive(Properties, PartialEq)]
pub struct BookingEditorProps {
    pub booking: Booking,
    pub on_save: Callback<UpdateBooking>,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub is_saving: bool,
    #[prop_or_default]
    pub error_message: Option<AttrValue>,
}

const INPUT_CLASS: &str = "w-full px-3 py-2 text-sm border \
                           border-neutral-300 dark:border-neutral-600 \
                           rounded-md bg-white dark:bg-neutral-700 \
                           text-neutral-900 dark:text-neutral-100";

#[function_component]
pub fn BookingEditor(props: &BookingEditorProps) -> Html {
    let draft = use_state({
        let booking = props.booking.clone();
        move || UpdateBooking::from(&booking)
    });

    let text_field = |label: &'static str,
                      value: String,
                      update: fn(&mut UpdateBooking, String)| {
        let draft = draft.clone();
        let oninput = Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            update(&mut next, input.value());
            draft.set(next);
        });
        html! {
            <label class="block text-sm text-neutral-600 \
                          dark:text-neutral-400">
                {label}
                <input type="text" class={INPUT_CLASS} {value} {oninput} />
            </label>
        }
    };

    let datetime_field = |label: &'static str,
                          value: jiff::civil::DateTime,
                          update: fn(
        &mut UpdateBooking,
        jiff::civil::DateTime,
    )| {
        let draft = draft.clone();
        let onchange = Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            // Malformed input leaves the draft's current value in place
            if let Some(parsed) = parse_datetime_local(&input.value()) {
                let mut next = (*draft).clone();
                update(&mut next, parsed);
                draft.set(next);
            }
        });
        html! {
            <label class="block text-sm text-neutral-600 \
                          dark:text-neutral-400">
                {label}
                <input
                    type="datetime-local"
                    class={INPUT_CLASS}
                    value={to_datetime_local(value)}
                    {onchange}
                />
            </label>
        }
    };

    let on_cover_toggle = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.has_cancellation_cover = input.checked();
            draft.set(next);
        })
    };

    let on_discount = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.discount = parse_amount(&input.value());
            draft.set(next);
        })
    };

    let on_save_click = {
        let draft = draft.clone();
        let on_save = props.on_save.clone();
        Callback::from(move |_: MouseEvent| {
            on_save.emit((*draft).clone());
        })
    };

    let on_cancel_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    // Preview only; the backend requotes on save and is authoritative
    let quote = &props.booking.quote;
    let preview_total = pricing::total_payable(
        quote.quote_amount,
        quote.booking_fee,
        draft.has_cancellation_cover,
        quote.cancellation_fee,
        draft.discount,
    );

    html! {
        <Modal on_close={props.on_close.clone()} max_width="max-w-2xl">
            <h3 class="text-lg font-semibold text-neutral-900 \
                       dark:text-neutral-100 mb-4">
                {format!("Edit {}", props.booking.reference)}
            </h3>

            <div class="grid grid-cols-2 gap-4">
                {text_field("Customer name", draft.customer_name.clone(),
                    |d, v| d.customer_name = v)}
                {text_field("Phone", draft.customer_phone.clone(),
                    |d, v| d.customer_phone = v)}
                {text_field("Email", draft.customer_email.clone(),
                    |d, v| d.customer_email = v)}
                {text_field("Registration",
                    draft.vehicle_registration.clone(),
                    |d, v| d.vehicle_registration = v)}
                {text_field("Vehicle make", draft.vehicle_make.clone(),
                    |d, v| d.vehicle_make = v)}
                {text_field("Vehicle model", draft.vehicle_model.clone(),
                    |d, v| d.vehicle_model = v)}
                {text_field("Vehicle color", draft.vehicle_color.clone(),
                    |d, v| d.vehicle_color = v)}
                <label class="block text-sm text-neutral-600 \
                              dark:text-neutral-400">
                    {"Discount"}
                    <input
                        type="text"
                        class={INPUT_CLASS}
                        value={draft.discount.to_string()}
                        oninput={on_discount}
                    />
                </label>
                {datetime_field("Dropoff", draft.dropoff_at,
                    |d, v| d.dropoff_at = v)}
                {datetime_field("Return", draft.return_at,
                    |d, v| d.return_at = v)}
            </div>

            <div class="flex items-center justify-between mt-4">
                <label class="flex items-center gap-2 text-sm \
                              text-neutral-600 dark:text-neutral-400">
                    <input
                        type="checkbox"
                        checked={draft.has_cancellation_cover}
                        onchange={on_cover_toggle}
                    />
                    {"Cancellation cover"}
                </label>
                <span class="text-sm font-medium text-neutral-900 \
                             dark:text-neutral-100">
                    {format!("Estimated total: {}",
                        format_amount(preview_total))}
                </span>
            </div>

            if let Some(error) = &props.error_message {
                <div class="mt-4 text-sm text-red-600 dark:text-red-400">
                    {error}
                </div>
            }

            <div class="flex justify-end gap-3 mt-6">
                <button
                    onclick={on_cancel_click}
                    disabled={props.is_saving}
                    class="px-4 py-2 text-sm font-medium text-neutral-700 \
                           dark:text-neutral-300 bg-white \
                           dark:bg-neutral-700 border border-neutral-300 \
                           dark:border-neutral-600 rounded-md \
                           hover:bg-neutral-50 disabled:opacity-50"
                >
                    {"Cancel"}
                </button>
                <button
                    onclick={on_save_click}
                    disabled={props.is_saving}
                    class="px-4 py-2 text-sm font-medium text-white \
                           bg-blue-600 hover:bg-blue-700 rounded-md \
                           disabled:opacity-50"
                >
                    {if props.is_saving { "Saving..." } else { "Save" }}
                </button>
            </div>
        </Modal>
    }
}
