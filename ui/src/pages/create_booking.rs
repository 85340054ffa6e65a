use payloads::requests::{CreateBooking, ProductListQuery};
use payloads::time::{parse_datetime_local, to_datetime_local};
use payloads::{BookingSource, Product, ProductId, pricing};
use rust_decimal::Decimal;
use yew::prelude::*;

use crate::contexts::toast::use_toast;
use crate::hooks::{use_list, use_push_route};
use crate::utils::money::format_amount;
use crate::{Route, get_api_client};

const INPUT_CLASS: &str = "w-full px-3 py-2 text-sm border \
                           border-neutral-300 dark:border-neutral-600 \
                           rounded-md bg-white dark:bg-neutral-700 \
                           text-neutral-900 dark:text-neutral-100";

/// Phone-booking entry form. The quote shown while filling it in is an
/// estimate from the product's daily rate; the backend computes the
/// authoritative price when the booking is created.
#[function_component]
pub fn CreateBookingPage() -> Html {
    let toast = use_toast();
    let push_route = use_push_route();

    // Product dropdown; one big page is plenty for a catalog this size
    let products = use_list(
        ProductListQuery {
            limit: 200,
            ..ProductListQuery::default()
        },
        |query: ProductListQuery| async move {
            get_api_client().list_products(&query).await
        },
    );

    let draft = use_state(|| CreateBooking {
        product_id: ProductId(0),
        source: BookingSource::Phone,
        customer_name: String::new(),
        customer_phone: String::new(),
        customer_email: String::new(),
        vehicle_make: String::new(),
        vehicle_model: String::new(),
        vehicle_color: String::new(),
        vehicle_registration: String::new(),
        dropoff_at: jiff::civil::DateTime::default(),
        return_at: jiff::civil::DateTime::default(),
        has_cancellation_cover: false,
    });
    let dates_set = use_state(|| (false, false));
    let is_submitting = use_state(|| false);

    let text_field = |label: &'static str,
                      value: String,
                      update: fn(&mut CreateBooking, String)| {
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

    let on_product = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            if let Ok(id) = select.value().parse::<i64>() {
                let mut next = (*draft).clone();
                next.product_id = ProductId(id);
                draft.set(next);
            }
        })
    };

    let on_source = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            let source = [
                BookingSource::Phone,
                BookingSource::Website,
                BookingSource::Affiliate,
            ]
            .into_iter()
            .find(|s| s.to_string() == select.value());
            if let Some(source) = source {
                let mut next = (*draft).clone();
                next.source = source;
                draft.set(next);
            }
        })
    };

    let on_dropoff = {
        let draft = draft.clone();
        let dates_set = dates_set.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            if let Some(parsed) = parse_datetime_local(&input.value()) {
                let mut next = (*draft).clone();
                next.dropoff_at = parsed;
                draft.set(next);
                dates_set.set((true, dates_set.1));
            }
        })
    };

    let on_return = {
        let draft = draft.clone();
        let dates_set = dates_set.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            if let Some(parsed) = parse_datetime_local(&input.value()) {
                let mut next = (*draft).clone();
                next.return_at = parsed;
                draft.set(next);
                dates_set.set((dates_set.0, true));
            }
        })
    };

    let on_cover = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.has_cancellation_cover = input.checked();
            draft.set(next);
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let is_submitting = is_submitting.clone();
        let toast = toast.clone();
        let push_route = push_route.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let details = (*draft).clone();
            let is_submitting = is_submitting.clone();
            let toast = toast.clone();
            let push_route = push_route.clone();
            is_submitting.set(true);
            yew::platform::spawn_local(async move {
                match get_api_client().create_booking(&details).await {
                    Ok(booking) => {
                        toast.success(format!(
                            "{} created.",
                            booking.reference
                        ));
                        push_route.emit(Route::Bookings);
                    }
                    // The form keeps its values for another attempt
                    Err(error) => {
                        toast.error(error.to_string());
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    let selected_product = products
        .state
        .rows
        .iter()
        .find(|p| p.id == draft.product_id)
        .cloned();

    let estimate = match (&selected_product, *dates_set) {
        (Some(product), (true, true)) => {
            Some(estimated_quote(product, &draft))
        }
        _ => None,
    };

    let can_submit = !*is_submitting
        && selected_product.is_some()
        && dates_set.0
        && dates_set.1
        && !draft.customer_name.trim().is_empty();

    html! {
        <div class="max-w-3xl space-y-4">
            <h1 class="text-2xl font-semibold text-neutral-900 \
                       dark:text-neutral-100">
                {"New Booking"}
            </h1>

            <form onsubmit={on_submit} class="space-y-4">
                <div class="grid grid-cols-2 gap-4">
                    <label class="block text-sm text-neutral-600 \
                                  dark:text-neutral-400">
                        {"Product"}
                        <select class={INPUT_CLASS} onchange={on_product}>
                            <option value="0"
                                selected={draft.product_id == ProductId(0)}>
                                {"Select a product"}
                            </option>
                            {for products.state.rows.iter().map(|product| {
                                html! {
                                    <option
                                        value={product.id.0.to_string()}
                                        selected={draft.product_id
                                            == product.id}
                                    >
                                        {format!(
                                            "{} ({}, {}/day)",
                                            product.name,
                                            product.airport,
                                            format_amount(
                                                product.daily_rate),
                                        )}
                                    </option>
                                }
                            })}
                        </select>
                    </label>
                    <label class="block text-sm text-neutral-600 \
                                  dark:text-neutral-400">
                        {"Source"}
                        <select class={INPUT_CLASS} onchange={on_source}>
                            {for [
                                BookingSource::Phone,
                                BookingSource::Website,
                                BookingSource::Affiliate,
                            ].iter().map(|source| html! {
                                <option selected={draft.source == *source}>
                                    {source.to_string()}
                                </option>
                            })}
                        </select>
                    </label>

                    {text_field("Customer name",
                        draft.customer_name.clone(),
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
                    {text_field("Vehicle model",
                        draft.vehicle_model.clone(),
                        |d, v| d.vehicle_model = v)}
                    {text_field("Vehicle color",
                        draft.vehicle_color.clone(),
                        |d, v| d.vehicle_color = v)}

                    <label class="block text-sm text-neutral-600 \
                                  dark:text-neutral-400">
                        {"Dropoff"}
                        <input
                            type="datetime-local"
                            class={INPUT_CLASS}
                            value={if dates_set.0 {
                                to_datetime_local(draft.dropoff_at)
                            } else {
                                String::new()
                            }}
                            onchange={on_dropoff}
                        />
                    </label>
                    <label class="block text-sm text-neutral-600 \
                                  dark:text-neutral-400">
                        {"Return"}
                        <input
                            type="datetime-local"
                            class={INPUT_CLASS}
                            value={if dates_set.1 {
                                to_datetime_local(draft.return_at)
                            } else {
                                String::new()
                            }}
                            onchange={on_return}
                        />
                    </label>
                </div>

                <div class="flex items-center justify-between">
                    <label class="flex items-center gap-2 text-sm \
                                  text-neutral-600 dark:text-neutral-400">
                        <input
                            type="checkbox"
                            checked={draft.has_cancellation_cover}
                            onchange={on_cover}
                        />
                        {"Cancellation cover"}
                    </label>
                    if let Some(estimate) = estimate {
                        <span class="text-sm font-medium text-neutral-900 \
                                     dark:text-neutral-100">
                            {format!(
                                "Estimated quote: {} (fees added at \
                                 confirmation)",
                                format_amount(estimate),
                            )}
                        </span>
                    }
                </div>

                <button
                    type="submit"
                    disabled={!can_submit}
                    class="px-4 py-2 text-sm font-medium text-white \
                           bg-blue-600 hover:bg-blue-700 rounded-md \
                           disabled:opacity-50 disabled:cursor-not-allowed"
                >
                    {if *is_submitting {
                        "Creating..."
                    } else {
                        "Create booking"
                    }}
                </button>
            </form>
        </div>
    }
}

/// Daily rate times chargeable days, one day minimum. Estimate only; the
/// backend requotes on creation.
fn estimated_quote(product: &Product, draft: &CreateBooking) -> Decimal {
    let days = draft
        .dropoff_at
        .date()
        .until(draft.return_at.date())
        .map(|span| span.get_days() as i64)
        .unwrap_or(0)
        .max(1);
    pricing::round2(product.daily_rate * Decimal::from(days))
}
