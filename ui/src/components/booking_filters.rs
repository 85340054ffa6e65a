use jiff::civil::Date;
use payloads::requests::BookingListQuery;
use payloads::time::{parse_iso_date, to_iso_date};
use payloads::{BookingSource, BookingStatus};
use yew::prelude::*;

/// A single filter edit, emitted as the user types or picks.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterEvent {
    Search(String),
    Status(Option<BookingStatus>),
    Airport(Option<String>),
    Source(Option<BookingSource>),
    DateRange(Option<Date>, Option<Date>),
}

#[derive(Properties, PartialEq)]
pub struct BookingFiltersProps {
    pub query: BookingListQuery,
    /// Hidden when the page's category pins the status.
    #[prop_or(true)]
    pub show_status: bool,
    /// Hidden when the page's category pins the source.
    #[prop_or(true)]
    pub show_source: bool,
    pub on_change: Callback<FilterEvent>,
}

const INPUT_CLASS: &str = "px-3 py-2 text-sm border border-neutral-300 \
                           dark:border-neutral-600 rounded-md bg-white \
                           dark:bg-neutral-700 text-neutral-900 \
                           dark:text-neutral-100";

#[function_component]
pub fn BookingFilters(props: &BookingFiltersProps) -> Html {
    let query = &props.query;

    let on_search = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_change.emit(FilterEvent::Search(input.value()));
        })
    };

    let on_status = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            let status = BookingStatus::ALL
                .into_iter()
                .find(|s| s.to_string() == select.value());
            on_change.emit(FilterEvent::Status(status));
        })
    };

    let on_airport = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let value = input.value().trim().to_uppercase();
            let airport = if value.is_empty() { None } else { Some(value) };
            on_change.emit(FilterEvent::Airport(airport));
        })
    };

    let on_source = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            let source = [
                BookingSource::Website,
                BookingSource::Phone,
                BookingSource::Affiliate,
            ]
            .into_iter()
            .find(|s| s.to_string() == select.value());
            on_change.emit(FilterEvent::Source(source));
        })
    };

    let on_from_date = {
        let on_change = props.on_change.clone();
        let to_date = query.to_date;
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            // Malformed or cleared input drops the bound
            on_change.emit(FilterEvent::DateRange(
                parse_iso_date(&input.value()),
                to_date,
            ));
        })
    };

    let on_to_date = {
        let on_change = props.on_change.clone();
        let from_date = query.from_date;
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_change.emit(FilterEvent::DateRange(
                from_date,
                parse_iso_date(&input.value()),
            ));
        })
    };

    html! {
        <div class="flex flex-wrap items-end gap-3 mb-4">
            <input
                type="text"
                class={INPUT_CLASS}
                placeholder="Search name, reference, reg..."
                value={query.search.clone().unwrap_or_default()}
                oninput={on_search}
            />

            if props.show_status {
                <select class={INPUT_CLASS} onchange={on_status}>
                    <option selected={query.status.is_none()}>
                        {"All statuses"}
                    </option>
                    {for BookingStatus::ALL.iter().map(|status| html! {
                        <option selected={query.status == Some(*status)}>
                            {status.to_string()}
                        </option>
                    })}
                </select>
            }

            if props.show_source {
                <select class={INPUT_CLASS} onchange={on_source}>
                    <option selected={query.source.is_none()}>
                        {"All sources"}
                    </option>
                    {for [
                        BookingSource::Website,
                        BookingSource::Phone,
                        BookingSource::Affiliate,
                    ].iter().map(|source| html! {
                        <option selected={query.source == Some(*source)}>
                            {source.to_string()}
                        </option>
                    })}
                </select>
            }

            <input
                type="text"
                class={INPUT_CLASS}
                placeholder="Airport"
                value={query.airport.clone().unwrap_or_default()}
                oninput={on_airport}
            />

            <label class="text-sm text-neutral-600 dark:text-neutral-400">
                {"Dropoff from "}
                <input
                    type="date"
                    class={INPUT_CLASS}
                    value={query.from_date.map(to_iso_date).unwrap_or_default()}
                    onchange={on_from_date}
                />
            </label>
            <label class="text-sm text-neutral-600 dark:text-neutral-400">
                {"to "}
                <input
                    type="date"
                    class={INPUT_CLASS}
                    value={query.to_date.map(to_iso_date).unwrap_or_default()}
                    onchange={on_to_date}
                />
            </label>
        </div>
    }
}
