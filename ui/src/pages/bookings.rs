use std::rc::Rc;

use jiff::civil::Date;
use payloads::requests::{BookingListQuery, EmailCsv, UpdateBooking};
use payloads::{Booking, BookingId, BookingSource, BookingStatus};
use yew::prelude::*;

use crate::components::{
    BookingColumn, BookingEditor, BookingFilters, BookingTable,
    ConfirmationModal, ExtendBookingModal, Modal, PaginationControls,
    RowAction, booking_filters::FilterEvent,
};
use crate::contexts::toast::use_toast;
use crate::get_api_client;
use crate::hooks::use_list;
use crate::utils::{csv, download};

/// One configuration per flavor of booking list. The three pages share
/// the fetch/filter/edit/extend machinery and differ only in what this
/// enum pins down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingCategory {
    /// All bookings, every status and source, full action set.
    Confirmed,
    /// Bookings saved without payment; offers manual payment confirmation.
    Incomplete,
    /// Bookings placed through the website, any status.
    Website,
}

impl BookingCategory {
    pub fn title(&self) -> &'static str {
        match self {
            BookingCategory::Confirmed => "Bookings",
            BookingCategory::Incomplete => "Incomplete Bookings",
            BookingCategory::Website => "Website Bookings",
        }
    }

    /// Status the category pins, hidden from the filter bar.
    pub fn locked_status(&self) -> Option<BookingStatus> {
        match self {
            BookingCategory::Incomplete => Some(BookingStatus::Incomplete),
            BookingCategory::Confirmed | BookingCategory::Website => None,
        }
    }

    /// Source the category pins, hidden from the filter bar.
    pub fn locked_source(&self) -> Option<BookingSource> {
        match self {
            BookingCategory::Website => Some(BookingSource::Website),
            BookingCategory::Confirmed | BookingCategory::Incomplete => None,
        }
    }

    pub fn columns(&self) -> Vec<BookingColumn> {
        match self {
            BookingCategory::Confirmed => vec![
                BookingColumn::Reference,
                BookingColumn::Source,
                BookingColumn::Customer,
                BookingColumn::Product,
                BookingColumn::Airport,
                BookingColumn::Registration,
                BookingColumn::Dropoff,
                BookingColumn::Return,
                BookingColumn::Amount,
                BookingColumn::Status,
            ],
            BookingCategory::Incomplete => vec![
                BookingColumn::Reference,
                BookingColumn::Customer,
                BookingColumn::Phone,
                BookingColumn::Product,
                BookingColumn::BookedOn,
                BookingColumn::Dropoff,
                BookingColumn::Amount,
            ],
            BookingCategory::Website => vec![
                BookingColumn::Reference,
                BookingColumn::Customer,
                BookingColumn::Product,
                BookingColumn::Vehicle,
                BookingColumn::Registration,
                BookingColumn::Dropoff,
                BookingColumn::Return,
                BookingColumn::Amount,
                BookingColumn::Status,
            ],
        }
    }

    pub fn actions(&self) -> Vec<RowAction> {
        match self {
            BookingCategory::Confirmed => vec![
                RowAction::Edit,
                RowAction::Extend,
                RowAction::SendInvoice,
                RowAction::SendEmail,
                RowAction::Cancel,
                RowAction::Complete,
                RowAction::Delete,
            ],
            BookingCategory::Incomplete => vec![
                RowAction::Edit,
                RowAction::ConfirmPayment,
                RowAction::Delete,
            ],
            BookingCategory::Website => vec![
                RowAction::Edit,
                RowAction::Extend,
                RowAction::SendEmail,
                RowAction::Cancel,
            ],
        }
    }

    fn base_query(&self) -> BookingListQuery {
        BookingListQuery {
            status: self.locked_status(),
            source: self.locked_source(),
            ..BookingListQuery::default()
        }
    }
}

/// The page's entire query state, driven by explicit actions so every
/// transition is auditable. Filter edits jump back to page 1; only an
/// explicit page change keeps the rest of the query as-is. The fields a
/// category locks can never be overwritten by a filter action.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryModel {
    pub query: BookingListQuery,
    category: BookingCategory,
}

impl QueryModel {
    pub fn for_category(category: BookingCategory) -> Self {
        Self {
            query: category.base_query(),
            category,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum QueryAction {
    /// The route changed under the mounted page; rebuild from scratch.
    CategoryChanged(BookingCategory),
    SearchChanged(String),
    StatusChanged(Option<BookingStatus>),
    AirportChanged(Option<String>),
    SourceChanged(Option<BookingSource>),
    DateRangeChanged(Option<Date>, Option<Date>),
    PageChanged(i64),
}

impl Reducible for QueryModel {
    type Action = QueryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            QueryAction::CategoryChanged(category) => {
                if self.category == category {
                    return self;
                }
                next = Self::for_category(category);
            }
            QueryAction::SearchChanged(search) => {
                next.query.search =
                    Some(search.trim().to_string()).filter(|s| !s.is_empty());
                next.query.page = 1;
            }
            QueryAction::StatusChanged(status) => {
                if next.category.locked_status().is_none() {
                    next.query.status = status;
                    next.query.page = 1;
                }
            }
            QueryAction::AirportChanged(airport) => {
                next.query.airport = airport;
                next.query.page = 1;
            }
            QueryAction::SourceChanged(source) => {
                if next.category.locked_source().is_none() {
                    next.query.source = source;
                    next.query.page = 1;
                }
            }
            QueryAction::DateRangeChanged(from, to) => {
                next.query.from_date = from;
                next.query.to_date = to;
                next.query.page = 1;
            }
            QueryAction::PageChanged(page) => {
                next.query.page = page.max(1);
            }
        }

        Rc::new(next)
    }
}

/// Query covering every row the current filters match, so an export is
/// never silently truncated to the visible page.
fn export_query(query: &BookingListQuery, total: i64) -> BookingListQuery {
    BookingListQuery {
        page: 1,
        limit: total.max(1),
        ..query.clone()
    }
}

/// Which dialog, if any, is open over the table.
#[derive(Clone, PartialEq)]
enum Dialog {
    None,
    Editing(Booking),
    Extending(Booking),
    ConfirmingCancel(Booking),
    ConfirmingDelete(Booking),
    EmailingCsv,
}

#[derive(Properties, PartialEq)]
pub struct BookingListPageProps {
    pub category: BookingCategory,
}

#[function_component]
pub fn BookingListPage(props: &BookingListPageProps) -> Html {
    let category = props.category;
    let toast = use_toast();

    let model =
        use_reducer(move || QueryModel::for_category(category));
    let list = use_list(model.query.clone(), |query: BookingListQuery| async move {
        get_api_client().list_bookings(&query).await
    });

    let dialog = use_state(|| Dialog::None);
    let is_mutating = use_state(|| false);
    let save_error = use_state(|| None::<String>);

    // The router renders all three booking routes through this one
    // component type, so a route change arrives as a prop change on the
    // mounted instance rather than a fresh mount. Rebuild the query for
    // the new category and drop any dialog left open over the old list.
    {
        let model = model.clone();
        let dialog = dialog.clone();
        let save_error = save_error.clone();
        use_effect_with(category, move |category| {
            model.dispatch(QueryAction::CategoryChanged(*category));
            dialog.set(Dialog::None);
            save_error.set(None);
        });
    }

    let close_dialog = {
        let dialog = dialog.clone();
        let save_error = save_error.clone();
        Callback::from(move |_: ()| {
            dialog.set(Dialog::None);
            save_error.set(None);
        })
    };

    let on_filter = {
        let model = model.clone();
        Callback::from(move |event: FilterEvent| {
            model.dispatch(match event {
                FilterEvent::Search(search) => {
                    QueryAction::SearchChanged(search)
                }
                FilterEvent::Status(status) => {
                    QueryAction::StatusChanged(status)
                }
                FilterEvent::Airport(airport) => {
                    QueryAction::AirportChanged(airport)
                }
                FilterEvent::Source(source) => {
                    QueryAction::SourceChanged(source)
                }
                FilterEvent::DateRange(from, to) => {
                    QueryAction::DateRangeChanged(from, to)
                }
            });
        })
    };

    let on_page_change = {
        let model = model.clone();
        Callback::from(move |page: i64| {
            model.dispatch(QueryAction::PageChanged(page));
        })
    };

    // Fire-and-forget row actions; everything else opens a dialog
    let run_action = {
        let toast = toast.clone();
        let refetch = list.refetch.clone();
        let is_mutating = is_mutating.clone();
        move |booking_id: BookingId, action: RowAction| {
            let toast = toast.clone();
            let refetch = refetch.clone();
            let is_mutating = is_mutating.clone();
            is_mutating.set(true);
            yew::platform::spawn_local(async move {
                let api_client = get_api_client();
                let result = match action {
                    RowAction::Complete => {
                        api_client.complete_booking(&booking_id).await
                    }
                    RowAction::SendInvoice => {
                        api_client.send_invoice(&booking_id).await
                    }
                    RowAction::SendEmail => {
                        api_client.send_booking_email(&booking_id).await
                    }
                    RowAction::ConfirmPayment => {
                        api_client.confirm_payment(&booking_id).await
                    }
                    RowAction::Cancel => {
                        api_client.cancel_booking(&booking_id).await
                    }
                    RowAction::Delete => {
                        api_client.delete_booking(&booking_id).await
                    }
                    RowAction::Edit | RowAction::Extend => return,
                };
                match result {
                    Ok(outcome) => {
                        let message = outcome
                            .message
                            .unwrap_or_else(|| "Done.".to_string());
                        toast.success(message);
                        refetch.emit(());
                    }
                    Err(error) => {
                        toast.error(error.to_string());
                    }
                }
                is_mutating.set(false);
            });
        }
    };

    let on_row_action = {
        let dialog = dialog.clone();
        let run_action = run_action.clone();
        Callback::from(move |(action, booking): (RowAction, Booking)| {
            match action {
                RowAction::Edit => dialog.set(Dialog::Editing(booking)),
                RowAction::Extend => dialog.set(Dialog::Extending(booking)),
                RowAction::Cancel => {
                    dialog.set(Dialog::ConfirmingCancel(booking));
                }
                RowAction::Delete => {
                    dialog.set(Dialog::ConfirmingDelete(booking));
                }
                RowAction::Complete
                | RowAction::SendInvoice
                | RowAction::SendEmail
                | RowAction::ConfirmPayment => {
                    run_action(booking.id, action);
                }
            }
        })
    };

    let on_export_csv = {
        let toast = toast.clone();
        let query = model.query.clone();
        let total = list.state.total;
        Callback::from(move |_: MouseEvent| {
            let toast = toast.clone();
            let query = export_query(&query, total);
            yew::platform::spawn_local(async move {
                match get_api_client().list_bookings(&query).await {
                    Ok(page) => {
                        let contents = csv::bookings_csv(&page.data);
                        if download::download_csv("bookings.csv", &contents)
                            .is_none()
                        {
                            toast.error("Download failed.".to_string());
                        }
                    }
                    Err(error) => {
                        toast.error(error.to_string());
                    }
                }
            });
        })
    };

    let on_email_csv_open = {
        let dialog = dialog.clone();
        Callback::from(move |_: MouseEvent| {
            dialog.set(Dialog::EmailingCsv);
        })
    };

    let dialog_html = match (*dialog).clone() {
        Dialog::None => html! {},
        Dialog::Editing(booking) => {
            let on_save = {
                let booking_id = booking.id;
                let toast = toast.clone();
                let refetch = list.refetch.clone();
                let dialog = dialog.clone();
                let is_mutating = is_mutating.clone();
                let save_error = save_error.clone();
                Callback::from(move |details: UpdateBooking| {
                    let toast = toast.clone();
                    let refetch = refetch.clone();
                    let dialog = dialog.clone();
                    let is_mutating = is_mutating.clone();
                    let save_error = save_error.clone();
                    is_mutating.set(true);
                    yew::platform::spawn_local(async move {
                        match get_api_client()
                            .update_booking(&booking_id, &details)
                            .await
                        {
                            Ok(updated) => {
                                toast.success(format!(
                                    "{} updated.",
                                    updated.reference
                                ));
                                save_error.set(None);
                                dialog.set(Dialog::None);
                                refetch.emit(());
                            }
                            // Editor stays open with the attempted values
                            Err(error) => {
                                save_error.set(Some(error.to_string()));
                            }
                        }
                        is_mutating.set(false);
                    });
                })
            };
            html! {
                <BookingEditor
                    booking={booking}
                    on_save={on_save}
                    on_close={close_dialog.clone()}
                    is_saving={*is_mutating}
                    error_message={(*save_error)
                        .clone()
                        .map(AttrValue::from)}
                />
            }
        }
        Dialog::Extending(booking) => {
            let on_extended = {
                let refetch = list.refetch.clone();
                Callback::from(move |_: Booking| refetch.emit(()))
            };
            html! {
                <ExtendBookingModal
                    booking={booking}
                    on_close={close_dialog.clone()}
                    on_extended={on_extended}
                />
            }
        }
        Dialog::ConfirmingCancel(booking) => {
            let on_confirm = {
                let run_action = run_action.clone();
                let dialog = dialog.clone();
                let booking_id = booking.id;
                Callback::from(move |_: ()| {
                    run_action(booking_id, RowAction::Cancel);
                    dialog.set(Dialog::None);
                })
            };
            html! {
                <ConfirmationModal
                    title="Cancel booking"
                    message={format!(
                        "Cancel {} for {}?",
                        booking.reference, booking.customer_name
                    )}
                    confirm_text="Cancel booking"
                    on_confirm={on_confirm}
                    on_close={close_dialog.clone()}
                    is_loading={*is_mutating}
                />
            }
        }
        Dialog::ConfirmingDelete(booking) => {
            let on_confirm = {
                let run_action = run_action.clone();
                let dialog = dialog.clone();
                let booking_id = booking.id;
                Callback::from(move |_: ()| {
                    run_action(booking_id, RowAction::Delete);
                    dialog.set(Dialog::None);
                })
            };
            html! {
                <ConfirmationModal
                    title="Delete booking"
                    message={format!(
                        "Permanently delete {}? This cannot be undone.",
                        booking.reference
                    )}
                    confirm_text="Delete"
                    on_confirm={on_confirm}
                    on_close={close_dialog.clone()}
                    is_loading={*is_mutating}
                />
            }
        }
        Dialog::EmailingCsv => {
            html! {
                <EmailCsvDialog
                    query={model.query.clone()}
                    on_close={close_dialog.clone()}
                />
            }
        }
    };

    html! {
        <div class="space-y-4">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-semibold text-neutral-900 \
                           dark:text-neutral-100">
                    {category.title()}
                </h1>
                <div class="flex gap-2">
                    <button
                        onclick={on_export_csv}
                        class="px-3 py-2 text-sm font-medium border \
                               border-neutral-300 dark:border-neutral-600 \
                               rounded-md hover:bg-neutral-50 \
                               dark:hover:bg-neutral-700"
                    >
                        {"Export CSV"}
                    </button>
                    <button
                        onclick={on_email_csv_open}
                        class="px-3 py-2 text-sm font-medium border \
                               border-neutral-300 dark:border-neutral-600 \
                               rounded-md hover:bg-neutral-50 \
                               dark:hover:bg-neutral-700"
                    >
                        {"Email CSV"}
                    </button>
                </div>
            </div>

            <BookingFilters
                query={model.query.clone()}
                show_status={category.locked_status().is_none()}
                show_source={category.locked_source().is_none()}
                on_change={on_filter}
            />

            if list.state.is_initial_loading() {
                <p class="text-sm text-neutral-500">{"Loading..."}</p>
            } else {
                <>
                    if let Some(error) = &list.state.error {
                        <div class="text-sm text-red-600 dark:text-red-400">
                            {error}
                        </div>
                    }
                    <BookingTable
                        bookings={list.state.rows.clone()}
                        columns={category.columns()}
                        actions={category.actions()}
                        on_action={on_row_action}
                    />
                    <PaginationControls
                        page={model.query.page}
                        limit={model.query.limit}
                        total={list.state.total}
                        on_page_change={on_page_change}
                        is_loading={list.state.is_loading()}
                    />
                </>
            }

            {dialog_html}
        </div>
    }
}

/// Small dialog asking for a recipient; the backend renders and sends
/// the export using the page's current status and date filters.
#[derive(Properties, PartialEq)]
struct EmailCsvDialogProps {
    query: BookingListQuery,
    on_close: Callback<()>,
}

#[function_component]
fn EmailCsvDialog(props: &EmailCsvDialogProps) -> Html {
    let toast = use_toast();
    let recipient = use_state(String::new);
    let is_sending = use_state(|| false);

    let on_recipient = {
        let recipient = recipient.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            recipient.set(input.value());
        })
    };

    let on_send = {
        let recipient = recipient.clone();
        let is_sending = is_sending.clone();
        let on_close = props.on_close.clone();
        let toast = toast.clone();
        let query = props.query.clone();
        Callback::from(move |_: MouseEvent| {
            let details = EmailCsv {
                recipient: (*recipient).clone(),
                status: query.status,
                from_date: query.from_date,
                to_date: query.to_date,
            };
            let is_sending = is_sending.clone();
            let on_close = on_close.clone();
            let toast = toast.clone();
            is_sending.set(true);
            yew::platform::spawn_local(async move {
                match get_api_client().email_csv(&details).await {
                    Ok(outcome) => {
                        let message = outcome
                            .message
                            .unwrap_or_else(|| "CSV sent.".to_string());
                        toast.success(message);
                        on_close.emit(());
                    }
                    Err(error) => {
                        toast.error(error.to_string());
                    }
                }
                is_sending.set(false);
            });
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <Modal on_close={props.on_close.clone()}>
            <h3 class="text-lg font-semibold text-neutral-900 \
                       dark:text-neutral-100 mb-4">
                {"Email CSV export"}
            </h3>
            <input
                type="email"
                class="w-full px-3 py-2 text-sm border border-neutral-300 \
                       dark:border-neutral-600 rounded-md bg-white \
                       dark:bg-neutral-700 text-neutral-900 \
                       dark:text-neutral-100"
                placeholder="recipient@example.com"
                value={(*recipient).clone()}
                oninput={on_recipient}
            />
            <div class="flex justify-end gap-3 mt-6">
                <button
                    onclick={on_cancel}
                    disabled={*is_sending}
                    class="px-4 py-2 text-sm font-medium text-neutral-700 \
                           dark:text-neutral-300 bg-white \
                           dark:bg-neutral-700 border border-neutral-300 \
                           dark:border-neutral-600 rounded-md \
                           hover:bg-neutral-50 disabled:opacity-50"
                >
                    {"Cancel"}
                </button>
                <button
                    onclick={on_send}
                    disabled={*is_sending || recipient.is_empty()}
                    class="px-4 py-2 text-sm font-medium text-white \
                           bg-blue-600 hover:bg-blue-700 rounded-md \
                           disabled:opacity-50"
                >
                    {if *is_sending { "Sending..." } else { "Send" }}
                </button>
            </div>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(model: QueryModel, action: QueryAction) -> QueryModel {
        Rc::unwrap_or_clone(Rc::new(model).reduce(action))
    }

    #[test]
    fn filter_changes_reset_to_first_page() {
        let mut model = QueryModel::for_category(BookingCategory::Confirmed);
        model.query.page = 4;

        let model =
            reduce(model, QueryAction::SearchChanged("priya".into()));
        assert_eq!(model.query.page, 1);
        assert_eq!(model.query.search.as_deref(), Some("priya"));

        let mut model = model;
        model.query.page = 3;
        let model = reduce(
            model,
            QueryAction::AirportChanged(Some("LHR".into())),
        );
        assert_eq!(model.query.page, 1);
    }

    #[test]
    fn page_change_keeps_filters() {
        let model = QueryModel::for_category(BookingCategory::Confirmed);
        let model =
            reduce(model, QueryAction::SearchChanged("webb".into()));
        let model = reduce(model, QueryAction::PageChanged(2));
        assert_eq!(model.query.page, 2);
        assert_eq!(model.query.search.as_deref(), Some("webb"));
    }

    #[test]
    fn blank_search_clears_the_filter() {
        let model = QueryModel::for_category(BookingCategory::Confirmed);
        let model =
            reduce(model, QueryAction::SearchChanged("priya".into()));
        let model = reduce(model, QueryAction::SearchChanged("  ".into()));
        assert_eq!(model.query.search, None);
    }

    #[test]
    fn incomplete_category_pins_status() {
        let model = QueryModel::for_category(BookingCategory::Incomplete);
        assert_eq!(model.query.status, Some(BookingStatus::Incomplete));

        let model = reduce(
            model,
            QueryAction::StatusChanged(Some(BookingStatus::Cancelled)),
        );
        assert_eq!(model.query.status, Some(BookingStatus::Incomplete));
    }

    #[test]
    fn website_category_pins_source() {
        let model = QueryModel::for_category(BookingCategory::Website);
        let model = reduce(
            model,
            QueryAction::SourceChanged(Some(BookingSource::Phone)),
        );
        assert_eq!(model.query.source, Some(BookingSource::Website));
    }

    #[test]
    fn category_change_rebuilds_the_query() {
        let model = QueryModel::for_category(BookingCategory::Confirmed);
        let model =
            reduce(model, QueryAction::SearchChanged("webb".into()));
        let model = reduce(
            model,
            QueryAction::AirportChanged(Some("LHR".into())),
        );
        let model = reduce(model, QueryAction::PageChanged(3));

        // Nothing from the old category may leak into the new one.
        let model = reduce(
            model,
            QueryAction::CategoryChanged(BookingCategory::Incomplete),
        );
        assert_eq!(
            model,
            QueryModel::for_category(BookingCategory::Incomplete)
        );
        assert_eq!(model.query.status, Some(BookingStatus::Incomplete));
        assert_eq!(model.query.search, None);
        assert_eq!(model.query.page, 1);
    }

    #[test]
    fn same_category_keeps_the_query() {
        let model = QueryModel::for_category(BookingCategory::Website);
        let model =
            reduce(model, QueryAction::SearchChanged("webb".into()));

        let same = reduce(
            model.clone(),
            QueryAction::CategoryChanged(BookingCategory::Website),
        );
        assert_eq!(same, model);
    }

    #[test]
    fn export_query_covers_every_filtered_row() {
        let model = QueryModel::for_category(BookingCategory::Confirmed);
        let model = reduce(
            model,
            QueryAction::AirportChanged(Some("LHR".into())),
        );
        let model = reduce(model, QueryAction::PageChanged(3));

        let query = export_query(&model.query, 47);
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 47);
        assert_eq!(query.airport.as_deref(), Some("LHR"));

        // An empty list still yields a valid query.
        assert_eq!(export_query(&model.query, 0).limit, 1);
    }

    #[test]
    fn page_never_goes_below_one() {
        let model = QueryModel::for_category(BookingCategory::Confirmed);
        let model = reduce(model, QueryAction::PageChanged(0));
        assert_eq!(model.query.page, 1);
    }
}
