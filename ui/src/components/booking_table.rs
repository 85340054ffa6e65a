use payloads::Booking;
use yew::prelude::*;

use crate::components::StatusBadge;
use crate::utils::{
    money::format_amount,
    time::{display_date, display_datetime},
};

/// Columns a booking list can show. Each category of list page picks its
/// own subset and order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingColumn {
    Reference,
    Source,
    Customer,
    Phone,
    Product,
    Airport,
    Vehicle,
    Registration,
    BookedOn,
    Dropoff,
    Return,
    Amount,
    Status,
}

impl BookingColumn {
    fn header(&self) -> &'static str {
        match self {
            BookingColumn::Reference => "Ref No",
            BookingColumn::Source => "Source",
            BookingColumn::Customer => "Customer",
            BookingColumn::Phone => "Phone",
            BookingColumn::Product => "Product",
            BookingColumn::Airport => "Airport",
            BookingColumn::Vehicle => "Vehicle",
            BookingColumn::Registration => "Reg",
            BookingColumn::BookedOn => "Booked On",
            BookingColumn::Dropoff => "Dropoff",
            BookingColumn::Return => "Return",
            BookingColumn::Amount => "Amount",
            BookingColumn::Status => "Status",
        }
    }

    fn cell(&self, booking: &Booking) -> Html {
        match self {
            BookingColumn::Reference => html! { &booking.reference },
            BookingColumn::Source => html! { booking.source.to_string() },
            BookingColumn::Customer => html! { &booking.customer_name },
            BookingColumn::Phone => html! { &booking.customer_phone },
            BookingColumn::Product => html! { &booking.product_name },
            BookingColumn::Airport => html! { &booking.airport },
            BookingColumn::Vehicle => html! {
                format!("{} {}", booking.vehicle_make, booking.vehicle_model)
            },
            BookingColumn::Registration => {
                html! { &booking.vehicle_registration }
            }
            // The capture date alone is enough here; the exact time
            // stays in the CSV export.
            BookingColumn::BookedOn => {
                html! { display_date(booking.booked_at) }
            }
            BookingColumn::Dropoff => {
                html! { display_datetime(booking.dropoff_at) }
            }
            BookingColumn::Return => {
                html! { display_datetime(booking.return_at) }
            }
            // Always recomputed from the quote components
            BookingColumn::Amount => {
                html! { format_amount(booking.quote.total_payable()) }
            }
            BookingColumn::Status => html! {
                <StatusBadge status={booking.status} />
            },
        }
    }
}

/// Row-level actions a list page can offer. Which ones appear depends on
/// the page's booking category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit,
    Extend,
    Cancel,
    Complete,
    Delete,
    SendInvoice,
    SendEmail,
    ConfirmPayment,
}

impl RowAction {
    fn label(&self) -> &'static str {
        match self {
            RowAction::Edit => "Edit",
            RowAction::Extend => "Extend",
            RowAction::Cancel => "Cancel",
            RowAction::Complete => "Complete",
            RowAction::Delete => "Delete",
            RowAction::SendInvoice => "Invoice",
            RowAction::SendEmail => "Email",
            RowAction::ConfirmPayment => "Confirm Payment",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct BookingTableProps {
    pub bookings: Vec<Booking>,
    pub columns: Vec<BookingColumn>,
    pub actions: Vec<RowAction>,
    pub on_action: Callback<(RowAction, Booking)>,
}

#[function_component]
pub fn BookingTable(props: &BookingTableProps) -> Html {
    let header_class = "px-4 py-3 text-left text-xs font-medium \
                        text-neutral-500 dark:text-neutral-400 uppercase \
                        tracking-wider";
    let cell_class = "px-4 py-3 text-sm text-neutral-900 \
                      dark:text-neutral-100 whitespace-nowrap";

    html! {
        <div class="overflow-x-auto border border-neutral-200 \
                    dark:border-neutral-700 rounded-lg">
            <table class="min-w-full divide-y divide-neutral-200 \
                          dark:divide-neutral-700">
                <thead class="bg-neutral-50 dark:bg-neutral-800">
                    <tr>
                        {for props.columns.iter().map(|column| html! {
                            <th class={header_class}>{column.header()}</th>
                        })}
                        if !props.actions.is_empty() {
                            <th class={header_class}>{"Actions"}</th>
                        }
                    </tr>
                </thead>
                <tbody class="divide-y divide-neutral-200 \
                              dark:divide-neutral-700">
                    {for props.bookings.iter().map(|booking| {
                        html! {
                            <tr key={booking.id.0}>
                                {for props.columns.iter().map(|column| html! {
                                    <td class={cell_class}>
                                        {column.cell(booking)}
                                    </td>
                                })}
                                if !props.actions.is_empty() {
                                    <td class={cell_class}>
                                        <div class="flex gap-2">
                                            {for props.actions.iter().map(
                                                |action| {
                                                    action_button(
                                                        *action,
                                                        booking.clone(),
                                                        props.on_action
                                                            .clone(),
                                                    )
                                                },
                                            )}
                                        </div>
                                    </td>
                                }
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        </div>
    }
}

fn action_button(
    action: RowAction,
    booking: Booking,
    on_action: Callback<(RowAction, Booking)>,
) -> Html {
    let onclick = Callback::from(move |_: MouseEvent| {
        on_action.emit((action, booking.clone()));
    });
    html! {
        <button
            {onclick}
            class="text-sm font-medium text-blue-600 dark:text-blue-400 \
                   hover:underline"
        >
            {action.label()}
        </button>
    }
}
