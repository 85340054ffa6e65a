use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::Route;
use crate::state::State;

#[function_component]
pub fn HomePage() -> Html {
    let (state, _) = use_store::<State>();

    let greeting = match state.profile() {
        Some(profile) => format!("Welcome back, {}", profile.username),
        None => "Welcome".to_string(),
    };

    // The dashboard proper lives on the list pages; home is a jump-off
    let card = |route: Route, title: &str, blurb: &str| {
        html! {
            <Link<Route>
                to={route}
                classes="block p-6 border border-neutral-200 \
                         dark:border-neutral-700 rounded-lg \
                         hover:bg-neutral-50 dark:hover:bg-neutral-800"
            >
                <h2 class="text-lg font-semibold text-neutral-900 \
                           dark:text-neutral-100">
                    {title.to_string()}
                </h2>
                <p class="text-sm text-neutral-600 dark:text-neutral-400">
                    {blurb.to_string()}
                </p>
            </Link<Route>>
        }
    };

    html! {
        <div class="space-y-6">
            <h1 class="text-2xl font-semibold text-neutral-900 \
                       dark:text-neutral-100">
                {greeting}
            </h1>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                {card(Route::Bookings, "Bookings",
                    "Confirmed and historic bookings")}
                {card(Route::IncompleteBookings, "Incomplete",
                    "Bookings awaiting payment")}
                {card(Route::WebsiteBookings, "Website",
                    "Bookings placed through the website")}
                {card(Route::CreateBooking, "New booking",
                    "Take a booking over the phone")}
                {card(Route::Suppliers, "Suppliers",
                    "Parking operators")}
                {card(Route::Products, "Products",
                    "Parking and meet & greet offerings")}
            </div>
        </div>
    }
}
