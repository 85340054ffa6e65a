use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::components::ToastContainer;
use crate::hooks::use_logout;
use crate::{Route, State};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

#[function_component]
pub fn Layout(props: &LayoutProps) -> Html {
    html! {
        <div class="min-h-screen bg-white dark:bg-gray-900 text-gray-900 \
                    dark:text-gray-100">
            <Header />
            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                {for props.children.iter()}
            </main>
            <ToastContainer />
        </div>
    }
}

#[function_component]
fn Header() -> Html {
    let (state, _) = use_store::<State>();
    let logout = use_logout();

    let on_logout = Callback::from(move |_: MouseEvent| logout.emit(()));

    let nav_link = |route: Route, label: &str| {
        html! {
            <Link<Route>
                to={route}
                classes="px-3 py-2 text-sm font-medium text-gray-700 \
                         dark:text-gray-300 hover:text-gray-900 \
                         dark:hover:text-white"
            >
                {label}
            </Link<Route>>
        }
    };

    html! {
        <header class="bg-white dark:bg-gray-800 border-b border-gray-200 \
                       dark:border-gray-700">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center space-x-2">
                        <h1 class="text-xl font-semibold text-gray-900 \
                                   dark:text-white mr-4">
                            {"ParkDesk"}
                        </h1>
                        {nav_link(Route::Bookings, "Bookings")}
                        {nav_link(Route::IncompleteBookings, "Incomplete")}
                        {nav_link(Route::WebsiteBookings, "Website")}
                        {nav_link(Route::CreateBooking, "New Booking")}
                        {nav_link(Route::Suppliers, "Suppliers")}
                        {nav_link(Route::Products, "Products")}
                    </div>
                    <div class="flex items-center space-x-4">
                        if let Some(profile) = state.profile() {
                            <span class="text-sm text-gray-600 \
                                         dark:text-gray-400">
                                {&profile.username}
                            </span>
                        }
                        <button
                            onclick={on_logout}
                            class="px-3 py-2 text-sm font-medium \
                                   text-gray-700 dark:text-gray-300 \
                                   hover:text-gray-900 dark:hover:text-white"
                        >
                            {"Log out"}
                        </button>
                    </div>
                </div>
            </div>
        </header>
    }
}
