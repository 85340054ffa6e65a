use payloads::APIClient;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod components;
pub mod contexts;
pub mod hooks;
mod logs;
pub mod pages;
pub mod state;
pub mod utils;

pub use state::{AuthState, State};

use crate::components::{Layout, RequireAuth};
use crate::contexts::toast::ToastProvider;
use crate::pages::{
    BookingCategory, BookingListPage, CreateBookingPage, HomePage, LoginPage,
    NotFoundPage, ProductsPage, SuppliersPage,
};

/// localStorage key for the bearer-token fallback. The session cookie is
/// the primary credential; the token only covers environments where the
/// cookie cannot be set.
pub const BEARER_TOKEN_STORAGE_KEY: &str = "parkdesk_token";

// Global API client - configurable via environment or same-origin fallback
pub fn get_api_client() -> APIClient {
    // Try environment variable first (set at build time)
    let address = option_env!("BACKEND_URL")
        .map(|url| url.to_string())
        .unwrap_or_else(|| {
            // Fallback to same origin (current setup)
            let window = web_sys::window().unwrap();
            let location = window.location();
            location.origin().unwrap()
        });

    let client = APIClient::new(address);
    match stored_bearer_token() {
        Some(token) => client.with_bearer_token(token),
        None => client,
    }
}

fn stored_bearer_token() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(BEARER_TOKEN_STORAGE_KEY).ok()?
}

#[function_component]
pub fn App() -> Html {
    use_effect_with((), |_| logs::init_logging());

    html! {
        <ToastProvider>
            <BrowserRouter>
                <div class="min-h-screen bg-white dark:bg-gray-900 \
                            text-gray-900 dark:text-gray-100">
                    <Switch<Route> render={switch} />
                </div>
            </BrowserRouter>
        </ToastProvider>
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/bookings")]
    Bookings,
    #[at("/bookings/incomplete")]
    IncompleteBookings,
    #[at("/bookings/website")]
    WebsiteBookings,
    #[at("/bookings/new")]
    CreateBooking,
    #[at("/suppliers")]
    Suppliers,
    #[at("/products")]
    Products,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Login => html! { <LoginPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
        route => html! {
            <RequireAuth>
                <Layout>
                    {match route {
                        Route::Home => html! { <HomePage /> },
                        Route::Bookings => html! {
                            <BookingListPage
                                category={BookingCategory::Confirmed} />
                        },
                        Route::IncompleteBookings => html! {
                            <BookingListPage
                                category={BookingCategory::Incomplete} />
                        },
                        Route::WebsiteBookings => html! {
                            <BookingListPage
                                category={BookingCategory::Website} />
                        },
                        Route::CreateBooking => html! {
                            <CreateBookingPage />
                        },
                        Route::Suppliers => html! { <SuppliersPage /> },
                        Route::Products => html! { <ProductsPage /> },
                        Route::Login | Route::NotFound => unreachable!(),
                    }}
                </Layout>
            </RequireAuth>
        },
    }
}
