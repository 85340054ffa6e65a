pub mod bookings;
pub mod create_booking;
pub mod home;
pub mod login;
pub mod not_found;
pub mod products;
pub mod suppliers;

pub use bookings::{BookingCategory, BookingListPage};
pub use create_booking::CreateBookingPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use products::ProductsPage;
pub use suppliers::SuppliersPage;
