use derive_more::Display;
use jiff::civil::DateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub mod api_client;
pub mod pricing;
pub mod requests;
pub mod responses;
pub mod time;

pub use api_client::{APIClient, ClientError};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
)]
#[serde(transparent)]
pub struct BookingId(pub i64);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
)]
#[serde(transparent)]
pub struct SupplierId(pub i64);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
)]
#[serde(transparent)]
pub struct ProductId(pub i64);

/// Lifecycle state of a booking as reported by the backend.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display,
)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    #[display("Confirmed")]
    Confirmed,
    /// Saved without completed payment, pending confirmation.
    #[display("Incomplete")]
    Incomplete,
    #[display("Completed")]
    Completed,
    #[display("Cancelled")]
    Cancelled,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 4] = [
        BookingStatus::Confirmed,
        BookingStatus::Incomplete,
        BookingStatus::Completed,
        BookingStatus::Cancelled,
    ];
}

/// Where the booking originated.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display,
)]
#[serde(rename_all = "snake_case")]
pub enum BookingSource {
    #[display("Website")]
    Website,
    #[display("Phone")]
    Phone,
    #[display("Affiliate")]
    Affiliate,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display,
)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    #[display("Park & Ride")]
    ParkAndRide,
    #[display("Meet & Greet")]
    MeetAndGreet,
}

/// Components of a booking's price.
///
/// The total is never stored, here or anywhere else client-side; it is
/// recomputed from these components on every render so the displayed figure
/// cannot drift from its inputs. The backend remains the authority on what
/// is actually charged.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PriceQuote {
    #[serde(default)]
    pub quote_amount: Decimal,
    #[serde(default)]
    pub booking_fee: Decimal,
    #[serde(default)]
    pub has_cancellation_cover: bool,
    #[serde(default)]
    pub cancellation_fee: Decimal,
    #[serde(default)]
    pub discount: Decimal,
}

impl PriceQuote {
    /// Preview of the amount payable. Display-only.
    pub fn total_payable(&self) -> Decimal {
        pricing::total_payable(
            self.quote_amount,
            self.booking_fee,
            self.has_cancellation_cover,
            self.cancellation_fee,
            self.discount,
        )
    }
}

/// A reservation of a parking product for a date range, tied to a customer
/// and vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    /// Customer-facing reference, assigned by the backend.
    pub reference: String,
    pub source: BookingSource,
    pub status: BookingStatus,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: String,
    pub product_id: ProductId,
    pub product_name: String,
    pub airport: String,
    pub vehicle_make: String,
    pub vehicle_model: String,
    pub vehicle_color: String,
    pub vehicle_registration: String,
    #[serde(with = "time::sql_datetime")]
    pub booked_at: DateTime,
    #[serde(with = "time::sql_datetime")]
    pub dropoff_at: DateTime,
    #[serde(with = "time::sql_datetime")]
    pub return_at: DateTime,
    #[serde(flatten)]
    pub quote: PriceQuote,
}

/// A parking operator selling products at an airport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: SupplierId,
    pub name: String,
    pub airport: String,
    pub contact_name: String,
    pub phone: String,
    pub email: String,
    pub active: bool,
}

/// A sellable parking/meet-and-greet offering at an airport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub supplier_id: SupplierId,
    pub name: String,
    pub airport: String,
    pub service_type: ServiceType,
    /// Per-day rate used by the backend when quoting a date range.
    pub daily_rate: Decimal,
    /// Operational hours, e.g. "04:00" - "23:30".
    pub opens_at: String,
    pub closes_at: String,
    pub active: bool,
}
