use crate::{
    BookingSource, BookingStatus, ProductId, ServiceType, SupplierId, time,
};
use jiff::civil::{Date, DateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

/// Query parameters accepted by the booking collection endpoint.
///
/// `page` is 1-indexed; the backend applies `search` and the domain
/// filters server-side and reports the filtered total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingListQuery {
    pub page: i64,
    pub limit: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BookingStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airport: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<BookingSource>,
    /// Inclusive drop-off date bounds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_date: Option<Date>,
}

impl Default for BookingListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 20,
            search: None,
            status: None,
            airport: None,
            source: None,
            from_date: None,
            to_date: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierListQuery {
    pub page: i64,
    pub limit: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airport: Option<String>,
}

impl Default for SupplierListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 20,
            search: None,
            airport: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductListQuery {
    pub page: i64,
    pub limit: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airport: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_type: Option<ServiceType>,
}

impl Default for ProductListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 20,
            search: None,
            airport: None,
            service_type: None,
        }
    }
}

/// Create a booking. The backend assigns the reference, computes the
/// authoritative quote from the product and date range, and stamps
/// `booked_at`; the client never sends a price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateBooking {
    pub product_id: ProductId,
    pub source: BookingSource,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: String,
    pub vehicle_make: String,
    pub vehicle_model: String,
    pub vehicle_color: String,
    pub vehicle_registration: String,
    #[serde(with = "time::sql_datetime")]
    pub dropoff_at: DateTime,
    #[serde(with = "time::sql_datetime")]
    pub return_at: DateTime,
    pub has_cancellation_cover: bool,
}

/// Editable booking fields. Dates and cover changes cause the backend to
/// requote; the discount is the one price component staff set directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateBooking {
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: String,
    pub vehicle_make: String,
    pub vehicle_model: String,
    pub vehicle_color: String,
    pub vehicle_registration: String,
    #[serde(with = "time::sql_datetime")]
    pub dropoff_at: DateTime,
    #[serde(with = "time::sql_datetime")]
    pub return_at: DateTime,
    pub has_cancellation_cover: bool,
    pub discount: Decimal,
}

impl From<&crate::Booking> for UpdateBooking {
    fn from(booking: &crate::Booking) -> Self {
        Self {
            customer_name: booking.customer_name.clone(),
            customer_phone: booking.customer_phone.clone(),
            customer_email: booking.customer_email.clone(),
            vehicle_make: booking.vehicle_make.clone(),
            vehicle_model: booking.vehicle_model.clone(),
            vehicle_color: booking.vehicle_color.clone(),
            vehicle_registration: booking.vehicle_registration.clone(),
            dropoff_at: booking.dropoff_at,
            return_at: booking.return_at,
            has_cancellation_cover: booking.quote.has_cancellation_cover,
            discount: booking.quote.discount,
        }
    }
}

/// Ask the backend to quote an extension to a later return date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtendPreview {
    #[serde(with = "time::sql_datetime")]
    pub new_return_at: DateTime,
}

/// Commit an extension. `extra_charge` is the staff-entered manual
/// adjustment from the preview screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtendBooking {
    #[serde(with = "time::sql_datetime")]
    pub new_return_at: DateTime,
    #[serde(default)]
    pub extra_charge: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSupplier {
    pub name: String,
    pub airport: String,
    pub contact_name: String,
    pub phone: String,
    pub email: String,
    pub active: bool,
}

pub type UpdateSupplier = CreateSupplier;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateProduct {
    pub supplier_id: SupplierId,
    pub name: String,
    pub airport: String,
    pub service_type: ServiceType,
    pub daily_rate: Decimal,
    pub opens_at: String,
    pub closes_at: String,
    pub active: bool,
}

pub type UpdateProduct = CreateProduct;

/// Email a CSV export of bookings matching the filters to a recipient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailCsv {
    pub recipient: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BookingStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_date: Option<Date>,
}
