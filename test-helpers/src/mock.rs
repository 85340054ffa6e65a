//! Seed data for the mock booking backend.
//!
//! Used by the client integration tests and the dev-server so the
//! dashboard has something realistic to show: two suppliers, products at
//! two airports, and bookings in every lifecycle state.

use crate::TestApp;
use crate::backend::{self, BOOKING_FEE, CANCELLATION_FEE};
use anyhow::Result;
use jiff::civil::{DateTime, date};
use payloads::{
    Booking, BookingId, BookingSource, BookingStatus, PriceQuote, Product,
    ProductId, ServiceType, Supplier, SupplierId,
};
use rust_decimal::{Decimal, dec};

pub struct DevDataset {
    pub gateway_supplier: Supplier,
    pub skyline_supplier: Supplier,
    /// LHR Park & Ride at 20.00/day.
    pub park_ride_lhr: Product,
    /// LHR Meet & Greet at 35.00/day.
    pub meet_greet_lhr: Product,
    /// LGW Park & Ride at 15.00/day.
    pub park_ride_lgw: Product,
    pub confirmed_booking: Booking,
    pub incomplete_booking: Booking,
    pub phone_booking: Booking,
    pub cancelled_booking: Booking,
    pub completed_booking: Booking,
}

impl DevDataset {
    pub async fn create(app: &TestApp) -> Result<Self> {
        let gateway_supplier = seed_supplier(
            app,
            "Gateway Parking Ltd",
            "LHR",
            "Raj Mehta",
            "+44 20 7946 0111",
            "ops@gatewayparking.example",
        );
        let skyline_supplier = seed_supplier(
            app,
            "Skyline Airport Services",
            "LGW",
            "Emma Doyle",
            "+44 1293 555 0199",
            "bookings@skyline.example",
        );

        let park_ride_lhr = seed_product(
            app,
            &gateway_supplier,
            "Long Stay Park & Ride",
            "LHR",
            ServiceType::ParkAndRide,
            dec!(20.00),
        );
        let meet_greet_lhr = seed_product(
            app,
            &gateway_supplier,
            "Terminal Meet & Greet",
            "LHR",
            ServiceType::MeetAndGreet,
            dec!(35.00),
        );
        let park_ride_lgw = seed_product(
            app,
            &skyline_supplier,
            "South Terminal Park & Ride",
            "LGW",
            ServiceType::ParkAndRide,
            dec!(15.00),
        );

        let confirmed_booking = seed_booking(
            app,
            &park_ride_lhr,
            SeedBooking {
                status: BookingStatus::Confirmed,
                source: BookingSource::Website,
                customer_name: "Priya Shah",
                customer_phone: "+44 7700 900123",
                customer_email: "priya.shah@example.com",
                vehicle: ("Ford", "Focus", "Blue", "LT66 XKP"),
                booked_at: date(2026, 2, 1).at(9, 15, 0, 0),
                dropoff_at: date(2026, 3, 10).at(10, 0, 0, 0),
                return_at: date(2026, 3, 15).at(10, 0, 0, 0),
                has_cancellation_cover: false,
                discount: Decimal::ZERO,
            },
        );
        let incomplete_booking = seed_booking(
            app,
            &meet_greet_lhr,
            SeedBooking {
                status: BookingStatus::Incomplete,
                source: BookingSource::Website,
                customer_name: "Tom Harris",
                customer_phone: "+44 7700 900456",
                customer_email: "tom.harris@example.com",
                vehicle: ("Volkswagen", "Golf", "Silver", "WR19 HJC"),
                booked_at: date(2026, 2, 3).at(18, 40, 0, 0),
                dropoff_at: date(2026, 4, 2).at(6, 30, 0, 0),
                return_at: date(2026, 4, 9).at(21, 0, 0, 0),
                has_cancellation_cover: true,
                discount: Decimal::ZERO,
            },
        );
        let phone_booking = seed_booking(
            app,
            &park_ride_lgw,
            SeedBooking {
                status: BookingStatus::Confirmed,
                source: BookingSource::Phone,
                customer_name: "Ana Costa",
                customer_phone: "+44 7700 900789",
                customer_email: "ana.costa@example.com",
                vehicle: ("Toyota", "Yaris", "Red", "KP21 VVD"),
                booked_at: date(2026, 2, 5).at(11, 5, 0, 0),
                dropoff_at: date(2026, 3, 20).at(5, 45, 0, 0),
                return_at: date(2026, 3, 22).at(23, 15, 0, 0),
                has_cancellation_cover: true,
                discount: dec!(2.00),
            },
        );
        let cancelled_booking = seed_booking(
            app,
            &park_ride_lhr,
            SeedBooking {
                status: BookingStatus::Cancelled,
                source: BookingSource::Affiliate,
                customer_name: "Mark Webb",
                customer_phone: "+44 7700 900321",
                customer_email: "mark.webb@example.com",
                vehicle: ("BMW", "320d", "Black", "EO68 TYH"),
                booked_at: date(2026, 1, 20).at(14, 0, 0, 0),
                dropoff_at: date(2026, 2, 14).at(7, 0, 0, 0),
                return_at: date(2026, 2, 16).at(19, 30, 0, 0),
                has_cancellation_cover: false,
                discount: Decimal::ZERO,
            },
        );
        let completed_booking = seed_booking(
            app,
            &park_ride_lgw,
            SeedBooking {
                status: BookingStatus::Completed,
                source: BookingSource::Website,
                customer_name: "Lucy Gray",
                customer_phone: "+44 7700 900654",
                customer_email: "lucy.gray@example.com",
                vehicle: ("Mini", "Cooper", "Green", "LD70 PLX"),
                booked_at: date(2025, 12, 18).at(8, 25, 0, 0),
                dropoff_at: date(2026, 1, 5).at(4, 30, 0, 0),
                return_at: date(2026, 1, 12).at(12, 0, 0, 0),
                has_cancellation_cover: false,
                discount: Decimal::ZERO,
            },
        );

        Ok(Self {
            gateway_supplier,
            skyline_supplier,
            park_ride_lhr,
            meet_greet_lhr,
            park_ride_lgw,
            confirmed_booking,
            incomplete_booking,
            phone_booking,
            cancelled_booking,
            completed_booking,
        })
    }

    pub fn print_summary(&self) {
        tracing::info!(
            "Seeded 2 suppliers, 3 products, 5 bookings \
             (statuses: confirmed x2, incomplete, cancelled, completed)"
        );
        tracing::info!(
            "Confirmed booking for extension demos: {} ({})",
            self.confirmed_booking.reference,
            self.confirmed_booking.customer_name,
        );
    }
}

fn seed_supplier(
    app: &TestApp,
    name: &str,
    airport: &str,
    contact_name: &str,
    phone: &str,
    email: &str,
) -> Supplier {
    let supplier = Supplier {
        id: SupplierId(app.state.allocate_id()),
        name: name.into(),
        airport: airport.into(),
        contact_name: contact_name.into(),
        phone: phone.into(),
        email: email.into(),
        active: true,
    };
    app.state.suppliers.lock().unwrap().push(supplier.clone());
    supplier
}

fn seed_product(
    app: &TestApp,
    supplier: &Supplier,
    name: &str,
    airport: &str,
    service_type: ServiceType,
    daily_rate: Decimal,
) -> Product {
    let product = Product {
        id: ProductId(app.state.allocate_id()),
        supplier_id: supplier.id,
        name: name.into(),
        airport: airport.into(),
        service_type,
        daily_rate,
        opens_at: "04:00".into(),
        closes_at: "23:30".into(),
        active: true,
    };
    app.state.products.lock().unwrap().push(product.clone());
    product
}

struct SeedBooking {
    status: BookingStatus,
    source: BookingSource,
    customer_name: &'static str,
    customer_phone: &'static str,
    customer_email: &'static str,
    vehicle: (&'static str, &'static str, &'static str, &'static str),
    booked_at: DateTime,
    dropoff_at: DateTime,
    return_at: DateTime,
    has_cancellation_cover: bool,
    discount: Decimal,
}

fn seed_booking(
    app: &TestApp,
    product: &Product,
    seed: SeedBooking,
) -> Booking {
    let id = BookingId(app.state.allocate_id());
    let (make, model, color, registration) = seed.vehicle;
    let booking = Booking {
        id,
        reference: format!("PD-{:06}", id.0),
        source: seed.source,
        status: seed.status,
        customer_name: seed.customer_name.into(),
        customer_phone: seed.customer_phone.into(),
        customer_email: seed.customer_email.into(),
        product_id: product.id,
        product_name: product.name.clone(),
        airport: product.airport.clone(),
        vehicle_make: make.into(),
        vehicle_model: model.into(),
        vehicle_color: color.into(),
        vehicle_registration: registration.into(),
        booked_at: seed.booked_at,
        dropoff_at: seed.dropoff_at,
        return_at: seed.return_at,
        quote: PriceQuote {
            quote_amount: backend::quote_for(
                product.daily_rate,
                seed.dropoff_at,
                seed.return_at,
            ),
            booking_fee: BOOKING_FEE,
            has_cancellation_cover: seed.has_cancellation_cover,
            cancellation_fee: CANCELLATION_FEE,
            discount: seed.discount,
        },
    };
    app.state.bookings.lock().unwrap().push(booking.clone());
    booking
}
