//! Client-side CSV rendering of a booking list.
//!
//! Column order is fixed and every field is quoted, so downstream
//! spreadsheet imports behave the same regardless of what names or
//! registrations contain.

use payloads::Booking;

use crate::utils::money::format_amount;
use crate::utils::time::display_datetime;

pub const BOOKING_CSV_COLUMNS: [&str; 13] = [
    "Ref No",
    "Source",
    "Customer Name",
    "Phone",
    "Product",
    "Make/Model",
    "Color",
    "Booked On",
    "Dropoff",
    "Return",
    "Reg",
    "Amount",
    "Status",
];

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

fn row(fields: &[String]) -> String {
    fields
        .iter()
        .map(|f| quote(f))
        .collect::<Vec<_>>()
        .join(",")
}

pub fn booking_row(booking: &Booking) -> String {
    row(&[
        booking.reference.clone(),
        booking.source.to_string(),
        booking.customer_name.clone(),
        booking.customer_phone.clone(),
        booking.product_name.clone(),
        format!("{} {}", booking.vehicle_make, booking.vehicle_model),
        booking.vehicle_color.clone(),
        display_datetime(booking.booked_at),
        display_datetime(booking.dropoff_at),
        display_datetime(booking.return_at),
        booking.vehicle_registration.clone(),
        format_amount(booking.quote.total_payable()),
        booking.status.to_string(),
    ])
}

pub fn bookings_csv(bookings: &[Booking]) -> String {
    let header = row(
        &BOOKING_CSV_COLUMNS
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>(),
    );
    let mut lines = vec![header];
    lines.extend(bookings.iter().map(booking_row));
    lines.join("\r\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use payloads::time::parse_sql_datetime;
    use payloads::{
        BookingId, BookingSource, BookingStatus, PriceQuote, ProductId,
    };
    use rust_decimal::dec;

    fn booking() -> Booking {
        Booking {
            id: BookingId(1),
            reference: "PD-000001".into(),
            source: BookingSource::Website,
            status: BookingStatus::Confirmed,
            customer_name: "Priya Shah".into(),
            customer_phone: "07700 900123".into(),
            customer_email: "priya@example.com".into(),
            product_id: ProductId(1),
            product_name: "Park & Ride LHR".into(),
            airport: "LHR".into(),
            vehicle_make: "Ford".into(),
            vehicle_model: "Focus".into(),
            vehicle_color: "Blue".into(),
            vehicle_registration: "LT66 XKP".into(),
            booked_at: parse_sql_datetime("2026-02-01 09:00:00").unwrap(),
            dropoff_at: parse_sql_datetime("2026-03-10 10:00:00").unwrap(),
            return_at: parse_sql_datetime("2026-03-15 10:00:00").unwrap(),
            quote: PriceQuote {
                quote_amount: dec!(100.00),
                booking_fee: dec!(1.99),
                has_cancellation_cover: false,
                cancellation_fee: dec!(9.99),
                discount: dec!(0),
            },
        }
    }

    #[test]
    fn every_field_is_quoted() {
        let csv = bookings_csv(&[booking()]);
        let lines: Vec<&str> = csv.split("\r\n").collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("\"Ref No\",\"Source\""));
        assert!(lines[1].contains("\"PD-000001\""));
        assert!(lines[1].contains("\"Ford Focus\""));
        assert!(lines[1].contains("\"10 Mar, 2026 10:00\""));
        // Amount is the recomputed total, not the stored quote
        assert!(lines[1].contains("\"101.99\""));
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        let mut b = booking();
        b.customer_name = "Priya \"P\" Shah".into();
        assert!(booking_row(&b).contains("\"Priya \"\"P\"\" Shah\""));
    }

    #[test]
    fn column_order_is_fixed() {
        let header = bookings_csv(&[]);
        assert_eq!(
            header,
            "\"Ref No\",\"Source\",\"Customer Name\",\"Phone\",\"Product\",\
             \"Make/Model\",\"Color\",\"Booked On\",\"Dropoff\",\"Return\",\
             \"Reg\",\"Amount\",\"Status\""
        );
    }
}
