use jiff::civil::date;
use payloads::{BookingId, BookingSource, BookingStatus, requests};
use reqwest::StatusCode;
use rust_decimal::dec;
use test_helpers::{
    assert_rejected, assert_status_code, mock::DevDataset, spawn_app,
};

#[tokio::test]
async fn pagination_reports_filtered_total() -> anyhow::Result<()> {
    let app = spawn_app().await;
    DevDataset::create(&app).await?;
    app.login_admin().await?;

    let page = app
        .client
        .list_bookings(&requests::BookingListQuery {
            limit: 2,
            ..Default::default()
        })
        .await?;
    assert_eq!(page.data.len(), 2);
    assert_eq!(page.total, 5);

    let last = app
        .client
        .list_bookings(&requests::BookingListQuery {
            page: 3,
            limit: 2,
            ..Default::default()
        })
        .await?;
    assert_eq!(last.data.len(), 1);
    assert_eq!(last.total, 5);

    Ok(())
}

#[tokio::test]
async fn search_matches_name_and_registration() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let dataset = DevDataset::create(&app).await?;
    app.login_admin().await?;

    let by_name = app
        .client
        .list_bookings(&requests::BookingListQuery {
            search: Some("priya".into()),
            ..Default::default()
        })
        .await?;
    assert_eq!(by_name.total, 1);
    assert_eq!(by_name.data[0].id, dataset.confirmed_booking.id);

    let by_reg = app
        .client
        .list_bookings(&requests::BookingListQuery {
            search: Some("wr19".into()),
            ..Default::default()
        })
        .await?;
    assert_eq!(by_reg.total, 1);
    assert_eq!(by_reg.data[0].id, dataset.incomplete_booking.id);

    Ok(())
}

#[tokio::test]
async fn domain_filters_apply_server_side() -> anyhow::Result<()> {
    let app = spawn_app().await;
    DevDataset::create(&app).await?;
    app.login_admin().await?;

    let confirmed = app
        .client
        .list_bookings(&requests::BookingListQuery {
            status: Some(BookingStatus::Confirmed),
            ..Default::default()
        })
        .await?;
    assert_eq!(confirmed.total, 2);

    let website = app
        .client
        .list_bookings(&requests::BookingListQuery {
            source: Some(BookingSource::Website),
            ..Default::default()
        })
        .await?;
    assert_eq!(website.total, 3);

    let heathrow = app
        .client
        .list_bookings(&requests::BookingListQuery {
            airport: Some("LHR".into()),
            ..Default::default()
        })
        .await?;
    assert_eq!(heathrow.total, 3);

    let march = app
        .client
        .list_bookings(&requests::BookingListQuery {
            from_date: Some(date(2026, 3, 1)),
            to_date: Some(date(2026, 3, 31)),
            ..Default::default()
        })
        .await?;
    assert_eq!(march.total, 2);

    Ok(())
}

#[tokio::test]
async fn create_assigns_reference_and_authoritative_quote()
-> anyhow::Result<()> {
    let app = spawn_app().await;
    let dataset = DevDataset::create(&app).await?;
    app.login_admin().await?;

    let booking = app
        .client
        .create_booking(&requests::CreateBooking {
            product_id: dataset.park_ride_lhr.id,
            source: BookingSource::Phone,
            customer_name: "Sam Patel".into(),
            customer_phone: "+44 7700 900999".into(),
            customer_email: "sam.patel@example.com".into(),
            vehicle_make: "Audi".into(),
            vehicle_model: "A3".into(),
            vehicle_color: "White".into(),
            vehicle_registration: "AB12 CDE".into(),
            dropoff_at: date(2026, 5, 1).at(8, 0, 0, 0),
            return_at: date(2026, 5, 4).at(18, 0, 0, 0),
            has_cancellation_cover: false,
        })
        .await?;

    assert!(booking.reference.starts_with("PD-"));
    assert_eq!(booking.status, BookingStatus::Confirmed);
    // 3 chargeable days at 20.00
    assert_eq!(booking.quote.quote_amount, dec!(60.00));
    assert_eq!(booking.quote.booking_fee, dec!(1.99));
    assert_eq!(booking.quote.total_payable(), dec!(61.99));

    Ok(())
}

#[tokio::test]
async fn update_requotes_for_new_dates() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let dataset = DevDataset::create(&app).await?;
    app.login_admin().await?;

    let mut details =
        requests::UpdateBooking::from(&dataset.confirmed_booking);
    details.return_at = date(2026, 3, 17).at(10, 0, 0, 0);

    let updated = app
        .client
        .update_booking(&dataset.confirmed_booking.id, &details)
        .await?;
    // 7 days at 20.00 replaces the original 5-day quote
    assert_eq!(updated.quote.quote_amount, dec!(140.00));
    assert_eq!(updated.quote.total_payable(), dec!(141.99));

    Ok(())
}

#[tokio::test]
async fn failed_update_leaves_booking_unchanged() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let dataset = DevDataset::create(&app).await?;
    app.login_admin().await?;

    let mut details =
        requests::UpdateBooking::from(&dataset.cancelled_booking);
    details.customer_name = "Should Not Stick".into();

    let result = app
        .client
        .update_booking(&dataset.cancelled_booking.id, &details)
        .await;
    let message = assert_rejected(result);
    assert!(message.contains("cancelled"));

    let unchanged =
        app.client.get_booking(&dataset.cancelled_booking.id).await?;
    assert_eq!(unchanged, dataset.cancelled_booking);

    Ok(())
}

#[tokio::test]
async fn cancel_is_rejected_when_already_cancelled() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let dataset = DevDataset::create(&app).await?;
    app.login_admin().await?;

    let outcome =
        app.client.cancel_booking(&dataset.confirmed_booking.id).await?;
    assert_eq!(outcome.message.as_deref(), Some("Booking cancelled."));

    let result =
        app.client.cancel_booking(&dataset.confirmed_booking.id).await;
    assert_eq!(assert_rejected(result), "Booking already cancelled.");

    Ok(())
}

#[tokio::test]
async fn complete_and_delete() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let dataset = DevDataset::create(&app).await?;
    app.login_admin().await?;

    app.client.complete_booking(&dataset.phone_booking.id).await?;
    let completed =
        app.client.get_booking(&dataset.phone_booking.id).await?;
    assert_eq!(completed.status, BookingStatus::Completed);

    app.client.delete_booking(&dataset.completed_booking.id).await?;
    let result =
        app.client.get_booking(&dataset.completed_booking.id).await;
    assert_status_code(result, StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn unknown_booking_is_not_found() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.login_admin().await?;

    let result = app.client.get_booking(&BookingId(9999)).await;
    assert_status_code(result, StatusCode::NOT_FOUND);

    Ok(())
}
