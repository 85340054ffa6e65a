use payloads::{BookingId, BookingStatus, requests};
use reqwest::StatusCode;
use test_helpers::{
    assert_rejected, assert_status_code,
    backend::EmailKind,
    mock::DevDataset,
    spawn_app,
};

#[tokio::test]
async fn invoice_and_booking_email_go_to_the_customer() -> anyhow::Result<()>
{
    let app = spawn_app().await;
    let dataset = DevDataset::create(&app).await?;
    app.login_admin().await?;

    app.client.send_invoice(&dataset.confirmed_booking.id).await?;
    app.client
        .send_booking_email(&dataset.confirmed_booking.id)
        .await?;

    let emails = app.state.sent_emails.lock().unwrap();
    assert_eq!(emails.len(), 2);
    assert_eq!(emails[0].kind, EmailKind::Invoice);
    assert_eq!(emails[1].kind, EmailKind::BookingConfirmation);
    for email in emails.iter() {
        assert_eq!(
            email.recipient,
            dataset.confirmed_booking.customer_email
        );
    }

    Ok(())
}

#[tokio::test]
async fn csv_email_reports_filtered_count() -> anyhow::Result<()> {
    let app = spawn_app().await;
    DevDataset::create(&app).await?;
    app.login_admin().await?;

    let outcome = app
        .client
        .email_csv(&requests::EmailCsv {
            recipient: "reports@parkdesk.example".into(),
            status: Some(BookingStatus::Confirmed),
            from_date: None,
            to_date: None,
        })
        .await?;
    assert_eq!(
        outcome.message.as_deref(),
        Some("CSV with 2 bookings sent.")
    );

    let emails = app.state.sent_emails.lock().unwrap();
    assert_eq!(emails.len(), 1);
    assert_eq!(emails[0].kind, EmailKind::CsvExport);
    assert_eq!(emails[0].recipient, "reports@parkdesk.example");

    Ok(())
}

#[tokio::test]
async fn payment_confirmation_promotes_incomplete_bookings()
-> anyhow::Result<()> {
    let app = spawn_app().await;
    let dataset = DevDataset::create(&app).await?;
    app.login_admin().await?;

    app.client
        .confirm_payment(&dataset.incomplete_booking.id)
        .await?;
    let booking =
        app.client.get_booking(&dataset.incomplete_booking.id).await?;
    assert_eq!(booking.status, BookingStatus::Confirmed);

    // Already confirmed now, so a second confirmation is a business
    // rejection rather than a transport error.
    let result = app
        .client
        .confirm_payment(&dataset.incomplete_booking.id)
        .await;
    assert_eq!(
        assert_rejected(result),
        "Booking is not awaiting payment."
    );

    Ok(())
}

#[tokio::test]
async fn side_effects_on_missing_booking_are_not_found() -> anyhow::Result<()>
{
    let app = spawn_app().await;
    app.login_admin().await?;

    let result = app.client.send_invoice(&BookingId(4242)).await;
    assert_status_code(result, StatusCode::NOT_FOUND);

    Ok(())
}
