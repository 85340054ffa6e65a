use jiff::civil::date;
use payloads::{pricing::ExtensionBreakdown, requests};
use rust_decimal::dec;
use test_helpers::{assert_rejected, mock::DevDataset, spawn_app};

#[tokio::test]
async fn preview_quotes_both_ranges() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let dataset = DevDataset::create(&app).await?;
    app.login_admin().await?;

    // 5 days -> 7 days at 20.00/day
    let preview = app
        .client
        .extend_preview(
            &dataset.confirmed_booking.id,
            &requests::ExtendPreview {
                new_return_at: date(2026, 3, 17).at(10, 0, 0, 0),
            },
        )
        .await?;

    assert_eq!(preview.old_quote, dec!(100.00));
    assert_eq!(preview.new_quote, dec!(140.00));
    assert_eq!(preview.extend_charge, dec!(5.00));

    // Reconcile with a staff-entered extra charge, as the UI does.
    let breakdown = ExtensionBreakdown {
        old_quote: preview.old_quote,
        new_quote: preview.new_quote,
        extend_charge: preview.extend_charge,
        extra_charge: dec!(2.50),
    };
    assert_eq!(breakdown.diff(), dec!(40.00));
    assert_eq!(breakdown.optional_payable(), dec!(47.50));

    Ok(())
}

#[tokio::test]
async fn preview_rejects_earlier_return_date() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let dataset = DevDataset::create(&app).await?;
    app.login_admin().await?;

    let result = app
        .client
        .extend_preview(
            &dataset.confirmed_booking.id,
            &requests::ExtendPreview {
                new_return_at: date(2026, 3, 14).at(10, 0, 0, 0),
            },
        )
        .await;
    let message = assert_rejected(result);
    assert!(message.contains("after the current return date"));

    Ok(())
}

#[tokio::test]
async fn preview_rejects_cancelled_booking() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let dataset = DevDataset::create(&app).await?;
    app.login_admin().await?;

    let result = app
        .client
        .extend_preview(
            &dataset.cancelled_booking.id,
            &requests::ExtendPreview {
                new_return_at: date(2026, 2, 20).at(19, 30, 0, 0),
            },
        )
        .await;
    assert_rejected(result);

    Ok(())
}

#[tokio::test]
async fn extend_moves_return_date_and_requotes() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let dataset = DevDataset::create(&app).await?;
    app.login_admin().await?;

    let new_return_at = date(2026, 3, 17).at(10, 0, 0, 0);
    let extended = app
        .client
        .extend_booking(
            &dataset.confirmed_booking.id,
            &requests::ExtendBooking {
                new_return_at,
                extra_charge: dec!(2.50),
            },
        )
        .await?;

    assert_eq!(extended.return_at, new_return_at);
    // new quote 140.00 + 5.00 admin + 2.50 manual adjustment
    assert_eq!(extended.quote.quote_amount, dec!(147.50));
    assert_eq!(extended.quote.total_payable(), dec!(149.49));

    Ok(())
}
