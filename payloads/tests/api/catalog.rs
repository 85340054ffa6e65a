use payloads::{ServiceType, requests};
use reqwest::StatusCode;
use rust_decimal::dec;
use test_helpers::{
    assert_rejected, assert_status_code, mock::DevDataset, spawn_app,
};

#[tokio::test]
async fn supplier_create_update_delete() -> anyhow::Result<()> {
    let app = spawn_app().await;
    DevDataset::create(&app).await?;
    app.login_admin().await?;

    let supplier = app
        .client
        .create_supplier(&requests::CreateSupplier {
            name: "Stansted Secure Park".into(),
            airport: "STN".into(),
            contact_name: "Ian Brooks".into(),
            phone: "+44 1279 555 0110".into(),
            email: "desk@stanstedsecure.example".into(),
            active: true,
        })
        .await?;

    let mut details = requests::UpdateSupplier {
        name: supplier.name.clone(),
        airport: supplier.airport.clone(),
        contact_name: supplier.contact_name.clone(),
        phone: supplier.phone.clone(),
        email: supplier.email.clone(),
        active: false,
    };
    details.contact_name = "Sarah Lim".into();
    let updated =
        app.client.update_supplier(&supplier.id, &details).await?;
    assert_eq!(updated.contact_name, "Sarah Lim");
    assert!(!updated.active);

    // No products reference the new supplier, so deletion is allowed.
    app.client.delete_supplier(&supplier.id).await?;

    let page = app
        .client
        .list_suppliers(&requests::SupplierListQuery {
            search: Some("stansted".into()),
            ..Default::default()
        })
        .await?;
    assert_eq!(page.total, 0);

    Ok(())
}

#[tokio::test]
async fn supplier_with_products_cannot_be_deleted() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let dataset = DevDataset::create(&app).await?;
    app.login_admin().await?;

    let result =
        app.client.delete_supplier(&dataset.gateway_supplier.id).await;
    let message = assert_rejected(result);
    assert!(message.contains("products"));

    Ok(())
}

#[tokio::test]
async fn product_filters_and_update() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let dataset = DevDataset::create(&app).await?;
    app.login_admin().await?;

    let park_ride = app
        .client
        .list_products(&requests::ProductListQuery {
            service_type: Some(ServiceType::ParkAndRide),
            ..Default::default()
        })
        .await?;
    assert_eq!(park_ride.total, 2);

    let gatwick = app
        .client
        .list_products(&requests::ProductListQuery {
            airport: Some("LGW".into()),
            ..Default::default()
        })
        .await?;
    assert_eq!(gatwick.total, 1);

    let product = &dataset.park_ride_lgw;
    let updated = app
        .client
        .update_product(
            &product.id,
            &requests::UpdateProduct {
                supplier_id: product.supplier_id,
                name: product.name.clone(),
                airport: product.airport.clone(),
                service_type: product.service_type,
                daily_rate: dec!(17.50),
                opens_at: product.opens_at.clone(),
                closes_at: product.closes_at.clone(),
                active: product.active,
            },
        )
        .await?;
    assert_eq!(updated.daily_rate, dec!(17.50));

    Ok(())
}

#[tokio::test]
async fn product_creation_requires_known_supplier() -> anyhow::Result<()> {
    let app = spawn_app().await;
    DevDataset::create(&app).await?;
    app.login_admin().await?;

    let result = app
        .client
        .create_product(&requests::CreateProduct {
            supplier_id: payloads::SupplierId(9999),
            name: "Orphan Product".into(),
            airport: "LHR".into(),
            service_type: ServiceType::ParkAndRide,
            daily_rate: dec!(10.00),
            opens_at: "05:00".into(),
            closes_at: "22:00".into(),
            active: true,
        })
        .await;
    assert_status_code(result, StatusCode::BAD_REQUEST);

    Ok(())
}
