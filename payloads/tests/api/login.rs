use payloads::requests;
use reqwest::StatusCode;
use test_helpers::{assert_status_code, backend, spawn_app};

#[tokio::test]
async fn login_and_profile() -> anyhow::Result<()> {
    let app = spawn_app().await;

    assert!(!app.client.login_check().await?);
    app.login_admin().await?;
    assert!(app.client.login_check().await?);

    let profile = app.client.user_profile().await?;
    assert_eq!(profile.username, backend::ADMIN_USERNAME);

    Ok(())
}

#[tokio::test]
async fn wrong_password_is_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let result = app
        .client
        .login(&requests::LoginCredentials {
            username: backend::ADMIN_USERNAME.into(),
            password: "wrong".into(),
        })
        .await;
    assert_status_code(result, StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
async fn anonymous_list_fetch_is_unauthorized() -> anyhow::Result<()> {
    let app = spawn_app().await;
    test_helpers::mock::DevDataset::create(&app).await?;

    let anonymous = app.anonymous_client();
    let result = anonymous
        .list_bookings(&requests::BookingListQuery::default())
        .await;

    // The UI keys its login redirect off this classification.
    assert!(result.as_ref().err().is_some_and(|e| e.is_unauthorized()));
    assert_status_code(result, StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
async fn bearer_token_fallback_authenticates() -> anyhow::Result<()> {
    let app = spawn_app().await;
    test_helpers::mock::DevDataset::create(&app).await?;

    let bearer = app.bearer_client();
    let page = bearer
        .list_bookings(&requests::BookingListQuery::default())
        .await?;
    assert_eq!(page.total, 5);

    Ok(())
}

#[tokio::test]
async fn logout_clears_session() -> anyhow::Result<()> {
    let app = spawn_app().await;

    app.login_admin().await?;
    assert!(app.client.login_check().await?);

    app.client.logout().await?;
    assert!(!app.client.login_check().await?);

    Ok(())
}
