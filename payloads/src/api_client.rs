use crate::{
    Booking, BookingId, Product, ProductId, Supplier, SupplierId, requests,
    responses,
    responses::{Outcome, Page},
};
use reqwest::StatusCode;
use serde::Serialize;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for interfacing with the booking backend.
///
/// Authentication rides on the HTTP-only session cookie (included
/// automatically on wasm via credentials); a bearer token can be attached
/// as a fallback when no session exists.
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
    pub bearer_token: Option<String>,
}

/// Helper methods for http actions
impl APIClient {
    pub fn new(address: String) -> Self {
        Self {
            address,
            inner_client: reqwest::Client::new(),
            bearer_token: None,
        }
    }

    pub fn with_bearer_token(mut self, token: String) -> Self {
        self.bearer_token = Some(token);
        self
    }

    fn format_url(&self, path: &str) -> String {
        format!("{}/api/{path}", &self.address)
    }

    fn prepare(
        &self,
        request: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder {
        let request = match &self.bearer_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request
    }

    async fn get_with_query(
        &self,
        path: &str,
        query: &impl Serialize,
    ) -> ReqwestResult {
        let request =
            self.inner_client.get(self.format_url(path)).query(query);
        self.prepare(request).send().await
    }

    async fn post(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        let request = self.inner_client.post(self.format_url(path)).json(body);
        self.prepare(request).send().await
    }

    async fn empty_post(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.post(self.format_url(path));
        self.prepare(request).send().await
    }

    async fn empty_get(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.get(self.format_url(path));
        self.prepare(request).send().await
    }

    async fn put(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        let request = self.inner_client.put(self.format_url(path)).json(body);
        self.prepare(request).send().await
    }

    async fn delete(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.delete(self.format_url(path));
        self.prepare(request).send().await
    }
}

/// Methods on the backend API
impl APIClient {
    pub async fn health_check(&self) -> Result<(), ClientError> {
        let response = self.empty_get("health_check").await?;
        ok_empty(response).await
    }

    pub async fn login(
        &self,
        details: &requests::LoginCredentials,
    ) -> Result<(), ClientError> {
        let response = self.post("login", details).await?;
        ok_empty(response).await
    }

    pub async fn logout(&self) -> Result<(), ClientError> {
        let response = self.empty_post("logout").await?;
        ok_empty(response).await
    }

    /// Check if the user is logged in.
    pub async fn login_check(&self) -> Result<bool, ClientError> {
        let response = self.empty_post("login_check").await?;
        match response.status() {
            StatusCode::OK => Ok(true),
            StatusCode::UNAUTHORIZED => Ok(false),
            _ => Err(ClientError::APIError(
                response.status(),
                response.text().await?,
            )),
        }
    }

    /// Get the current user's profile information.
    pub async fn user_profile(
        &self,
    ) -> Result<responses::UserProfile, ClientError> {
        let response = self.empty_get("user_profile").await?;
        ok_body(response).await
    }

    // Bookings

    pub async fn list_bookings(
        &self,
        query: &requests::BookingListQuery,
    ) -> Result<Page<Booking>, ClientError> {
        let response = self.get_with_query("bookings", query).await?;
        ok_body(response).await
    }

    pub async fn get_booking(
        &self,
        booking_id: &BookingId,
    ) -> Result<Booking, ClientError> {
        let response =
            self.empty_get(&format!("bookings/{booking_id}")).await?;
        ok_body(response).await
    }

    pub async fn create_booking(
        &self,
        details: &requests::CreateBooking,
    ) -> Result<Booking, ClientError> {
        let response = self.post("bookings/create", details).await?;
        let envelope: responses::BookingEnvelope =
            ok_envelope(response).await?;
        booking_from(envelope)
    }

    pub async fn update_booking(
        &self,
        booking_id: &BookingId,
        details: &requests::UpdateBooking,
    ) -> Result<Booking, ClientError> {
        let response = self
            .put(&format!("bookings/update/{booking_id}"), details)
            .await?;
        let envelope: responses::BookingEnvelope =
            ok_envelope(response).await?;
        booking_from(envelope)
    }

    /// Server-computed quote for pushing the return date later. The result
    /// is a preview; nothing changes until `extend_booking` is called.
    pub async fn extend_preview(
        &self,
        booking_id: &BookingId,
        details: &requests::ExtendPreview,
    ) -> Result<responses::ExtensionPreview, ClientError> {
        let response = self
            .post(&format!("bookings/extend/preview/{booking_id}"), details)
            .await?;
        ok_envelope(response).await
    }

    pub async fn extend_booking(
        &self,
        booking_id: &BookingId,
        details: &requests::ExtendBooking,
    ) -> Result<Booking, ClientError> {
        let response = self
            .put(&format!("bookings/extend/{booking_id}"), details)
            .await?;
        let envelope: responses::BookingEnvelope =
            ok_envelope(response).await?;
        booking_from(envelope)
    }

    pub async fn cancel_booking(
        &self,
        booking_id: &BookingId,
    ) -> Result<responses::ActionOutcome, ClientError> {
        let response = self
            .empty_post(&format!("bookings/cancel/{booking_id}"))
            .await?;
        ok_envelope(response).await
    }

    pub async fn complete_booking(
        &self,
        booking_id: &BookingId,
    ) -> Result<responses::ActionOutcome, ClientError> {
        let response = self
            .empty_post(&format!("bookings/complete/{booking_id}"))
            .await?;
        ok_envelope(response).await
    }

    pub async fn delete_booking(
        &self,
        booking_id: &BookingId,
    ) -> Result<responses::ActionOutcome, ClientError> {
        let response = self
            .delete(&format!("bookings/delete/{booking_id}"))
            .await?;
        ok_envelope(response).await
    }

    // Side effects: fire-and-forget, success/failure plus an optional
    // human-readable message is the whole contract.

    pub async fn send_invoice(
        &self,
        booking_id: &BookingId,
    ) -> Result<responses::ActionOutcome, ClientError> {
        let response = self
            .empty_post(&format!("bookings/invoice/{booking_id}"))
            .await?;
        ok_envelope(response).await
    }

    pub async fn send_booking_email(
        &self,
        booking_id: &BookingId,
    ) -> Result<responses::ActionOutcome, ClientError> {
        let response = self
            .empty_post(&format!("bookings/email/{booking_id}"))
            .await?;
        ok_envelope(response).await
    }

    pub async fn email_csv(
        &self,
        details: &requests::EmailCsv,
    ) -> Result<responses::ActionOutcome, ClientError> {
        let response = self.post("bookings/csv-email", details).await?;
        ok_envelope(response).await
    }

    /// Manual payment confirmation for an incomplete booking.
    pub async fn confirm_payment(
        &self,
        booking_id: &BookingId,
    ) -> Result<responses::ActionOutcome, ClientError> {
        let response = self
            .empty_post(&format!("bookings/payment/confirm/{booking_id}"))
            .await?;
        ok_envelope(response).await
    }

    // Suppliers

    pub async fn list_suppliers(
        &self,
        query: &requests::SupplierListQuery,
    ) -> Result<Page<Supplier>, ClientError> {
        let response = self.get_with_query("suppliers", query).await?;
        ok_body(response).await
    }

    pub async fn create_supplier(
        &self,
        details: &requests::CreateSupplier,
    ) -> Result<Supplier, ClientError> {
        let response = self.post("suppliers/create", details).await?;
        ok_body(response).await
    }

    pub async fn update_supplier(
        &self,
        supplier_id: &SupplierId,
        details: &requests::UpdateSupplier,
    ) -> Result<Supplier, ClientError> {
        let response = self
            .put(&format!("suppliers/update/{supplier_id}"), details)
            .await?;
        ok_body(response).await
    }

    pub async fn delete_supplier(
        &self,
        supplier_id: &SupplierId,
    ) -> Result<responses::ActionOutcome, ClientError> {
        let response = self
            .delete(&format!("suppliers/delete/{supplier_id}"))
            .await?;
        ok_envelope(response).await
    }

    // Products

    pub async fn list_products(
        &self,
        query: &requests::ProductListQuery,
    ) -> Result<Page<Product>, ClientError> {
        let response = self.get_with_query("products", query).await?;
        ok_body(response).await
    }

    pub async fn create_product(
        &self,
        details: &requests::CreateProduct,
    ) -> Result<Product, ClientError> {
        let response = self.post("products/create", details).await?;
        ok_body(response).await
    }

    pub async fn update_product(
        &self,
        product_id: &ProductId,
        details: &requests::UpdateProduct,
    ) -> Result<Product, ClientError> {
        let response = self
            .put(&format!("products/update/{product_id}"), details)
            .await?;
        ok_body(response).await
    }

    pub async fn delete_product(
        &self,
        product_id: &ProductId,
    ) -> Result<responses::ActionOutcome, ClientError> {
        let response =
            self.delete(&format!("products/delete/{product_id}")).await?;
        ok_envelope(response).await
    }
}

/// Everything that can go wrong talking to the backend, normalized so each
/// variant displays as a single user-facing message.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    /// The backend answered 2xx but rejected the action
    /// (`success: false`).
    #[error("{0}")]
    Rejected(String),
    /// The response body was not the JSON we expected.
    #[error("Received an unexpected response from the server.")]
    Malformed(#[source] serde_json::Error),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

impl ClientError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::APIError(StatusCode::UNAUTHORIZED, _))
    }
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(ClientError::Malformed)
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(())
}

/// Like `ok_body`, but additionally treats a `success: false` envelope as
/// a business rejection.
pub async fn ok_envelope<T>(
    response: reqwest::Response,
) -> Result<T, ClientError>
where
    T: serde::de::DeserializeOwned + Outcome,
{
    let envelope: T = ok_body(response).await?;
    if !envelope.success() {
        return Err(ClientError::Rejected(
            envelope
                .message()
                .unwrap_or("The request was rejected.")
                .to_string(),
        ));
    }
    Ok(envelope)
}

fn booking_from(
    envelope: responses::BookingEnvelope,
) -> Result<Booking, ClientError> {
    envelope.booking.ok_or_else(|| {
        ClientError::Rejected(
            "The server did not return the updated booking.".to_string(),
        )
    })
}
