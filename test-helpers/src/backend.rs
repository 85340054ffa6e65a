//! In-memory implementation of the booking backend's REST contract.
//!
//! The production backend is an external collaborator; this double exists
//! so the client and UI logic can be exercised against the real wire
//! contract: cookie-session auth with a bearer fallback, paginated and
//! filtered collections shaped as `{ data, total }`, and mutation
//! envelopes where `success: false` is a business rejection.

use std::net::TcpListener;
use std::sync::Mutex;

use actix_cors::Cors;
use actix_session::{
    Session, SessionMiddleware, config::BrowserSession,
    storage::CookieSessionStore,
};
use actix_web::cookie::{Key, time::Duration};
use actix_web::dev::Server;
use actix_web::http::header;
use actix_web::{
    App, HttpRequest, HttpResponse, HttpServer, Responder, delete, get, post,
    put, web,
};
use jiff::civil::DateTime;
use payloads::{
    Booking, BookingId, BookingStatus, PriceQuote, Product, ProductId,
    Supplier, SupplierId, pricing, requests, responses,
};
use rust_decimal::{Decimal, dec};

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "parkdesk";
pub const ADMIN_EMAIL: &str = "admin@parkdesk.example";

/// Token accepted on the Authorization header when no session cookie is
/// present.
pub const TEST_BEARER_TOKEN: &str = "parkdesk-test-bearer-token";

pub const BOOKING_FEE: Decimal = dec!(1.99);
pub const CANCELLATION_FEE: Decimal = dec!(9.99);
/// Flat administrative charge for performing an extension.
pub const EXTEND_CHARGE: Decimal = dec!(5.00);

/// What kind of transactional email the backend "sent".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailKind {
    Invoice,
    BookingConfirmation,
    CsvExport,
}

#[derive(Debug, Clone)]
pub struct SentEmail {
    pub kind: EmailKind,
    pub booking_id: Option<BookingId>,
    pub recipient: String,
}

#[derive(Default)]
pub struct MockState {
    pub bookings: Mutex<Vec<Booking>>,
    pub suppliers: Mutex<Vec<Supplier>>,
    pub products: Mutex<Vec<Product>>,
    pub sent_emails: Mutex<Vec<SentEmail>>,
    next_id: Mutex<i64>,
}

impl MockState {
    pub fn allocate_id(&self) -> i64 {
        let mut next = self.next_id.lock().unwrap();
        *next += 1;
        *next
    }
}

/// Number of days charged for a stay: calendar days between drop-off and
/// return dates, with a one-day minimum.
pub fn chargeable_days(dropoff_at: DateTime, return_at: DateTime) -> i64 {
    let days = dropoff_at
        .date()
        .until(return_at.date())
        .map(|span| span.get_days() as i64)
        .unwrap_or(0);
    days.max(1)
}

/// The authoritative quote for a date range at a product's daily rate.
pub fn quote_for(
    daily_rate: Decimal,
    dropoff_at: DateTime,
    return_at: DateTime,
) -> Decimal {
    pricing::round2(
        daily_rate * Decimal::from(chargeable_days(dropoff_at, return_at)),
    )
}

fn authorized(session: &Session, req: &HttpRequest) -> bool {
    if let Ok(Some(_)) = session.get::<String>("username") {
        return true;
    }
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(|value| value == format!("Bearer {TEST_BEARER_TOKEN}"))
        .unwrap_or(false)
}

fn unauthorized() -> HttpResponse {
    HttpResponse::Unauthorized().body("Not logged in")
}

fn rejection(message: &str) -> HttpResponse {
    HttpResponse::Ok().json(responses::ActionOutcome {
        success: false,
        message: Some(message.to_string()),
    })
}

fn outcome(message: &str) -> HttpResponse {
    HttpResponse::Ok().json(responses::ActionOutcome {
        success: true,
        message: Some(message.to_string()),
    })
}

fn booking_rejection(message: &str) -> HttpResponse {
    HttpResponse::Ok().json(responses::BookingEnvelope {
        success: false,
        message: Some(message.to_string()),
        booking: None,
    })
}

fn booking_ok(booking: Booking) -> HttpResponse {
    HttpResponse::Ok().json(responses::BookingEnvelope {
        success: true,
        message: None,
        booking: Some(booking),
    })
}

#[get("/health_check")]
async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("healthy")
}

#[post("/login")]
async fn login(
    session: Session,
    details: web::Json<requests::LoginCredentials>,
) -> HttpResponse {
    if details.username == ADMIN_USERNAME && details.password == ADMIN_PASSWORD
    {
        session
            .insert("username", details.username.clone())
            .expect("session insert");
        HttpResponse::Ok().finish()
    } else {
        HttpResponse::Unauthorized().body("Invalid username or password")
    }
}

#[post("/logout")]
async fn logout(session: Session) -> HttpResponse {
    session.purge();
    HttpResponse::Ok().finish()
}

#[post("/login_check")]
async fn login_check(session: Session, req: HttpRequest) -> HttpResponse {
    if authorized(&session, &req) {
        HttpResponse::Ok().finish()
    } else {
        unauthorized()
    }
}

#[get("/user_profile")]
async fn user_profile(session: Session, req: HttpRequest) -> HttpResponse {
    if !authorized(&session, &req) {
        return unauthorized();
    }
    HttpResponse::Ok().json(responses::UserProfile {
        username: ADMIN_USERNAME.to_string(),
        email: ADMIN_EMAIL.to_string(),
    })
}

fn paginate<T: Clone>(rows: Vec<T>, page: i64, limit: i64) -> responses::Page<T> {
    let total = rows.len() as i64;
    let start = ((page.max(1) - 1) * limit).max(0) as usize;
    let data = rows
        .into_iter()
        .skip(start)
        .take(limit.max(0) as usize)
        .collect();
    responses::Page { data, total }
}

fn matches_search(booking: &Booking, search: &str) -> bool {
    let needle = search.to_lowercase();
    [
        &booking.reference,
        &booking.customer_name,
        &booking.customer_email,
        &booking.vehicle_registration,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&needle))
}

#[get("/bookings")]
async fn list_bookings(
    session: Session,
    req: HttpRequest,
    query: web::Query<requests::BookingListQuery>,
    state: web::Data<MockState>,
) -> HttpResponse {
    if !authorized(&session, &req) {
        return unauthorized();
    }
    let bookings = state.bookings.lock().unwrap();
    let filtered: Vec<Booking> = bookings
        .iter()
        .filter(|b| query.status.is_none_or(|status| b.status == status))
        .filter(|b| query.source.is_none_or(|source| b.source == source))
        .filter(|b| {
            query
                .airport
                .as_deref()
                .is_none_or(|airport| b.airport.eq_ignore_ascii_case(airport))
        })
        .filter(|b| {
            query
                .search
                .as_deref()
                .is_none_or(|search| matches_search(b, search))
        })
        .filter(|b| {
            query.from_date.is_none_or(|from| b.dropoff_at.date() >= from)
        })
        .filter(|b| query.to_date.is_none_or(|to| b.dropoff_at.date() <= to))
        .cloned()
        .collect();
    HttpResponse::Ok().json(paginate(filtered, query.page, query.limit))
}

#[get("/bookings/{id}")]
async fn get_booking(
    session: Session,
    req: HttpRequest,
    path: web::Path<BookingId>,
    state: web::Data<MockState>,
) -> HttpResponse {
    if !authorized(&session, &req) {
        return unauthorized();
    }
    let bookings = state.bookings.lock().unwrap();
    match bookings.iter().find(|b| b.id == *path) {
        Some(booking) => HttpResponse::Ok().json(booking),
        None => HttpResponse::NotFound().body("booking not found"),
    }
}

#[post("/bookings/create")]
async fn create_booking(
    session: Session,
    req: HttpRequest,
    details: web::Json<requests::CreateBooking>,
    state: web::Data<MockState>,
) -> HttpResponse {
    if !authorized(&session, &req) {
        return unauthorized();
    }
    let product = {
        let products = state.products.lock().unwrap();
        products
            .iter()
            .find(|p| p.id == details.product_id && p.active)
            .cloned()
    };
    let Some(product) = product else {
        return HttpResponse::BadRequest().body("unknown or inactive product");
    };

    let details = details.into_inner();
    let id = BookingId(state.allocate_id());
    let booking = Booking {
        id,
        reference: format!("PD-{:06}", id.0),
        source: details.source,
        status: BookingStatus::Confirmed,
        customer_name: details.customer_name,
        customer_phone: details.customer_phone,
        customer_email: details.customer_email,
        product_id: product.id,
        product_name: product.name.clone(),
        airport: product.airport.clone(),
        vehicle_make: details.vehicle_make,
        vehicle_model: details.vehicle_model,
        vehicle_color: details.vehicle_color,
        vehicle_registration: details.vehicle_registration,
        booked_at: jiff::Zoned::now().datetime(),
        dropoff_at: details.dropoff_at,
        return_at: details.return_at,
        quote: PriceQuote {
            quote_amount: quote_for(
                product.daily_rate,
                details.dropoff_at,
                details.return_at,
            ),
            booking_fee: BOOKING_FEE,
            has_cancellation_cover: details.has_cancellation_cover,
            cancellation_fee: CANCELLATION_FEE,
            discount: Decimal::ZERO,
        },
    };
    state.bookings.lock().unwrap().push(booking.clone());
    booking_ok(booking)
}

#[put("/bookings/update/{id}")]
async fn update_booking(
    session: Session,
    req: HttpRequest,
    path: web::Path<BookingId>,
    details: web::Json<requests::UpdateBooking>,
    state: web::Data<MockState>,
) -> HttpResponse {
    if !authorized(&session, &req) {
        return unauthorized();
    }
    let daily_rate = {
        let bookings = state.bookings.lock().unwrap();
        let Some(booking) = bookings.iter().find(|b| b.id == *path) else {
            return HttpResponse::NotFound().body("booking not found");
        };
        if booking.status == BookingStatus::Cancelled {
            return booking_rejection("Cannot update a cancelled booking.");
        }
        let products = state.products.lock().unwrap();
        products
            .iter()
            .find(|p| p.id == booking.product_id)
            .map(|p| p.daily_rate)
            .unwrap_or(Decimal::ZERO)
    };

    let details = details.into_inner();
    let mut bookings = state.bookings.lock().unwrap();
    let booking = bookings.iter_mut().find(|b| b.id == *path).unwrap();
    booking.customer_name = details.customer_name;
    booking.customer_phone = details.customer_phone;
    booking.customer_email = details.customer_email;
    booking.vehicle_make = details.vehicle_make;
    booking.vehicle_model = details.vehicle_model;
    booking.vehicle_color = details.vehicle_color;
    booking.vehicle_registration = details.vehicle_registration;
    booking.dropoff_at = details.dropoff_at;
    booking.return_at = details.return_at;
    // A date or cover change requotes; the stored components stay the
    // source of truth and no total is ever persisted.
    booking.quote.quote_amount =
        quote_for(daily_rate, details.dropoff_at, details.return_at);
    booking.quote.has_cancellation_cover = details.has_cancellation_cover;
    booking.quote.discount = details.discount;
    booking_ok(booking.clone())
}

fn extension_rejection(message: &str) -> HttpResponse {
    HttpResponse::Ok().json(responses::ExtensionPreview {
        success: false,
        message: Some(message.to_string()),
        old_quote: Decimal::ZERO,
        new_quote: Decimal::ZERO,
        extend_charge: Decimal::ZERO,
    })
}

/// Validate an extension request and quote both ranges.
fn quote_extension(
    state: &MockState,
    booking_id: BookingId,
    new_return_at: DateTime,
) -> Result<(Decimal, Decimal), HttpResponse> {
    let bookings = state.bookings.lock().unwrap();
    let Some(booking) = bookings.iter().find(|b| b.id == booking_id) else {
        return Err(HttpResponse::NotFound().body("booking not found"));
    };
    match booking.status {
        BookingStatus::Cancelled => {
            return Err(extension_rejection("Cannot extend a cancelled booking."));
        }
        BookingStatus::Completed => {
            return Err(extension_rejection("Cannot extend a completed booking."));
        }
        _ => {}
    }
    if new_return_at <= booking.return_at {
        return Err(extension_rejection(
            "Extension date must be after the current return date.",
        ));
    }
    let products = state.products.lock().unwrap();
    let daily_rate = products
        .iter()
        .find(|p| p.id == booking.product_id)
        .map(|p| p.daily_rate)
        .unwrap_or(Decimal::ZERO);
    let old_quote =
        quote_for(daily_rate, booking.dropoff_at, booking.return_at);
    let new_quote = quote_for(daily_rate, booking.dropoff_at, new_return_at);
    Ok((old_quote, new_quote))
}

#[post("/bookings/extend/preview/{id}")]
async fn extend_preview(
    session: Session,
    req: HttpRequest,
    path: web::Path<BookingId>,
    details: web::Json<requests::ExtendPreview>,
    state: web::Data<MockState>,
) -> HttpResponse {
    if !authorized(&session, &req) {
        return unauthorized();
    }
    match quote_extension(&state, *path, details.new_return_at) {
        Ok((old_quote, new_quote)) => {
            HttpResponse::Ok().json(responses::ExtensionPreview {
                success: true,
                message: None,
                old_quote,
                new_quote,
                extend_charge: EXTEND_CHARGE,
            })
        }
        Err(response) => response,
    }
}

#[put("/bookings/extend/{id}")]
async fn extend_booking(
    session: Session,
    req: HttpRequest,
    path: web::Path<BookingId>,
    details: web::Json<requests::ExtendBooking>,
    state: web::Data<MockState>,
) -> HttpResponse {
    if !authorized(&session, &req) {
        return unauthorized();
    }
    let (_, new_quote) =
        match quote_extension(&state, *path, details.new_return_at) {
            Ok(quotes) => quotes,
            Err(response) => return response,
        };
    let mut bookings = state.bookings.lock().unwrap();
    let booking = bookings.iter_mut().find(|b| b.id == *path).unwrap();
    booking.return_at = details.new_return_at;
    // The admin fee and any staff adjustment are folded into the quote for
    // the new range.
    booking.quote.quote_amount = pricing::round2(
        new_quote + EXTEND_CHARGE + details.extra_charge,
    );
    booking_ok(booking.clone())
}

#[post("/bookings/cancel/{id}")]
async fn cancel_booking(
    session: Session,
    req: HttpRequest,
    path: web::Path<BookingId>,
    state: web::Data<MockState>,
) -> HttpResponse {
    if !authorized(&session, &req) {
        return unauthorized();
    }
    let mut bookings = state.bookings.lock().unwrap();
    let Some(booking) = bookings.iter_mut().find(|b| b.id == *path) else {
        return HttpResponse::NotFound().body("booking not found");
    };
    if booking.status == BookingStatus::Cancelled {
        return rejection("Booking already cancelled.");
    }
    booking.status = BookingStatus::Cancelled;
    outcome("Booking cancelled.")
}

#[post("/bookings/complete/{id}")]
async fn complete_booking(
    session: Session,
    req: HttpRequest,
    path: web::Path<BookingId>,
    state: web::Data<MockState>,
) -> HttpResponse {
    if !authorized(&session, &req) {
        return unauthorized();
    }
    let mut bookings = state.bookings.lock().unwrap();
    let Some(booking) = bookings.iter_mut().find(|b| b.id == *path) else {
        return HttpResponse::NotFound().body("booking not found");
    };
    match booking.status {
        BookingStatus::Completed => rejection("Booking already completed."),
        BookingStatus::Cancelled => {
            rejection("Cannot complete a cancelled booking.")
        }
        _ => {
            booking.status = BookingStatus::Completed;
            outcome("Booking completed.")
        }
    }
}

#[delete("/bookings/delete/{id}")]
async fn delete_booking(
    session: Session,
    req: HttpRequest,
    path: web::Path<BookingId>,
    state: web::Data<MockState>,
) -> HttpResponse {
    if !authorized(&session, &req) {
        return unauthorized();
    }
    let mut bookings = state.bookings.lock().unwrap();
    let before = bookings.len();
    bookings.retain(|b| b.id != *path);
    if bookings.len() == before {
        return HttpResponse::NotFound().body("booking not found");
    }
    outcome("Booking deleted.")
}

fn send_email_for(
    state: &MockState,
    booking_id: BookingId,
    kind: EmailKind,
    message: &str,
) -> HttpResponse {
    let bookings = state.bookings.lock().unwrap();
    let Some(booking) = bookings.iter().find(|b| b.id == booking_id) else {
        return HttpResponse::NotFound().body("booking not found");
    };
    state.sent_emails.lock().unwrap().push(SentEmail {
        kind,
        booking_id: Some(booking_id),
        recipient: booking.customer_email.clone(),
    });
    outcome(message)
}

#[post("/bookings/invoice/{id}")]
async fn send_invoice(
    session: Session,
    req: HttpRequest,
    path: web::Path<BookingId>,
    state: web::Data<MockState>,
) -> HttpResponse {
    if !authorized(&session, &req) {
        return unauthorized();
    }
    send_email_for(&state, *path, EmailKind::Invoice, "Invoice sent.")
}

#[post("/bookings/email/{id}")]
async fn send_booking_email(
    session: Session,
    req: HttpRequest,
    path: web::Path<BookingId>,
    state: web::Data<MockState>,
) -> HttpResponse {
    if !authorized(&session, &req) {
        return unauthorized();
    }
    send_email_for(
        &state,
        *path,
        EmailKind::BookingConfirmation,
        "Booking email sent.",
    )
}

#[post("/bookings/csv-email")]
async fn email_csv(
    session: Session,
    req: HttpRequest,
    details: web::Json<requests::EmailCsv>,
    state: web::Data<MockState>,
) -> HttpResponse {
    if !authorized(&session, &req) {
        return unauthorized();
    }
    let count = {
        let bookings = state.bookings.lock().unwrap();
        bookings
            .iter()
            .filter(|b| details.status.is_none_or(|status| b.status == status))
            .filter(|b| {
                details
                    .from_date
                    .is_none_or(|from| b.dropoff_at.date() >= from)
            })
            .filter(|b| {
                details.to_date.is_none_or(|to| b.dropoff_at.date() <= to)
            })
            .count()
    };
    state.sent_emails.lock().unwrap().push(SentEmail {
        kind: EmailKind::CsvExport,
        booking_id: None,
        recipient: details.recipient.clone(),
    });
    outcome(&format!("CSV with {count} bookings sent."))
}

#[post("/bookings/payment/confirm/{id}")]
async fn confirm_payment(
    session: Session,
    req: HttpRequest,
    path: web::Path<BookingId>,
    state: web::Data<MockState>,
) -> HttpResponse {
    if !authorized(&session, &req) {
        return unauthorized();
    }
    let mut bookings = state.bookings.lock().unwrap();
    let Some(booking) = bookings.iter_mut().find(|b| b.id == *path) else {
        return HttpResponse::NotFound().body("booking not found");
    };
    if booking.status != BookingStatus::Incomplete {
        return rejection("Booking is not awaiting payment.");
    }
    booking.status = BookingStatus::Confirmed;
    outcome("Payment confirmed.")
}

#[get("/suppliers")]
async fn list_suppliers(
    session: Session,
    req: HttpRequest,
    query: web::Query<requests::SupplierListQuery>,
    state: web::Data<MockState>,
) -> HttpResponse {
    if !authorized(&session, &req) {
        return unauthorized();
    }
    let suppliers = state.suppliers.lock().unwrap();
    let filtered: Vec<Supplier> = suppliers
        .iter()
        .filter(|s| {
            query
                .airport
                .as_deref()
                .is_none_or(|airport| s.airport.eq_ignore_ascii_case(airport))
        })
        .filter(|s| {
            query.search.as_deref().is_none_or(|search| {
                s.name.to_lowercase().contains(&search.to_lowercase())
            })
        })
        .cloned()
        .collect();
    HttpResponse::Ok().json(paginate(filtered, query.page, query.limit))
}

#[post("/suppliers/create")]
async fn create_supplier(
    session: Session,
    req: HttpRequest,
    details: web::Json<requests::CreateSupplier>,
    state: web::Data<MockState>,
) -> HttpResponse {
    if !authorized(&session, &req) {
        return unauthorized();
    }
    let details = details.into_inner();
    let supplier = Supplier {
        id: SupplierId(state.allocate_id()),
        name: details.name,
        airport: details.airport,
        contact_name: details.contact_name,
        phone: details.phone,
        email: details.email,
        active: details.active,
    };
    state.suppliers.lock().unwrap().push(supplier.clone());
    HttpResponse::Ok().json(supplier)
}

#[put("/suppliers/update/{id}")]
async fn update_supplier(
    session: Session,
    req: HttpRequest,
    path: web::Path<SupplierId>,
    details: web::Json<requests::UpdateSupplier>,
    state: web::Data<MockState>,
) -> HttpResponse {
    if !authorized(&session, &req) {
        return unauthorized();
    }
    let mut suppliers = state.suppliers.lock().unwrap();
    let Some(supplier) = suppliers.iter_mut().find(|s| s.id == *path) else {
        return HttpResponse::NotFound().body("supplier not found");
    };
    let details = details.into_inner();
    supplier.name = details.name;
    supplier.airport = details.airport;
    supplier.contact_name = details.contact_name;
    supplier.phone = details.phone;
    supplier.email = details.email;
    supplier.active = details.active;
    HttpResponse::Ok().json(supplier.clone())
}

#[delete("/suppliers/delete/{id}")]
async fn delete_supplier(
    session: Session,
    req: HttpRequest,
    path: web::Path<SupplierId>,
    state: web::Data<MockState>,
) -> HttpResponse {
    if !authorized(&session, &req) {
        return unauthorized();
    }
    let has_products = {
        let products = state.products.lock().unwrap();
        products.iter().any(|p| p.supplier_id == *path)
    };
    if has_products {
        return rejection("Supplier has products and cannot be deleted.");
    }
    let mut suppliers = state.suppliers.lock().unwrap();
    let before = suppliers.len();
    suppliers.retain(|s| s.id != *path);
    if suppliers.len() == before {
        return HttpResponse::NotFound().body("supplier not found");
    }
    outcome("Supplier deleted.")
}

#[get("/products")]
async fn list_products(
    session: Session,
    req: HttpRequest,
    query: web::Query<requests::ProductListQuery>,
    state: web::Data<MockState>,
) -> HttpResponse {
    if !authorized(&session, &req) {
        return unauthorized();
    }
    let products = state.products.lock().unwrap();
    let filtered: Vec<Product> = products
        .iter()
        .filter(|p| {
            query
                .airport
                .as_deref()
                .is_none_or(|airport| p.airport.eq_ignore_ascii_case(airport))
        })
        .filter(|p| {
            query
                .service_type
                .is_none_or(|service| p.service_type == service)
        })
        .filter(|p| {
            query.search.as_deref().is_none_or(|search| {
                p.name.to_lowercase().contains(&search.to_lowercase())
            })
        })
        .cloned()
        .collect();
    HttpResponse::Ok().json(paginate(filtered, query.page, query.limit))
}

#[post("/products/create")]
async fn create_product(
    session: Session,
    req: HttpRequest,
    details: web::Json<requests::CreateProduct>,
    state: web::Data<MockState>,
) -> HttpResponse {
    if !authorized(&session, &req) {
        return unauthorized();
    }
    let supplier_exists = {
        let suppliers = state.suppliers.lock().unwrap();
        suppliers.iter().any(|s| s.id == details.supplier_id)
    };
    if !supplier_exists {
        return HttpResponse::BadRequest().body("unknown supplier");
    }
    let details = details.into_inner();
    let product = Product {
        id: ProductId(state.allocate_id()),
        supplier_id: details.supplier_id,
        name: details.name,
        airport: details.airport,
        service_type: details.service_type,
        daily_rate: details.daily_rate,
        opens_at: details.opens_at,
        closes_at: details.closes_at,
        active: details.active,
    };
    state.products.lock().unwrap().push(product.clone());
    HttpResponse::Ok().json(product)
}

#[put("/products/update/{id}")]
async fn update_product(
    session: Session,
    req: HttpRequest,
    path: web::Path<ProductId>,
    details: web::Json<requests::UpdateProduct>,
    state: web::Data<MockState>,
) -> HttpResponse {
    if !authorized(&session, &req) {
        return unauthorized();
    }
    let mut products = state.products.lock().unwrap();
    let Some(product) = products.iter_mut().find(|p| p.id == *path) else {
        return HttpResponse::NotFound().body("product not found");
    };
    let details = details.into_inner();
    product.supplier_id = details.supplier_id;
    product.name = details.name;
    product.airport = details.airport;
    product.service_type = details.service_type;
    product.daily_rate = details.daily_rate;
    product.opens_at = details.opens_at;
    product.closes_at = details.closes_at;
    product.active = details.active;
    HttpResponse::Ok().json(product.clone())
}

#[delete("/products/delete/{id}")]
async fn delete_product(
    session: Session,
    req: HttpRequest,
    path: web::Path<ProductId>,
    state: web::Data<MockState>,
) -> HttpResponse {
    if !authorized(&session, &req) {
        return unauthorized();
    }
    let mut products = state.products.lock().unwrap();
    let before = products.len();
    products.retain(|p| p.id != *path);
    if products.len() == before {
        return HttpResponse::NotFound().body("product not found");
    }
    outcome("Product deleted.")
}

/// Build the server, but not await it.
pub fn build(
    listener: TcpListener,
    state: web::Data<MockState>,
) -> std::io::Result<Server> {
    let secret_key = Key::generate(); // key for signing session cookies
    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .supports_credentials();

        App::new()
            .wrap(cors)
            .wrap(
                SessionMiddleware::builder(
                    CookieSessionStore::default(),
                    secret_key.clone(),
                )
                .cookie_name("parkdesk".into())
                .session_lifecycle(
                    BrowserSession::default().state_ttl(Duration::days(30)),
                )
                .build(),
            )
            .service(
                web::scope("/api")
                    .service(health_check)
                    .service(login)
                    .service(logout)
                    .service(login_check)
                    .service(user_profile)
                    .service(list_bookings)
                    .service(create_booking)
                    .service(update_booking)
                    .service(extend_preview)
                    .service(extend_booking)
                    .service(cancel_booking)
                    .service(complete_booking)
                    .service(delete_booking)
                    .service(send_invoice)
                    .service(send_booking_email)
                    .service(email_csv)
                    .service(confirm_payment)
                    .service(list_suppliers)
                    .service(create_supplier)
                    .service(update_supplier)
                    .service(delete_supplier)
                    .service(list_products)
                    .service(create_product)
                    .service(update_product)
                    .service(delete_product)
                    // registered last: the `{id}` segment would otherwise
                    // shadow the literal routes above
                    .service(get_booking),
            )
            .app_data(state.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
