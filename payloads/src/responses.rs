use crate::Booking;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One page of a collection, with the filtered total for pagination.
///
/// Both fields are replaced together on a successful fetch; a page is never
/// partially applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total: i64,
}

/// Success/failure envelope common to mutation and side-effect endpoints.
/// `success: false` with a 2xx status is a business rejection (e.g.
/// "booking already cancelled") and is treated as failure by the client.
pub trait Outcome {
    fn success(&self) -> bool;
    fn message(&self) -> Option<&str>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionOutcome {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Outcome for ActionOutcome {
    fn success(&self) -> bool {
        self.success
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Envelope returned by booking mutations; carries the updated booking on
/// success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingEnvelope {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking: Option<Booking>,
}

impl Outcome for BookingEnvelope {
    fn success(&self) -> bool {
        self.success
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Server-quoted figures for extending a booking's return date. The quotes
/// are computed backend-side for both ranges; the client only adds the
/// staff-entered extra charge on top (see `pricing::ExtensionBreakdown`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtensionPreview {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub old_quote: Decimal,
    #[serde(default)]
    pub new_quote: Decimal,
    #[serde(default)]
    pub extend_charge: Decimal,
}

impl Outcome for ExtensionPreview {
    fn success(&self) -> bool {
        self.success
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    pub email: String,
}
