//! Shared wire DTOs for the client/server REST boundary.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON payloads field-for-field so serde
//! round-trips stay lossless. Status vocabularies and the role set are
//! centralized here; views and the route guard consume these helpers
//! instead of re-deriving string comparisons ad hoc.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Successful credential exchange from `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Opaque bearer token proving the authenticated session.
    pub access_token: String,
    /// Always `"bearer"` for this API.
    pub token_type: String,
}

/// The authenticated user as reported by `GET /auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: i64,
    pub name: String,
    pub roll_number: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub branch: Option<String>,
    #[serde(default)]
    pub school: Option<String>,
    /// One of `student`, `staff`, `admin`; absent for accounts created
    /// before roles existed.
    #[serde(default)]
    pub role_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl UserProfile {
    /// Resolve the wire role string into the closed [`Role`] set.
    pub fn role(&self) -> Option<Role> {
        self.role_name.as_deref().and_then(Role::parse)
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Some(Role::Admin)
    }
}

/// Closed set of account roles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Student,
    Staff,
    Admin,
}

impl Role {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "student" => Some(Self::Student),
            "staff" => Some(Self::Staff),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Staff => "staff",
            Self::Admin => "admin",
        }
    }
}

/// Registration payload for `POST /auth/register`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub roll_number: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// An item category, e.g. "Electronics".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub category_id: i64,
    pub category_name: String,
}

/// A campus location where items are lost or handed in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub location_id: i64,
    pub location_name: String,
    #[serde(default)]
    pub building: Option<String>,
    #[serde(default)]
    pub floor: Option<String>,
}

/// An uploaded photo attached to an item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemImage {
    pub image_id: i64,
    pub item_id: i64,
    /// Server-relative path to the stored file.
    pub file_path: String,
    #[serde(default)]
    pub uploaded_on: Option<String>,
}

/// A tracked lost-and-found item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub item_id: i64,
    pub title: String,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
    /// Account that registered the item; owner checks compare against this.
    #[serde(default)]
    pub created_by: Option<i64>,
    #[serde(default)]
    pub created_on: Option<String>,
    /// One of the [`ItemStatus`] vocabulary.
    #[serde(default)]
    pub current_status: Option<String>,
    #[serde(default)]
    pub creator_name: Option<String>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub images: Vec<ItemImage>,
}

impl Item {
    pub fn status(&self) -> Option<ItemStatus> {
        self.current_status.as_deref().and_then(ItemStatus::parse)
    }
}

/// Create/update payload for items.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ItemPayload {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_status: Option<String>,
}

/// Item lifecycle states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemStatus {
    Lost,
    Found,
    Claimed,
    Completed,
    Discarded,
}

impl ItemStatus {
    pub const ALL: [Self; 5] = [
        Self::Lost,
        Self::Found,
        Self::Claimed,
        Self::Completed,
        Self::Discarded,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "lost" => Some(Self::Lost),
            "found" => Some(Self::Found),
            "claimed" => Some(Self::Claimed),
            "completed" => Some(Self::Completed),
            "discarded" => Some(Self::Discarded),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lost => "lost",
            Self::Found => "found",
            Self::Claimed => "claimed",
            Self::Completed => "completed",
            Self::Discarded => "discarded",
        }
    }

    /// Human-readable label for tables and badges.
    pub fn label(self) -> &'static str {
        match self {
            Self::Lost => "Lost",
            Self::Found => "Found",
            Self::Claimed => "Claimed",
            Self::Completed => "Completed",
            Self::Discarded => "Discarded",
        }
    }
}

/// A lost/found report filed against an item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub report_id: i64,
    pub item_id: i64,
    pub reporter_id: i64,
    /// `lost` or `found`.
    pub report_type: String,
    #[serde(default)]
    pub location_id: Option<i64>,
    #[serde(default)]
    pub reported_date: Option<String>,
    #[serde(default)]
    pub reported_on: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub reporter_name: Option<String>,
    #[serde(default)]
    pub item_title: Option<String>,
    #[serde(default)]
    pub location_name: Option<String>,
}

/// Create payload for reports.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ReportPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_title: Option<String>,
    pub report_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reported_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Whether a report announces a loss or a find.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportType {
    Lost,
    Found,
}

impl ReportType {
    pub const ALL: [Self; 2] = [Self::Lost, Self::Found];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "lost" => Some(Self::Lost),
            "found" => Some(Self::Found),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lost => "lost",
            Self::Found => "found",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Lost => "Lost",
            Self::Found => "Found",
        }
    }
}

/// Report handling states. `resolved` also completes the linked item on
/// the server side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportStatus {
    Open,
    InReview,
    Resolved,
}

impl ReportStatus {
    pub const ALL: [Self; 3] = [Self::Open, Self::InReview, Self::Resolved];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "open" => Some(Self::Open),
            "in_review" => Some(Self::InReview),
            "resolved" => Some(Self::Resolved),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InReview => "in_review",
            Self::Resolved => "resolved",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::InReview => "In review",
            Self::Resolved => "Resolved",
        }
    }
}

/// An ownership claim on an item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    pub claim_id: i64,
    pub item_id: i64,
    pub claimer_id: i64,
    #[serde(default)]
    pub claim_text: Option<String>,
    /// One of the [`ClaimStatus`] vocabulary.
    #[serde(default)]
    pub claim_status: Option<String>,
    #[serde(default)]
    pub claimed_on: Option<String>,
    #[serde(default)]
    pub decided_by: Option<i64>,
    #[serde(default)]
    pub decided_on: Option<String>,
    #[serde(default)]
    pub item_title: Option<String>,
    #[serde(default)]
    pub claimer_name: Option<String>,
    #[serde(default)]
    pub decider_name: Option<String>,
}

impl Claim {
    pub fn status(&self) -> Option<ClaimStatus> {
        self.claim_status.as_deref().and_then(ClaimStatus::parse)
    }
}

/// Create/update payload for claims.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ClaimPayload {
    pub item_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claim_text: Option<String>,
}

/// Claim adjudication states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClaimStatus {
    Pending,
    Approved,
    Rejected,
}

impl ClaimStatus {
    pub const ALL: [Self; 3] = [Self::Pending, Self::Approved, Self::Rejected];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}
