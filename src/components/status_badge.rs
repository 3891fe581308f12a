//! Status badges for items, reports, and claims.
//!
//! DESIGN
//! ======
//! Centralizes the status→presentation mapping so every table and detail
//! view renders the same vocabulary the same way.

#[cfg(test)]
#[path = "status_badge_test.rs"]
mod status_badge_test;

use leptos::prelude::*;

use crate::net::types::{ClaimStatus, ItemStatus, ReportStatus};

/// CSS modifier class for an item status; unknown strings get the
/// neutral badge.
pub fn item_badge_class(status: Option<ItemStatus>) -> &'static str {
    match status {
        Some(ItemStatus::Lost) => "badge badge--lost",
        Some(ItemStatus::Found) => "badge badge--found",
        Some(ItemStatus::Claimed) => "badge badge--claimed",
        Some(ItemStatus::Completed) => "badge badge--completed",
        Some(ItemStatus::Discarded) => "badge badge--discarded",
        None => "badge",
    }
}

pub fn claim_badge_class(status: Option<ClaimStatus>) -> &'static str {
    match status {
        Some(ClaimStatus::Pending) => "badge badge--pending",
        Some(ClaimStatus::Approved) => "badge badge--approved",
        Some(ClaimStatus::Rejected) => "badge badge--rejected",
        None => "badge",
    }
}

pub fn report_badge_class(status: Option<ReportStatus>) -> &'static str {
    match status {
        Some(ReportStatus::Open) => "badge badge--open",
        Some(ReportStatus::InReview) => "badge badge--in-review",
        Some(ReportStatus::Resolved) => "badge badge--resolved",
        None => "badge",
    }
}

fn label_or_raw(label: Option<&'static str>, raw: Option<&str>) -> String {
    label
        .map(ToOwned::to_owned)
        .or_else(|| raw.map(ToOwned::to_owned))
        .unwrap_or_else(|| "Unknown".to_owned())
}

/// Badge for an item's wire status string.
#[component]
pub fn ItemBadge(status: Option<String>) -> impl IntoView {
    let parsed = status.as_deref().and_then(ItemStatus::parse);
    let text = label_or_raw(parsed.map(ItemStatus::label), status.as_deref());
    view! { <span class=item_badge_class(parsed)>{text}</span> }
}

/// Badge for a claim's wire status string.
#[component]
pub fn ClaimBadge(status: Option<String>) -> impl IntoView {
    let parsed = status.as_deref().and_then(ClaimStatus::parse);
    let text = label_or_raw(parsed.map(ClaimStatus::label), status.as_deref());
    view! { <span class=claim_badge_class(parsed)>{text}</span> }
}

/// Badge for a report's wire status string.
#[component]
pub fn ReportBadge(status: Option<String>) -> impl IntoView {
    let parsed = status.as_deref().and_then(ReportStatus::parse);
    let text = label_or_raw(parsed.map(ReportStatus::label), status.as_deref());
    view! { <span class=report_badge_class(parsed)>{text}</span> }
}
