#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Claim header, service line, and stamped output record types.
//!
//! A benefits statement is made of claims. Each claim has a header block
//! (claim id, patient, plan, provider, ...) and a table of billed service
//! lines. The parser produces a [`HeaderContext`] per header page and a
//! [`ServiceRow`] per reconstructed table row, then merges the two into a
//! flat [`StampedRow`], which is the unit written to the output table.

use serde::Serialize;
use strum_macros::Display;

/// Column names of the output table, in order.
pub const OUTPUT_COLUMNS: [&str; 14] = [
    "Claim",
    "Patient",
    "Health Plan",
    "Participant",
    "Participant Id",
    "Date Entered",
    "Date Paid",
    "Provider",
    "Service Date",
    "Services Provided",
    "Provider Billed ($)",
    "DMBA Paid ($)",
    "Your Responsibility ($)",
    "Message Codes",
];

/// A labeled field of the claim header block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum HeaderField {
    #[strum(serialize = "Claim")]
    Claim,
    #[strum(serialize = "Patient")]
    Patient,
    #[strum(serialize = "Health Plan")]
    HealthPlan,
    #[strum(serialize = "Participant")]
    Participant,
    #[strum(serialize = "Participant Id")]
    ParticipantId,
    #[strum(serialize = "Date Entered")]
    DateEntered,
    #[strum(serialize = "Date Paid")]
    DatePaid,
    #[strum(serialize = "Provider")]
    Provider,
}

impl HeaderField {
    /// Every header field, in output column order.
    pub const ALL: [Self; 8] = [
        Self::Claim,
        Self::Patient,
        Self::HealthPlan,
        Self::Participant,
        Self::ParticipantId,
        Self::DateEntered,
        Self::DatePaid,
        Self::Provider,
    ];
}

/// Claim-level metadata extracted from a header page.
///
/// Every field is optional because each one is matched independently.
/// Only a present [`claim`](Self::claim) marks the page as carrying its
/// own header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderContext {
    pub claim: Option<String>,
    pub patient: Option<String>,
    pub health_plan: Option<String>,
    pub participant: Option<String>,
    pub participant_id: Option<String>,
    pub date_entered: Option<String>,
    pub date_paid: Option<String>,
    pub provider: Option<String>,
}

impl HeaderContext {
    /// Returns the value of `field`, if it was found.
    #[must_use]
    pub fn get(&self, field: HeaderField) -> Option<&str> {
        match field {
            HeaderField::Claim => self.claim.as_deref(),
            HeaderField::Patient => self.patient.as_deref(),
            HeaderField::HealthPlan => self.health_plan.as_deref(),
            HeaderField::Participant => self.participant.as_deref(),
            HeaderField::ParticipantId => self.participant_id.as_deref(),
            HeaderField::DateEntered => self.date_entered.as_deref(),
            HeaderField::DatePaid => self.date_paid.as_deref(),
            HeaderField::Provider => self.provider.as_deref(),
        }
    }

    /// Sets the value of `field`.
    pub fn set(&mut self, field: HeaderField, value: Option<String>) {
        let slot = match field {
            HeaderField::Claim => &mut self.claim,
            HeaderField::Patient => &mut self.patient,
            HeaderField::HealthPlan => &mut self.health_plan,
            HeaderField::Participant => &mut self.participant,
            HeaderField::ParticipantId => &mut self.participant_id,
            HeaderField::DateEntered => &mut self.date_entered,
            HeaderField::DatePaid => &mut self.date_paid,
            HeaderField::Provider => &mut self.provider,
        };
        *slot = value;
    }

    /// Whether a claim identifier was found, i.e. the page carries its
    /// own header.
    #[must_use]
    pub fn has_claim(&self) -> bool {
        self.claim.as_deref().is_some_and(|c| !c.is_empty())
    }

    fn field_or_empty(&self, field: HeaderField) -> String {
        self.get(field).unwrap_or_default().to_owned()
    }
}

/// One billed service line parsed out of a reconstructed row.
///
/// Currency fields hold the normalized two-decimal text (or the raw token
/// when it could not be read as a number).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRow {
    pub service_date: String,
    pub services_provided: String,
    pub provider_billed: String,
    pub payer_paid: String,
    pub your_responsibility: String,
    pub message_codes: String,
}

/// A service line stamped with the claim header that applies to it.
///
/// Field order and serialized names match [`OUTPUT_COLUMNS`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StampedRow {
    #[serde(rename = "Claim")]
    pub claim: String,
    #[serde(rename = "Patient")]
    pub patient: String,
    #[serde(rename = "Health Plan")]
    pub health_plan: String,
    #[serde(rename = "Participant")]
    pub participant: String,
    #[serde(rename = "Participant Id")]
    pub participant_id: String,
    #[serde(rename = "Date Entered")]
    pub date_entered: String,
    #[serde(rename = "Date Paid")]
    pub date_paid: String,
    #[serde(rename = "Provider")]
    pub provider: String,
    #[serde(rename = "Service Date")]
    pub service_date: String,
    #[serde(rename = "Services Provided")]
    pub services_provided: String,
    #[serde(rename = "Provider Billed ($)")]
    pub provider_billed: String,
    #[serde(rename = "DMBA Paid ($)")]
    pub payer_paid: String,
    #[serde(rename = "Your Responsibility ($)")]
    pub your_responsibility: String,
    #[serde(rename = "Message Codes")]
    pub message_codes: String,
}

impl StampedRow {
    /// Merges a header context with one service row. Unset header fields
    /// become empty strings.
    #[must_use]
    pub fn new(context: &HeaderContext, row: ServiceRow) -> Self {
        Self {
            claim: context.field_or_empty(HeaderField::Claim),
            patient: context.field_or_empty(HeaderField::Patient),
            health_plan: context.field_or_empty(HeaderField::HealthPlan),
            participant: context.field_or_empty(HeaderField::Participant),
            participant_id: context.field_or_empty(HeaderField::ParticipantId),
            date_entered: context.field_or_empty(HeaderField::DateEntered),
            date_paid: context.field_or_empty(HeaderField::DatePaid),
            provider: context.field_or_empty(HeaderField::Provider),
            service_date: row.service_date,
            services_provided: row.services_provided,
            provider_billed: row.provider_billed,
            payer_paid: row.payer_paid,
            your_responsibility: row.your_responsibility,
            message_codes: row.message_codes,
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> ServiceRow {
        ServiceRow {
            service_date: "01/23/2025".to_owned(),
            services_provided: "OFFICE VISIT".to_owned(),
            provider_billed: "123.45".to_owned(),
            payer_paid: "100.00".to_owned(),
            your_responsibility: "23.45".to_owned(),
            message_codes: "B6 N3".to_owned(),
        }
    }

    #[test]
    fn header_field_labels_match_output_columns() {
        for (field, column) in HeaderField::ALL.iter().zip(OUTPUT_COLUMNS) {
            assert_eq!(field.to_string(), column);
        }
    }

    #[test]
    fn get_and_set_round_through_every_field() {
        let mut ctx = HeaderContext::default();
        for field in HeaderField::ALL {
            ctx.set(field, Some(field.to_string().to_uppercase()));
        }
        assert_eq!(ctx.get(HeaderField::HealthPlan), Some("HEALTH PLAN"));
        assert_eq!(ctx.get(HeaderField::Provider), Some("PROVIDER"));
        ctx.set(HeaderField::Provider, None);
        assert_eq!(ctx.get(HeaderField::Provider), None);
    }

    #[test]
    fn has_claim_requires_non_empty_value() {
        let mut ctx = HeaderContext::default();
        assert!(!ctx.has_claim());
        ctx.claim = Some(String::new());
        assert!(!ctx.has_claim());
        ctx.claim = Some("T1234567".to_owned());
        assert!(ctx.has_claim());
    }

    #[test]
    fn stamped_row_defaults_missing_header_fields_to_empty() {
        let ctx = HeaderContext {
            claim: Some("T1234567".to_owned()),
            patient: Some("JANE DOE".to_owned()),
            ..HeaderContext::default()
        };
        let stamped = StampedRow::new(&ctx, sample_row());

        assert_eq!(stamped.claim, "T1234567");
        assert_eq!(stamped.patient, "JANE DOE");
        assert_eq!(stamped.health_plan, "");
        assert_eq!(stamped.provider, "");
        assert_eq!(stamped.service_date, "01/23/2025");
        assert_eq!(stamped.message_codes, "B6 N3");
    }
}
