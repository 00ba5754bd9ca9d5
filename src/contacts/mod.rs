//! Contact submissions and the admin triage filter
//!
//! Visitors submit contacts from the storefront forms; the back office
//! lists them newest-first with a search box and a tri-state status filter
//! (all / unread / archived).

use crate::core::error::{ValidationError, VitrineError};
use crate::core::validation::Format;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use validator::Validate;

/// Where a submission came from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactSource {
    #[default]
    General,
    /// Interest in a specific vehicle
    Vehicle,
    /// Financing request
    Financing,
}

/// A stored contact submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// Store-assigned identifier
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    #[serde(default)]
    pub source: ContactSource,
    /// "Brand Model Year" of the vehicle the visitor asked about
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_info: Option<String>,
    pub is_read: bool,
    pub is_archived: bool,
    pub created_at: DateTime<Utc>,
}

/// Incoming contact submission
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ContactDraft {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "email is invalid"))]
    pub email: String,
    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,
    #[validate(length(min = 1, message = "message is required"))]
    pub message: String,
    #[serde(default)]
    pub source: ContactSource,
    #[serde(default)]
    pub vehicle_info: Option<String>,
}

impl ContactDraft {
    /// Run all draft checks: the derive checks plus the phone mask
    pub fn ensure_valid(&self) -> Result<(), VitrineError> {
        self.validate().map_err(ValidationError::Payload)?;

        if !Format::PhoneMask.is_match(&self.phone) {
            return Err(ValidationError::field(
                "phone",
                "use the format (99) 9999-9999 or (99) 99999-9999",
            )
            .into());
        }

        Ok(())
    }

    /// Materialize a record from this draft; new submissions start unread
    /// and unarchived
    pub fn into_record(self, id: i64, created_at: DateTime<Utc>) -> Contact {
        Contact {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            message: self.message,
            source: self.source,
            vehicle_info: self.vehicle_info,
            is_read: false,
            is_archived: false,
            created_at,
        }
    }
}

/// The tri-state status selector of the triage list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    /// Everything that is not archived
    #[default]
    All,
    /// Unread and not archived
    Unread,
    /// Archived only
    Archived,
}

impl StatusFilter {
    /// Whether a contact passes this status filter
    pub fn matches(&self, contact: &Contact) -> bool {
        match self {
            StatusFilter::All => !contact.is_archived,
            StatusFilter::Unread => !contact.is_read && !contact.is_archived,
            StatusFilter::Archived => contact.is_archived,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(StatusFilter::All),
            "unread" => Ok(StatusFilter::Unread),
            "archived" => Ok(StatusFilter::Archived),
            other => Err(ValidationError::UnknownStatusFilter(other.to_string())),
        }
    }
}

/// Search plus status restriction for the triage list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFilter {
    pub search_term: String,
    pub status: StatusFilter,
}

impl ContactFilter {
    /// Filter a snapshot of contacts, preserving its order
    ///
    /// Search is a case-insensitive substring over name and email; the
    /// phone number is matched on the raw text instead, so a digit-and-dash
    /// query like `99999-1234` works as typed.
    pub fn filter(&self, contacts: &[Contact]) -> Vec<Contact> {
        contacts
            .iter()
            .filter(|contact| self.matches(contact))
            .cloned()
            .collect()
    }

    fn matches(&self, contact: &Contact) -> bool {
        let search_ok = if self.search_term.is_empty() {
            true
        } else {
            let needle = self.search_term.to_lowercase();
            contact.name.to_lowercase().contains(&needle)
                || contact.email.to_lowercase().contains(&needle)
                || contact.phone.contains(self.search_term.as_str())
        };

        search_ok && self.status.matches(contact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ContactDraft {
        ContactDraft {
            name: "Maria Silva".to_string(),
            email: "maria@example.com".to_string(),
            phone: "(11) 99999-1234".to_string(),
            message: "Tenho interesse no Uno.".to_string(),
            source: ContactSource::Vehicle,
            vehicle_info: Some("Fiat Uno 2020".to_string()),
        }
    }

    fn contact(id: i64, name: &str, email: &str, phone: &str) -> Contact {
        Contact {
            id,
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            message: "Olá".to_string(),
            source: ContactSource::General,
            vehicle_info: None,
            is_read: false,
            is_archived: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_valid_draft_passes() {
        assert!(draft().ensure_valid().is_ok());
    }

    #[test]
    fn test_unmasked_phone_rejected() {
        let mut d = draft();
        d.phone = "11999991234".to_string();
        assert!(d.ensure_valid().is_err());
    }

    #[test]
    fn test_bad_email_rejected() {
        let mut d = draft();
        d.email = "not-an-email".to_string();
        assert!(d.ensure_valid().is_err());
    }

    #[test]
    fn test_new_submission_starts_unread() {
        let record = draft().into_record(1, Utc::now());
        assert!(!record.is_read);
        assert!(!record.is_archived);
        assert_eq!(record.source, ContactSource::Vehicle);
    }

    #[test]
    fn test_status_filter_semantics() {
        let mut unread = contact(1, "A", "a@example.com", "(11) 1111-1111");
        let mut read = contact(2, "B", "b@example.com", "(11) 2222-2222");
        let mut archived = contact(3, "C", "c@example.com", "(11) 3333-3333");
        unread.is_read = false;
        read.is_read = true;
        archived.is_read = true;
        archived.is_archived = true;

        assert!(StatusFilter::All.matches(&unread));
        assert!(StatusFilter::All.matches(&read));
        assert!(!StatusFilter::All.matches(&archived));

        assert!(StatusFilter::Unread.matches(&unread));
        assert!(!StatusFilter::Unread.matches(&read));
        assert!(!StatusFilter::Unread.matches(&archived));

        assert!(!StatusFilter::Archived.matches(&unread));
        assert!(StatusFilter::Archived.matches(&archived));
    }

    #[test]
    fn test_search_over_name_and_email_is_case_insensitive() {
        let contacts = vec![
            contact(1, "Maria Silva", "maria@example.com", "(11) 99999-1234"),
            contact(2, "João Souza", "joao@example.com", "(21) 88888-5678"),
        ];

        let filter = ContactFilter {
            search_term: "MARIA".to_string(),
            status: StatusFilter::All,
        };
        let result = filter.filter(&contacts);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 1);
    }

    #[test]
    fn test_search_matches_phone_as_typed() {
        let contacts = vec![
            contact(1, "Maria Silva", "maria@example.com", "(11) 99999-1234"),
            contact(2, "João Souza", "joao@example.com", "(21) 88888-5678"),
        ];

        let filter = ContactFilter {
            search_term: "88888-5678".to_string(),
            status: StatusFilter::All,
        };
        let result = filter.filter(&contacts);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 2);
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("unread".parse::<StatusFilter>().unwrap(), StatusFilter::Unread);
        assert!("starred".parse::<StatusFilter>().is_err());
    }
}
