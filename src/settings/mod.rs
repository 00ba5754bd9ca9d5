//! Site settings: dealership contact info, business hours, about text,
//! and the logo pointer
//!
//! Settings form a singleton record with partial-update semantics: the
//! back office sends only the sections it changed and the store merges
//! them field by field.

use crate::core::error::{ValidationError, VitrineError};
use crate::core::format::normalize_whatsapp;
use crate::core::validation::Format;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Public contact channels of the dealership
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContact {
    /// Masked phone: `(99) 9999-9999` or `(99) 99999-9999`
    pub phone: String,
    pub email: String,
    /// Bare digits with the `55` country prefix
    pub whatsapp: String,
}

/// Opening and closing time of one day group, as displayed (`"08:00"`);
/// `None` means closed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub open: Option<String>,
    pub close: Option<String>,
}

/// Business hours grouped the way the storefront displays them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessHours {
    pub weekdays: DaySchedule,
    pub saturday: DaySchedule,
    pub sunday: DaySchedule,
}

/// The uploaded logo, if any
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteLogo {
    pub url: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// The site settings singleton
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteSettings {
    #[serde(default)]
    pub contact: SiteContact,
    #[serde(default)]
    pub business_hours: BusinessHours,
    #[serde(default)]
    pub about: String,
    #[serde(default)]
    pub logo: SiteLogo,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl SiteSettings {
    /// Merge a patch into this record, stamping `updated_at`
    pub fn apply(&mut self, patch: SettingsPatch, now: DateTime<Utc>) {
        if let Some(contact) = patch.contact {
            if let Some(phone) = contact.phone {
                self.contact.phone = phone;
            }
            if let Some(email) = contact.email {
                self.contact.email = email;
            }
            if let Some(whatsapp) = contact.whatsapp {
                self.contact.whatsapp = whatsapp;
            }
        }
        if let Some(hours) = patch.business_hours {
            self.business_hours = hours;
        }
        if let Some(about) = patch.about {
            self.about = about;
        }
        if let Some(logo_url) = patch.logo_url {
            self.logo = SiteLogo {
                url: Some(logo_url),
                updated_at: Some(now),
            };
        }
        self.updated_at = Some(now);
    }
}

/// Partial contact update
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteContactPatch {
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub whatsapp: Option<String>,
}

/// Partial settings update; absent sections are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsPatch {
    #[serde(default)]
    pub contact: Option<SiteContactPatch>,
    #[serde(default)]
    pub business_hours: Option<BusinessHours>,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
}

impl SettingsPatch {
    /// Normalize user-entered values before validation: the WhatsApp number
    /// gains its `55` prefix if missing
    pub fn normalized(mut self) -> Self {
        if let Some(contact) = &mut self.contact {
            if let Some(whatsapp) = &contact.whatsapp {
                contact.whatsapp = Some(normalize_whatsapp(whatsapp));
            }
        }
        self
    }

    /// Check every present field against its format
    pub fn ensure_valid(&self) -> Result<(), VitrineError> {
        if let Some(contact) = &self.contact {
            if let Some(phone) = &contact.phone {
                if !Format::PhoneMask.is_match(phone) {
                    return Err(ValidationError::field(
                        "contact.phone",
                        "use the format (99) 9999-9999 or (99) 99999-9999",
                    )
                    .into());
                }
            }
            if let Some(email) = &contact.email {
                if !Format::Email.is_match(email) {
                    return Err(ValidationError::field("contact.email", "email is invalid").into());
                }
            }
            if let Some(whatsapp) = &contact.whatsapp {
                if !Format::WhatsApp.is_match(whatsapp) {
                    return Err(ValidationError::field(
                        "contact.whatsapp",
                        "use the format 5511999999999",
                    )
                    .into());
                }
            }
        }

        if let Some(logo_url) = &self.logo_url {
            if !Format::Url.is_match(logo_url) {
                return Err(ValidationError::field("logo_url", "must be a valid URL").into());
            }
        }

        Ok(())
    }
}
