//! Vehicle records and their sortable columns

use crate::core::error::{ValidationError, VitrineError};
use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use validator::Validate;

/// A vehicle on the lot
///
/// Records are owned by the vehicle store; the query pipeline only ever
/// reads them. `price == 0.0` means "price on request". `images` is ordered
/// with the primary photo first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Store-assigned identifier
    pub id: i64,
    pub plate: String,
    pub brand: String,
    pub model: String,
    /// Sub-model / trim level, e.g. "1.0 Turbo"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trim: Option<String>,
    pub manufacture_year: i32,
    pub model_year: i32,
    pub color: String,
    pub fuel: String,
    pub transmission: String,
    /// Controlled category vocabulary, e.g. `CARROS`, `MOTOS`, `CAMINHÕES`
    pub category: String,
    pub doors: String,
    pub mileage_km: u32,
    pub price: f64,
    pub images: Vec<String>,
    /// Optional-equipment labels, in display order
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Vehicle {
    /// "Brand Model" display name
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }

    /// Whether the price is the "price on request" sentinel
    pub fn price_on_request(&self) -> bool {
        self.price == 0.0
    }
}

/// Incoming vehicle payload for create and update
///
/// Passed through [`VehicleDraft::ensure_valid`] at the HTTP boundary
/// before it reaches a store.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VehicleDraft {
    #[validate(length(min = 7, max = 8, message = "plate must be 7 or 8 characters"))]
    pub plate: String,
    #[validate(length(min = 1, message = "brand is required"))]
    pub brand: String,
    #[validate(length(min = 1, message = "model is required"))]
    pub model: String,
    #[serde(default)]
    pub trim: Option<String>,
    pub manufacture_year: i32,
    pub model_year: i32,
    #[validate(length(min = 1, message = "color is required"))]
    pub color: String,
    #[validate(length(min = 1, message = "fuel is required"))]
    pub fuel: String,
    #[validate(length(min = 1, message = "transmission is required"))]
    pub transmission: String,
    #[validate(length(min = 1, message = "category is required"))]
    pub category: String,
    #[serde(default)]
    pub doors: String,
    pub mileage_km: u32,
    #[validate(range(min = 0.0, message = "price must be zero or positive"))]
    pub price: f64,
    #[validate(length(min = 1, message = "at least one image is required"))]
    pub images: Vec<String>,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    #[validate(url(message = "video_url must be a valid URL"))]
    pub video_url: Option<String>,
}

impl VehicleDraft {
    /// Run all draft checks: the derive checks plus the year windows that
    /// depend on the current date
    pub fn ensure_valid(&self) -> Result<(), VitrineError> {
        self.validate().map_err(ValidationError::Payload)?;

        let current_year = Utc::now().year();
        if !(1900..=current_year + 1).contains(&self.manufacture_year) {
            return Err(ValidationError::field(
                "manufacture_year",
                format!("must be between 1900 and {}", current_year + 1),
            )
            .into());
        }
        if !(1900..=current_year + 2).contains(&self.model_year) {
            return Err(ValidationError::field(
                "model_year",
                format!("must be between 1900 and {}", current_year + 2),
            )
            .into());
        }

        Ok(())
    }

    /// Materialize a record from this draft
    pub fn into_record(self, id: i64, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Vehicle {
        Vehicle {
            id,
            plate: self.plate,
            brand: self.brand,
            model: self.model,
            trim: self.trim,
            manufacture_year: self.manufacture_year,
            model_year: self.model_year,
            color: self.color,
            fuel: self.fuel,
            transmission: self.transmission,
            category: self.category,
            doors: self.doors,
            mileage_km: self.mileage_km,
            price: self.price,
            images: self.images,
            options: self.options,
            notes: self.notes,
            video_url: self.video_url,
            created_at,
            updated_at,
        }
    }
}

/// The sortable columns of the vehicle table
///
/// A closed enumeration: sort requests are parsed into this type at the
/// HTTP boundary, so a column that does not exist cannot be asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Plate,
    Brand,
    ManufactureYear,
    Category,
    Price,
}

impl SortField {
    /// Every sortable column, in table-header order
    pub const ALL: [SortField; 5] = [
        SortField::Brand,
        SortField::Plate,
        SortField::ManufactureYear,
        SortField::Category,
        SortField::Price,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Plate => "plate",
            SortField::Brand => "brand",
            SortField::ManufactureYear => "manufacture_year",
            SortField::Category => "category",
            SortField::Price => "price",
        }
    }

    /// Compare two records on this column (ascending)
    pub fn compare(&self, a: &Vehicle, b: &Vehicle) -> Ordering {
        match self {
            SortField::Plate => a.plate.cmp(&b.plate),
            SortField::Brand => a.brand.cmp(&b.brand),
            SortField::ManufactureYear => a.manufacture_year.cmp(&b.manufacture_year),
            SortField::Category => a.category.cmp(&b.category),
            SortField::Price => a.price.total_cmp(&b.price),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plate" => Ok(SortField::Plate),
            "brand" => Ok(SortField::Brand),
            "manufacture_year" => Ok(SortField::ManufactureYear),
            "category" => Ok(SortField::Category),
            "price" => Ok(SortField::Price),
            other => Err(ValidationError::UnknownSortField(other.to_string())),
        }
    }
}

/// Sort direction for a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => f.write_str("asc"),
            SortDirection::Descending => f.write_str("desc"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Ascending),
            "desc" => Ok(SortDirection::Descending),
            other => Err(ValidationError::UnknownSortDirection(other.to_string())),
        }
    }
}

/// An active sort: column plus direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortConfig {
    pub field: SortField,
    pub direction: SortDirection,
}
