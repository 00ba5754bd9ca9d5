//! URL slugs for vehicle detail pages

use super::vehicle::Vehicle;

/// Build the detail-page slug for a vehicle:
/// brand, model, trim, manufacture year, and color, lowercased, with
/// accents folded and everything else collapsed to single dashes
///
/// `Fiat Uno Attractive 1.0 2020 Prata` → `fiat-uno-attractive-1-0-2020-prata`
pub fn vehicle_slug(vehicle: &Vehicle) -> String {
    let year = vehicle.manufacture_year.to_string();
    let parts = [
        vehicle.brand.as_str(),
        vehicle.model.as_str(),
        vehicle.trim.as_deref().unwrap_or(""),
        year.as_str(),
        vehicle.color.as_str(),
    ];

    let mut slug = String::new();
    for part in parts.into_iter().filter(|p| !p.is_empty()) {
        for c in part.chars().flat_map(|c| c.to_lowercase()) {
            let folded = fold_accent(c);
            if folded.is_ascii_alphanumeric() {
                slug.push(folded);
            } else if !slug.ends_with('-') && !slug.is_empty() {
                slug.push('-');
            }
        }
        if !slug.ends_with('-') && !slug.is_empty() {
            slug.push('-');
        }
    }

    slug.trim_matches('-').to_string()
}

/// Map the accented characters that occur in Brazilian vehicle data to
/// their ASCII base letter; anything else passes through
fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn vehicle(brand: &str, model: &str, trim: Option<&str>, color: &str) -> Vehicle {
        Vehicle {
            id: 1,
            plate: "ABC1234".to_string(),
            brand: brand.to_string(),
            model: model.to_string(),
            trim: trim.map(str::to_string),
            manufacture_year: 2020,
            model_year: 2020,
            color: color.to_string(),
            fuel: "Flex".to_string(),
            transmission: "Manual".to_string(),
            category: "CARROS".to_string(),
            doors: "4".to_string(),
            mileage_km: 0,
            price: 0.0,
            images: vec!["https://cdn.example.com/1.jpg".to_string()],
            options: vec![],
            notes: String::new(),
            video_url: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_basic_slug() {
        let v = vehicle("Fiat", "Uno", Some("Attractive 1.0"), "Prata");
        assert_eq!(vehicle_slug(&v), "fiat-uno-attractive-1-0-2020-prata");
    }

    #[test]
    fn test_missing_trim_is_skipped() {
        let v = vehicle("Honda", "CB 500", None, "Vermelha");
        assert_eq!(vehicle_slug(&v), "honda-cb-500-2020-vermelha");
    }

    #[test]
    fn test_accents_are_folded() {
        let v = vehicle("Citroën", "C4", None, "Câmbio");
        assert_eq!(vehicle_slug(&v), "citroen-c4-2020-cambio");
    }

    #[test]
    fn test_no_leading_or_trailing_dashes() {
        let v = vehicle(" Fiat ", "Uno!", None, "Prata.");
        let slug = vehicle_slug(&v);
        assert!(!slug.starts_with('-'));
        assert!(!slug.ends_with('-'));
        assert!(!slug.contains("--"));
    }
}
