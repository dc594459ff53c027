/// Splits an already normalized location into (city, province).
///
/// "Toronto, Ontario" gives ("Toronto", "Ontario"); parts past the second
/// are ignored. A location without a comma ("Canada") is a province or
/// country level entry with no city.
pub fn split_location(location: &str) -> (String, String) {
    let parts: Vec<&str> = location.split(',').map(|p| p.trim()).collect();

    if parts.len() >= 2 {
        return (parts[0].to_string(), parts[1].to_string());
    }

    (String::new(), location.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_and_province() {
        assert_eq!(
            split_location("Toronto, Ontario"),
            ("Toronto".to_string(), "Ontario".to_string())
        );
    }

    #[test]
    fn test_country_only() {
        assert_eq!(split_location("Canada"), ("".to_string(), "Canada".to_string()));
    }

    #[test]
    fn test_extra_parts_are_ignored() {
        assert_eq!(
            split_location("Vancouver, British Columbia, Canada"),
            ("Vancouver".to_string(), "British Columbia".to_string())
        );
    }

    #[test]
    fn test_parts_are_trimmed() {
        assert_eq!(
            split_location("Calgary ,  Alberta"),
            ("Calgary".to_string(), "Alberta".to_string())
        );
    }
}
