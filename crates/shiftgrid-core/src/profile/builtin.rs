use crate::error::ShiftError;
use crate::profile::parse_profile_str;
use crate::profile::schema::Profile;

const ES_JSON: &str = include_str!("../../../../profiles/es.json");
const EN_JSON: &str = include_str!("../../../../profiles/en.json");

/// Available predefined profiles.
pub const PRESETS: &[&str] = &["default", "es", "en"];

/// Load a predefined profile by name.
pub fn load_preset(name: &str) -> Result<Profile, ShiftError> {
    match name {
        "default" => Ok(Profile::default()),
        "es" => parse_profile_str(ES_JSON),
        "en" => parse_profile_str(EN_JSON),
        _ => Err(ShiftError::ProfileInvalid(format!(
            "unknown profile '{}'. Available: {}",
            name,
            PRESETS.join(", ")
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_presets_load() {
        for name in PRESETS {
            let p = load_preset(name).unwrap();
            assert_eq!(p.name, *name);
        }
    }

    #[test]
    fn test_es_preset_is_day_first() {
        let p = load_preset("es").unwrap();
        assert_eq!(p.date_formats[0], "%d/%m/%Y");
        assert!(p.is_weekday_name("Mié"));
        assert!(!p.is_weekday_name("Wed"));
    }

    #[test]
    fn test_unknown_preset() {
        assert!(load_preset("xyz").is_err());
    }
}
