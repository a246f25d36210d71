//! Supported team catalog
//!
//! User-facing names are translated to the statistics source's canonical
//! names before any matching against fetched records.

/// Teams selectable for prediction, with their canonical name at the
/// statistics source
const TEAM_CATALOG: &[(&str, &str)] = &[
    ("APOEL Nicosia", "APOEL Nicosia FC"),
    ("Aris Limassol", "Aris Limassol FC"),
    ("Omonia Nicosia", "Omonia Nicosia"),
    ("Paphos FC", "Paphos FC"),
    ("AEK Larnaca", "AEK Larnaca"),
    ("Anorthosis Famagusta", "Anorthosis Famagusta"),
];

/// User-facing names of all supported teams
pub fn supported_teams() -> Vec<&'static str> {
    TEAM_CATALOG.iter().map(|(name, _)| *name).collect()
}

/// Whether a user-facing team name is in the catalog
pub fn is_supported(name: &str) -> bool {
    TEAM_CATALOG.iter().any(|(user, _)| *user == name)
}

/// Canonical statistics-source name for a user-facing team name.
///
/// Unknown names pass through unchanged; they will simply never match a
/// fetched record.
pub fn canonical_name(name: &str) -> &str {
    TEAM_CATALOG
        .iter()
        .find(|(user, _)| *user == name)
        .map(|(_, api)| *api)
        .unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_team_count() {
        assert_eq!(supported_teams().len(), 6);
    }

    #[test]
    fn test_canonical_name_mapped() {
        assert_eq!(canonical_name("APOEL Nicosia"), "APOEL Nicosia FC");
        assert_eq!(canonical_name("Aris Limassol"), "Aris Limassol FC");
    }

    #[test]
    fn test_canonical_name_identity() {
        assert_eq!(canonical_name("Paphos FC"), "Paphos FC");
        assert_eq!(canonical_name("AEK Larnaca"), "AEK Larnaca");
    }

    #[test]
    fn test_unknown_name_passes_through() {
        assert!(!is_supported("Real Madrid"));
        assert_eq!(canonical_name("Real Madrid"), "Real Madrid");
    }
}
