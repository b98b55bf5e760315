//! Well-known Trackman column names and the missing-value vocabulary.

/// Home team identifier as exported by the tracking system.
pub const HOME_TEAM: &str = "HomeTeam";

/// Away team identifier as exported by the tracking system.
pub const AWAY_TEAM: &str = "AwayTeam";

/// Derived home full-name column appended to every combined dataset.
pub const HOME_NAME_FULL: &str = "HomeNameFull";

/// Derived away full-name column appended to every combined dataset.
pub const AWAY_NAME_FULL: &str = "AwayNameFull";

/// Alias column kept for older downstream notebooks.
pub const HOME_TEAM_FULL: &str = "HomeTeamFull";

/// Alias column kept for older downstream notebooks.
pub const AWAY_TEAM_FULL: &str = "AwayTeamFull";

/// Pitch classification produced automatically by the tracking system.
pub const AUTO_PITCH_TYPE: &str = "AutoPitchType";

/// Pitch classification entered by a human tagger, when one was present.
pub const TAGGED_PITCH_TYPE: &str = "TaggedPitchType";

/// Values that count as missing in addition to the empty field.
pub const MISSING_VALUES: &[&str] = &["na", "n/a", "nan", "none", "null"];

/// True when a cell holds no usable value.
pub fn is_missing(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty()
        || MISSING_VALUES
            .iter()
            .any(|missing| trimmed.eq_ignore_ascii_case(missing))
}

/// True when a tagger left the pitch type unset.
///
/// Taggers leave a wider set of placeholders behind than ordinary missing
/// cells, so `undefined` counts here as well.
pub fn is_untagged(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty()
        || ["none", "null", "undefined"]
            .iter()
            .any(|placeholder| trimmed.eq_ignore_ascii_case(placeholder))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_values_are_case_insensitive() {
        assert!(is_missing(""));
        assert!(is_missing("  "));
        assert!(is_missing("NA"));
        assert!(is_missing("NaN"));
        assert!(is_missing(" null "));
        assert!(!is_missing("Yankees"));
        assert!(!is_missing("0"));
    }

    #[test]
    fn untagged_placeholders() {
        assert!(is_untagged(""));
        assert!(is_untagged("None"));
        assert!(is_untagged("undefined"));
        assert!(!is_untagged("Slider"));
    }
}
