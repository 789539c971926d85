use crate::error::VersionDeterminerError;
use std::fmt;
use std::str::FromStr;

/// Granularity of the release being cut
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseType {
    Major,
    Minor,
    Patch,
}

impl FromStr for ReleaseType {
    type Err = VersionDeterminerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MAJOR" => Ok(ReleaseType::Major),
            "MINOR" => Ok(ReleaseType::Minor),
            "PATCH" => Ok(ReleaseType::Patch),
            other => Err(VersionDeterminerError::InvalidReleaseType(other.to_string())),
        }
    }
}

impl fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseType::Major => write!(f, "MAJOR"),
            ReleaseType::Minor => write!(f, "MINOR"),
            ReleaseType::Patch => write!(f, "PATCH"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_release_types() {
        assert_eq!("MAJOR".parse::<ReleaseType>().unwrap(), ReleaseType::Major);
        assert_eq!("MINOR".parse::<ReleaseType>().unwrap(), ReleaseType::Minor);
        assert_eq!("PATCH".parse::<ReleaseType>().unwrap(), ReleaseType::Patch);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("major".parse::<ReleaseType>().is_err());
        assert!("Patch".parse::<ReleaseType>().is_err());
    }

    #[test]
    fn test_parse_unknown() {
        let err = "bogus".parse::<ReleaseType>().unwrap_err();
        assert!(err.is_usage_error());
        assert!(err.to_string().contains("`MAJOR`, `MINOR` or `PATCH`"));
    }

    #[test]
    fn test_display_matches_parse() {
        for release_type in [ReleaseType::Major, ReleaseType::Minor, ReleaseType::Patch] {
            let parsed: ReleaseType = release_type.to_string().parse().unwrap();
            assert_eq!(parsed, release_type);
        }
    }
}
