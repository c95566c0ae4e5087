use crate::error::BumpError;
use std::fmt;
use std::str::FromStr;

/// A plugin release number, always exactly `major.minor.patch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bump {
    Patch,
    Minor,
    Major,
}

impl Bump {
    /// Menu order: smallest change first.
    pub const ALL: [Bump; 3] = [Bump::Patch, Bump::Minor, Bump::Major];

    pub fn label(&self) -> &'static str {
        match self {
            Bump::Patch => "patch",
            Bump::Minor => "minor",
            Bump::Major => "major",
        }
    }
}

impl Version {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    pub fn bump(&self, bump: Bump) -> Version {
        match bump {
            Bump::Patch => Version::new(self.major, self.minor, self.patch.saturating_add(1)),
            Bump::Minor => Version::new(self.major, self.minor.saturating_add(1), 0),
            Bump::Major => Version::new(self.major.saturating_add(1), 0, 0),
        }
    }
}

impl FromStr for Version {
    type Err = BumpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || BumpError::InvalidVersion(s.to_string());

        let parts = s
            .trim()
            .split('.')
            .map(|p| {
                if p.is_empty() || !p.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid());
                }
                p.parse::<u64>().map_err(|_| invalid())
            })
            .collect::<Result<Vec<_>, _>>()?;

        match parts.as_slice() {
            [major, minor, patch] => Ok(Version::new(*major, *minor, *patch)),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1.2.3", Version::new(1, 2, 3))]
    #[case("0.0.0", Version::new(0, 0, 0))]
    #[case(" 10.20.30 ", Version::new(10, 20, 30))]
    fn parses_three_numeric_components(#[case] input: &str, #[case] expected: Version) {
        assert_eq!(input.parse::<Version>().unwrap(), expected);
    }

    #[rstest]
    #[case("1.2")]
    #[case("1.2.3.4")]
    #[case("1.2.x")]
    #[case("1..3")]
    #[case("-1.2.3")]
    #[case("1.2.3-beta")]
    #[case("trunk")]
    fn rejects_anything_but_a_triple(#[case] input: &str) {
        let err = input.parse::<Version>().unwrap_err();
        assert!(matches!(err, BumpError::InvalidVersion(v) if v == input));
    }

    #[rstest]
    #[case(Bump::Patch, "1.2.4")]
    #[case(Bump::Minor, "1.3.0")]
    #[case(Bump::Major, "2.0.0")]
    fn bumps_from_1_2_3(#[case] bump: Bump, #[case] expected: &str) {
        assert_eq!(Version::new(1, 2, 3).bump(bump).to_string(), expected);
    }

    #[test]
    fn bump_candidates_are_pairwise_distinct() {
        for v in [
            Version::new(0, 0, 0),
            Version::new(1, 0, 0),
            Version::new(0, 1, 0),
            Version::new(3, 9, 27),
        ] {
            let [a, b, c] = Bump::ALL.map(|bump| v.bump(bump));
            assert_ne!(a, b);
            assert_ne!(b, c);
            assert_ne!(a, c);
        }
    }

    #[test]
    fn bump_saturates_instead_of_overflowing() {
        let v = Version::new(1, 2, u64::MAX);
        assert_eq!(v.bump(Bump::Patch), v);
    }
}
