use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claims carried by an access token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (account identifier)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for `subject` expiring `validity` after `issued_at`.
    ///
    /// `None` if the expiry falls outside the representable date range.
    pub fn for_subject(
        subject: impl ToString,
        issued_at: DateTime<Utc>,
        validity: Duration,
    ) -> Option<Self> {
        let expires_at = issued_at.checked_add_signed(validity)?;

        Some(Self {
            sub: Some(subject.to_string()),
            exp: expires_at.timestamp(),
        })
    }

    /// Subject, if present and non-empty.
    pub fn subject(&self) -> Option<&str> {
        self.sub.as_deref().filter(|sub| !sub.is_empty())
    }

    /// Check if token is expired.
    ///
    /// A token is expired from the second its `exp` is reached.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp <= current_timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_for_subject() {
        let issued_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let claims = Claims::for_subject("alice@example.com", issued_at, Duration::hours(24))
            .expect("Expiry out of range");

        assert_eq!(claims.subject(), Some("alice@example.com"));
        assert_eq!(claims.exp - issued_at.timestamp(), 24 * 60 * 60);
    }

    #[test]
    fn test_for_subject_out_of_range() {
        let issued_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let validity = Duration::try_hours(10_000_000_000).unwrap();

        assert_eq!(Claims::for_subject("user123", issued_at, validity), None);
    }

    #[test]
    fn test_empty_subject_is_absent() {
        let claims = Claims {
            sub: Some(String::new()),
            exp: 0,
        };
        assert_eq!(claims.subject(), None);

        let claims = Claims { sub: None, exp: 0 };
        assert_eq!(claims.subject(), None);
    }

    #[test]
    fn test_is_expired() {
        let claims = Claims {
            sub: Some("user123".to_string()),
            exp: 1000,
        };

        assert!(!claims.is_expired(999)); // Not expired
        assert!(claims.is_expired(1000)); // Exactly at expiration
        assert!(claims.is_expired(1001)); // Expired
    }
}
