use crate::base36;
use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Fixed path segment placed between the public origin and the id.
pub const TINY_URL_PATH_SEGMENT: &str = "t";

/// A validated short identifier for a shortened URL.
///
/// Ids are 1-13 characters long and drawn from the lowercase base-36
/// alphabet `[0-9a-z]`, which covers every rendering of a 64-bit hash.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShortId(String);

const MIN_LENGTH: usize = 1;
const MAX_LENGTH: usize = base36::MAX_ENCODED_LEN;

impl ShortId {
    /// Creates a new `ShortId` after validating the input.
    pub fn new(id: impl Into<String>) -> Result<Self, CoreError> {
        let id = id.into();
        Self::validate(&id)?;
        Ok(Self(id))
    }

    /// Renders `value` in base-36. Always yields a valid id.
    pub fn from_u64(value: u64) -> Self {
        Self(base36::encode(value))
    }

    /// Builds the public tiny URL: `{origin}/t/{id}`.
    ///
    /// Trailing slashes on `origin` are dropped so exactly one `/` separates
    /// the origin from the path segment.
    pub fn to_url(&self, origin: &str) -> String {
        format!(
            "{}/{}/{}",
            origin.trim_end_matches('/'),
            TINY_URL_PATH_SEGMENT,
            self.0
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(id: &str) -> Result<(), CoreError> {
        if id.len() < MIN_LENGTH || id.len() > MAX_LENGTH {
            return Err(CoreError::InvalidShortId(format!(
                "length must be between {} and {}, got {}",
                MIN_LENGTH,
                MAX_LENGTH,
                id.len()
            )));
        }

        if !id.chars().all(base36::is_digit) {
            return Err(CoreError::InvalidShortId(format!(
                "must contain only lowercase base-36 characters: '{}'",
                id
            )));
        }

        Ok(())
    }
}

impl TryFrom<String> for ShortId {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ShortId> for String {
    fn from(value: ShortId) -> Self {
        value.0
    }
}

impl Display for ShortId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_ids() {
        assert!(ShortId::new("0").is_ok());
        assert!(ShortId::new("lzbfxd8mrui8").is_ok());
        assert!(ShortId::new("3w5e11264sgsf").is_ok());
    }

    #[test]
    fn empty() {
        assert!(ShortId::new("").is_err());
    }

    #[test]
    fn too_long() {
        assert!(ShortId::new("a".repeat(14)).is_err());
    }

    #[test]
    fn invalid_characters() {
        assert!(ShortId::new("doesNotExist").is_err());
        assert!(ShortId::new("abc-def").is_err());
        assert!(ShortId::new("abc/def").is_err());
    }

    #[test]
    fn from_u64_is_base36() {
        assert_eq!(ShortId::from_u64(0).as_str(), "0");
        assert_eq!(ShortId::from_u64(2_893_183_417_099_344_176).as_str(), "lzbfxd8mrui8");
    }

    #[test]
    fn to_url_normalizes_trailing_slash() {
        let id = ShortId::new("lzbfxd8mrui8").unwrap();
        assert_eq!(id.to_url("https://aws.com"), "https://aws.com/t/lzbfxd8mrui8");
        assert_eq!(id.to_url("https://aws.com/"), "https://aws.com/t/lzbfxd8mrui8");
    }

    #[test]
    fn deserialize_rejects_invalid() {
        let ok: ShortId = serde_json::from_str("\"abc123\"").unwrap();
        assert_eq!(ok.as_str(), "abc123");
        assert!(serde_json::from_str::<ShortId>("\"ABC\"").is_err());
    }
}
