//! Admin credential passed to mutating catalog calls.

const TOKEN_ENV_VAR: &str = "MOVIE_CATALOG_TOKEN";

/// Opaque bearer credential.
///
/// The token is forwarded verbatim and never inspected. `Debug` output is
/// redacted so the token does not end up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Read the token from `MOVIE_CATALOG_TOKEN`, if set and non-empty.
    pub fn from_env() -> Option<Self> {
        std::env::var(TOKEN_ENV_VAR)
            .ok()
            .filter(|t| !t.is_empty())
            .map(Self)
    }

    /// Use an explicit token when given, otherwise the environment.
    pub fn resolve(explicit: Option<&str>) -> Option<Self> {
        match explicit {
            Some(token) if !token.is_empty() => Some(Self::new(token)),
            _ => Self::from_env(),
        }
    }

    /// Value for the `Authorization` header.
    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_header_is_verbatim() {
        let credential = Credential::new("abc.def.ghi");
        assert_eq!(credential.bearer_header(), "Bearer abc.def.ghi");
    }

    #[test]
    fn test_debug_is_redacted() {
        let credential = Credential::new("secret-token");
        assert!(!format!("{:?}", credential).contains("secret-token"));
    }

    #[test]
    fn test_explicit_token_wins() {
        let credential = Credential::resolve(Some("explicit")).unwrap();
        assert_eq!(credential.bearer_header(), "Bearer explicit");
    }
}
