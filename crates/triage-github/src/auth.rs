//! Access token resolution.

use secrecy::SecretString;

use crate::error::{Error, Result};

/// Environment variables consulted by [`Auth::auto`], in order.
pub const TOKEN_ENV_VARS: [&str; 2] = ["GITHUB_ACCESS_TOKEN", "GITHUB_TOKEN"];

/// Where the GitHub access token comes from.
#[derive(Debug)]
pub enum Auth {
    /// Read the token from the first set, non-empty variable in the list.
    Env(Vec<String>),

    /// Use an explicit token.
    Token(SecretString),
}

impl Auth {
    /// Look the token up in [`TOKEN_ENV_VARS`].
    #[must_use]
    pub fn auto() -> Self {
        Self::Env(TOKEN_ENV_VARS.iter().map(ToString::to_string).collect())
    }

    /// Use an explicit token.
    #[must_use]
    pub fn token(token: impl Into<String>) -> Self {
        Self::Token(SecretString::from(token.into()))
    }

    /// Resolve the token.
    ///
    /// # Errors
    /// Returns [`Error::MissingToken`] if no variable holds a token.
    pub fn resolve(&self) -> Result<SecretString> {
        match self {
            Self::Token(token) => {
                use secrecy::ExposeSecret;
                Ok(SecretString::from(token.expose_secret().to_owned()))
            }
            Self::Env(vars) => vars
                .iter()
                .find_map(|var| std::env::var(var).ok().filter(|v| !v.trim().is_empty()))
                .map(SecretString::from)
                .ok_or_else(|| Error::MissingToken(vars.join(" or "))),
        }
    }
}
