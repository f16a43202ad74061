//! Immutable design-token mapping shared by every application.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Token families recognized by the theme file and the style configuration layer.
pub enum TokenGroup {
    /// Color values.
    Colors,
    /// Padding, margin, and gap lengths.
    Spacing,
    /// Corner radii.
    Radius,
    /// Font sizes.
    FontSize,
    /// Numeric font weights.
    FontWeight,
}

impl TokenGroup {
    /// Every group, in canonical order.
    pub const ALL: [Self; 5] = [
        Self::Colors,
        Self::Spacing,
        Self::Radius,
        Self::FontSize,
        Self::FontWeight,
    ];

    /// Returns the stable kebab-case token used in files and CSS variables.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Colors => "colors",
            Self::Spacing => "spacing",
            Self::Radius => "radius",
            Self::FontSize => "font-size",
            Self::FontWeight => "font-weight",
        }
    }

    /// Parses a group token.
    pub fn from_token(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|group| group.token() == raw.trim())
    }
}

impl fmt::Display for TokenGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
/// A design-token value.
pub enum TokenValue {
    /// CSS text such as `#2f9e44` or `0.5rem`.
    Text(String),
    /// Unitless number such as a font weight.
    Number(f64),
}

impl From<&str> for TokenValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for TokenValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for TokenValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) if number.fract() == 0.0 && number.abs() < 1e15 => {
                write!(f, "{}", *number as i64)
            }
            Self::Number(number) => write!(f, "{number}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
/// Unique token address within a theme: group plus kebab-case name.
pub struct TokenKey {
    /// Token family.
    pub group: TokenGroup,
    /// Token name, unique within `group`.
    pub name: String,
}

impl TokenKey {
    /// Returns a key when `name` is lowercase kebab-case.
    pub fn new(group: TokenGroup, name: impl Into<String>) -> Result<Self, ThemeError> {
        let name = name.into();
        if is_valid_token_name(&name) {
            Ok(Self { group, name })
        } else {
            Err(ThemeError::InvalidName {
                group: group.token(),
                name,
            })
        }
    }

    /// CSS custom property name carrying this token's value.
    pub fn css_variable(&self) -> String {
        format!("--{}-{}", self.group.token(), self.name)
    }
}

impl fmt::Display for TokenKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.group.token(), self.name)
    }
}

/// Errors raised while deriving or extending token sets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// Token name is not lowercase kebab-case.
    #[error("invalid token name `{group}.{name}`; expected lowercase kebab-case")]
    InvalidName {
        /// Group token of the rejected key.
        group: &'static str,
        /// Rejected name.
        name: String,
    },
}

pub(crate) fn is_valid_token_name(raw: &str) -> bool {
    !raw.is_empty()
        && raw.len() <= 32
        && !raw.starts_with('-')
        && !raw.ends_with('-')
        && raw
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

pub(crate) enum RawValue {
    Text(&'static str),
    Number(f64),
}

pub(crate) struct RawToken {
    group: TokenGroup,
    name: &'static str,
    value: RawValue,
}

include!(concat!(env!("OUT_DIR"), "/theme_tokens_generated.rs"));

/// Immutable token mapping.
///
/// There is no mutation API: consumers read the shared value returned by
/// [`theme`] and build variants with [`Theme::derive`].
#[derive(Debug, PartialEq)]
pub struct Theme {
    tokens: BTreeMap<TokenKey, TokenValue>,
}

impl Theme {
    fn from_raw(raw: &[RawToken]) -> Self {
        let tokens = raw
            .iter()
            .map(|token| {
                let key = TokenKey {
                    group: token.group,
                    name: token.name.to_string(),
                };
                let value = match token.value {
                    RawValue::Text(text) => TokenValue::Text(text.to_string()),
                    RawValue::Number(number) => TokenValue::Number(number),
                };
                (key, value)
            })
            .collect();
        Self { tokens }
    }

    /// Looks up a token value.
    pub fn get(&self, group: TokenGroup, name: &str) -> Option<&TokenValue> {
        self.tokens.get(&TokenKey {
            group,
            name: name.to_string(),
        })
    }

    /// Returns whether `key` is defined.
    pub fn contains(&self, key: &TokenKey) -> bool {
        self.tokens.contains_key(key)
    }

    /// Iterates tokens ordered by group then name.
    pub fn iter(&self) -> impl Iterator<Item = (&TokenKey, &TokenValue)> {
        self.tokens.iter()
    }

    /// Iterates `(name, value)` pairs of one group.
    pub fn group(&self, group: TokenGroup) -> impl Iterator<Item = (&str, &TokenValue)> {
        self.tokens
            .iter()
            .filter(move |(key, _)| key.group == group)
            .map(|(key, value)| (key.name.as_str(), value))
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns whether the theme defines no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Builds a new theme from this one with `overrides` applied on top.
    ///
    /// `self` is left untouched, so deriving from the shared [`theme`] never
    /// affects other consumers.
    pub fn derive<I, S, V>(&self, overrides: I) -> Result<Theme, ThemeError>
    where
        I: IntoIterator<Item = (TokenGroup, S, V)>,
        S: Into<String>,
        V: Into<TokenValue>,
    {
        let mut tokens = self.tokens.clone();
        for (group, name, value) in overrides {
            tokens.insert(TokenKey::new(group, name)?, value.into());
        }
        Ok(Theme { tokens })
    }
}

static SHARED_THEME: OnceLock<Theme> = OnceLock::new();

/// Returns the process-wide shared theme.
///
/// Every caller receives the same reference; the token table is compiled in
/// from `theme.toml` and initialized on first access.
pub fn theme() -> &'static Theme {
    SHARED_THEME.get_or_init(|| Theme::from_raw(THEME_TOKENS))
}
