//! Per-application style configuration layered over the shared theme.
//!
//! An application merges the shared [`Theme`] into its local token set,
//! declares which source trees are scanned for class usage, and emits a
//! stylesheet restricted to the utilities it actually references.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use leptos::logging;
use thiserror::Error;

use crate::theme::{Theme, ThemeError, TokenGroup, TokenKey, TokenValue};

/// Utilities available to every application independent of the token set.
const LAYOUT_UTILITIES: &[(&str, &[(&str, &str)])] = &[
    ("flex", &[("display", "flex")]),
    ("flex-col", &[("flex-direction", "column")]),
    ("items-center", &[("align-items", "center")]),
    ("justify-between", &[("justify-content", "space-between")]),
    ("min-h-screen", &[("min-height", "100vh")]),
];

/// Errors raised while building or using a [`StyleConfig`].
#[derive(Debug, Error)]
pub enum StyleConfigError {
    /// The builder was finished without a shared theme.
    #[error("style config `{app}` has no shared theme")]
    MissingTheme {
        /// Owning application.
        app: String,
    },
    /// A local token reuses a key owned by the shared theme.
    #[error("local token `{key}` in style config `{app}` shadows a shared theme token")]
    ShadowedToken {
        /// Owning application.
        app: String,
        /// Conflicting key.
        key: TokenKey,
    },
    /// Two tokens derive the same utility class.
    #[error("utility `{class}` in style config `{app}` is derived from both {existing} and {incoming}")]
    UtilityCollision {
        /// Owning application.
        app: String,
        /// Contested class name.
        class: String,
        /// Source already holding the class.
        existing: String,
        /// Source that tried to claim it.
        incoming: String,
    },
    /// A local token name failed validation.
    #[error(transparent)]
    InvalidToken(#[from] ThemeError),
    /// A declared content source could not be read.
    #[error("failed to scan {}: {source}", .path.display())]
    Scan {
        /// Unreadable path.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A class name with its CSS declarations.
pub struct Utility {
    /// Class name as written in markup.
    pub class: String,
    /// Ordered `(property, value)` declarations.
    pub declarations: Vec<(&'static str, String)>,
    /// Token the utility was derived from; `None` for layout utilities.
    pub source: Option<TokenKey>,
}

impl Utility {
    /// Renders the utility as a single CSS rule.
    pub fn css_rule(&self) -> String {
        let body = self
            .declarations
            .iter()
            .map(|(property, value)| format!("{property}: {value};"))
            .collect::<Vec<_>>()
            .join(" ");
        format!(".{} {{ {body} }}", self.class)
    }
}

fn token_utilities(key: &TokenKey) -> Vec<Utility> {
    let var = format!("var({})", key.css_variable());
    let name = key.name.as_str();
    let make = |class: String, declarations: Vec<(&'static str, String)>| Utility {
        class,
        declarations,
        source: Some(key.clone()),
    };

    match key.group {
        TokenGroup::Colors => vec![
            make(format!("text-{name}"), vec![("color", var.clone())]),
            make(format!("bg-{name}"), vec![("background-color", var.clone())]),
            make(format!("border-{name}"), vec![("border-color", var)]),
        ],
        TokenGroup::Spacing => vec![
            make(format!("p-{name}"), vec![("padding", var.clone())]),
            make(
                format!("px-{name}"),
                vec![("padding-left", var.clone()), ("padding-right", var.clone())],
            ),
            make(
                format!("py-{name}"),
                vec![("padding-top", var.clone()), ("padding-bottom", var.clone())],
            ),
            make(format!("m-{name}"), vec![("margin", var.clone())]),
            make(format!("gap-{name}"), vec![("gap", var)]),
        ],
        TokenGroup::Radius => {
            let class = if name == "default" {
                "rounded".to_string()
            } else {
                format!("rounded-{name}")
            };
            vec![make(class, vec![("border-radius", var)])]
        }
        TokenGroup::FontSize => vec![make(format!("text-{name}"), vec![("font-size", var)])],
        TokenGroup::FontWeight => vec![make(format!("font-{name}"), vec![("font-weight", var)])],
    }
}

fn utility_origin(utility: &Utility) -> String {
    match &utility.source {
        Some(key) => key.to_string(),
        None => "the layout layer".to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A source tree scanned for class usage.
pub struct ContentSource {
    root: PathBuf,
    extensions: Vec<String>,
}

impl ContentSource {
    /// Declares `root` as scanned for files with any of `extensions`.
    pub fn new(root: impl Into<PathBuf>, extensions: &[&str]) -> Self {
        Self {
            root: root.into(),
            extensions: extensions.iter().map(|ext| ext.to_string()).collect(),
        }
    }

    /// Declares a Rust source tree.
    pub fn rust(root: impl Into<PathBuf>) -> Self {
        Self::new(root, &["rs"])
    }

    /// Scanned root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|allowed| allowed == ext))
    }

    fn collect_files(&self, dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), StyleConfigError> {
        let scan_err = |source: std::io::Error| StyleConfigError::Scan {
            path: dir.to_path_buf(),
            source,
        };
        let mut entries = fs::read_dir(dir)
            .map_err(scan_err)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(scan_err)?;
        entries.sort_by_key(|entry| entry.path());

        for entry in entries {
            let path = entry.path();
            if path.is_dir() {
                self.collect_files(&path, out)?;
            } else if path.is_file() && self.matches(&path) {
                out.push(path);
            }
        }
        Ok(())
    }
}

/// Builder for [`StyleConfig`].
#[derive(Debug)]
pub struct StyleConfigBuilder {
    app: String,
    theme: Option<&'static Theme>,
    local: Vec<(TokenGroup, String, TokenValue)>,
    content: Vec<ContentSource>,
}

impl StyleConfigBuilder {
    /// Merges the shared theme into this configuration.
    ///
    /// The configuration keeps the reference for the life of the process, so
    /// a variant built with [`Theme::derive`] has to live in a `static`
    /// (for example a `OnceLock<Theme>`) before it can be merged here.
    pub fn theme(mut self, theme: &'static Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Adds an application-local token.
    pub fn local_token(
        mut self,
        group: TokenGroup,
        name: impl Into<String>,
        value: impl Into<TokenValue>,
    ) -> Self {
        self.local.push((group, name.into(), value.into()));
        self
    }

    /// Declares a source tree scanned for class usage.
    pub fn content(mut self, source: ContentSource) -> Self {
        self.content.push(source);
        self
    }

    /// Validates local tokens against the shared theme and derives utilities.
    pub fn build(self) -> Result<StyleConfig, StyleConfigError> {
        let Some(theme) = self.theme else {
            return Err(StyleConfigError::MissingTheme { app: self.app });
        };

        let mut local = BTreeMap::new();
        for (group, name, value) in self.local {
            let key = TokenKey::new(group, name)?;
            if theme.contains(&key) {
                return Err(StyleConfigError::ShadowedToken { app: self.app, key });
            }
            local.insert(key, value);
        }

        let mut utilities = BTreeMap::new();
        for (class, declarations) in LAYOUT_UTILITIES {
            let utility = Utility {
                class: class.to_string(),
                declarations: declarations
                    .iter()
                    .map(|(property, value)| (*property, value.to_string()))
                    .collect(),
                source: None,
            };
            utilities.insert(utility.class.clone(), utility);
        }
        for key in local.keys().chain(theme.iter().map(|(key, _)| key)) {
            for utility in token_utilities(key) {
                if let Some(existing) = utilities.get(&utility.class) {
                    return Err(StyleConfigError::UtilityCollision {
                        app: self.app,
                        class: utility.class,
                        existing: utility_origin(existing),
                        incoming: key.to_string(),
                    });
                }
                utilities.insert(utility.class.clone(), utility);
            }
        }

        Ok(StyleConfig {
            app: self.app,
            theme,
            local,
            content: self.content,
            utilities,
        })
    }
}

/// Resolved style configuration owned by one application.
#[derive(Debug)]
pub struct StyleConfig {
    app: String,
    theme: &'static Theme,
    local: BTreeMap<TokenKey, TokenValue>,
    content: Vec<ContentSource>,
    utilities: BTreeMap<String, Utility>,
}

impl StyleConfig {
    /// Starts a configuration for `app`.
    pub fn builder(app: impl Into<String>) -> StyleConfigBuilder {
        StyleConfigBuilder {
            app: app.into(),
            theme: None,
            local: Vec::new(),
            content: Vec::new(),
        }
    }

    /// Owning application name.
    pub fn app(&self) -> &str {
        &self.app
    }

    /// The shared theme this configuration was merged with.
    pub fn theme(&self) -> &'static Theme {
        self.theme
    }

    /// Declared content sources.
    pub fn content(&self) -> &[ContentSource] {
        &self.content
    }

    /// Iterates merged tokens: local first, then shared.
    pub fn tokens(&self) -> impl Iterator<Item = (&TokenKey, &TokenValue)> {
        self.local.iter().chain(self.theme.iter())
    }

    /// Resolves a class name to its utility.
    pub fn resolve(&self, class: &str) -> Option<&Utility> {
        self.utilities.get(class)
    }

    /// Iterates every available utility ordered by class name.
    pub fn utilities(&self) -> impl Iterator<Item = &Utility> {
        self.utilities.values()
    }

    /// Utilities derived from `key`.
    pub fn utilities_for(&self, key: &TokenKey) -> Vec<&Utility> {
        self.utilities
            .values()
            .filter(|utility| utility.source.as_ref() == Some(key))
            .collect()
    }

    /// Collects resolvable class names referenced in `text`.
    pub fn used_utilities_in(&self, text: &str) -> BTreeSet<String> {
        text.split(|ch: char| ch.is_whitespace() || matches!(ch, '"' | '\'' | '`' | '=' | '(' | ')' | ','))
            .filter(|candidate| self.utilities.contains_key(*candidate))
            .map(str::to_string)
            .collect()
    }

    /// Walks every declared content source and collects referenced utilities.
    pub fn scan_used_utilities(&self) -> Result<BTreeSet<String>, StyleConfigError> {
        let mut used = BTreeSet::new();
        for source in &self.content {
            let mut files = Vec::new();
            source.collect_files(source.root(), &mut files)?;
            for path in files {
                let text = fs::read_to_string(&path)
                    .map_err(|source| StyleConfigError::Scan { path, source })?;
                used.extend(self.used_utilities_in(&text));
            }
        }
        Ok(used)
    }

    /// Emits CSS: `:root` custom properties for every merged token, then one
    /// rule per class in `used` that resolves.
    pub fn stylesheet<'a, I>(&self, used: I) -> String
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut css = String::from(":root {\n");
        for (key, value) in self.tokens() {
            let _ = writeln!(css, "  {}: {value};", key.css_variable());
        }
        css.push_str("}\n");

        let mut classes: Vec<&str> = used.into_iter().collect();
        classes.sort_unstable();
        classes.dedup();
        for class in classes {
            match self.resolve(class) {
                Some(utility) => {
                    let _ = writeln!(css, "{}", utility.css_rule());
                }
                None => logging::warn!("style config `{}` skipped unknown utility `{class}`", self.app),
            }
        }
        css
    }
}
