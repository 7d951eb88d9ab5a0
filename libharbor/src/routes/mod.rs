//! Route table and endpoint resolution.
//!
//! A route table maps dotted route keys (for example `projects.base`) to path
//! templates such as `projects/{project_id}/members/{user_id}`. Templates use
//! named placeholders; [`RouteTable::resolve`] substitutes them from a
//! [`RouteParams`] value and rejects any mismatch between the two.

use crate::error::{HarborError, Result};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use std::collections::BTreeMap;
use std::fmt;


/// Built-in Harbor v1 API routes, relative to the API root.
pub const DEFAULT_ROUTES: &[(&str, &str)] = &[
    ("projects.root", "projects"),
    ("projects.base", "projects/{project_id}"),
    ("projects.logs.root", "projects/{project_id}/logs"),
    ("projects.metadatas.root", "projects/{project_id}/metadatas"),
    (
        "projects.metadatas.base",
        "projects/{project_id}/metadatas/{meta_name}",
    ),
    ("projects.members.root", "projects/{project_id}/members"),
    (
        "projects.members.base",
        "projects/{project_id}/members/{user_id}",
    ),
    ("repositories.root", "repositories"),
    ("repositories.base", "repositories/{repo_name}"),
    (
        "repositories.tags.root",
        "repositories/{project_name}/{repo_name}/tags",
    ),
    (
        "repositories.tags.base",
        "repositories/{project_name}/{repo_name}/tags/{tag}",
    ),
    (
        "repositories.tags.manifest",
        "repositories/{repo_name}/tags/{tag}/manifest",
    ),
    (
        "repositories.tags.scan",
        "repositories/{repo_name}/tags/{tag}/scan",
    ),
    (
        "repositories.tags.vulnerability",
        "repositories/{repo_name}/tags/{tag}/vulnerability/details",
    ),
    ("repositories.signatures", "repositories/{repo_name}/signatures"),
    ("repositories.top", "repositories/top"),
    ("users.root", "users"),
    ("users.base", "users/{user_id}"),
    ("users.current", "users/current"),
    ("users.password", "users/{user_id}/password"),
    ("users.sysadmin", "users/{user_id}/sysadmin"),
    ("statistics", "statistics"),
];

/// Named substitution values for a route template.
///
/// Values keep insertion order and are stringified with [`fmt::Display`].
///
/// # Examples
///
/// ```
/// use libharbor::routes::RouteParams;
///
/// let params = RouteParams::new().with("project_id", 7).with("user_id", 42);
/// assert_eq!(params.get("user_id"), Some("42"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    values: Vec<(String, String)>,
}

impl RouteParams {
    /// Creates an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named value, replacing any earlier value with the same name.
    pub fn with(mut self, name: impl Into<String>, value: impl fmt::Display) -> Self {
        let name = name.into();
        let value = value.to_string();
        match self.values.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.values.push((name, value)),
        }
        self
    }

    /// Returns the value bound to `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns true when no values are bound.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn names(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|(n, _)| n.as_str())
    }
}

/// Bytes escaped in a substituted path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Placeholders whose values are `/`-separated paths, such as `library/nginx`.
const PATH_PLACEHOLDERS: &[&str] = &["repo_name"];

/// Encodes a placeholder value so it cannot leave its own path position.
///
/// Single-segment values are escaped whole. Values of [`PATH_PLACEHOLDERS`]
/// are split on `/` and each part is escaped. Empty, `.` and `..` parts are
/// rejected.
fn encode_value(name: &str, value: &str) -> Result<String> {
    let parts: Vec<&str> = if PATH_PLACEHOLDERS.contains(&name) {
        value.split('/').collect()
    } else {
        vec![value]
    };

    let mut encoded = Vec::with_capacity(parts.len());
    for part in parts {
        if part.is_empty() || part == "." || part == ".." {
            return Err(HarborError::validation(format!(
                "Invalid value '{}' for route placeholder '{}'",
                value, name
            )));
        }
        encoded.push(utf8_percent_encode(part, SEGMENT).to_string());
    }
    Ok(encoded.join("/"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// A parsed path template.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RouteTemplate {
    raw: String,
    segments: Vec<Segment>,
}

impl RouteTemplate {
    fn parse(raw: &str) -> std::result::Result<Self, String> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = raw.chars();

        while let Some(c) = chars.next() {
            match c {
                '{' => {
                    let mut name = String::new();
                    let mut closed = false;
                    for n in chars.by_ref() {
                        if n == '}' {
                            closed = true;
                            break;
                        }
                        name.push(n);
                    }
                    if !closed {
                        return Err(format!("unterminated placeholder in '{}'", raw));
                    }
                    if name.is_empty()
                        || !name.chars().all(|n| n.is_ascii_alphanumeric() || n == '_')
                    {
                        return Err(format!("invalid placeholder '{{{}}}' in '{}'", name, raw));
                    }
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Placeholder(name));
                }
                '}' => return Err(format!("unmatched '}}' in '{}'", raw)),
                _ => literal.push(c),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Placeholder(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }
}

/// Immutable mapping from route keys to path templates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    routes: BTreeMap<String, RouteTemplate>,
}

impl RouteTable {
    /// Creates an empty route table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from `(key, template)` pairs.
    ///
    /// Fails with a configuration error naming the first malformed template.
    pub fn from_templates<I, K, V>(templates: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let mut table = Self::new();
        for (key, template) in templates {
            table.insert(key, template.as_ref())?;
        }
        Ok(table)
    }

    /// Builds a table holding [`DEFAULT_ROUTES`].
    pub fn with_defaults() -> Result<Self> {
        Self::from_templates(DEFAULT_ROUTES.iter().copied())
    }

    /// Adds or replaces a route.
    pub fn insert(&mut self, key: impl Into<String>, template: &str) -> Result<()> {
        let key = key.into();
        let parsed = RouteTemplate::parse(template).map_err(|message| {
            HarborError::config(format!("Route '{}': {}", key, message), None)
        })?;
        self.routes.insert(key, parsed);
        Ok(())
    }

    /// Returns the raw template for `key`.
    pub fn template(&self, key: &str) -> Option<&str> {
        self.routes.get(key).map(|t| t.raw.as_str())
    }

    /// Returns true if `key` is configured.
    pub fn contains(&self, key: &str) -> bool {
        self.routes.contains_key(key)
    }

    /// Iterates over configured keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.routes.keys().map(String::as_str)
    }

    /// Number of configured routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns true if no routes are configured.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Checks that every key in `keys` is configured.
    ///
    /// The error lists all missing keys, not only the first.
    pub fn require(&self, keys: &[&str]) -> Result<()> {
        let missing: Vec<&str> = keys
            .iter()
            .copied()
            .filter(|k| !self.contains(k))
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(HarborError::config(
                format!("Missing required routes: {}", missing.join(", ")),
                None,
            ))
        }
    }

    /// Resolves `key` into a concrete path.
    ///
    /// # Examples
    ///
    /// ```
    /// use libharbor::routes::{RouteParams, RouteTable};
    ///
    /// let table = RouteTable::from_templates([("projects.base", "projects/{project_id}")]).unwrap();
    /// let path = table
    ///     .resolve("projects.base", &RouteParams::new().with("project_id", 3))
    ///     .unwrap();
    /// assert_eq!(path, "projects/3");
    /// ```
    ///
    /// # Errors
    ///
    /// - [`HarborError::RouteNotFound`] if `key` is not configured
    /// - [`HarborError::ArityMismatch`] if a placeholder has no value or a
    ///   value matches no placeholder
    /// - [`HarborError::Validation`] if a value is empty or a `.`/`..` segment
    pub fn resolve(&self, key: &str, params: &RouteParams) -> Result<String> {
        let template = self
            .routes
            .get(key)
            .ok_or_else(|| HarborError::route_not_found(key))?;

        let mut missing: Vec<String> = Vec::new();
        for name in template.placeholders() {
            if params.get(name).is_none() && !missing.iter().any(|m| m == name) {
                missing.push(name.to_string());
            }
        }
        let unused: Vec<String> = params
            .names()
            .filter(|name| !template.placeholders().any(|p| p == *name))
            .map(str::to_string)
            .collect();

        if !missing.is_empty() || !unused.is_empty() {
            return Err(HarborError::ArityMismatch {
                key: key.to_string(),
                missing,
                unused,
            });
        }

        let mut path = String::with_capacity(template.raw.len());
        for segment in &template.segments {
            match segment {
                Segment::Literal(text) => path.push_str(text),
                // Presence was checked above.
                Segment::Placeholder(name) => {
                    path.push_str(&encode_value(name, params.get(name).unwrap_or_default())?)
                }
            }
        }
        Ok(path)
    }
}
