//! Client configuration.
//!
//! Configuration is layered: built-in defaults, then an optional YAML file,
//! then `HARBOR__`-prefixed environment variables (for example
//! `HARBOR__INGRESS__DOMAIN`). Everything under `api` except `api.root` is the
//! route table, with nested keys joined by `.`.

use crate::auth::Credentials;
use crate::client::ClientConfig;
use crate::error::{HarborError, Result};
use crate::routes::{DEFAULT_ROUTES, RouteTable};
use config::{Config as ConfigRs, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

#[cfg(test)]
mod tests;

/// Prefix of environment variables that override file values.
pub const ENV_PREFIX: &str = "HARBOR";

/// Root configuration structure.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    #[serde(default)]
    pub ingress: Ingress,
    #[serde(default)]
    pub management: Management,
    #[serde(default)]
    pub api: Api,
    #[serde(default)]
    pub network: Network,
}

impl Config {
    /// Parses a `Config` from a YAML string layered over the defaults.
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let builder = ConfigRs::builder()
            .add_source(ConfigRs::try_from(&Config::default())?)
            .add_source(File::from_str(s, FileFormat::Yaml));

        Self::from_builder(builder, None)
    }

    /// Loads a `Config` from an optional file path and the process environment.
    ///
    /// If the path is `None`, only defaults and environment variables apply.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, None)
    }

    /// Like [`Config::load`], reading overrides from `env` instead of the
    /// process environment when given.
    pub(crate) fn load_with_env(
        path: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self> {
        let mut builder = ConfigRs::builder().add_source(ConfigRs::try_from(&Config::default())?);

        if let Some(p) = path {
            builder = builder.add_source(File::from(p).format(FileFormat::Yaml).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .source(env),
        );

        Self::from_builder(builder, path)
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
        path: Option<&Path>,
    ) -> Result<Self> {
        let path = path.map(|p| p.display().to_string());
        builder
            .build()
            .and_then(|cfg| cfg.try_deserialize())
            .map_err(|e| {
                HarborError::config_with_source(
                    "Failed to deserialize configuration".to_string(),
                    path,
                    e,
                )
            })
    }

    /// The registry base URL, `protocol://domain`.
    pub fn base_url(&self) -> String {
        format!("{}://{}", self.ingress.protocol, self.ingress.domain)
    }

    /// Management credentials; anonymous when no user name is configured.
    pub fn credentials(&self) -> Credentials {
        let user = &self.management.user;
        if user.name.is_empty() {
            Credentials::Anonymous
        } else {
            Credentials::basic(user.name.clone(), user.password.clone())
        }
    }

    /// Builds the transport configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when `ingress.domain` is empty and
    /// [`HarborError::InvalidUrl`] when the base URL cannot be parsed.
    pub fn to_client_config(&self) -> Result<ClientConfig> {
        if self.ingress.domain.trim().is_empty() {
            return Err(HarborError::config("ingress.domain is not set", None));
        }

        let mut config = ClientConfig::new(&self.base_url())?
            .with_api_root(self.api.root.clone())
            .with_credentials(self.credentials())
            .with_timeout(self.network.timeout)
            .with_max_idle_per_host(self.network.max_idle_per_host);
        if let Some(user_agent) = &self.network.user_agent {
            config = config.with_user_agent(user_agent.clone());
        }
        Ok(config)
    }

    /// Builds the route table from `api`, flattening nested keys.
    pub fn route_table(&self) -> Result<RouteTable> {
        let mut flat = Vec::new();
        for (name, node) in &self.api.routes {
            node.flatten(name.clone(), &mut flat);
        }
        RouteTable::from_templates(flat)
    }
}

/// Registry host settings.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ingress {
    #[serde(default = "default_ingress_protocol")]
    pub protocol: String,

    #[serde(default)]
    pub domain: String,
}

impl Default for Ingress {
    fn default() -> Self {
        Self {
            protocol: default_ingress_protocol(),
            domain: String::new(),
        }
    }
}

fn default_ingress_protocol() -> String {
    "https".to_string()
}

/// Management account settings.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Management {
    #[serde(default)]
    pub user: ManagementUser,
}

/// Credentials of the management account.
#[derive(Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ManagementUser {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub password: String,
}

impl std::fmt::Debug for ManagementUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManagementUser")
            .field("name", &self.name)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// API root and route templates.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Api {
    #[serde(default = "default_api_root")]
    pub root: String,

    #[serde(flatten)]
    pub routes: BTreeMap<String, RouteNode>,
}

impl Default for Api {
    fn default() -> Self {
        let mut routes = BTreeMap::new();
        for (key, template) in DEFAULT_ROUTES {
            RouteNode::insert_path(&mut routes, key, template);
        }
        Self {
            root: default_api_root(),
            routes,
        }
    }
}

fn default_api_root() -> String {
    "api".to_string()
}

/// A route template or a group of nested routes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum RouteNode {
    Template(String),
    Group(BTreeMap<String, RouteNode>),
}

impl RouteNode {
    fn insert_path(routes: &mut BTreeMap<String, RouteNode>, key: &str, template: &str) {
        match key.split_once('.') {
            None => {
                routes.insert(key.to_string(), RouteNode::Template(template.to_string()));
            }
            Some((head, rest)) => {
                let node = routes
                    .entry(head.to_string())
                    .or_insert_with(|| RouteNode::Group(BTreeMap::new()));
                if let RouteNode::Template(_) = node {
                    *node = RouteNode::Group(BTreeMap::new());
                }
                if let RouteNode::Group(children) = node {
                    Self::insert_path(children, rest, template);
                }
            }
        }
    }

    fn flatten(&self, prefix: String, out: &mut Vec<(String, String)>) {
        match self {
            RouteNode::Template(template) => out.push((prefix, template.clone())),
            RouteNode::Group(children) => {
                for (name, child) in children {
                    child.flatten(format!("{}.{}", prefix, name), out);
                }
            }
        }
    }
}

/// Network settings.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Network {
    #[serde(default = "default_network_timeout")]
    pub timeout: u64,

    #[serde(default = "default_max_idle_per_host")]
    pub max_idle_per_host: usize,

    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for Network {
    fn default() -> Self {
        Self {
            timeout: default_network_timeout(),
            max_idle_per_host: default_max_idle_per_host(),
            user_agent: None,
        }
    }
}

fn default_network_timeout() -> u64 {
    30
}

fn default_max_idle_per_host() -> usize {
    10
}

impl From<config::ConfigError> for HarborError {
    fn from(e: config::ConfigError) -> Self {
        HarborError::config_with_source("Invalid configuration".to_string(), None, e)
    }
}
