//! High-level entry point for the Harbor management API.
//!
//! [`Harbor`] ties a [`Client`] to a [`RouteTable`] and hands out the resource
//! adapters. It is the recommended way to use the library.
//!
//! # Examples
//!
//! ```no_run
//! use libharbor::{Credentials, Harbor};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let harbor = Harbor::connect(
//!         "https://harbor.example.com",
//!         Credentials::basic("admin", "Harbor12345"),
//!     )?;
//!
//!     // Every call returns a CallResult holding the value or all errors
//!     let me = harbor.users().current().into_result()?;
//!     println!("Logged in as {}", me.username);
//!
//!     for project in harbor.projects().list(&Default::default()).into_result()? {
//!         println!("{} ({} repositories)", project.name, project.repo_count);
//!     }
//!
//!     Ok(())
//! }
//! ```

use crate::auth::Credentials;
use crate::client::{CallResult, Client, ClientConfig, Method, ResolvedRequest};
use crate::config::Config;
use crate::error::{HarborError, Result};
use crate::resources::{
    self, ProjectsResource, RepositoriesResource, StatisticsResource, UsersResource,
};
use crate::routes::{RouteParams, RouteTable};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Handle to one Harbor instance.
///
/// `Harbor` is cheap to clone and can be shared across threads. The route
/// table is checked once at construction so that every adapter operation
/// finds its route.
///
/// # Examples
///
/// ## From a configuration file
///
/// ```no_run
/// use libharbor::{Config, Harbor};
/// use std::path::Path;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = Config::load(Some(Path::new("harbor.yaml")))?;
///     let harbor = Harbor::from_config(&config)?;
///     let stats = harbor.statistics().get().into_result()?;
///     println!("{} public projects", stats.public_project_count);
///     Ok(())
/// }
/// ```
///
/// ## With a custom route table
///
/// ```no_run
/// use libharbor::Harbor;
/// use libharbor::routes::RouteTable;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let mut routes = RouteTable::with_defaults()?;
///     routes.insert("projects.base", "projects/{project_id}")?;
///
///     let harbor = Harbor::builder()
///         .base_url("harbor.local:8080")
///         .routes(routes)
///         .build()?;
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Harbor {
    client: Client,
    routes: Arc<RouteTable>,
}

impl Harbor {
    /// Connects to `base_url` with the built-in route table.
    ///
    /// No request is sent; the URL and credentials are only validated.
    pub fn connect(base_url: &str, credentials: Credentials) -> Result<Self> {
        Self::builder()
            .base_url(base_url)
            .credentials(credentials)
            .build()
    }

    /// Builds a handle from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error if the domain is missing, a route template is
    /// malformed or a route needed by the adapters is absent.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::builder()
            .client_config(config.to_client_config()?)
            .routes(config.route_table()?)
            .build()
    }

    /// Create a builder for advanced configuration.
    pub fn builder() -> HarborBuilder {
        HarborBuilder::new()
    }

    /// The underlying transport.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// The route table used to resolve route keys.
    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Project, metadata, member and access-log operations.
    pub fn projects(&self) -> ProjectsResource<'_> {
        ProjectsResource::new(self)
    }

    /// Repository, tag, scan and signature operations.
    pub fn repositories(&self) -> RepositoriesResource<'_> {
        RepositoriesResource::new(self)
    }

    /// User operations.
    pub fn users(&self) -> UsersResource<'_> {
        UsersResource::new(self)
    }

    /// System statistics.
    pub fn statistics(&self) -> StatisticsResource<'_> {
        StatisticsResource::new(self)
    }

    /// Resolves `key` and prepares a request for it.
    ///
    /// The returned request can be shaped with a query, a JSON body or a
    /// deadline before being passed to [`Client::execute`].
    pub fn request(&self, method: Method, key: &str, params: &RouteParams) -> Result<ResolvedRequest> {
        let path = self.routes.resolve(key, params)?;
        self.client.new_request(method, &path)
    }

    /// Dispatches a call to the route `key` and decodes the body as `T`.
    ///
    /// `shape` receives the prepared request and may attach a query or body.
    /// Resolution failures are reported in the returned [`CallResult`] like
    /// any other error.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use libharbor::Harbor;
    /// use libharbor::client::Method;
    /// use libharbor::routes::RouteParams;
    ///
    /// fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let harbor = Harbor::builder().base_url("harbor.local").build()?;
    ///     let params = RouteParams::new().with("project_id", 1);
    ///     let result = harbor.call::<serde_json::Value>(Method::Get, "projects.base", &params, |r| r);
    ///     println!("{:?}", result.value());
    ///     Ok(())
    /// }
    /// ```
    pub fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        key: &str,
        params: &RouteParams,
        shape: impl FnOnce(ResolvedRequest) -> ResolvedRequest,
    ) -> CallResult<T> {
        match self.request(method, key, params) {
            Ok(request) => self.client.execute(shape(request)),
            Err(e) => CallResult::failed(e),
        }
    }

    /// Like [`Harbor::call`] but ignores the response body.
    pub fn call_unit(
        &self,
        method: Method,
        key: &str,
        params: &RouteParams,
        shape: impl FnOnce(ResolvedRequest) -> ResolvedRequest,
    ) -> CallResult<()> {
        match self.request(method, key, params) {
            Ok(request) => self.client.execute_unit(shape(request)),
            Err(e) => CallResult::failed(e),
        }
    }
}

/// Builder for [`Harbor`].
///
/// Either a base URL or a complete [`ClientConfig`] is required. Without an
/// explicit route table the built-in one is used.
#[derive(Debug, Default)]
pub struct HarborBuilder {
    base_url: Option<String>,
    client_config: Option<ClientConfig>,
    credentials: Option<Credentials>,
    routes: Option<RouteTable>,
}

impl HarborBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the Harbor base URL. Ignored when a client config is given.
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = Some(url.to_string());
        self
    }

    /// Set the complete transport configuration.
    pub fn client_config(mut self, config: ClientConfig) -> Self {
        self.client_config = Some(config);
        self
    }

    /// Set credentials, replacing those of the client config.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set the route table.
    pub fn routes(mut self, routes: RouteTable) -> Self {
        self.routes = Some(routes);
        self
    }

    /// Build the `Harbor` instance.
    ///
    /// # Errors
    ///
    /// - `Validation` if neither a base URL nor a client config was given
    /// - `InvalidUrl` if the base URL cannot be normalized
    /// - `Config` if a route used by the adapters is missing
    pub fn build(self) -> Result<Harbor> {
        let mut config = match (self.client_config, self.base_url) {
            (Some(config), _) => config,
            (None, Some(url)) => ClientConfig::new(&url)?,
            (None, None) => {
                return Err(HarborError::validation("Harbor base URL is required"));
            }
        };
        if let Some(credentials) = self.credentials {
            config = config.with_credentials(credentials);
        }

        let routes = match self.routes {
            Some(routes) => routes,
            None => RouteTable::with_defaults()?,
        };
        routes.require(&resources::required_routes())?;

        Ok(Harbor {
            client: Client::with_config(config)?,
            routes: Arc::new(routes),
        })
    }
}
