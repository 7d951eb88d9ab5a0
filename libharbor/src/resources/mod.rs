//! Resource adapters over the dispatch layer.
//!
//! Each adapter borrows a [`Harbor`](crate::Harbor) handle, names a route key
//! and the payload and result types, and returns the [`CallResult`](crate::client::CallResult)
//! unchanged. Adapters keep no state of their own.

mod projects;
mod repositories;
mod statistics;
mod users;

pub use projects::ProjectsResource;
pub use repositories::RepositoriesResource;
pub use statistics::StatisticsResource;
pub use users::UsersResource;

/// Every route key an adapter can dispatch to.
pub fn required_routes() -> Vec<&'static str> {
    projects::ROUTES
        .iter()
        .chain(repositories::ROUTES)
        .chain(users::ROUTES)
        .chain(statistics::ROUTES)
        .copied()
        .collect()
}

#[cfg(test)]
mod tests;
