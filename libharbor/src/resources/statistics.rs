//! Statistics resource.

use crate::client::{CallResult, Method};
use crate::harbor::Harbor;
use crate::models::StatisticMap;
use crate::routes::RouteParams;

const STATISTICS: &str = "statistics";

pub(crate) const ROUTES: &[&str] = &[STATISTICS];

/// System-wide project and repository counts.
pub struct StatisticsResource<'h> {
    harbor: &'h Harbor,
}

impl<'h> StatisticsResource<'h> {
    pub(crate) fn new(harbor: &'h Harbor) -> Self {
        Self { harbor }
    }

    /// Counts visible to the current user.
    pub fn get(&self) -> CallResult<StatisticMap> {
        self.harbor
            .call(Method::Get, STATISTICS, &RouteParams::new(), |r| r)
    }
}
