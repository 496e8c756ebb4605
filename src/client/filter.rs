//! List filters. Every field is optional; unset fields are not sent.

use crate::client::path::Query;
use crate::models::Status;

/// Offset pagination shared by the paged collections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Page {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
}

impl Page {
    pub fn limit(limit: u32) -> Self {
        Self {
            skip: None,
            limit: Some(limit),
        }
    }

    fn extend(&self, query: Query) -> Query {
        query.param("skip", self.skip).param("limit", self.limit)
    }

    pub(crate) fn query(filter: Option<&Self>) -> Query {
        filter.map_or_else(Query::new, |page| page.extend(Query::new()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadingFilter {
    pub sensor_id: Option<String>,
    pub page: Page,
}

impl ReadingFilter {
    pub(crate) fn query(filter: Option<&Self>) -> Query {
        let Some(f) = filter else {
            return Query::new();
        };
        f.page
            .extend(Query::new().param("sensor_id", f.sensor_id.as_deref()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilter {
    pub status: Option<Status>,
    pub zone_id: Option<String>,
    pub plant_id: Option<String>,
    pub page: Page,
}

impl JobFilter {
    pub(crate) fn query(filter: Option<&Self>) -> Query {
        let Some(f) = filter else {
            return Query::new();
        };
        f.page.extend(
            Query::new()
                .param("status", f.status)
                .param("zone_id", f.zone_id.as_deref())
                .param("plant_id", f.plant_id.as_deref()),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityFilter {
    pub event_type: Option<String>,
    pub zone_id: Option<String>,
    pub plant_id: Option<String>,
    pub sensor_id: Option<String>,
    pub page: Page,
}

impl ActivityFilter {
    pub(crate) fn query(filter: Option<&Self>) -> Query {
        let Some(f) = filter else {
            return Query::new();
        };
        f.page.extend(
            Query::new()
                .param("type", f.event_type.as_deref())
                .param("zone_id", f.zone_id.as_deref())
                .param("plant_id", f.plant_id.as_deref())
                .param("sensor_id", f.sensor_id.as_deref()),
        )
    }
}
