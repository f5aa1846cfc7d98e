//! Catalog resolver for the two target-dimension vocabularies
//!
//! Loaded once per request and discarded with it. The vocabularies are
//! tiny and rarely change, so rereading them is cheaper than getting
//! cache invalidation wrong.

use std::collections::HashMap;

use sea_orm::{ConnectionTrait, EntityTrait};

use crate::error::Result;
use crate::models::prelude::*;

/// Name/id lookup maps for netconfigs and operating systems
#[derive(Debug, Default)]
pub struct Catalog {
    nc_by_name: HashMap<String, i64>,
    nc_by_id: HashMap<i64, String>,
    os_by_name: HashMap<String, i64>,
    os_by_id: HashMap<i64, String>,
}

impl Catalog {
    /// Read both vocabulary tables and build the four lookup maps
    pub async fn load<C: ConnectionTrait>(db: &C) -> Result<Self> {
        let mut catalog = Catalog::default();

        for nc in NetConfig::find().all(db).await? {
            catalog.nc_by_id.insert(nc.id, nc.name.clone());
            catalog.nc_by_name.insert(nc.name, nc.id);
        }

        for os in OperatingSystem::find().all(db).await? {
            catalog.os_by_id.insert(os.id, os.name.clone());
            catalog.os_by_name.insert(os.name, os.id);
        }

        Ok(catalog)
    }

    pub fn netconfig_id(&self, name: &str) -> Option<i64> {
        self.nc_by_name.get(name).copied()
    }

    pub fn netconfig_name(&self, id: i64) -> Option<&str> {
        self.nc_by_id.get(&id).map(String::as_str)
    }

    pub fn os_id(&self, name: &str) -> Option<i64> {
        self.os_by_name.get(name).copied()
    }

    pub fn os_name(&self, id: i64) -> Option<&str> {
        self.os_by_id.get(&id).map(String::as_str)
    }
}
