// Library for tests to access modules

pub mod aggregation;
pub mod config;
pub mod datasource;
pub mod models;
pub mod remote;
pub mod routes;
pub mod table_repo;
pub mod trend_repo;
pub mod version;
