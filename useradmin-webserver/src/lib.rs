#![recursion_limit = "128"]

#[macro_use]
extern crate log;

use useradmin_db_sqlite::Connections;

mod adapters;
mod core;
mod web;

pub use web::{jwt, Cfg};

pub async fn run(connections: Connections, enable_cors: bool, cfg: Cfg) {
    web::run(connections.into(), enable_cors, cfg).await;
}
