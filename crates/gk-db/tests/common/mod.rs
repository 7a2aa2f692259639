#![allow(dead_code)]

//! Test infrastructure shared by the gk-db integration tests

pub mod test_db;

pub use test_db::create_test_pool;
