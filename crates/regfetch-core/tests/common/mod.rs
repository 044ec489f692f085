#![allow(dead_code)]

pub mod registry_server;
