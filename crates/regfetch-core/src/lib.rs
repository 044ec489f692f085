pub mod config;
pub mod logging;

pub mod downloader;
pub mod failure_log;
pub mod input;
pub mod retry;
pub mod scheduler;
pub mod storage;
pub mod url_model;
