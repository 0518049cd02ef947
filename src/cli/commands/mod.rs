pub mod config;
pub mod data;
pub mod export;
pub mod init;
pub mod login;
pub mod nte;
pub mod schedule;
pub mod summary;
pub mod tickets;
