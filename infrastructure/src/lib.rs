pub mod catalog;
pub mod config;
pub mod kora_client;
pub mod reference_reader;
