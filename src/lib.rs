pub mod card;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod effects;
pub mod export;
pub mod logging;
pub mod profile;
pub mod qr;
pub mod services;
pub mod shortlink;
pub mod ui;
