// Command handlers

pub mod chat;
pub mod serve;
pub mod weather;
