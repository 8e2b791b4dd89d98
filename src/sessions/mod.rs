pub mod consts;
pub mod handlers;
pub mod message_types;
pub mod models;
