//! Organiser notification over HTTP

pub mod dispatcher;

pub use dispatcher::HttpNotificationDispatcher;
