//! Ports - Interfaces between the application and its host

pub mod outbound;
