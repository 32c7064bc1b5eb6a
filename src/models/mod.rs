pub mod airport;
pub mod flight;
pub mod notice;
pub mod status;
pub mod weather;
