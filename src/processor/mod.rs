pub mod flight_status;
pub mod notam;
pub mod notice_generator;
pub mod notices;
