pub mod history;
pub mod ports;
pub mod session;
