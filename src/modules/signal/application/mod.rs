pub mod domain;
pub mod ports;
pub mod services;
pub mod signal_use_cases;
