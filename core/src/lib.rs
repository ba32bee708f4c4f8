pub mod collector;
pub mod line_protocol;
pub mod system;
pub mod vendors;
