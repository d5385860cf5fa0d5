pub mod extensions;
pub mod health;
pub mod uploads;
