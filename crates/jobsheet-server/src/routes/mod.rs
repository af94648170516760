pub mod health;
pub mod ip;
#[cfg(debug_assertions)]
pub mod sample;
pub mod submit;
