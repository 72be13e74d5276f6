pub mod health;
pub mod naming;
