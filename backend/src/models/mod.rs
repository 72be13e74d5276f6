pub mod naming;

pub use naming::{GeneratedName, NamingRequest};
