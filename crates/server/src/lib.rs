pub mod routes;
pub mod startup;
pub mod state;
pub mod logging;
pub mod errors;
pub mod openapi;

pub use startup::run;
