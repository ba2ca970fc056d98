//! Singer module: domain inputs, repository abstraction and service.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use repository::SingerRepository;
pub use service::SingerService;
