pub mod health_service;
pub mod shares_service;

pub use health_service::HealthServiceImpl;
pub use shares_service::SharesServiceImpl;
