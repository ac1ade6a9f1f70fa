pub mod routes;
pub mod section_router;

pub use routes::install;
