pub mod api_client;
pub mod export_service;
pub mod logger_service;
pub mod roa_service;
pub mod trust_anchor_service;
