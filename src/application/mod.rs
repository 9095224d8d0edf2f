// Application layer - Use cases and ports
pub mod admin_service;
pub mod dashboard_service;
pub mod fallback;
pub mod rituals_api;
