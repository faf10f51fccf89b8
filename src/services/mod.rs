pub mod project_service;
