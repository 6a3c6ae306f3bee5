pub mod excel_service;
