pub mod series_service;
pub mod timeframe_service;
