pub mod pricing;
pub mod rendering;
pub mod services;
