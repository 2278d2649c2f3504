pub mod investment_form;
pub mod portfolio_service;

pub use investment_form::{InvestmentForm, NewInvestment};
pub use portfolio_service::{IdGenerator, PortfolioService, Purchase};
