pub mod amortization;
pub mod budget;
pub mod loans;
pub mod net_worth;
pub mod repayment_plan;
