use serde_json::Value;

use crate::domain::errors::DomainError;
use crate::domain::ports::OrderRepository;
use crate::domain::summary::{OrderSummary, OrderSummaryCalculator};
use crate::errors::AppError;

/// Read side of the orders API.
///
/// This is the only layer that turns failures into [`AppError`]; every
/// failure is logged here on the way out.
pub struct OrderService<R> {
    repo: R,
    calculator: OrderSummaryCalculator,
}

impl<R: OrderRepository> OrderService<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            calculator: OrderSummaryCalculator,
        }
    }

    /// Stored records, as read.
    pub fn get_orders(&self) -> Result<Vec<Value>, AppError> {
        self.repo.all().map_err(translate)
    }

    pub fn get_order(&self, id: i64) -> Result<OrderSummary, AppError> {
        self.summarize(id).map_err(translate)
    }

    fn summarize(&self, id: i64) -> Result<OrderSummary, DomainError> {
        let order = self.repo.find_by_id(id)?.ok_or(DomainError::NotFound)?;
        self.calculator.summarize(&order)
    }
}

fn translate(e: DomainError) -> AppError {
    let err = AppError::from(e);
    log::error!("{} (code {})", err, err.code());
    err
}
