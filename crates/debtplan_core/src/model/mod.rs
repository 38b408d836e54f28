mod debt;
mod ids;
mod results;
mod schedule;

pub use debt::{Debt, DebtType, monthly_rate};
pub use ids::DebtId;
pub use results::{PayoffResult, PayoffStatus, PayoffSummary, SimulationWarning, WarningKind};
pub(crate) use schedule::RunningTotals;
pub use schedule::{DebtWithSchedule, PaymentSchedule};
