//! Model module containing data structures

mod assembled_series;
mod forecast_method;
mod forecast_result;
mod step_estimate;
mod time_series;

pub use assembled_series::{AssembledRecord, AssembledSeries, Phase};
pub use forecast_method::ForecastMethod;
pub use forecast_result::ForecastResult;
pub use step_estimate::{StepEstimate, StepSource};
pub use time_series::TimeSeries;
