pub mod batch;
pub mod cli;
pub mod error;
pub mod function;
pub mod integral;
pub mod report;
pub mod request;

pub use error::IntegralError;
pub use function::NamedFunction;
pub use integral::{Integral, RiemannSum, Rule};
pub use report::Report;
pub use request::IntegrationRequest;
