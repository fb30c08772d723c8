//! Domain models for the employee record service.
//!
//! - [`Employee`]: a stored record, as returned by every read and write.
//! - [`EmployeePayload`]: the unvalidated JSON body of create/update requests.
//! - [`EmployeeInput`]: a payload that passed validation and may be written.

mod employee;
mod response;

pub use employee::*;
pub use response::*;
