//! Data models for Acervo

pub mod book;
pub mod loan;
pub mod student;

// Re-export commonly used types
pub use book::{Book, BookPayload};
pub use loan::{LoanDetails, LoanPayload};
pub use student::{Student, StudentPayload};
