//! Business logic layer for minibank
//!
//! Each service validates every precondition against the current session and
//! store before touching any movement history: an operation either commits in
//! full or rejects with no effect.

pub mod closure;
pub mod loan;
pub mod transfer;

pub use closure::AccountClosureService;
pub use loan::LoanService;
pub use transfer::{TransferReceipt, TransferService};
