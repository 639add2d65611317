//! In-memory account-management console: savings and current accounts,
//! deposits, withdrawals, and interest, driven by a text menu for the
//! lifetime of one process.

pub mod bank;
