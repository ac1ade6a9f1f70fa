//! Browser-free logic shared by the school site client.
//!
//! Everything here is pure: the frontend feeds DOM state in and applies the
//! returned decisions back to the document.

pub mod domain;
pub mod enums;
pub mod shared;
