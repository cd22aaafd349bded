//! folio Validation Core
//!
//! Pure rule functions for the three contact form fields. Used by the
//! native form host and by the WASM bindings so both sides agree on
//! what a valid submission looks like.
//!
//! Every function takes the raw input, trims it, and returns the first
//! failing rule's message.

pub mod email;
pub mod message;
pub mod name;
pub mod string;

pub use email::*;
pub use message::*;
pub use name::*;
pub use string::*;
