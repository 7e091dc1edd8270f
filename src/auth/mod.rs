//! Session derivation and route gating.
//!
//! DESIGN
//! ======
//! Split into small layers so each is testable on its own: `store` persists
//! the raw credential string, `claims` types the decoded payload, `token`
//! translates between the two, and `guard` turns (storage, required role,
//! clock) into an access decision. Nothing here touches the UI.

pub mod claims;
pub mod guard;
pub mod store;
pub mod token;
