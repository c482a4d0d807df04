//! Domain layer containing the account entities.

pub mod entities;
