//! Domain models and operation parameter types.
//!
//! Models in this module sit at the boundary between the data layer and the
//! business logic: repositories convert SeaORM entities into these types, and
//! services accept parameter structs defined here. HTTP DTOs live in `api`.

pub mod api;
pub mod fraud;
pub mod player;
pub mod rank;
pub mod verification;
