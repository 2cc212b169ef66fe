//! Network boundary: DTOs and REST helpers for external collaborators.

pub mod api;
pub mod types;
