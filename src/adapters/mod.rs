// Adapters layer: wire DTOs and the HTTP-backed repository implementations.

pub mod dto;
pub mod http;
