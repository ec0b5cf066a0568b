// Domain layer: entity types returned by the API. Pure data, no I/O.

pub mod entities;

pub use entities::Url;
