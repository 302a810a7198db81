// Adapters layer: concrete implementations for external systems (geocoding, storage).

pub mod nominatim;
