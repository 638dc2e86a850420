/// Data layer: core types, file reading, and parsing.
///
/// Architecture:
/// ```text
///  wavelengths.txt   reflectance.txt        bands.json
///        │                 │                    │
///        └──────┬──────────┘                    │
///               ▼                               ▼
///         ┌──────────┐                    ┌──────────┐
///         │  loader   │  read both, join  │  loader   │  BandCatalog
///         └──────────┘                    └──────────┘
///               │                               │
///               ▼                               ▼
///         ┌──────────┐                      Vec<Band>
///         │  parse    │  text → Vec<SpectralSample>
///         └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod parse;
