/// Data layer: core types, loading, filtering, aggregation, and discovery.
///
/// Architecture:
/// ```text
///      albums.csv
///          │
///          ▼
///     ┌──────────┐
///     │  loader   │  parse + repair rows → Catalog
///     └──────────┘
///          │
///          ▼
///     ┌──────────┐
///     │  Catalog  │  Vec<AlbumRecord>, immutable after load
///     └──────────┘
///        │     │
///        ▼     ▼
///   ┌────────┐ ┌──────────┐
///   │ filter  │ │  stats    │  predicates → subsequence; grouped counts
///   └────────┘ └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ discover  │  seeded sample → 30-day calendar layout
///   └──────────┘
/// ```
pub mod discover;
pub mod filter;
pub mod loader;
pub mod model;
pub mod stats;
