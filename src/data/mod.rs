/// Data layer: core types, decoding, normalisation and filtering.
///
/// Architecture:
/// ```text
///  .csv / .xlsx
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  decode file → headers + raw rows
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐   ┌──────────┐
///   │ normalize  │ → │ validate  │  rows keyed by header, blank rows dropped
///   └───────────┘   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  headers + Vec<RowRecord>, never mutated
///   └──────────┘
///        │
///        ├──────────────┬────────────────┐
///        ▼              ▼                ▼
///   ┌────────────┐ ┌──────────┐   ┌──────────┐
///   │ categories  │ │  filter   │ → │ preview   │
///   └────────────┘ └──────────┘   └──────────┘
/// ```

pub mod categories;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod normalize;
pub mod preview;
pub mod validate;
