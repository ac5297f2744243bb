//! Data layer: sample tables, range filtering, and CSV export.
//!
//! Architecture:
//! ```text
//!   ┌──────────┐
//!   │ samples  │  static tables → SampleData (built once)
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  model   │  Dataset: ordered columns, typed cells
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter  │  inclusive range predicates → filtered Dataset
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  export  │  Dataset → CSV
//!   └──────────┘
//! ```

pub mod export;
pub mod filter;
pub mod model;
pub mod samples;
