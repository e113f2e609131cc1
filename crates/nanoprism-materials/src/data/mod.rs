//! Raw optical-constant tables, one module per metal.
//!
//! Each module exposes parallel `ENERGY_EV`, `N` and `K` arrays. They are
//! wrapped in [`SpectralTable`](crate::table::SpectralTable) values and are
//! not used directly elsewhere.

pub(crate) mod gold;
pub(crate) mod silver;
