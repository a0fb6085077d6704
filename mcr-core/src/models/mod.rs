pub mod chromosome;
pub mod feature;
pub mod region;
pub mod table;

// re-export for cleaner imports
pub use self::chromosome::Chromosome;
pub use self::feature::Feature;
pub use self::region::GenomicRegion;
pub use self::table::{Cell, Table, TableFormat, TableSource};
