mod entry;
mod table;

pub use entry::FoodBuffEntry;
pub use table::{builtin_table, lookup, BuffLookup, BuffSource, CsvBuffTable, StaticBuffTable};
