//! FILENAME: core/persistence/src/lib.rs
//! Persistence Module
//!
//! Handles loading source workbooks and saving consolidated tables in
//! XLSX format. The consolidation engine itself never touches files; this
//! crate is the boundary where file-format types become `CellValue`s.

mod error;
mod xlsx_reader;
mod xlsx_writer;

pub use error::PersistenceError;
pub use xlsx_reader::load_workbook;
pub use xlsx_writer::save_table;
