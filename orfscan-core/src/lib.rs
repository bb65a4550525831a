pub mod alphabets;
pub mod error;
pub mod io;
pub mod mode;
pub mod scan;
pub mod seq;
