pub mod header;
pub mod param_form;
pub mod param_io;
pub mod style;
