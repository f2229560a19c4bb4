pub mod root;
pub mod text;
pub mod form;
