pub mod line_edit;
