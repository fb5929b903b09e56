pub mod observation;
pub mod submission;
