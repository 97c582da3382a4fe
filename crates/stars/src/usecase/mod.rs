pub mod starred;
