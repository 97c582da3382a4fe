pub mod starred;

pub mod prelude {
    pub use super::starred::*;
}
