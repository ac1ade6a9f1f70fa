pub mod acknowledgement;

pub use acknowledgement::{FormKind, FormTraits};
