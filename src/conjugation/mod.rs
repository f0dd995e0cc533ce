//! Conjugation restoration: given a surface fragment that is not itself
//! a dictionary key, propose a (stem, ending) split that, once the
//! stem is looked up, explains the fragment as an inflected form.

pub mod irregular;
pub mod regular;

pub use irregular::{restore_any as restore_irregular, IrregularCandidate, IrregularKind};
pub use regular::{restore as restore_regular, RegularCandidate};
