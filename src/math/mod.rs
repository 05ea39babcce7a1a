pub mod modular;

pub use modular::{extended_gcd, mod_inverse};
