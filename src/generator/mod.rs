pub mod lcg;

pub use lcg::Lcg;
