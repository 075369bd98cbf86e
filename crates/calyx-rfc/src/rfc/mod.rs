pub mod xcal;
