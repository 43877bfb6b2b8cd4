pub mod artwork;
pub mod exhibition;
pub mod museum;
