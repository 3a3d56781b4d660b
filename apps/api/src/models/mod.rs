pub mod career;
pub mod recommendation;
