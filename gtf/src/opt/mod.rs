pub mod gtf_optimizer;
pub mod loss;
pub mod search;
pub mod selection;
pub mod session;
