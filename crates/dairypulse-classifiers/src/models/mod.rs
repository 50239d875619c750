pub mod forest;
pub mod gbdt;
pub mod logistic;
pub mod utils;

pub mod classifier_trait;
pub mod factory;
