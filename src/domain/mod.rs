// Domain layer - Fleet records and the view models built from them
pub mod dashboard;
pub mod fleet;
pub mod navigation;
pub mod status;
pub mod widgets;
