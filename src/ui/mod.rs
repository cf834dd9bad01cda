pub mod presenter;

pub use presenter::Presenter;
