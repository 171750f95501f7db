pub mod check;
mod dispatch;

pub use dispatch::dispatch;
