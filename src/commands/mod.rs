pub mod branches;
pub mod commit;
pub mod insights;
pub mod log_view;
pub mod repo;

pub use branches::*;
pub use commit::*;
pub use insights::*;
pub use log_view::*;
pub use repo::*;
