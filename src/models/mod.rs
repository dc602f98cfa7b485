pub mod activity;
pub mod responses;

pub use activity::{Activity, ActivityMap};
pub use responses::{ErrorDetail, SignupConfirmation};
