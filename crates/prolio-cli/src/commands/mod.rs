pub mod check_image;
pub mod dispatch;
pub mod list;
pub mod profiles;
pub mod review;
pub mod shared;
pub mod show;
