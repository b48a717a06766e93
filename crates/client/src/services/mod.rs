pub mod admin;
pub mod auth;
pub mod blog;
pub mod booking;
pub mod partner;

pub use admin::AdminService;
pub use auth::AuthService;
pub use blog::BlogService;
pub use booking::BookingService;
pub use partner::PartnerService;
