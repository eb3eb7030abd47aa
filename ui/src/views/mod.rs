mod blog;
mod home;
mod not_found;
mod post;

pub use blog::BlogList;
pub use home::Home;
pub use not_found::NotFound;
pub use post::BlogPost;
