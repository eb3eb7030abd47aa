//! Home-page sections. Each one reads the active locale from context and renders
//! its catalog labels or projected store rows.

mod about;
mod apps;
mod certifications;
mod contact;
mod faq;
mod footer;
mod hero;
mod pricing;
mod services;
mod skills;
mod testimonials;

pub use about::About;
pub use apps::AppsPortfolio;
pub use certifications::Certifications;
pub use contact::Contact;
pub use faq::{Faq, FAQ_KEYS};
pub use footer::Footer;
pub use hero::Hero;
pub use pricing::Pricing;
pub use services::Services;
pub use skills::Skills;
pub use testimonials::Testimonials;
