//! Model of the single page client: which view a path renders, the navigation
//! chrome state and the contact form flow.

use scheduling::SchedulingCta;

pub mod contact_form;
pub mod navigation;
pub mod pages;
pub mod routes;
pub mod scheduling;

pub const SITE_NAME: &str = "Root to Rise Coaching";

/// Settings the client is built with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSettings {
    pub scheduling: SchedulingCta,
}
