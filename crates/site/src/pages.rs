// Page templates rendered with Askama

use crate::views::{CardView, DetailView, NavItem};
use askama::Template;
use folio_core::portfolio::Profile;

// ============================================================================
// Home Page
// ============================================================================

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub styles: String,
    pub profile: Profile,
    pub nav: Vec<NavItem>,
    pub home_href: String,
    pub projects_href: String,
    pub contact_href: String,
    pub cv_href: String,
    pub portrait_href: String,
    pub works: Vec<CardView>,
    pub projects: Vec<CardView>,
    pub year: i32,
}

// ============================================================================
// Detail Page
// ============================================================================

#[derive(Template)]
#[template(path = "detail.html")]
pub struct DetailTemplate {
    pub styles: String,
    pub detail: DetailView,
    pub home_href: String,
}

// ============================================================================
// Not Found Page
// ============================================================================

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub styles: String,
    pub heading: String,
    pub home_href: String,
}
