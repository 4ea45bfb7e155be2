// Page template
pub mod landing_template;
pub use landing_template::LandingTemplate;

// Fragments swapped into the page by the embedded script
pub mod partials;
pub use partials::{LeadFormTemplate, PlanCardsTemplate, SubscribeModalTemplate};
