use rootrise_core_contact_impl::ContactFeatureServiceImpl;
use rootrise_extern_impl::contact::ContactApiServiceImpl;

// API
pub type RestServer = rootrise_api_rest::RestServer<ContactFeature>;

// Extern
pub type ContactApi = ContactApiServiceImpl;

// Core
pub type ContactFeature = ContactFeatureServiceImpl;

// Client
pub type ContactForm = rootrise_client::contact_form::ContactForm<ContactApi>;
