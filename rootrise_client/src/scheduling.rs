use url::Url;

pub const SETUP_URL: &str = "https://calendly.com";

/// Call to action for booking an intro call through an external scheduler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchedulingCta {
    Link(Url),
    /// No scheduling link configured, the page asks for one to be set up.
    SetupPrompt,
}

impl SchedulingCta {
    pub fn new(url: Option<Url>) -> Self {
        url.map_or(Self::SetupPrompt, Self::Link)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Link(_) => "Launch Scheduler",
            Self::SetupPrompt => "Set up Calendly",
        }
    }

    pub fn href(&self) -> &str {
        match self {
            Self::Link(url) => url.as_str(),
            Self::SetupPrompt => SETUP_URL,
        }
    }

    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Link(_) => None,
            Self::SetupPrompt => {
                Some("Add a scheduling link to the site configuration to link your Calendly")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_link() {
        let url: Url = "https://calendly.com/root-to-rise/intro".parse().unwrap();
        let cta = SchedulingCta::new(Some(url.clone()));

        assert_eq!(cta, SchedulingCta::Link(url));
        assert_eq!(cta.label(), "Launch Scheduler");
        assert_eq!(cta.href(), "https://calendly.com/root-to-rise/intro");
        assert_eq!(cta.hint(), None);
    }

    #[test]
    fn setup_prompt() {
        let cta = SchedulingCta::new(None);

        assert_eq!(cta, SchedulingCta::SetupPrompt);
        assert_eq!(cta.label(), "Set up Calendly");
        assert_eq!(cta.href(), SETUP_URL);
        assert!(cta.hint().is_some());
    }
}
