use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Home,
    About,
    Programs,
    HowItWorks,
    ForParents,
    Faqs,
    Contact,
    NotFound,
}

/// Entry of the navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub route: Route,
}

pub const NAV_ITEMS: [NavItem; 7] = [
    NavItem {
        label: "Home",
        route: Route::Home,
    },
    NavItem {
        label: "About",
        route: Route::About,
    },
    NavItem {
        label: "Programs",
        route: Route::Programs,
    },
    NavItem {
        label: "How It Works",
        route: Route::HowItWorks,
    },
    NavItem {
        label: "For Parents",
        route: Route::ForParents,
    },
    NavItem {
        label: "FAQs",
        route: Route::Faqs,
    },
    NavItem {
        label: "Contact",
        route: Route::Contact,
    },
];

impl Route {
    pub const DEFINED: [Route; 7] = [
        Route::Home,
        Route::About,
        Route::Programs,
        Route::HowItWorks,
        Route::ForParents,
        Route::Faqs,
        Route::Contact,
    ];

    /// Maps a location to the view that renders it.
    ///
    /// Query string and fragment are ignored, as is a single trailing slash.
    /// Matching is ASCII case-insensitive.
    pub fn resolve(location: &str) -> Self {
        let path = location.split(['?', '#']).next().unwrap_or_default();
        let path = match path.strip_suffix('/') {
            Some(stripped) if !stripped.is_empty() && !stripped.ends_with('/') => stripped,
            _ => path,
        };

        Self::DEFINED
            .into_iter()
            .find(|route| route.path().is_some_and(|p| p.eq_ignore_ascii_case(path)))
            .unwrap_or(Self::NotFound)
    }

    /// Canonical path of the route; `None` for [`Route::NotFound`].
    pub fn path(self) -> Option<&'static str> {
        match self {
            Self::Home => Some("/"),
            Self::About => Some("/about"),
            Self::Programs => Some("/programs"),
            Self::HowItWorks => Some("/how-it-works"),
            Self::ForParents => Some("/for-parents"),
            Self::Faqs => Some("/faqs"),
            Self::Contact => Some("/contact"),
            Self::NotFound => None,
        }
    }
}
