use serde::Serialize;

use crate::{routes::Route, SiteSettings, SITE_NAME};

const PRIMARY_CTA: &str = "Book a Free Intro Call";
const DISCLAIMER: &str = "Root to Rise Coaching provides educational and lifestyle coaching only \
                          and does not replace medical, nutritional, or mental health care.";

/// Static content of a rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub route: Route,
    pub title: String,
    pub headline: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subheadline: Option<&'static str>,
    pub body: &'static str,
    pub sections: Vec<Section>,
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub heading: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub paragraphs: Vec<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Item>,
}

/// Entry of a section; items without a body render as bullet points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub label: &'static str,
    pub href: String,
    /// Opens in a new tab.
    pub external: bool,
}

impl Link {
    fn internal(label: &'static str, route: Route) -> Self {
        Self {
            label,
            href: route.path().unwrap_or("/").into(),
            external: false,
        }
    }
}

impl Section {
    fn new(heading: &'static str) -> Self {
        Self {
            heading,
            paragraphs: Vec::new(),
            items: Vec::new(),
        }
    }

    fn paragraph(mut self, text: &'static str) -> Self {
        self.paragraphs.push(text);
        self
    }

    fn item(mut self, title: &'static str, body: &'static str) -> Self {
        self.items.push(Item {
            title,
            body: Some(body),
        });
        self
    }

    fn points(mut self, titles: &[&'static str]) -> Self {
        self.items.extend(titles.iter().map(|&title| Item { title, body: None }));
        self
    }
}

impl Route {
    pub fn view(self, settings: &SiteSettings) -> PageView {
        let cta = || vec![Link::internal(PRIMARY_CTA, Route::Contact)];

        let (headline, subheadline, body, sections, links) = match self {
            Route::Home => (
                SITE_NAME,
                Some("Helping teens and adults with special needs build healthy routines for life"),
                "Gentle, structured online coaching focused on movement, nutrition, routine, and \
                 wellness, designed to support confidence, independence, and everyday wellbeing.",
                vec![
                    Section::new("Who This Is For")
                        .item(
                            "Teens (13–18)",
                            "With developmental, learning, or cognitive differences",
                        )
                        .item("Young Adults", "Building independence and daily structure")
                        .item("Adults", "Who benefit from clear routines and accountability")
                        .item("Parents/Caregivers", "Seeking safe, respectful coaching support"),
                    Section::new("What We Focus On")
                        .item(
                            "Movement",
                            "Adaptive, confidence-building fitness designed to feel safe, \
                             accessible, and achievable.",
                        )
                        .item(
                            "Nutrition",
                            "Simple, realistic nutrition habits that respect sensory needs and \
                             individual preferences.",
                        )
                        .item(
                            "Routine",
                            "Daily structure that reduces stress, builds consistency, and \
                             supports independence.",
                        )
                        .item(
                            "Wellness",
                            "Emotional regulation tools, self-care practices, and \
                             stress-management strategies.",
                        )
                        .item(
                            "Growth",
                            "Building self-esteem, confidence, and a sense of personal \
                             capability.",
                        ),
                    Section::new("A gentle path from where you are to where you want to be")
                        .paragraph(
                            "Root to Rise Coaching is about steady progress, not quick fixes. \
                             With patience, structure, and encouragement, healthy habits can \
                             grow, one step at a time.",
                        ),
                ],
                cta(),
            ),
            Route::About => (
                "A gentle, structured approach to growth, rooted in respect and care",
                None,
                "I believe that everyone deserves the opportunity to feel strong, capable, and \
                 supported in their daily life. Root to Rise Coaching was created to offer calm, \
                 consistent, and compassionate guidance for teens and adults with special needs, \
                 without pressure, judgment, or unrealistic expectations.",
                vec![
                    Section::new("Why I do this work")
                        .paragraph(
                            "I've seen how overwhelming \"healthy living\" can feel, especially \
                             for individuals who benefit from routine, predictability, and clear \
                             support. Too often, fitness and nutrition spaces move too fast, \
                             expect too much, or fail to adapt to different needs. I started \
                             Root to Rise Coaching to create something different.",
                        )
                        .paragraph("A space where:")
                        .points(&[
                            "Progress is gentle and achievable",
                            "Effort is celebrated",
                            "Routines are clear and supportive",
                            "Growth happens at a comfortable pace",
                        ])
                        .paragraph(
                            "My goal is not to push people to change who they are, but to help \
                             them build habits that make everyday life feel more manageable and \
                             empowering.",
                        ),
                    Section::new("My approach")
                        .points(&[
                            "Supportive, not clinical",
                            "Structured, not rigid",
                            "Encouraging, not pressuring",
                            "Individualized, not one-size-fits-all",
                        ])
                        .paragraph(
                            "Each program is adapted to the person in front of me: their \
                             abilities, preferences, sensory needs, and goals. We focus on simple \
                             routines, repetition, and consistency, because that's where real \
                             confidence grows.",
                        ),
                ],
                cta(),
            ),
            Route::Programs => (
                "Supportive coaching designed to grow healthy habits, step by step",
                None,
                "Structured, compassionate online programs for teens and adults with special \
                 needs. Programs are non-clinical, strength-based, and adapted to individual \
                 abilities, preferences, and sensory needs.",
                vec![Section::new("Representative Success Stories")
                    .item(
                        "Teen with Autism",
                        "Built a predictable after-school movement routine.",
                    )
                    .item(
                        "Young Adult with ADHD",
                        "Created a simple weekly meal and grocery plan.",
                    )
                    .item(
                        "Adult with Anxiety",
                        "Found calm through steady daily structure.",
                    )],
                cta(),
            ),
            Route::HowItWorks => (
                "A clear, supportive process, designed to feel safe and manageable",
                None,
                "Root to Rise Coaching follows a simple, predictable structure so participants and \
                 families know exactly what to expect.",
                vec![
                    Section::new("How It Works")
                        .item(
                            "Free Intro Call",
                            "A relaxed conversation to see if we are a good fit.",
                        )
                        .item(
                            "Personalized Intake & Planning",
                            "Goals, preferences, and needs shape the plan.",
                        )
                        .item("Coaching Sessions", "Calm, structured online sessions.")
                        .item(
                            "Ongoing Support & Adjustments",
                            "The plan grows with the participant.",
                        ),
                    Section::new("A pace that respects the individual").paragraph(
                        "There are no deadlines to 'catch up' and no pressure to perform. \
                         Growth happens step by step, at a pace that feels right.",
                    ),
                ],
                cta(),
            ),
            Route::ForParents => (
                "A safe, respectful partnership, built on trust and communication",
                None,
                "This work is collaborative. You are not handing your loved one off, you are \
                 partnering in their growth.",
                vec![
                    Section::new("Your role as a parent or caregiver")
                        .paragraph(
                            "Your involvement is welcomed and respected. Depending on the \
                             individual's needs, you may join the intro call, support routines \
                             at home, or receive updates.",
                        )
                        .paragraph(
                            "At the same time, coaching prioritizes the individual's voice, \
                             autonomy, and sense of ownership whenever appropriate.",
                        ),
                    Section::new("Safety, Boundaries & Trust")
                        .points(&[
                            "Non-clinical scope",
                            "Clear expectations",
                            "Consent and confidentiality",
                            "Inclusive language",
                            "Defined session structure",
                        ])
                        .paragraph(
                            "Coaching does not include diagnosis, therapy, or medical treatment, \
                             and is designed to complement professional care when needed.",
                        ),
                ],
                vec![Link::internal("Book an Intro Call", Route::Contact)],
            ),
            Route::Faqs => (
                "Clear answers to help you feel confident",
                None,
                "",
                vec![Section::new("FAQs")
                    .item(
                        "Is this therapy or medical treatment?",
                        "No. Root to Rise Coaching provides educational and lifestyle coaching \
                         only. It does not include diagnosis, therapy, or medical treatment.",
                    )
                    .item(
                        "Who is this coaching for?",
                        "Teens (13+) with developmental/learning differences, young adults \
                         building independence, and adults seeking structure.",
                    )
                    .item(
                        "What does a typical coaching session look like?",
                        "Sessions are calm and predictable. They include gentle movement, \
                         nutrition habit guidance, and routine planning.",
                    )
                    .item(
                        "Is coaching done online or in person?",
                        "Coaching sessions are held online for convenience and comfort. However, \
                         events and workshops will be held in person.",
                    )
                    .item(
                        "Do you provide meal plans or diets?",
                        "No. We focus on simple nutrition habits and education, respecting \
                         sensory preferences and individual needs.",
                    )],
                cta(),
            ),
            Route::Contact => {
                let schedule = Section::new("Schedule Online")
                    .paragraph("Pick a time that works best for your schedule.");
                let schedule = match settings.scheduling.hint() {
                    Some(hint) => schedule.paragraph(hint),
                    None => schedule,
                };

                (
                    "Ready to take the first step?",
                    None,
                    "Booking a free intro call is a relaxed, no-obligation way to see if we are \
                     a good fit.",
                    vec![schedule, Section::new("Disclaimer").paragraph(DISCLAIMER)],
                    vec![Link {
                        label: settings.scheduling.label(),
                        href: settings.scheduling.href().into(),
                        external: true,
                    }],
                )
            }
            Route::NotFound => (
                "Page Not Found",
                Some("404"),
                "Sorry, the page you are looking for doesn't exist. It may have been moved or \
                 deleted.",
                Vec::new(),
                vec![Link::internal("Go Home", Route::Home)],
            ),
        };

        let title = match self {
            Route::Home => SITE_NAME.into(),
            _ => format!("{headline} | {SITE_NAME}"),
        };

        PageView {
            route: self,
            title,
            headline,
            subheadline,
            body,
            sections,
            links,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::scheduling::{SchedulingCta, SETUP_URL};

    fn settings(scheduling: SchedulingCta) -> SiteSettings {
        SiteSettings { scheduling }
    }

    #[test]
    fn defined_routes_render() {
        let settings = settings(SchedulingCta::SetupPrompt);
        for route in Route::DEFINED {
            let view = route.view(&settings);
            assert_eq!(view.route, route);
            assert!(!view.headline.is_empty());
            assert!(!view.links.is_empty());
        }
    }

    #[test]
    fn sections_have_content() {
        for scheduling in [
            SchedulingCta::SetupPrompt,
            SchedulingCta::Link("https://calendly.com/root-to-rise".parse().unwrap()),
        ] {
            let settings = settings(scheduling);
            for route in Route::DEFINED {
                for section in route.view(&settings).sections {
                    assert!(
                        !section.paragraphs.is_empty() || !section.items.is_empty(),
                        "{route:?}: {}",
                        section.heading
                    );
                    for item in &section.items {
                        assert_ne!(item.body, Some(""), "{route:?}: {}", item.title);
                    }
                }
            }
        }
    }

    #[test]
    fn contact_page_setup_hint() {
        let with_link = Route::Contact.view(&settings(SchedulingCta::Link(
            "https://calendly.com/root-to-rise".parse().unwrap(),
        )));
        let without_link = Route::Contact.view(&settings(SchedulingCta::SetupPrompt));

        assert_eq!(
            with_link.sections[0].paragraphs,
            vec!["Pick a time that works best for your schedule."]
        );
        assert_eq!(without_link.sections[0].paragraphs.len(), 2);
    }

    #[test]
    fn not_found_links_home() {
        let view = Route::resolve("/nope").view(&settings(SchedulingCta::SetupPrompt));

        assert_eq!(view.route, Route::NotFound);
        assert_eq!(view.headline, "Page Not Found");
        assert_eq!(
            view.links,
            vec![Link {
                label: "Go Home",
                href: "/".into(),
                external: false,
            }]
        );
    }

    #[test]
    fn contact_page_with_scheduling_link() {
        let url = "https://calendly.com/root-to-rise".parse().unwrap();
        let view = Route::Contact.view(&settings(SchedulingCta::Link(url)));

        assert_eq!(
            view.links,
            vec![Link {
                label: "Launch Scheduler",
                href: "https://calendly.com/root-to-rise".into(),
                external: true,
            }]
        );
    }

    #[test]
    fn contact_page_without_scheduling_link() {
        let view = Route::Contact.view(&settings(SchedulingCta::SetupPrompt));

        assert_eq!(view.links[0].label, "Set up Calendly");
        assert_eq!(view.links[0].href, SETUP_URL);
    }

    #[test]
    fn titles() {
        let settings = settings(SchedulingCta::SetupPrompt);
        assert_eq!(Route::Home.view(&settings).title, SITE_NAME);
        assert_eq!(
            Route::NotFound.view(&settings).title,
            "Page Not Found | Root to Rise Coaching"
        );
    }

    #[test]
    fn serializes_route_name() {
        let view = Route::HowItWorks.view(&settings(SchedulingCta::SetupPrompt));
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["route"], "how_it_works");
    }
}
