use serde::Serialize;

/// A page section, in fixed vertical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Hero,
    Projects,
    Skills,
    Education,
    Achievements,
    Contact,
    Footer,
}

impl Section {
    /// Every section in the order the page stacks them
    pub const ALL: [Section; 7] = [
        Section::Hero,
        Section::Projects,
        Section::Skills,
        Section::Education,
        Section::Achievements,
        Section::Contact,
        Section::Footer,
    ];

    /// Anchor id addressing this section, if it has one
    pub fn anchor(self) -> Option<&'static str> {
        match self {
            Section::Hero | Section::Footer => None,
            Section::Projects => Some("projects"),
            Section::Skills => Some("skills"),
            Section::Education => Some("education"),
            Section::Achievements => Some("achievements"),
            Section::Contact => Some("contact"),
        }
    }

    /// Section heading as displayed on the page
    pub fn heading(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::Projects => "My Projects",
            Section::Skills => "Technical Skills",
            Section::Education => "Education",
            Section::Achievements => "Achievements & Certifications",
            Section::Contact => "Contact Me",
            Section::Footer => "Footer",
        }
    }

    /// Look up a section by its anchor id (with or without a leading '#')
    pub fn from_anchor(anchor: &str) -> Option<Section> {
        let anchor = anchor.trim_start_matches('#');
        Self::ALL.into_iter().find(|s| s.anchor() == Some(anchor))
    }
}

/// Entry of the sticky navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub anchor: &'static str,
    pub label: &'static str,
}

impl NavLink {
    /// Fragment form of the anchor, e.g. `#projects`
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Project {
    pub title: &'static str,
    /// Carousel slides, in display order
    pub images: &'static [&'static str],
    pub stack: &'static [&'static str],
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub name: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EducationKind {
    College,
    School,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Education {
    pub institution: &'static str,
    pub program: &'static str,
    pub period: &'static str,
    pub kind: EducationKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Achievement {
    pub title: &'static str,
    pub image: &'static str,
    pub href: &'static str,
    pub issuer: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialKind {
    GitHub,
    LinkedIn,
    X,
    Email,
}

impl SocialKind {
    pub fn label(self) -> &'static str {
        match self {
            SocialKind::GitHub => "GitHub",
            SocialKind::LinkedIn => "LinkedIn",
            SocialKind::X => "X",
            SocialKind::Email => "Email",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub brand: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    /// Static asset path of the downloadable résumé
    pub resume_path: &'static str,
    pub contact_blurb: &'static str,
    pub hero_socials: &'static [SocialLink],
    pub contact_socials: &'static [SocialLink],
}

/// Where activating a link leads
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "target", rename_all = "lowercase")]
pub enum LinkTarget {
    /// In-page anchor, scrolled to smoothly
    Anchor(&'static str),
    /// External URL, opened in the system browser
    External(&'static str),
    /// Static asset path, opened from the assets directory
    Asset(&'static str),
}

/// A link rendered somewhere on the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLink {
    pub section: Section,
    pub label: String,
    pub target: LinkTarget,
}

impl PageLink {
    pub fn new(section: Section, label: impl Into<String>, target: LinkTarget) -> Self {
        Self {
            section,
            label: label.into(),
            target,
        }
    }

    /// Whether this link leaves the page
    pub fn is_outbound(&self) -> bool {
        !matches!(self.target, LinkTarget::Anchor(_))
    }

    /// Host part of an external URL, for compact display
    pub fn host(&self) -> Option<String> {
        match self.target {
            LinkTarget::External(href) => url::Url::parse(href)
                .ok()
                .and_then(|u| u.host_str().map(|h| h.trim_start_matches("www.").to_string())),
            _ => None,
        }
    }
}
