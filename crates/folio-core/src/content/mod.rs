//! Content registry: everything the page displays, as static data.

mod data;
mod models;

pub use data::{ACHIEVEMENTS, EDUCATION, NAV_LINKS, PROFILE, PROJECTS, SKILLS, SKILL_ROWS};
pub use models::{
    Achievement, Education, EducationKind, LinkTarget, NavLink, PageLink, Profile, Project,
    Section, Skill, SocialKind, SocialLink,
};

/// Find a skill by display name
pub fn skill(name: &str) -> Option<&'static Skill> {
    SKILLS.iter().find(|s| s.name == name)
}

/// Resolve the skills of a display row, skipping names with no entry
pub fn skill_row(index: usize) -> Vec<&'static Skill> {
    SKILL_ROWS
        .get(index)
        .map(|names| names.iter().filter_map(|name| skill(name)).collect())
        .unwrap_or_default()
}

/// Position of an anchor in the nav bar, if it is a nav link
pub fn nav_index(anchor: &str) -> Option<usize> {
    let anchor = anchor.trim_start_matches('#');
    NAV_LINKS.iter().position(|l| l.anchor == anchor)
}

/// Links rendered inside a section, in display order
pub fn section_links(section: Section) -> Vec<PageLink> {
    let socials = |links: &'static [SocialLink]| {
        links
            .iter()
            .map(|s| PageLink::new(section, s.kind.label(), LinkTarget::External(s.href)))
            .collect::<Vec<_>>()
    };

    match section {
        Section::Hero => {
            let mut links = vec![
                PageLink::new(section, "Explore My Work", LinkTarget::Anchor("projects")),
                PageLink::new(
                    section,
                    "Download Resume",
                    LinkTarget::Asset(PROFILE.resume_path),
                ),
            ];
            links.extend(socials(PROFILE.hero_socials));
            links
        }
        Section::Projects => PROJECTS
            .iter()
            .map(|p| PageLink::new(section, p.title, LinkTarget::External(p.href)))
            .collect(),
        Section::Achievements => ACHIEVEMENTS
            .iter()
            .map(|a| PageLink::new(section, a.title, LinkTarget::External(a.href)))
            .collect(),
        Section::Contact => socials(PROFILE.contact_socials),
        Section::Skills | Section::Education | Section::Footer => Vec::new(),
    }
}

/// Every link on the page, in page order
pub fn page_links() -> Vec<PageLink> {
    Section::ALL.into_iter().flat_map(section_links).collect()
}

/// Links that leave the page (external URLs and static assets)
pub fn outbound_links() -> Vec<PageLink> {
    page_links().into_iter().filter(PageLink::is_outbound).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_links_address_sections() {
        for link in NAV_LINKS {
            assert!(
                Section::from_anchor(link.anchor).is_some(),
                "nav link #{} has no section",
                link.anchor
            );
        }
    }

    #[test]
    fn test_nav_order_follows_page_order() {
        let page_order: Vec<&str> = Section::ALL.iter().filter_map(|s| s.anchor()).collect();
        let mut last = 0;
        for link in NAV_LINKS {
            let pos = page_order.iter().position(|a| *a == link.anchor).unwrap();
            assert!(pos >= last, "#{} out of order", link.anchor);
            last = pos;
        }
    }

    #[test]
    fn test_skill_rows_resolve() {
        assert_eq!(skill_row(0).len(), SKILL_ROWS[0].len());
        assert_eq!(skill_row(1).len(), SKILL_ROWS[1].len());
        assert!(skill_row(2).is_empty());
        // Shared between both rows
        assert!(skill_row(0).iter().any(|s| s.name == "React"));
        assert!(skill_row(1).iter().any(|s| s.name == "React"));
    }

    #[test]
    fn test_skill_lookup_missing() {
        assert!(skill("Prisma").is_none());
        assert_eq!(skill("C++").map(|s| s.name), Some("C++"));
    }

    #[test]
    fn test_nav_index() {
        assert_eq!(nav_index("projects"), Some(0));
        assert_eq!(nav_index("#contact"), Some(3));
        assert_eq!(nav_index("education"), None);
    }

    #[test]
    fn test_external_links_parse() {
        for link in outbound_links() {
            if let LinkTarget::External(href) = link.target {
                let url = url::Url::parse(href).unwrap();
                assert_eq!(url.scheme(), "https", "{}", href);
            }
        }
    }

    #[test]
    fn test_page_links_in_section_order() {
        let links = page_links();
        let sections: Vec<Section> = links.iter().map(|l| l.section).collect();
        let mut sorted = sections.clone();
        sorted.sort_by_key(|s| Section::ALL.iter().position(|x| x == s));
        assert_eq!(sections, sorted);
        assert_eq!(links[0].target, LinkTarget::Anchor("projects"));
    }

    #[test]
    fn test_host_display() {
        let link = &section_links(Section::Projects)[0];
        assert_eq!(link.host().as_deref(), Some("github.com"));
        let resume = &section_links(Section::Hero)[1];
        assert_eq!(resume.host(), None);
        assert!(resume.is_outbound());
    }
}
