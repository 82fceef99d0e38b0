//! Static page content.

use super::models::{
    Achievement, Education, EducationKind, NavLink, Profile, Project, Skill, SocialKind,
    SocialLink,
};

pub static NAV_LINKS: &[NavLink] = &[
    NavLink { anchor: "projects", label: "Projects" },
    NavLink { anchor: "skills", label: "Skills" },
    NavLink { anchor: "achievements", label: "Achievements" },
    NavLink { anchor: "contact", label: "Contact" },
];

const GITHUB: &str = "https://github.com/priyanshusc";
const EMAIL: &str = "https://mail.google.com/mail/?view=cm&fs=1&to=priyanshusinghchauhan40@example.com&su=Hello&body=I%20want%20to%20get%20in%20touch%20with%20you";

pub static PROFILE: Profile = Profile {
    name: "Priyanshu Singh Chauhan",
    brand: "Priyanshu.",
    role: "WEB DEVELOPER",
    tagline: "I build fast, elegant web experiences with modern stacks and a focus on performance, accessibility, and delightful UX.",
    resume_path: "/Resume.pdf",
    contact_blurb: "I'm open to new opportunities and collaborations. Feel free to reach out!",
    hero_socials: &[
        SocialLink { kind: SocialKind::GitHub, href: GITHUB },
        SocialLink { kind: SocialKind::LinkedIn, href: "https://www.linkedin.com/in/priyanshusinghchauhan" },
        SocialLink { kind: SocialKind::Email, href: EMAIL },
    ],
    contact_socials: &[
        SocialLink { kind: SocialKind::GitHub, href: GITHUB },
        SocialLink { kind: SocialKind::LinkedIn, href: "https://linkedin.com/in/priyanshusinghchauhan" },
        SocialLink { kind: SocialKind::X, href: "https://x.com/Priyanshusc05" },
        SocialLink { kind: SocialKind::Email, href: EMAIL },
    ],
};

pub static PROJECTS: &[Project] = &[
    Project {
        title: "Baatchit",
        images: &["/baatchit2.png", "/baatchit.png"],
        stack: &["React", "Tailwind CSS", "Socket.IO", "Express.js"],
        href: "https://github.com/priyanshusc/Baatchit-App",
    },
    Project {
        title: "AI SkillPath",
        images: &["/Skillpath.png", "/Skillpath2.png"],
        stack: &["React", "Django", "Gemini API"],
        href: "https://github.com/priyanshusc/AI-SkillPath",
    },
    Project {
        title: "Collabify",
        images: &["/Collabify2.png", "/Collabify.png"],
        stack: &["React", "Y.js", "Socket.IO", "Express.js", "Axios"],
        href: "https://github.com/priyanshusc/Collabify",
    },
    Project {
        title: "Leetquiz",
        images: &["/Leetquiz.png"],
        stack: &["React", "Tailwind CSS", "Mistral AI"],
        href: "https://github.com/priyanshusc/Leetquiz-AI-Interviewer",
    },
    Project {
        title: "Netflix Clone",
        images: &["/Netflix.png"],
        stack: &["React", "Tailwind CSS", "Firebase", "Mistral AI"],
        href: "https://github.com/priyanshusc/Netflix-Clone",
    },
    Project {
        title: "MindSphere",
        images: &["/MindSphere.png"],
        stack: &["Flask", "Tailwind CSS", "Gemini API", "Javascript"],
        href: "https://github.com/priyanshusc/MindSphere",
    },
    Project {
        title: "Weather App",
        images: &["/Weather.png"],
        stack: &["Javascript", "Tailwind CSS", "OpenWeather API"],
        href: "https://github.com/priyanshusc/Weather-App",
    },
];

pub static SKILLS: &[Skill] = &[
    Skill { name: "React", icon: "https://cdn.simpleicons.org/react/61DAFB" },
    Skill { name: "TypeScript", icon: "https://cdn.simpleicons.org/typescript/3178C6" },
    Skill { name: "JavaScript", icon: "https://cdn.simpleicons.org/javascript/F7DF1E" },
    Skill { name: "Node.js", icon: "https://cdn.simpleicons.org/nodedotjs/339933" },
    Skill { name: "Tailwind", icon: "https://cdn.simpleicons.org/tailwindcss/06B6D4" },
    Skill { name: "Bootstrap", icon: "https://cdn.simpleicons.org/bootstrap/7952B3" },
    Skill { name: "PostgreSQL", icon: "https://cdn.simpleicons.org/postgresql/4169E1" },
    Skill { name: "Firebase", icon: "https://cdn.simpleicons.org/firebase/FFCA28" },
    Skill { name: "Git", icon: "https://cdn.simpleicons.org/git/F05032" },
    Skill { name: "GitHub", icon: "https://cdn.simpleicons.org/github/ffffff" },
    Skill { name: "Figma", icon: "https://cdn.simpleicons.org/figma/F24E1E" },
    Skill { name: "C++", icon: "https://cdn.simpleicons.org/cplusplus/00599C" },
    Skill { name: "Vercel", icon: "https://cdn.simpleicons.org/vercel/ffffff" },
    Skill { name: "Netlify", icon: "https://cdn.simpleicons.org/netlify/00C7B7" },
    Skill { name: "HTML", icon: "https://cdn.simpleicons.org/html5/E34F26" },
    Skill { name: "MongoDB", icon: "https://cdn.simpleicons.org/mongodb/47A248" },
    Skill { name: "Express", icon: "https://cdn.simpleicons.org/express/ffffff" },
];

/// Skill names per display row; "React" intentionally appears in both
pub static SKILL_ROWS: [&[&str]; 2] = [
    &[
        "React", "TypeScript", "JavaScript", "Node.js", "Tailwind", "Git", "GitHub", "HTML",
        "MongoDB",
    ],
    &[
        "Bootstrap", "PostgreSQL", "Firebase", "Figma", "C++", "Vercel", "Netlify", "Express",
        "React",
    ],
];

pub static EDUCATION: &[Education] = &[
    Education {
        institution: "Galgotias’ College Of Engineering And Technology",
        program: "B.Tech • Computer Science & Engineering (Data Science)",
        period: "2022 - 2026",
        kind: EducationKind::College,
    },
    Education {
        institution: "Emmanual Mission Sr. Sec. School",
        program: "High School",
        period: "2018 – 2021",
        kind: EducationKind::School,
    },
];

pub static ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        title: "Oracle Certified GenAI Professional",
        image: "/Oracle.png",
        href: "https://catalog-education.oracle.com/ords/certview/sharebadge?id=E49232384E76C1B5B609A13DE64107E71FEDE88F27B5F24AC2FD806F0F4ECB86",
        issuer: "Certified by Oracle for Generative AI skills.",
    },
    Achievement {
        title: "Google Analytics Certification",
        image: "/Oneroadmap.png",
        href: "https://oneroadmap.io/skills/ai-ds/certificate/CERT-B3E7D6BB",
        issuer: "Awarded by Google for data analysis skills.",
    },
    Achievement {
        title: "Google Analytics Certification",
        image: "/GoogleAnalytics.jpeg",
        href: "https://skillshop.credential.net/4c780f5e-5493-46ab-9d80-53b2287db4bb#acc.eDcIdays",
        issuer: "Awarded by Google for data analysis skills.",
    },
];
